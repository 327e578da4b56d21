//! Line commands understood by the prompt.

use signup_form::FieldId;

use crate::error::CliError;

pub const HELP: &str = "\
Commands:
  set <field> <value>   type into a field (username, email, password, confirm-password)
  blur <field>          check a field immediately
  submit                submit the form
  reset                 clear the form
  show                  print every field
  help                  this text
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw target id is kept: unknown ids still count as input events.
    Set { target: String, value: String },
    Blur(FieldId),
    Submit,
    Reset,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CliError> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        match word {
            "set" => {
                let (target, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if target.is_empty() {
                    return Err(CliError::Command("usage: set <field> <value>".into()));
                }
                Ok(Self::Set {
                    target: target.to_string(),
                    value: value.to_string(),
                })
            }
            "blur" => Ok(Self::Blur(rest.trim().parse()?)),
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            "show" => Ok(Self::Show),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CliError::Command(format!(
                "unknown command '{}' (try 'help')",
                other
            ))),
        }
    }
}
