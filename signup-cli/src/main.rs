mod command;
mod error;
mod paths;
mod settings;

use std::fs::{self, File};
use std::sync::Arc;
use std::time::Duration;

use signup_form::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, HELP};
use crate::error::CliError;

/// How often dirty fields are re-printed.
const RENDER_TICK: Duration = Duration::from_millis(50);

fn init_logging() -> Result<(), CliError> {
    let path = paths::log_file();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}

fn print_field(input: &Input) {
    let state = match input.status() {
        FieldStatus::Neutral => "      ",
        FieldStatus::Error => "error ",
        FieldStatus::Success => "ok    ",
    };
    println!(
        "  {:<18} {} {:?} {}",
        input.id().label(),
        state,
        input.value(),
        input.message()
    );
}

fn render_dirty(form: &FormContext) {
    for input in form.fields() {
        if input.is_dirty() {
            input.clear_dirty();
            print_field(input);
        }
    }
}

fn print_toasts(toasts: &ToastQueue) {
    for toast in toasts.drain() {
        let marker = match toast.level {
            ToastLevel::Success => "+",
            ToastLevel::Error => "!",
        };
        println!("[{}] {} {}", marker, toast.title, toast.body);
    }
}

/// Apply one command. Returns `false` when the prompt should exit.
fn apply(controller: &FormController, command: Command) -> bool {
    let form = controller.form();
    match command {
        Command::Set { target, value } => {
            if let Ok(id) = target.parse::<FieldId>() {
                form.field(id).set_value(value);
                form.field(id).clear_dirty();
            }
            controller.input(InputEvent::new(target));
        }
        Command::Blur(id) => {
            controller.validate_now(id);
        }
        Command::Submit => {
            let mut event = SubmitEvent::new();
            let outcome = controller.submit(&mut event);
            if let Some(id) = outcome.first_invalid_field() {
                println!("  first invalid field: {}", id.label());
            }
        }
        Command::Reset => {
            controller.reset();
            println!("  form cleared");
        }
        Command::Show => {
            for input in form.fields() {
                input.clear_dirty();
                print_field(input);
            }
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => return false,
    }
    true
}

async fn run(config: FormConfig) -> Result<(), CliError> {
    let toasts = ToastQueue::new();
    let controller = FormController::new(
        FormContext::new(),
        Arc::new(toasts.clone()),
        Arc::new(TokioScheduler::current()?),
        config,
    )?;
    log::info!(
        "Signup prompt started (debounce {:?})",
        controller.config().debounce_delay()
    );
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tick = tokio::time::interval(RENDER_TICK);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(command) => {
                        if !apply(&controller, command) {
                            break;
                        }
                    }
                    Err(e) => println!("  {}", e),
                }
            }
            _ = tick.tick() => render_dirty(controller.form()),
        }
        render_dirty(controller.form());
        print_toasts(&toasts);
    }

    log::info!("Signup prompt exiting");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Error: {}", e);
    }

    let config = settings::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        FormConfig::default()
    });

    if let Err(e) = run(config).await {
        eprintln!("Error: {}", e);
    }
}
