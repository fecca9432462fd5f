//! Terminal front end for the Rock-Paper-Scissors shell.
//!
//! Reads one command per line from stdin (a letter, an option name, or
//! `quit`) and prints `You chose <Name>` for each registered choice. The
//! prompt is only shown when stdin is a terminal.

use std::io::{self, IsTerminal, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rps_engine::shell::{run_session, Controller, ShellConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rps_engine=info,rps=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut controller = Controller::new(ShellConfig::default());
    controller.on_choice(|choice| println!("{}", Controller::show_choice(choice)));

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", controller.config().title)?;
    let labels: Vec<_> = controller.controls().iter().map(|c| c.label.as_str()).collect();
    writeln!(stdout, "[{}]", labels.join("] ["))?;

    let stdin = io::stdin();
    let prompt: Option<&mut dyn Write> = if stdin.is_terminal() {
        Some(&mut stdout)
    } else {
        None
    };
    run_session(&mut controller, stdin.lock(), prompt, &mut io::stderr())?;

    Ok(())
}
