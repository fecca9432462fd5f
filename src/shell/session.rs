//! Line-driven session loop.

use std::io::{self, BufRead, Write};

use super::{Controller, ShellEvent};

/// Feed `input` to the controller line by line until quit or end of input.
///
/// The prompt is written to `prompt` before each line, if given. Front ends
/// pass `None` when input is not a terminal so piped output carries only
/// what the callbacks write. Rejected lines are reported to `errors` and the
/// session continues.
pub fn run_session(
    controller: &mut Controller,
    input: impl BufRead,
    mut prompt: Option<&mut dyn Write>,
    errors: &mut dyn Write,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        if let Some(out) = prompt.as_deref_mut() {
            write!(out, "{}", controller.config().prompt)?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            tracing::info!("input closed");
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match controller.handle(&line) {
            Ok(ShellEvent::Chose(_)) => {}
            Ok(ShellEvent::Quit) => return Ok(()),
            Err(err) => {
                tracing::warn!(input = %line.trim(), "rejected input");
                writeln!(errors, "{err}")?;
            }
        }
    }
}
