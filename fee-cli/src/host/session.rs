use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::actions::PageAction;
use super::page::{EstimatorPage, PageOutcome};
use super::render::render_page;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user confirmed the summary.
    Completed,
    /// Back from the flow's first screen.
    Exited,
    Quit,
    /// Input ran out before the wizard finished.
    EndOfInput,
}

/// Drives `page` from `input` one line at a time, rendering to `output`
/// before every prompt.
pub fn run_session<R: BufRead, W: Write>(
    page: &mut EstimatorPage,
    mut input: R,
    output: &mut W,
) -> Result<SessionOutcome> {
    info!(flow = %page.flow(), "session started");
    let mut line = String::new();

    let outcome = loop {
        render_page(page, output).context("failed to render page")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            debug!("input closed");
            break SessionOutcome::EndOfInput;
        }

        let action = match line.parse::<PageAction>() {
            Ok(action) => action,
            Err(err) => {
                page.reject_input(&err);
                continue;
            }
        };

        match page.handle(action) {
            PageOutcome::Continue => {}
            PageOutcome::Exit => break SessionOutcome::Exited,
            PageOutcome::Completed => break SessionOutcome::Completed,
            PageOutcome::Quit => break SessionOutcome::Quit,
        }
    };

    writeln!(output).context("failed to write output")?;
    info!(?outcome, "session finished");
    Ok(outcome)
}
