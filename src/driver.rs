//! JSON-lines session loop
//!
//! One UI event per input line, one render instruction per output line.
//! Lines that are not events and rejected submissions are logged and the
//! session carries on, so the board keeps its projects.

use crate::{
    app::{App, UiEvent},
    error::{BoardError, Result},
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

/// Counts for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Events dispatched, rejected submissions included
    pub events: usize,
    /// Submissions the form refused
    pub rejected: usize,
    /// Lines that could not be read as an event
    pub skipped: usize,
}

/// Writes every queued render instruction as a JSON line
pub async fn flush_ops<W>(app: &App, output: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    for op in app.take_render_ops() {
        let mut json = op.to_json()?;
        json.push('\n');
        output.write_all(json.as_bytes()).await?;
    }
    output.flush().await?;
    Ok(())
}

/// Feeds `input` through `app` until end of input.
///
/// Only I/O and serialization failures end the session early.
pub async fn run_session<R, W>(app: &mut App, input: R, output: &mut W) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = SessionSummary::default();
    flush_ops(app, output).await?;

    let mut lines = input.lines();
    let mut line_number = 0usize;
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let event: UiEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                warn!(line = line_number, error = %e, "Skipping line that is not a UI event");
                summary.skipped += 1;
                continue;
            }
        };

        summary.events += 1;
        match app.dispatch(event) {
            Ok(()) => {}
            Err(BoardError::InvalidUserInput) => {
                info!(line = line_number, "Submission rejected, waiting for corrected input");
                summary.rejected += 1;
            }
            Err(e) => return Err(e),
        }
        flush_ops(app, output).await?;
    }

    info!(
        projects = app.store().len(),
        events = summary.events,
        skipped = summary.skipped,
        "Input closed"
    );
    Ok(summary)
}
