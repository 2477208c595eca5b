//! Line-oriented conversation loop.
//!
//! Reads one answer per line, relays it to the engine, and writes the
//! engine's utterance back. Works over any async reader/writer so tests can
//! run it against in-memory buffers.

use aftercare_core::models::session::SessionSnapshot;
use aftercare_engine::engine::AssessmentEngine;
use aftercare_engine::turn::Turn;
use aftercare_instruments::summary::{summarize, SummaryReport};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::intent;

pub const GREETING: &str = "Say hello when you're ready to begin. Type /restart to start over.";
pub const RESTART_COMMAND: &str = "/restart";

async fn say<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> eyre::Result<()> {
    output.write_all(format!("{text}\n").as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

async fn next_line<R: AsyncBufRead + Unpin>(
    lines: &mut tokio::io::Lines<R>,
) -> eyre::Result<Option<String>> {
    Ok(lines.next_line().await?)
}

/// Run one assessment to completion. Returns the summary, or `None` if the
/// input ended first.
pub async fn run_conversation<R, W>(
    engine: &AssessmentEngine,
    input: R,
    mut output: W,
) -> eyre::Result<Option<SummaryReport>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    say(&mut output, GREETING).await?;

    let Some(opening) = next_line(&mut lines).await? else {
        return Ok(None);
    };
    let mut snapshot = open(engine, &mut output, &opening).await?;

    while let Some(line) = next_line(&mut lines).await? {
        let answer = line.trim();
        if answer == RESTART_COMMAND {
            info!("restart requested");
            snapshot = open(engine, &mut output, "").await?;
            continue;
        }

        let intent = intent::label_answer(&snapshot, answer);
        let outcome = engine.advance(snapshot, answer, intent).await;
        debug!(updates = outcome.updates.len(), "turn processed");
        snapshot = outcome.snapshot;

        match outcome.turn {
            Turn::NextQuestion { utterance } | Turn::Transition { utterance, .. } => {
                say(&mut output, &utterance).await?;
            }
            Turn::AlreadyAsked | Turn::Ended => {}
            Turn::Complete => {
                let report = summarize(&snapshot.scores);
                for line in report.band_lines() {
                    say(&mut output, &format!("- {line}")).await?;
                }
                say(&mut output, &report.message).await?;
                return Ok(Some(report));
            }
        }
    }

    Ok(None)
}

async fn open<W: AsyncWrite + Unpin>(
    engine: &AssessmentEngine,
    output: &mut W,
    opening: &str,
) -> eyre::Result<SessionSnapshot> {
    let outcome = engine.start(Some(opening)).await;
    if let Some(utterance) = outcome.turn.utterance() {
        say(output, utterance).await?;
    }
    Ok(outcome.snapshot)
}
