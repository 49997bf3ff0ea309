//! Interactive lyric-word form: one text input, Enter triggers the search.

use crate::application::query::query_songs;
use crate::domain::error::Error;
use crate::domain::model::SongRecord;
use crate::infrastructure::config::load_config;
use crate::presentation::table::render_table;
use crate::presentation::theme::Theme;
use crate::state::AppState;
use colored::Colorize;
use std::io::BufRead;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::{mpsc, oneshot};

pub const DEFAULT_WORD: &str = "Sravani";
pub const MAX_CHARS: usize = 15;

#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    Word(String),
    Quit,
}

/// Read lines from a blocking source on a plain thread and hand them over.
///
/// The thread is never joined: a read stuck on a terminal must not keep the
/// runtime (and the process) alive after the form is done.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    std::thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

/// Read one submission. Blank input means the default word, input longer
/// than `MAX_CHARS` characters is refused and asked again.
pub async fn prompt_word<W>(
    lines: &mut mpsc::Receiver<String>,
    writer: &mut W,
) -> std::io::Result<Submission>
where
    W: AsyncWrite + Unpin,
{
    loop {
        writer
            .write_all(format!("Lyric word [{}]: ", DEFAULT_WORD).as_bytes())
            .await?;
        writer.flush().await?;

        let Some(line) = lines.recv().await else {
            return Ok(Submission::Quit);
        };

        let word = line.trim();
        if word == ":q" {
            return Ok(Submission::Quit);
        }
        if word.is_empty() {
            return Ok(Submission::Word(DEFAULT_WORD.to_string()));
        }

        let len = word.chars().count();
        if len > MAX_CHARS {
            let msg = format!("At most {} characters allowed, got {}", MAX_CHARS, len);
            writer.write_all(format!("{}\n", msg.yellow()).as_bytes()).await?;
            continue;
        }

        return Ok(Submission::Word(word.to_string()));
    }
}

/// Run the form until EOF, `:q`, or shutdown. Config is read again for
/// every submission; a failed submission is reported and the form goes on.
pub async fn run_form<W>(
    lines: &mut mpsc::Receiver<String>,
    writer: &mut W,
    config_path: Option<&str>,
    theme: &Theme,
    shutdown: &mut oneshot::Receiver<()>,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let title = "Get telugu songs with specified words".bold().to_string();
    writer
        .write_all(
            format!("{}\nEnter person name/word to search for (:q to quit)\n", title).as_bytes(),
        )
        .await?;

    loop {
        let submission = tokio::select! {
            res = prompt_word(lines, writer) => res?,
            _ = &mut *shutdown => break,
        };

        let word = match submission {
            Submission::Word(word) => word,
            Submission::Quit => break,
        };

        let result = tokio::select! {
            res = submit(config_path, &word) => res,
            _ = &mut *shutdown => break,
        };

        match result {
            Ok(records) => {
                writer
                    .write_all(render_table(&records, theme).as_bytes())
                    .await?;
            }
            Err(e) => {
                tracing::error!("Submission for {:?} failed: {}", word, e);
                writer
                    .write_all(format!("{}\n", format!("✘ {}", e).red()).as_bytes())
                    .await?;
            }
        }
        writer.flush().await?;
    }

    Ok(())
}

async fn submit(config_path: Option<&str>, word: &str) -> Result<Vec<SongRecord>, Error> {
    let config = load_config(config_path)?;
    let state = AppState::new(config)?;
    Ok(query_songs(&state, word).await?)
}
