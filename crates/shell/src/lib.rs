//! # Course Scheduler Shell
//!
//! Interactive, line-oriented front end. Each input line is parsed into a
//! [`ShellCommand`](commands::ShellCommand), run against the session by
//! [`Session::handle`](handlers::Session::handle), and the reply is written
//! back. Rejected commands print a message and leave the session unchanged.

pub mod commands;
pub mod config;
pub mod handlers;
pub mod render;

use coursesched_core::errors::ScheduleError;
use coursesched_store::{autosave, open_store};
use eyre::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{error, info};

use crate::commands::parse_line;
use crate::handlers::{Outcome, Session};

/// Starts the shell on stdin/stdout with auto-save running in the background.
///
/// The active student is flushed one last time on `quit` or end of input.
pub async fn start_shell(config: config::ShellConfig) -> Result<()> {
    info!("Starting course scheduler shell");

    let repository = open_store(&config.data_file);
    let active = autosave::new_session();
    let autosave_task = autosave::spawn_autosave(
        repository.clone(),
        active.clone(),
        config.autosave_interval,
    )?;

    let mut session = Session::new(repository, active);
    let input = BufReader::new(tokio::io::stdin());
    let result = run(&mut session, input, tokio::io::stdout(), config.prompt()).await;

    autosave_task.shutdown().await;
    result
}

/// Reads commands from `input` until `quit` or end of input.
pub async fn run<R, W>(session: &mut Session, input: R, mut output: W, prompt: &str) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(b"Course scheduler. Type `help` for commands.\n")
        .await?;

    let mut lines = input.lines();
    loop {
        output.write_all(prompt.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            if let Err(e) = session.close().await {
                error!(error = %e, "Final save failed");
                output.write_all(describe(&e).as_bytes()).await?;
            }
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                output.write_all(describe(&e).as_bytes()).await?;
                continue;
            }
        };

        match session.handle(command).await {
            Ok(Outcome::Continue(reply)) => output.write_all(reply.as_bytes()).await?,
            Ok(Outcome::Quit(reply)) => {
                output.write_all(reply.as_bytes()).await?;
                break;
            }
            Err(e) => output.write_all(describe(&e).as_bytes()).await?,
        }
    }

    output.flush().await?;
    Ok(())
}

fn describe(err: &ScheduleError) -> String {
    if err.is_rejection() {
        format!("{}\n", err)
    } else {
        error!(error = %err, "Command failed");
        format!("Error: {}\n", err)
    }
}
