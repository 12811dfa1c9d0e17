use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::domain::request_state::RequestState;
use crate::domain::search_query::{FormField, SubmitRejected};
use crate::error::Result;
use crate::ui::controller::SearchController;
use crate::ui::renderer::{RenderOptions, render};

const HELP: &str = "\
Commands:
  city <name>          set the city
  checkin <YYYY-MM-DD>  set the check-in date
  checkout <YYYY-MM-DD> set the check-out date
  search               submit the form
  show                 redraw the form
  help                 show this help
  quit                 exit
";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Set(FormField, String),
    Search,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match word.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "search" | "submit" => Command::Search,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => match other.parse::<FormField>() {
            Ok(field) => Command::Set(field, rest.trim().to_string()),
            Err(_) => Command::Unknown(word.to_string()),
        },
    }
}

type Submission<'a> =
    Pin<Box<dyn Future<Output = std::result::Result<RequestState, SubmitRejected>> + Send + 'a>>;

/// Line-oriented front end over a [`SearchController`].
///
/// Field edits are accepted while a search is pending. The view is redrawn
/// whenever the request state changes.
pub struct TerminalApp {
    controller: Arc<SearchController>,
    options: RenderOptions,
}

impl TerminalApp {
    pub fn new(controller: Arc<SearchController>, options: RenderOptions) -> Self {
        Self {
            controller,
            options,
        }
    }

    /// Submit the current form once and print the settled view.
    pub async fn search_once<W>(&self, output: &mut W) -> Result<RequestState>
    where
        W: AsyncWrite + Unpin,
    {
        let state = match self.controller.submit().await {
            Ok(state) => state,
            Err(rejected) => {
                let line = format!("Cannot search: {rejected}\n");
                write_text(output, &line).await?;
                return Ok(self.controller.state());
            }
        };
        self.draw(output, &state).await?;
        Ok(state)
    }

    pub async fn run<R, W>(&self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut rx = self.controller.subscribe();
        let mut in_flight: Option<Submission<'_>> = None;

        write_text(&mut output, HELP).await?;
        let initial = rx.borrow_and_update().clone();
        self.draw(&mut output, &initial).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match parse_command(&line) {
                        Command::Set(field, value) => {
                            debug!(%field, "Field updated");
                            self.controller.update_field(field, value);
                        }
                        Command::Search if in_flight.is_some() => {
                            write_text(&mut output, "A search is already in progress.\n").await?;
                        }
                        Command::Search => {
                            in_flight = Some(Box::pin(self.controller.submit()));
                        }
                        Command::Show => {
                            self.draw(&mut output, &self.controller.state()).await?;
                        }
                        Command::Help => write_text(&mut output, HELP).await?,
                        Command::Quit => break,
                        Command::Empty => {}
                        Command::Unknown(word) => {
                            let line = format!("Unknown command '{word}'. Type 'help' for commands.\n");
                            write_text(&mut output, &line).await?;
                        }
                    }
                }
                settled = async {
                    match in_flight.as_mut() {
                        Some(submission) => submission.await,
                        None => std::future::pending().await,
                    }
                }, if in_flight.is_some() => {
                    in_flight = None;
                    if let Err(rejected) = settled {
                        write_text(&mut output, &format!("Cannot search: {rejected}\n")).await?;
                    }
                }
                Ok(()) = rx.changed() => {
                    let state = rx.borrow_and_update().clone();
                    self.draw(&mut output, &state).await?;
                }
            }
        }

        if let Some(submission) = in_flight.take() {
            debug!("Waiting for pending search before exit");
            if let Err(rejected) = submission.await {
                write_text(&mut output, &format!("Cannot search: {rejected}\n")).await?;
            }
        }
        if rx.has_changed().unwrap_or(false) {
            let state = rx.borrow_and_update().clone();
            self.draw(&mut output, &state).await?;
        }
        output.flush().await?;
        Ok(())
    }

    async fn draw<W>(&self, output: &mut W, state: &RequestState) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let text = render(&self.controller.form(), state, &self.options);
        write_text(output, &text).await?;
        write_text(output, "\n").await
    }
}

async fn write_text<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
