use std::io;
use std::time::Duration;

use anyhow::Result;
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use mistral_chat::{ChatSession, Credential};

use super::render;
use super::SlashCommand;

/// Interactive loop over one [`ChatSession`].
///
/// Each submission is awaited to completion behind a spinner before the next
/// line is read, so at most one exchange is in flight.
pub struct ChatRepl {
    session: ChatSession,
}

impl ChatRepl {
    pub fn new(session: ChatSession) -> Self {
        Self { session }
    }

    pub async fn run(mut self) -> Result<()> {
        println!("{}", render::banner());
        self.prompt_credential().await?;
        println!("{}\n", render::help());

        info!(session = %self.session.id(), "Chat session started");

        while let Some(line) = read_line().await? {
            match SlashCommand::parse(&line) {
                SlashCommand::Quit => break,
                SlashCommand::Help => println!("{}\n", render::help()),
                SlashCommand::Key => self.prompt_credential().await?,
                SlashCommand::Clear => {
                    self.session.clear();
                    println!("{}\n", render::transcript(self.session.transcript()));
                }
                SlashCommand::Message(text) => self.submit(&text).await,
            }
        }

        info!(session = %self.session.id(), "Chat session ended");
        Ok(())
    }

    async fn prompt_credential(&mut self) -> Result<()> {
        let secret = tokio::task::spawn_blocking(|| {
            Password::new()
                .with_prompt("Enter your Mistral API key")
                .allow_empty_password(true)
                .interact()
        })
        .await??;

        self.session.set_credential(Credential::new(secret));
        if !self.session.has_credential() {
            println!("{}", render::warning(render::MISSING_KEY_WARNING));
        }
        Ok(())
    }

    async fn submit(&mut self, text: &str) {
        match self.session.check_submission(text) {
            Ok(()) => {}
            Err(e) if e.is_missing_credential() => {
                println!("{}\n", render::warning(render::MISSING_KEY_WARNING));
                return;
            }
            Err(_) => return,
        }

        let spinner = thinking_spinner();
        let outcome = self.session.submit(text).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(turn) => println!("{}\n", render::turn(turn)),
            Err(e) if e.is_missing_credential() => {
                println!("{}\n", render::warning(render::MISSING_KEY_WARNING))
            }
            Err(e) => debug!("Submission rejected: {e}"),
        }
    }
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Read one line; `None` on end of input or Ctrl+C.
async fn read_line() -> Result<Option<String>> {
    let result = tokio::task::spawn_blocking(|| {
        Input::<String>::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()
    })
    .await?;

    match result {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(e))
            if matches!(
                e.kind(),
                io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
            ) =>
        {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
