//! Interactive line-based chat loop.

pub mod command;
pub mod surface;

use std::io::{self, Stdout};

use colored::Colorize;
use nori_common::{Notice, NoriError};
use nori_rag::{ChatSurface, ConversationManager, IdentityParams, Role};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use command::{parse_command, Command, HELP};
use surface::TerminalSurface;

pub struct Repl {
    manager: ConversationManager,
    identity: IdentityParams,
    surface: TerminalSurface<Stdout>,
}

impl Repl {
    pub fn new(manager: ConversationManager, identity: IdentityParams) -> Self {
        Self {
            manager,
            identity,
            surface: TerminalSurface::new(io::stdout()),
        }
    }

    pub async fn run(mut self) -> Result<(), NoriError> {
        let mut rl = DefaultEditor::new().map_err(|e| NoriError::Terminal(e.to_string()))?;

        println!("{}", "=== Nori ===".bright_magenta().bold());
        self.surface.line("Type /help for commands, /quit to exit.");
        self.print_identity();
        if !self.manager.has_backend() {
            self.surface.notify(Notice::warning(
                "Configuration invalid",
                "no backend URL; set backend.url or NORI_API_URL",
            ));
        }
        println!();
        self.show_transcript();

        loop {
            if let Some(suggestions) = self.manager.offer_suggestions() {
                let suggestions = suggestions.to_vec();
                self.surface.suggestions(&suggestions);
            }

            // A selected suggestion is sent as-is, ahead of typed input.
            if let Some(pending) = self.manager.take_pending_input() {
                println!("{}", format!("> {pending}").green());
                self.submit(&pending).await;
                continue;
            }

            let line = match rl.readline("you> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    self.surface.line("Ctrl-C: type /quit or press Ctrl-D to exit.");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(NoriError::Terminal(err.to_string())),
            };

            let command = parse_command(&line);
            if !matches!(command, Command::Empty) {
                let _ = rl.add_history_entry(line.as_str());
            }

            match command {
                Command::Empty => {}
                Command::Quit => break,
                Command::Help => println!("{HELP}\n"),
                Command::Reset => {
                    self.manager.restart();
                    self.surface.notify(Notice::info("Conversation reset", ""));
                    self.show_transcript();
                }
                Command::Suggestion(n) => {
                    if let Err(err) = self.manager.select_suggestion(n - 1) {
                        self.surface.notify(Notice::warning("Suggestion", err.to_string()));
                    }
                }
                Command::SetUser(id) => {
                    self.identity.user_id = id;
                    self.print_identity();
                }
                Command::SetStudio(id) => {
                    self.identity.studio_id = Some(id);
                    self.print_identity();
                }
                Command::WhoAmI => self.print_identity(),
                Command::Unknown(raw) => self
                    .surface
                    .notify(Notice::warning("Unknown command", format!("{raw} (try /help)"))),
                Command::Message(text) => self.submit(&text).await,
            }
        }

        self.surface.line("Goodbye!");
        Ok(())
    }

    async fn submit(&mut self, input: &str) {
        let outcome = self
            .manager
            .submit(input, &self.identity, &mut self.surface)
            .await;
        tracing::debug!(?outcome, "turn finished");
    }

    fn show_transcript(&mut self) {
        let messages = self.manager.messages().to_vec();
        for message in messages.iter().filter(|m| m.role == Role::Assistant) {
            self.surface.render_message(message);
        }
    }

    fn print_identity(&mut self) {
        let studio = self.identity.studio_id.as_deref().unwrap_or("-");
        self.surface.line(&format!(
            "user_id={} studio_id={}",
            self.identity.user_id, studio
        ));
    }
}
