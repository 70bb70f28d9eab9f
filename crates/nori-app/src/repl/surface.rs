//! Terminal rendering of the transcript.

use std::io::Write;

use colored::Colorize;
use nori_common::{Notice, NoticeLevel};
use nori_rag::{ChatSurface, Message, Role, TurnPhase};

/// Writes chat turns and notices to a terminal stream.
pub struct TerminalSurface<W: Write> {
    out: W,
    /// The user's own line is already on screen after readline.
    echo_user: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            echo_user: false,
        }
    }

    /// Also print user turns; used in one-shot mode.
    pub fn echo_user_turns(mut self, echo: bool) -> Self {
        self.echo_user = echo;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print numbered quick-start suggestions.
    pub fn suggestions(&mut self, suggestions: &[String]) {
        let _ = writeln!(self.out, "{}", "Try one:".bright_black());
        for (i, phrase) in suggestions.iter().enumerate() {
            let _ = writeln!(self.out, "  {} {}", format!("/{}", i + 1).cyan(), phrase);
        }
        let _ = writeln!(self.out);
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text.bright_black());
    }

    fn write_sources(&mut self, sources: &str) {
        let _ = writeln!(self.out, "{}", "Sources".yellow().bold());
        for line in sources.lines() {
            let _ = writeln!(self.out, "  {}", line.bright_black());
        }
    }
}

impl<W: Write> ChatSurface for TerminalSurface<W> {
    fn render_message(&mut self, message: &Message) {
        match message.role {
            Role::User => {
                if self.echo_user {
                    let _ = writeln!(self.out, "{}", format!("> {}", message.content).green());
                }
            }
            Role::Assistant => {
                let _ = writeln!(self.out, "{}", "[Nori]".bright_magenta());
                for line in message.content.lines() {
                    let _ = writeln!(self.out, "{}", line.bright_blue());
                }
                if let Some(sources) = &message.sources {
                    let _ = writeln!(self.out);
                    self.write_sources(sources);
                }
                let _ = writeln!(self.out);
            }
        }
        let _ = self.out.flush();
    }

    fn notify(&mut self, notice: Notice) {
        let text = notice.to_string();
        let styled = match notice.level {
            NoticeLevel::Info => text.bright_black(),
            NoticeLevel::Warning => text.yellow(),
            NoticeLevel::Error => text.red(),
        };
        let _ = writeln!(self.out, "{styled}");
        let _ = self.out.flush();
    }

    fn phase(&mut self, phase: TurnPhase) {
        if phase == TurnPhase::Sending {
            let _ = writeln!(self.out, "{}", "Nori is thinking…".bright_black().italic());
            let _ = self.out.flush();
        }
    }
}
