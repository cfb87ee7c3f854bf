use crate::constants::TRANSCRIPT_WIDTH;
use crate::models::{ChatMessage, Role};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use textwrap::wrap;

/// Ordered, append-only list of chat messages.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
    scroll: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.entries.push(message);
        self.scroll_to_end();
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, role: Role) -> usize {
        self.entries.iter().filter(|m| m.role == role).count()
    }

    /// Index of the last visible entry.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll = self.entries.len().saturating_sub(1);
    }
}

/// Renders transcript entries as they are appended.
pub trait TranscriptView: Send {
    fn show(&mut self, message: &ChatMessage);

    /// Called when a pending reply will not arrive.
    fn settle(&mut self) {}
}

/// Prints entries to stdout and spins while a reply is pending.
pub struct TerminalView {
    width: usize,
    spinner: Option<ProgressBar>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            width: TRANSCRIPT_WIDTH,
            spinner: None,
        }
    }

    fn start_spinner(&mut self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(pb);
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptView for TerminalView {
    fn show(&mut self, message: &ChatMessage) {
        self.settle();
        for line in render_lines(message, self.width) {
            println!("{}", line);
        }
        if message.role == Role::User {
            self.start_spinner();
        }
    }

    fn settle(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

/// Formats a message as prefixed, wrapped, coloured lines.
pub fn render_lines(message: &ChatMessage, width: usize) -> Vec<String> {
    let prefix = match message.role {
        Role::User => "💬 You: ",
        Role::Assistant => "🤖 Interviewer: ",
    };
    let indent = " ".repeat(4);
    let options = textwrap::Options::new(width.max(20))
        .initial_indent(prefix)
        .subsequent_indent(&indent);

    wrap(&message.content, options)
        .into_iter()
        .map(|line| {
            let text: &str = &line;
            match message.role {
                Role::User => text.yellow().to_string(),
                Role::Assistant => text.green().to_string(),
            }
        })
        .collect()
}
