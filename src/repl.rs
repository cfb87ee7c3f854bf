// src/repl.rs

use crate::{
    api::ChatApi,
    audio::{AudioPlayer, MutePlayer, RodioPlayer},
    catalog::{greeting, next_level, LEVELS},
    client::{ChatClient, ResetOutcome, View},
    config::Config,
    constants::*,
    errors::InterviewResult,
    models::Role,
    transcript::TerminalView,
};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Select};
use log::{debug, error};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::{DefaultHistory, History};
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};

const COMMANDS: [&str; 5] = ["/help", "/next", "/quit", "/reset", "/scenario"];

/// A parsed line of chat input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Message(String),
    Reset,
    Scenario,
    NextLevel,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        return Command::Message(line.to_string());
    }

    match trimmed {
        "/reset" => Command::Reset,
        "/scenario" => Command::Scenario,
        "/next" => Command::NextLevel,
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Completion, hints and highlighting for slash commands.
#[derive(Clone)]
struct ReplHelper {
    commands: Vec<String>,
}

impl ReplHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ReplHelper {}

/// Runs the interactive client until the user quits.
pub async fn run(config: Config) -> InterviewResult<()> {
    let base_url = config.server_url()?;
    let player: Box<dyn AudioPlayer> = if config.audio_enabled {
        Box::new(RodioPlayer::new(base_url.clone()))
    } else {
        Box::new(MutePlayer)
    };
    let mut client = ChatClient::new(
        ChatApi::new(base_url),
        player,
        Box::new(TerminalView::new()),
    );

    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    print_header("Interview Bot");
    println!(
        "{}",
        "Type your answers, or /help for commands.".bright_black()
    );

    loop {
        if client.view() == View::Root {
            let (scenario, level) = select_scenario(&config.scenarios)?;
            open_chat(&mut client, &scenario, LEVELS[level]);
        }

        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => return Err(err.into()),
        };

        remember(rl.history_mut(), &line);

        match parse_command(&line) {
            Command::Message(text) => {
                if let Err(e) = client.submit_message(&text).await {
                    error!("chat request failed: {}", e);
                    println!("{}", format!("Error: {}", e).red());
                }
            }
            Command::Reset => match client.reset_session().await {
                Ok(ResetOutcome::Cleared) => {
                    println!("{}", "Session reset.".bright_green());
                }
                Ok(ResetOutcome::Declined(status)) => {
                    println!(
                        "{}",
                        format!("Server did not reset the session (status: {}).", status)
                            .yellow()
                    );
                }
                Err(e) => {
                    error!("reset failed: {}", e);
                    println!("{}", format!("Error: {}", e).red());
                }
            },
            Command::Scenario => {
                let (scenario, level) = select_scenario(&config.scenarios)?;
                open_chat(&mut client, &scenario, LEVELS[level]);
            }
            Command::NextLevel => {
                let Some(context) = client.session().context() else {
                    continue;
                };
                match next_level(&context.level) {
                    Some(level) => open_chat(&mut client, &context.scenario, level),
                    None => println!(
                        "{}",
                        "You are already at the highest level.".bright_black()
                    ),
                }
            }
            Command::Help => print_help(),
            Command::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Command::Unknown(cmd) => {
                println!("{}", format!("Unknown command: {}", cmd).bright_black());
            }
        }
    }

    Ok(())
}

/// Adds a non-blank line to the editor history.
fn remember(history: &mut impl History, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    if let Err(e) = history.add(line) {
        debug!("could not add history entry: {}", e);
    }
}

/// Prompts for a scenario and level; returns the scenario name and level index.
fn select_scenario(scenarios: &[String]) -> InterviewResult<(String, usize)> {
    let theme = ColorfulTheme::default();

    let scenario = Select::with_theme(&theme)
        .with_prompt("Choose an interview")
        .items(scenarios)
        .default(0)
        .interact()?;

    let level = Select::with_theme(&theme)
        .with_prompt("Choose a level")
        .items(&LEVELS)
        .default(0)
        .interact()?;

    Ok((scenarios[scenario].clone(), level))
}

fn open_chat(client: &mut ChatClient, scenario: &str, level: &str) {
    client.submit_scenario(scenario, level);
    print_header(&format!("{} - {}", scenario, level));
    client.append_message(Role::Assistant, &greeting(scenario, level));
}

fn print_header(title: &str) {
    let inner = HEADER_WIDTH - 2;
    let horizontal: String = std::iter::repeat(HEAVY_HORIZONTAL).take(inner).collect();

    println!(
        "{}",
        format!("{}{}{}", HEAVY_DOWN_AND_RIGHT, horizontal, HEAVY_DOWN_AND_LEFT).bright_magenta()
    );
    println!(
        "{}{}{}",
        HEAVY_VERTICAL.to_string().bright_magenta(),
        format!("{:^width$}", title, width = inner).bold().cyan(),
        HEAVY_VERTICAL.to_string().bright_magenta()
    );
    println!(
        "{}",
        format!("{}{}{}", HEAVY_UP_AND_RIGHT, horizontal, HEAVY_UP_AND_LEFT).bright_magenta()
    );
}

fn print_help() {
    let rows = [
        ("/reset", "end the interview and start over"),
        ("/scenario", "pick another interview or level"),
        ("/next", "move up to the next level"),
        ("/help", "show this help"),
        ("/quit", "leave (CTRL-D works too)"),
    ];
    for (cmd, what) in rows {
        println!("  {:<10} {}", cmd.bright_cyan(), what.bright_black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("/reset"), Command::Reset);
        assert_eq!(parse_command("  /quit "), Command::Quit);
        assert_eq!(parse_command("/exit"), Command::Quit);
        assert_eq!(parse_command("/next"), Command::NextLevel);
        assert_eq!(parse_command("/scenario"), Command::Scenario);
        assert_eq!(parse_command("/help"), Command::Help);
        assert_eq!(parse_command("/dance"), Command::Unknown("/dance".to_string()));
    }

    #[test]
    fn test_plain_text_is_sent_verbatim() {
        assert_eq!(
            parse_command("  a class is a blueprint "),
            Command::Message("  a class is a blueprint ".to_string())
        );
        assert_eq!(parse_command("   "), Command::Message("   ".to_string()));
    }

    #[test]
    fn test_remember_skips_blank_lines() {
        let mut history = DefaultHistory::new();
        remember(&mut history, "   ");
        assert!(history.is_empty());

        remember(&mut history, "a class is a blueprint");
        remember(&mut history, "/reset");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_hint_completes_command() {
        let helper = ReplHelper::new();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        assert_eq!(helper.hint("/re", 3, &ctx), Some("set".to_string()));
        assert_eq!(helper.hint("hello", 5, &ctx), None);
    }
}
