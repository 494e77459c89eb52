//! Terminal shim and entry point for the photofeed widget.
//!
//! This binary is the thin integration layer between the library and an
//! interactive terminal: it parses `key=value` command-line pairs into a
//! [`Config`], initializes tracing, seeds and renders the feed, then
//! translates stdin line commands into library events.
//!
//! # Commands
//!
//! - `post <url> <caption...>`: submit a new post (the caption may contain
//!   spaces)
//! - `react <id> <like|wow|laugh>`: react to the post with that id
//! - `help`: show the command summary in the message banner
//! - `quit` / `exit` / `q`: leave
//!
//! Malformed input (bad post id, unknown reaction kind, unknown command) is
//! reported through the view's message banner; the feed itself only changes
//! on valid commands.
//!
//! # Configuration keys
//!
//! `theme`, `theme_file`, `trace_level`, `rows`, `cols`, e.g.
//! `photofeed theme=feed-light rows=40`.

use std::collections::BTreeMap;
use std::env;
use std::io::{self, BufRead};

use photofeed::{initialize, observability, Config, FeedView, ReactionKind};

/// Message shown for the `help` command.
const HELP_MESSAGE: &str = "Commands: post <url> <caption>, react <id> <like|wow|laugh>, quit";

/// A parsed line command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Submit a post. Missing arguments become empty fields so the regular
    /// validation message handles them.
    Post { image_url: String, caption: String },
    /// React to a post by id.
    React { post_id: u64, kind: ReactionKind },
    /// Show the command summary.
    Help,
    /// Leave the program.
    Quit,
    /// Blank line; nothing to do.
    Nothing,
}

/// Parses one input line into a [`Command`].
///
/// # Errors
///
/// Returns a user-facing message for malformed input: a non-numeric post
/// id, an unknown reaction kind, a truncated `react`, or an unknown
/// command word.
fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();

    let Some(command) = words.next() else {
        return Ok(Command::Nothing);
    };

    match command {
        "post" => {
            let image_url = words.next().unwrap_or_default().to_string();
            let caption = words.collect::<Vec<_>>().join(" ");
            Ok(Command::Post { image_url, caption })
        }
        "react" => {
            let (Some(id), Some(kind)) = (words.next(), words.next()) else {
                return Err("Usage: react <id> <like|wow|laugh>".to_string());
            };

            let post_id = id
                .parse::<u64>()
                .map_err(|_| format!("Post ids are numbers, got '{id}'."))?;
            let kind = kind.parse::<ReactionKind>().map_err(|e| e.to_string())?;

            Ok(Command::React { post_id, kind })
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {other}. Try 'help'.")),
    }
}

/// Collects `key=value` command-line arguments into a configuration map.
fn args_map() -> BTreeMap<String, String> {
    env::args()
        .skip(1)
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
        })
        .collect()
}

fn main() {
    let config = Config::from_map(&args_map());
    observability::init_tracing(&config);

    tracing::debug!("photofeed starting");

    let mut controller = initialize(&config);
    controller.init();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };

        let outcome = match parse_command(&line) {
            Ok(Command::Post { image_url, caption }) => {
                controller.handle_create_post(&image_url, &caption)
            }
            Ok(Command::React { post_id, kind }) => controller.handle_react(post_id, kind),
            Ok(Command::Help) => {
                controller.view_mut().show_message(HELP_MESSAGE);
                Ok(())
            }
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => Ok(()),
            Err(message) => {
                tracing::debug!(input = %line, message = %message, "rejected input line");
                controller.view_mut().show_message(&message);
                Ok(())
            }
        };

        if let Err(e) = outcome {
            tracing::error!(error = %e, "command failed");
        }
    }

    // Park the cursor under the feed so the shell prompt lands on a clean line.
    println!("\u{1b}[{};1H\u{1b}[0m", config.rows);
    tracing::debug!("photofeed exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_takes_the_rest_of_the_line_as_caption() {
        assert_eq!(
            parse_command("post https://example.com/a.png a long caption").unwrap(),
            Command::Post {
                image_url: "https://example.com/a.png".to_string(),
                caption: "a long caption".to_string(),
            }
        );
    }

    #[test]
    fn post_with_missing_arguments_still_parses() {
        // Validation lives in the handler; the shim passes empty fields on.
        assert_eq!(
            parse_command("post").unwrap(),
            Command::Post {
                image_url: String::new(),
                caption: String::new(),
            }
        );
    }

    #[test]
    fn react_parses_id_and_kind() {
        assert_eq!(
            parse_command("react 2 wow").unwrap(),
            Command::React {
                post_id: 2,
                kind: ReactionKind::Wow,
            }
        );
    }

    #[test]
    fn react_rejects_non_numeric_ids() {
        let err = parse_command("react two like").unwrap_err();
        assert!(err.contains("two"));
    }

    #[test]
    fn react_rejects_unknown_kinds() {
        let err = parse_command("react 1 boom").unwrap_err();
        assert!(err.contains("unknown reaction kind"));
    }

    #[test]
    fn react_without_arguments_shows_usage() {
        let err = parse_command("react").unwrap_err();
        assert!(err.starts_with("Usage:"));
    }

    #[test]
    fn quit_aliases_and_blank_lines() {
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert_eq!(parse_command("   ").unwrap(), Command::Nothing);
    }

    #[test]
    fn unknown_commands_point_at_help() {
        let err = parse_command("dance").unwrap_err();
        assert!(err.contains("dance"));
        assert!(err.contains("help"));
    }
}
