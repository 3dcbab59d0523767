//! CLI arguments and the interactive command grammar.

use std::{
    path::PathBuf,
    str::FromStr,
};

use clap::{
    command,
    Parser,
};
use client::transactions::DEVNET_URL;
use strum_macros::{
    Display,
    EnumString,
};

#[derive(Parser)]
#[command(name = "gif-portal")]
pub struct CliArgs {
    /// RPC endpoint to talk to.
    #[arg(short, long, default_value = DEVNET_URL)]
    pub url: String,

    /// Path to an interface-description artifact overriding the one shipped with the client.
    #[arg(short, long)]
    pub idl: Option<PathBuf>,

    /// Path to a persisted base account keypair (JSON byte array or base58). When omitted, a
    /// fresh keypair is generated for this session.
    #[arg(short, long)]
    pub base_account_keypair: Option<PathBuf>,
}

/// The interactive commands, standing in for the page's buttons and form.
#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    Connect,
    Submit,
    Init,
    List,
    Help,
    Quit,
}

/// Splits an input line into a command and its remainder. The remainder, with surrounding
/// whitespace removed, is the submission text for `submit` and ignored otherwise.
pub fn parse_command(line: &str) -> Option<(Command, &str)> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    Command::from_str(word)
        .ok()
        .map(|command| (command, rest.trim()))
}

pub const HELP_TEXT: &str = "\
Commands:
  connect          connect your wallet
  submit <link>    submit a gif link
  init             one-time initialization of the gif program account
  list             re-fetch the gif list
  help             show this help
  quit             exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bare_commands() {
        assert_eq!(parse_command("connect"), Some((Command::Connect, "")));
        assert_eq!(parse_command("  quit  "), Some((Command::Quit, "")));
    }

    #[test]
    fn test_parses_submit_with_remainder() {
        let parsed = parse_command("submit http://example.com/a.gif");
        assert_eq!(parsed, Some((Command::Submit, "http://example.com/a.gif")));
    }

    #[test]
    fn test_bare_submit_has_empty_remainder() {
        assert_eq!(parse_command("submit"), Some((Command::Submit, "")));
    }

    #[test]
    fn test_rejects_unknown_commands() {
        assert_eq!(parse_command("teleport"), None);
        assert_eq!(parse_command(""), None);
    }
}
