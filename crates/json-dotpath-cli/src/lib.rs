//! Command logic behind the `json-dotpath` binary.
//!
//! Each command takes the document text and returns the text to print:
//! - `get`    — the node at a path, as JSON
//! - `set`    — the document after writing a value at a path
//! - `remove` — the document after removing a field
//! - `has`    — `true` or `false`

use json_dotpath::{find, has_value, remove_field, set_value, DotPathError};
use log::debug;
use serde_json::Value;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Path(DotPathError),
    NotFound(String),
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)     => write!(f, "{e}"),
            CliError::Path(e)     => write!(f, "{e}"),
            CliError::NotFound(p) => write!(f, "Path not found: {p}"),
            CliError::Usage(e)    => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

impl From<DotPathError> for CliError {
    fn from(e: DotPathError) -> Self { CliError::Path(e) }
}

// ── Commands ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get { path: String },
    Set { path: String, value: String },
    Remove { path: String },
    Has { path: String },
}

pub const USAGE: &str = "Usage: json-dotpath <get|set|remove|has> <path> [value]";

impl Command {
    /// Parse the arguments following the program name.
    pub fn from_args(args: &[String]) -> Result<Self, CliError> {
        let usage = || CliError::Usage(USAGE.to_string());
        let name = args.first().ok_or_else(usage)?;
        let path = args.get(1).ok_or_else(usage)?.clone();
        match name.as_str() {
            "get" => Ok(Command::Get { path }),
            "remove" => Ok(Command::Remove { path }),
            "has" => Ok(Command::Has { path }),
            "set" => {
                let value = args.get(2).ok_or_else(usage)?.clone();
                Ok(Command::Set { path, value })
            }
            other => Err(CliError::Usage(format!("Unknown command: {other}\n{USAGE}"))),
        }
    }
}

/// Run `command` against the JSON text `input`.
pub fn run(command: &Command, input: &str) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(input)?;
    debug!("running {:?}", command);
    match command {
        Command::Get { path } => match find(&doc, path)? {
            Some(node) => Ok(serde_json::to_string(node)?),
            None => Err(CliError::NotFound(path.clone())),
        },
        Command::Has { path } => Ok(has_value(&doc, path)?.to_string()),
        Command::Set { path, value } => {
            set_value(&mut doc, path, parse_value(value))?;
            Ok(serde_json::to_string(&doc)?)
        }
        Command::Remove { path } => {
            remove_field(&mut doc, path)?;
            Ok(serde_json::to_string(&doc)?)
        }
    }
}

/// A value argument is JSON if it parses as JSON, otherwise a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::from_args(&args(&["get", "a.b"])).unwrap(),
            Command::Get { path: "a.b".to_string() }
        );
        assert_eq!(
            Command::from_args(&args(&["set", "a", "1"])).unwrap(),
            Command::Set { path: "a".to_string(), value: "1".to_string() }
        );
        assert!(Command::from_args(&args(&["set", "a"])).is_err());
        assert!(Command::from_args(&args(&["get"])).is_err());
        assert!(Command::from_args(&args(&["nope", "a"])).is_err());
    }

    #[test]
    fn test_get() {
        let cmd = Command::Get { path: "a.items[1]".to_string() };
        assert_eq!(run(&cmd, r#"{"a":{"items":[1,{"x":2}]}}"#).unwrap(), r#"{"x":2}"#);

        let cmd = Command::Get { path: "a.missing".to_string() };
        assert!(matches!(run(&cmd, r#"{"a":{}}"#), Err(CliError::NotFound(_))));
    }

    #[test]
    fn test_set() {
        let cmd = Command::Set { path: "a.items[1].n".to_string(), value: "5".to_string() };
        assert_eq!(run(&cmd, "{}").unwrap(), r#"{"a":{"items":[{},{"n":5}]}}"#);

        let cmd = Command::Set { path: "name".to_string(), value: "plain text".to_string() };
        assert_eq!(run(&cmd, "{}").unwrap(), r#"{"name":"plain text"}"#);
    }

    #[test]
    fn test_set_conflict() {
        let cmd = Command::Set { path: "a.b".to_string(), value: "1".to_string() };
        assert!(matches!(run(&cmd, r#"{"a":1}"#), Err(CliError::Path(_))));
    }

    #[test]
    fn test_remove_and_has() {
        let cmd = Command::Remove { path: "a.b".to_string() };
        assert_eq!(run(&cmd, r#"{"a":{"b":1,"c":2}}"#).unwrap(), r#"{"a":{"c":2}}"#);

        let cmd = Command::Has { path: "a.c".to_string() };
        assert_eq!(run(&cmd, r#"{"a":{"c":2}}"#).unwrap(), "true");
        assert_eq!(run(&cmd, r#"{"a":{}}"#).unwrap(), "false");
    }

    #[test]
    fn test_invalid_json_input() {
        let cmd = Command::Has { path: "a".to_string() };
        assert!(matches!(run(&cmd, "{not json"), Err(CliError::Json(_))));
    }
}
