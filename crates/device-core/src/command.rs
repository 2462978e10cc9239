use crate::visitor::{Diagnostic, Runner, Stopper, Visitor};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Stop,
    Diag,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl Command {
    pub const ALL: [Command; 4] = [Command::Start, Command::Stop, Command::Diag, Command::Exit];

    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Diag => "diag",
            Self::Exit => "exit",
        }
    }

    /// Line printed before the command is applied, if any.
    pub fn announcement(self) -> Option<&'static str> {
        match self {
            Self::Start => Some("Start Devices"),
            Self::Stop => Some("Stop Devices"),
            Self::Diag => None,
            Self::Exit => Some("Exit Program"),
        }
    }

    /// The visitor applied to every device, `None` for `exit`.
    pub fn visitor(self) -> Option<&'static dyn Visitor> {
        match self {
            Self::Start => Some(&Runner),
            Self::Stop => Some(&Stopper),
            Self::Diag => Some(&Diagnostic),
            Self::Exit => None,
        }
    }

    pub fn banner() -> String {
        let tokens: Vec<_> = Self::ALL.iter().map(|c| c.token()).collect();
        format!("Available commands: {}", tokens.join(" || "))
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
