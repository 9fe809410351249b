use serde::{Deserialize, Serialize};

/// Elm-like command definitions
/// Side effects requested by `update` and carried out by the runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Hand a link to the host for opening in a new tab
    OpenLink { href: String },

    /// An accepted contact-form submission
    SubmitContact {
        name: String,
        email: String,
        message: String,
    },

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}

impl Cmd {
    pub fn log_info(message: impl Into<String>) -> Cmd {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    pub fn log_error(message: impl Into<String>) -> Cmd {
        Cmd::LogError {
            message: message.into(),
        }
    }

    /// Human-readable name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::OpenLink { .. } => "OpenLink",
            Cmd::SubmitContact { .. } => "SubmitContact",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
        }
    }
}
