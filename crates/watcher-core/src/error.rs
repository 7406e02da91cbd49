//! Domain-level error types.

use thiserror::Error;

/// Failures talking to the monitoring API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL or API key missing. Raised before any network call.
    #[error("Tautulli API not configured: {0}")]
    Configuration(String),

    /// DNS, connect, timeout or non-2xx status.
    #[error("Transport error for cmd={command}: {message}")]
    Transport { command: String, message: String },

    /// The API answered but reported `result != "success"`.
    #[error("Tautulli API error for cmd={command}: {message}")]
    Upstream { command: String, message: String },

    /// The envelope or payload had an unexpected shape.
    #[error("Unexpected payload for cmd={command}: {message}")]
    Decode { command: String, message: String },
}

impl ApiError {
    pub fn transport(command: &str, message: impl Into<String>) -> Self {
        Self::Transport {
            command: command.to_string(),
            message: message.into(),
        }
    }

    pub fn upstream(command: &str, message: impl Into<String>) -> Self {
        Self::Upstream {
            command: command.to_string(),
            message: message.into(),
        }
    }

    pub fn decode(command: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            command: command.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_carries_message() {
        let err = ApiError::upstream("get_users", "bad key");
        let text = err.to_string();
        assert!(text.contains("bad key"));
        assert!(text.contains("cmd=get_users"));
    }
}
