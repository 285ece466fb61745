use thiserror::Error;

/// Classified failure modes of a prediction fetch. All of these are
/// recovered at the dashboard controller; the Display strings are what the
/// user sees in the alert banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error("server unreachable")]
    Unreachable,

    #[error("request exceeded time budget")]
    Timeout,

    #[error("{message}")]
    Server { status: u16, message: String },

    /// Response parsed as JSON but carried no direction in either schema.
    #[error("backend returned a response without a direction field")]
    InvalidShape,

    #[error("{0}")]
    Unknown(String),
}

impl PredictError {
    /// Non-2xx response: surface the server-provided error text when there
    /// is one, otherwise a generic status line.
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("server error: {status}"));
        Self::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_prefers_backend_text() {
        let err = PredictError::server(422, Some("bad horizon".to_string()));
        assert_eq!(err.to_string(), "bad horizon");
    }

    #[test]
    fn server_error_falls_back_to_status_line() {
        assert_eq!(PredictError::server(500, None).to_string(), "server error: 500");
        assert_eq!(
            PredictError::server(503, Some("  ".to_string())).to_string(),
            "server error: 503"
        );
    }

    #[test]
    fn user_visible_messages_match_taxonomy() {
        assert_eq!(PredictError::Unreachable.to_string(), "server unreachable");
        assert_eq!(PredictError::Timeout.to_string(), "request exceeded time budget");
    }
}
