use thiserror::Error;

pub const DEFAULT_ORDER_ERROR: &str = "Failed to create order";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed or the body was not the JSON we expected.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered but reported a falsy `success`.
    #[error("{message}")]
    Rejected { message: String },

    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Rejection carrying the server's message, or `default` when it sent none.
    pub fn rejected_or(message: Option<String>, default: &str) -> Self {
        match message {
            Some(message) if !message.is_empty() => Self::rejected(message),
            _ => Self::rejected(default),
        }
    }

    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_uses_server_message() {
        let err = ClientError::rejected_or(Some("out of stock".into()), DEFAULT_ORDER_ERROR);
        assert_eq!(err.to_string(), "out of stock");
        assert!(err.is_rejected());
    }

    #[test]
    fn rejected_falls_back_to_default() {
        let err = ClientError::rejected_or(None, DEFAULT_ORDER_ERROR);
        assert_eq!(err.to_string(), "Failed to create order");

        let err = ClientError::rejected_or(Some(String::new()), DEFAULT_ORDER_ERROR);
        assert_eq!(err.to_string(), "Failed to create order");
    }
}
