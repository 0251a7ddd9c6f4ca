use thiserror::Error;

/// Failure of a single API call, tagged with the operation and the step that failed.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{operation} request construction error: {source}")]
    Construction {
        operation: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{operation} transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} body read error: {source}")]
    Read {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} decode error: {source}: {body}")]
    Decode {
        operation: &'static str,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation} response error: {message} (error_code {code})")]
    Remote {
        operation: &'static str,
        code: i64,
        message: String,
        request: Option<String>,
    },
}

impl ApiError {
    /// Name of the operation that failed, e.g. `weibo comments/timeline`
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Construction { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Read { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Remote { operation, .. } => *operation,
        }
    }

    /// Error code reported by the remote service, if it reported one
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            Self::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
}
