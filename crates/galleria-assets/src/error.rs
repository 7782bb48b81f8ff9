use thiserror::Error;

use crate::descriptor::ResourceKind;

/// Errors surfaced by the loading pipeline. Every variant carries enough
/// context to name the failing item; the pipeline never reports partial
/// success.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("transport failed for '{name}' ({kind}): {source}")]
    Transport {
        name: String,
        kind: ResourceKind,
        #[source]
        source: TransportError,
    },

    #[error("failed to decode '{name}' as {kind}: {detail}")]
    Decode {
        name: String,
        kind: ResourceKind,
        detail: String,
    },

    #[error("unsupported resource kind '{0}'")]
    UnsupportedKind(String),

    #[error("loading aborted after {loaded}/{total} items: a resource task ended without reporting a result")]
    Aborted { loaded: usize, total: usize },
}

impl LoadError {
    /// Name of the failing item, when the error is tied to one.
    pub fn item_name(&self) -> Option<&str> {
        match self {
            Self::Transport { name, .. } | Self::Decode { name, .. } => Some(name),
            Self::UnsupportedKind(_) | Self::Aborted { .. } => None,
        }
    }
}

/// Transport-layer failures, distinct from decode failures so diagnostics
/// can tell a dead network from a malformed payload.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("server is offline or unreachable")]
    Unreachable,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Unreachable
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_failing_item() {
        let err = LoadError::Decode {
            name: "hall".into(),
            kind: ResourceKind::Model,
            detail: "truncated buffer".into(),
        };
        assert_eq!(err.item_name(), Some("hall"));
        let msg = err.to_string();
        assert!(msg.contains("hall"));
        assert!(msg.contains("model"));
    }

    #[test]
    fn unsupported_kind_has_no_item() {
        assert_eq!(LoadError::UnsupportedKind("blob".into()).item_name(), None);
    }
}
