//! Errors reported by license service adapters

use thiserror::Error;

/// License service failure
///
/// Every variant is terminal for the attempted operation; adapters do not
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Availability probe answered with something other than 200
    #[error("license service unavailable (HTTP {status})")]
    Unavailable { status: u16 },

    /// HTTP 429
    #[error("rate limited by license service: {message}")]
    RateLimited { message: String },

    /// Any other non-2xx answer
    #[error("license service rejected the request (HTTP {status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// Connection, TLS or timeout failure
    #[error("could not reach license service: {message}")]
    Transport { message: String },

    /// 2xx answer whose body could not be understood
    #[error("unexpected response from license service: {message}")]
    Decode { message: String },
}

impl ServiceError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ServiceError::RateLimited { .. })
    }

    /// Status code carried by the error, if the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Unavailable { status } | ServiceError::Rejected { status, .. } => {
                Some(*status)
            }
            ServiceError::RateLimited { .. } => Some(429),
            ServiceError::Transport { .. } | ServiceError::Decode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_includes_detail() {
        let err = ServiceError::Rejected {
            status: 400,
            detail: "bad restriction".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "license service rejected the request (HTTP 400): bad restriction"
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn rate_limit_reports_429() {
        let err = ServiceError::RateLimited {
            message: "Too many requests".to_string(),
        };
        assert!(err.is_rate_limited());
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn transport_has_no_status() {
        let err = ServiceError::Transport {
            message: "timed out".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_rate_limited());
    }
}
