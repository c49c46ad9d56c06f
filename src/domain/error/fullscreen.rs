// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures of fullscreen requests and exits.
///
/// None of these are fatal: the coordinator logs them and keeps its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    /// No fullscreen API exists on this platform.
    Unsupported,

    /// The platform refused the request (missing user activation,
    /// permissions policy, already fullscreen...).
    Rejected(String),

    /// Exit was requested while nothing is fullscreen.
    NotActive,
}

impl fmt::Display for FullscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullscreenError::Unsupported => write!(f, "Fullscreen is not supported"),
            FullscreenError::Rejected(reason) => {
                write!(f, "Fullscreen request rejected: {}", reason)
            }
            FullscreenError::NotActive => write!(f, "Fullscreen is not active"),
        }
    }
}

impl std::error::Error for FullscreenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_rejection() {
        let err = FullscreenError::Rejected("permissions policy".to_string());
        assert!(err.to_string().contains("permissions policy"));
    }

    #[test]
    fn display_formats_unsupported() {
        assert_eq!(
            FullscreenError::Unsupported.to_string(),
            "Fullscreen is not supported"
        );
    }
}
