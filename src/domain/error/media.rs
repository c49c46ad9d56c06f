// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures reported by the bound media resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// No media resource is bound yet (widget not mounted or source not loaded).
    NotReady,

    /// The platform refused to start playback (e.g. autoplay policy).
    PlayRejected(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NotReady => write!(f, "Media resource is not ready"),
            MediaError::PlayRejected(reason) => write!(f, "Play request rejected: {}", reason),
        }
    }
}

impl std::error::Error for MediaError {}
