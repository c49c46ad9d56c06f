// SPDX-License-Identifier: MPL-2.0
//! Application layer - capability interfaces consumed by the controller.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The controller in [`crate::app`] only talks to ports, never to a
//!   concrete browser or simulated adapter
//!
//! # Example
//!
//! ```ignore
//! use playback_overlay::application::port::MediaResource;
//!
//! // Infrastructure implements the port trait
//! struct HtmlMediaResource { /* ... */ }
//! impl MediaResource for HtmlMediaResource { /* ... */ }
//! ```

pub mod port;
