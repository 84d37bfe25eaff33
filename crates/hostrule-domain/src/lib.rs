//! Hostrule Domain Layer
//!
//! This crate contains the value types shared by the conversion core and its callers.
//! It has ZERO external dependencies and holds no behavior beyond what the values
//! themselves guarantee.
//!
//! ## Key Concepts
//!
//! - **Line record**: One classified input line, either a host entry or verbatim text
//! - **Template**: A rule string with `${ip}` / `${host}` placeholders
//! - **Platform**: The target a template renders for (clash, charles, custom, ...)
//! - **Conversion**: The result of one conversion call, including the two sentinel outcomes
//! - **Session**: The immutable caller state (platform, user templates, dedupe flag)
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - No I/O, no mutable shared state
//! - Parsing and rendering live in `hostrule-engine`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod conversion;
pub mod platform;
pub mod record;
pub mod session;
pub mod template;

// Re-exports for convenience
pub use conversion::Conversion;
pub use platform::Platform;
pub use record::{HostEntry, LineRecord};
pub use session::Session;
pub use template::Template;
