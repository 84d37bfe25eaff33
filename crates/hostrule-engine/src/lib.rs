//! Hostrule Engine
//!
//! Converts hosts-style text (`<ip> <hostname>` lines) into platform-specific
//! configuration snippets using a template per target platform.
//!
//! # Architecture
//!
//! ```text
//! Text → classify → [LineRecord] → dedupe → render → Conversion
//! ```
//!
//! Both stages are pure functions: no I/O, no shared state, no errors. The two empty
//! outcomes (no host entries, no template) are [`Conversion`] variants.
//!
//! # Example Usage
//!
//! ```
//! use hostrule_engine::{classify, convert};
//! use hostrule_domain::{Conversion, Template};
//!
//! let records = classify("117.80.117.48 baidu.com\n# comment");
//! let template = Template::new("${host}=${ip},");
//!
//! let result = convert(&records, Some(&template), false);
//! assert_eq!(
//!     result,
//!     Conversion::Rendered("baidu.com=117.80.117.48,\n# comment".to_string())
//! );
//! ```

#![warn(missing_docs)]

mod classifier;
mod engine;

pub use classifier::{classify, classify_line, is_ip_literal, is_ipv4_literal, is_ipv6_literal};
pub use engine::{convert, convert_text, convert_with_stats, dedupe, render_lines, ConversionStats};

pub use hostrule_domain::{Conversion, HostEntry, LineRecord, Platform, Session, Template};
