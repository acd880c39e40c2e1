//! HTTP `Link` Header Parser
//!
//! Parses the value of a `Link` header ([RFC 8288]) into a lookup table keyed by relation type.
//!
//! ```
//! let links = link_header::parse(
//!     r#"<https://api.example/repos?page=2>; rel="next", <https://api.example/repos?page=5>; rel="last""#,
//! ).unwrap();
//!
//! let next = links.get("next").unwrap();
//! assert_eq!(next.url(), "https://api.example/repos?page=2");
//! assert_eq!(next.get("page"), Some("2"));
//! assert_eq!(links.get("last").unwrap().get("page"), Some("5"));
//! ```
//!
//! [RFC 8288]: https://www.rfc-editor.org/rfc/rfc8288.html
#![warn(missing_debug_implementations)]

mod log;

pub mod common;
pub mod link;

pub use common::ByteStr;
pub use link::{Config, Link, LinkError, Links, parse, parse_with};
