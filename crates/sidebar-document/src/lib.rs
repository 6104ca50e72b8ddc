//! Sidebar Document Model
//!
//! Watch-next content documents and the addressing used to reach their
//! fragments.
//!
//! # Core Concepts
//!
//! - [`ContentDocument`]: Opaque JSON tree; `Clone` is a deep copy
//! - [`ContentId`]: Identity of the content item a document describes
//! - [`DocumentPath`]: Key path from the document root
//! - [`LayoutVariant`]: Desktop vs single-column document shape
//!
//! # Example
//!
//! ```rust,ignore
//! use sidebar_document::{ContentDocument, LayoutVariant};
//!
//! let doc = ContentDocument::from_json_str(body)?;
//! let id = doc.content_id()?;
//! assert_eq!(LayoutVariant::detect(&doc), Some(LayoutVariant::Desktop));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod document;
mod layout;
mod path;

pub mod keys;

pub use document::{ContentDocument, ContentId, DocumentError};
pub use layout::{LayoutParseError, LayoutVariant, SINGLE_COLUMN_HOST};
pub use path::DocumentPath;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
