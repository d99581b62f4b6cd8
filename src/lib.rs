//! # Trellis
//!
//! Fluent HTML document construction and streaming serialization.
//!
//! Trellis builds HTML server-side without template files: documents
//! are composed bottom-up as chains of value transformations over an
//! element tree, then serialized in one depth-first pass to a string
//! or any [`std::io::Write`] sink.
//!
//! ## Crates
//!
//! - `trellis-core`: the node model ([`Node`], [`Element`]), attribute
//!   accumulation, entity escaping, and the streaming serializer.
//! - `trellis-tags` (feature `tags`, on by default): the generated tag
//!   constructors and attribute extension traits.
//!
//! ## Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let page = html()
//! 	.lang("en")
//! 	.child(head().child(title("Hello")))
//! 	.child(body().child(p().text("Hello, world!")));
//!
//! let markup = page.render()?;
//! assert!(markup.starts_with("<!DOCTYPE html>"));
//! # Ok::<(), trellis::RenderError>(())
//! ```
//!
//! ## Guarantees
//!
//! - Text and attribute values are entity-escaped; only
//!   [`Node::raw`] bypasses escaping, on the caller's assertion that
//!   the fragment is trusted.
//! - Attribute output order is insertion order, so re-rendering an
//!   unmutated tree is byte-identical.
//! - Builder misuse (content on void elements, malformed id/class
//!   tokens, a nested document root) is a typed, recoverable
//!   [`UsageError`], surfaced when the tree is rendered.

pub use trellis_core::{Element, IntoNode, Node, RenderError, UsageError, escape, is_void_tag};

#[cfg(feature = "tags")]
pub use trellis_tags as tags;

/// The commonly used surface: node types, tag constructors, and the
/// attribute extension traits.
pub mod prelude {
	pub use trellis_core::{Element, IntoNode, Node, RenderError, UsageError};

	#[cfg(feature = "tags")]
	pub use trellis_tags::*;
}
