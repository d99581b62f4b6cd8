//! Core node model and streaming HTML serializer.
//!
//! This crate holds the pieces every trellis document is made of:
//!
//! - [`Node`]: the renderable tree node: escaped [`Node::Text`],
//!   verbatim [`Node::Raw`], or a composite [`Element`].
//! - [`Element`]: tag, attributes, ordered children, and optional
//!   direct text, built through a fluent chain of value
//!   transformations.
//! - [`escape`]: entity escaping shared by text and attribute values.
//! - The serializer behind [`Node::render`] and [`Node::render_to`]:
//!   one depth-first pass emitting the DOCTYPE prefix for the root,
//!   attributes in insertion order, and void elements without closing
//!   tags.
//!
//! The tag and attribute catalog lives in `trellis-tags`; this crate
//! only knows the two primitives the catalog is generated over
//! (construct-with-tag and set-attribute).
//!
//! ## Example
//!
//! ```
//! use trellis_core::{Element, Node};
//!
//! let card = Element::new("div")
//! 	.class("card")
//! 	.child(Element::new("h2").text("Title"))
//! 	.child(Node::text("body copy"));
//!
//! assert_eq!(
//! 	card.render()?,
//! 	r#"<div class="card"><h2>Title</h2>body copy</div>"#,
//! );
//! # Ok::<(), trellis_core::RenderError>(())
//! ```
//!
//! ## Error handling
//!
//! Builder misuse (children or text on a void element, malformed id or
//! class tokens, a nested document root) never panics: the first
//! violation is recorded in the element and surfaces as
//! [`RenderError::Usage`] when the tree is rendered, or earlier via
//! [`Element::error`].

mod element;
mod error;
mod escape;
mod node;
mod render;

pub use element::{Element, is_void_tag};
pub use error::{RenderError, UsageError};
pub use escape::escape;
pub use node::{IntoNode, Node};
