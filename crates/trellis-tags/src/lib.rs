//! Generated HTML tag and attribute catalog.
//!
//! The catalog is mechanical enumeration over two `trellis-core`
//! primitives (construct an [`Element`](trellis_core::Element) with a
//! fixed tag, and set an attribute), so everything here is produced by
//! declarative macros rather than hand-duplicated methods:
//!
//! - Tag constructors (`define_element!`): one per HTML tag, voidness
//!   taken from the core void-tag table, plus the [`html`] document
//!   root and the text-bearing [`title`].
//! - Attribute extension traits (`attr_trait!`): [`GlobalAttrs`],
//!   [`AriaAttrs`], and [`ElementAttrs`], implemented for `Element`.
//!
//! ## Example
//!
//! ```
//! use trellis_tags::{ElementAttrs, GlobalAttrs, body, div, head, html, p, title};
//!
//! let page = html()
//! 	.lang("en")
//! 	.child(head().child(title("Hello")))
//! 	.child(body().child(div().class("wrap").child(p().text("Hi"))));
//!
//! let markup = page.render()?;
//! assert!(markup.starts_with("<!DOCTYPE html><html lang=\"en\">"));
//! # Ok::<(), trellis_core::RenderError>(())
//! ```

mod attrs;
mod tags;

pub use attrs::{AriaAttrs, ElementAttrs, GlobalAttrs};
pub use tags::*;
