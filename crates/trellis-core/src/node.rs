//! The node abstraction over text, raw markup, and elements.

use std::borrow::Cow;
use std::io;

use crate::element::Element;
use crate::error::RenderError;
use crate::render;

/// A renderable node in an HTML tree.
///
/// Nodes are immutable values: once constructed, rendering the same
/// node repeatedly produces byte-identical output.
#[derive(Debug, Clone)]
pub enum Node {
	/// Plain text, entity-escaped at render time.
	Text(Cow<'static, str>),
	/// Markup inserted verbatim; the caller asserts its safety.
	Raw(Cow<'static, str>),
	/// A composite element.
	Element(Element),
}

impl Node {
	/// Creates an escaped text node.
	///
	/// Used for mixed content, where text is interleaved between
	/// element children:
	///
	/// ```
	/// use trellis_core::{Element, Node};
	///
	/// let p = Element::new("p")
	/// 	.child(Node::text("Turn to "))
	/// 	.child(Element::new("b").text("page 6"))
	/// 	.child(Node::text(" for details."));
	///
	/// assert_eq!(
	/// 	p.render()?,
	/// 	"<p>Turn to <b>page 6</b> for details.</p>",
	/// );
	/// # Ok::<(), trellis_core::RenderError>(())
	/// ```
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a raw markup node that is never escaped.
	///
	/// Inserting untrusted content this way opens the document to
	/// markup injection; only use it for fragments the caller already
	/// trusts.
	pub fn raw(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(content.into())
	}

	/// Renders the node to an owned HTML string.
	pub fn render(&self) -> Result<String, RenderError> {
		let mut out = String::new();
		render::write_node(self, &mut out)?;
		tracing::trace!(len = out.len(), "rendered node to string");
		Ok(out)
	}

	/// Streams the node's HTML into the sink.
	///
	/// Writes incrementally; the first write failure aborts the render
	/// and leaves already-written bytes in place.
	pub fn render_to<W>(&self, sink: &mut W) -> Result<(), RenderError>
	where
		W: io::Write + ?Sized,
	{
		tracing::trace!("streaming node to sink");
		let mut sink = render::IoSink::new(sink);
		render::write_node(self, &mut sink)
	}
}

/// Conversion into a [`Node`], so elements and strings can be passed
/// as children directly.
pub trait IntoNode {
	/// Converts self into a node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self.clone()))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl IntoNode for Cow<'static, str> {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_text_is_escaped() {
		let node = Node::text("<script>alert('xss')</script>");
		assert_eq!(
			node.render().unwrap(),
			"&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
		);
	}

	#[test]
	fn test_raw_is_verbatim() {
		let node = Node::raw("<em>already &amp; markup</em>");
		assert_eq!(node.render().unwrap(), "<em>already &amp; markup</em>");
	}

	#[test]
	fn test_into_node_for_strings() {
		let from_str = "hi".into_node();
		let from_string = String::from("hi").into_node();
		assert_eq!(from_str.render().unwrap(), "hi");
		assert_eq!(from_string.render().unwrap(), "hi");
	}

	#[test]
	fn test_string_children_become_text() {
		let el = Element::new("div").child("a & b");
		assert_eq!(el.render().unwrap(), "<div>a &amp; b</div>");
	}
}
