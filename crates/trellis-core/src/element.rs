//! The composite element node and its fluent builder surface.

use std::borrow::Cow;
use std::io;

use crate::error::{RenderError, UsageError};
use crate::node::{IntoNode, Node};
use crate::render;

/// Returns whether a tag names an HTML void element.
///
/// Void elements never carry content and serialize without a closing
/// tag.
pub fn is_void_tag(tag: &str) -> bool {
	matches!(
		tag,
		"area" | "base"
			| "br" | "col"
			| "embed" | "hr"
			| "img" | "input"
			| "link" | "meta"
			| "source" | "track"
			| "wbr"
	)
}

/// An HTML element: tag, attributes, ordered children, and optional
/// direct text.
///
/// Every mutator consumes the element and returns the transformed
/// value, so trees are composed bottom-up as method chains:
///
/// ```
/// use trellis_core::Element;
///
/// let card = Element::new("div")
/// 	.class("card")
/// 	.child(Element::new("h2").text("Title"))
/// 	.child(Element::new("p").text("Body copy"));
///
/// assert_eq!(
/// 	card.render()?,
/// 	r#"<div class="card"><h2>Title</h2><p>Body copy</p></div>"#,
/// );
/// # Ok::<(), trellis_core::RenderError>(())
/// ```
///
/// Containers are owned, so cloning an element is a deep copy and
/// derivations of a shared base never observe each other's later
/// mutations.
#[derive(Debug, Clone)]
pub struct Element {
	/// The tag name (e.g., "div", "span"), fixed at construction.
	tag: Cow<'static, str>,
	/// Attributes in insertion order; keys are unique.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child nodes in append order.
	children: Vec<Node>,
	/// Direct text, rendered ahead of any children.
	text: Option<Cow<'static, str>>,
	/// Whether this is a void element (no content, no closing tag).
	is_void: bool,
	/// Whether this is the document root (emits the DOCTYPE prefix).
	is_root: bool,
	/// First builder misuse recorded on this element.
	err: Option<UsageError>,
}

impl Element {
	/// Creates an element. Void-ness is derived from the tag name.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = is_void_tag(&tag);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			text: None,
			is_void,
			is_root: false,
			err: None,
		}
	}

	/// Creates the `<html>` document root element.
	///
	/// Rendering it emits a single `<!DOCTYPE html>` ahead of the open
	/// tag. The root flag is exclusive to the top of a tree: appending
	/// a root element as a child records a usage error.
	pub fn root() -> Self {
		Self {
			is_root: true,
			..Self::new("html")
		}
	}

	/// Sets an attribute, overwriting any existing value for the key.
	///
	/// An overwritten key keeps its original position, so attribute
	/// output order is stable across re-renders.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		if self.err.is_some() {
			return self;
		}
		let name = name.into();
		match self.attrs.iter_mut().find(|entry| entry.0 == name) {
			Some(entry) => entry.1 = value.into(),
			None => self.attrs.push((name, value.into())),
		}
		self
	}

	/// Sets the `id` attribute.
	///
	/// Identifiers must not contain whitespace; a violating value is
	/// recorded as [`UsageError::InvalidId`].
	pub fn id(self, id: impl Into<Cow<'static, str>>) -> Self {
		if self.err.is_some() {
			return self;
		}
		let id = id.into();
		if id.contains(char::is_whitespace) {
			return self.fail(UsageError::InvalidId(id.into_owned()));
		}
		self.attr("id", id)
	}

	/// Appends class tokens to the `class` attribute.
	///
	/// The input is tokenized on whitespace and rejoined with single
	/// spaces; an empty input is a no-op. Tokens containing `;` are
	/// recorded as [`UsageError::InvalidClass`]. Existing classes are
	/// kept: repeated calls accumulate, space-separated.
	pub fn class(mut self, class: impl AsRef<str>) -> Self {
		if self.err.is_some() {
			return self;
		}
		let tokens: Vec<&str> = class.as_ref().split_whitespace().collect();
		if tokens.is_empty() {
			return self;
		}
		// Tokens cannot contain whitespace post-split; only `;` can
		// still slip through into the attribute value.
		if let Some(bad) = tokens.iter().find(|token| token.contains(';')) {
			let bad = (*bad).to_string();
			return self.fail(UsageError::InvalidClass(bad));
		}
		let joined = tokens.join(" ");
		self.append_attr("class", " ", &joined);
		self
	}

	/// Appends several class values, left to right.
	pub fn classes<I>(mut self, classes: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		for class in classes {
			self = self.class(class);
		}
		self
	}

	/// Appends a `key: value` declaration to the `style` attribute,
	/// separated from existing declarations by `"; "`.
	pub fn style(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
		if self.err.is_some() {
			return self;
		}
		let declaration = format!("{}: {}", key.as_ref(), value.as_ref());
		self.append_attr("style", "; ", &declaration);
		self
	}

	/// Sets a custom `data-*` attribute.
	pub fn data(self, key: impl AsRef<str>, value: impl Into<Cow<'static, str>>) -> Self {
		if self.err.is_some() {
			return self;
		}
		let name = format!("data-{}", key.as_ref());
		self.attr(name, value)
	}

	/// Appends a child node.
	///
	/// Children keep append order across invocations. Appending to a
	/// void element, or appending a root element, is recorded as a
	/// usage error.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		if self.err.is_some() {
			return self;
		}
		if self.is_void {
			let tag = self.tag.clone().into_owned();
			return self.fail(UsageError::ChildrenInVoid(tag));
		}
		let node = child.into_node();
		if let Node::Element(child) = &node {
			if child.is_root() {
				let tag = child.tag_name().to_string();
				return self.fail(UsageError::NestedRoot(tag));
			}
		}
		self.children.push(node);
		self
	}

	/// Appends every node from the iterator, in order.
	pub fn children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator,
		I::Item: IntoNode,
	{
		for child in children {
			self = self.child(child);
		}
		self
	}

	/// Sets the direct text content, entity-escaped at render time.
	///
	/// Direct text renders ahead of any children regardless of call
	/// order; previously added children are kept. For text interleaved
	/// between elements, add [`Node::text`] children instead.
	pub fn text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
		if self.err.is_some() {
			return self;
		}
		if self.is_void {
			let tag = self.tag.clone().into_owned();
			return self.fail(UsageError::TextInVoid(tag));
		}
		self.text = Some(text.into());
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Returns the direct text, if set.
	pub fn direct_text(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns whether this element is the document root.
	pub fn is_root(&self) -> bool {
		self.is_root
	}

	/// Returns the first usage error recorded during construction.
	///
	/// Rendering surfaces the same error; this accessor allows
	/// checking a subtree before it is composed further.
	pub fn error(&self) -> Option<&UsageError> {
		self.err.as_ref()
	}

	/// Renders this element to an owned HTML string.
	pub fn render(&self) -> Result<String, RenderError> {
		let mut out = String::new();
		render::write_element(self, &mut out)?;
		tracing::trace!(tag = %self.tag, len = out.len(), "rendered element to string");
		Ok(out)
	}

	/// Streams this element's HTML into the sink.
	///
	/// Writes incrementally; the first write failure aborts the render
	/// and leaves already-written bytes in place.
	pub fn render_to<W>(&self, sink: &mut W) -> Result<(), RenderError>
	where
		W: io::Write + ?Sized,
	{
		tracing::trace!(tag = %self.tag, "streaming element to sink");
		let mut sink = render::IoSink::new(sink);
		render::write_element(self, &mut sink)
	}

	/// Appends to a cumulative attribute (`class`/`style`), inserting
	/// the separator only when a value is already present.
	fn append_attr(&mut self, name: &'static str, separator: &str, value: &str) {
		match self.attrs.iter_mut().find(|entry| entry.0 == name) {
			Some(entry) => {
				let current = entry.1.to_mut();
				if !current.is_empty() {
					current.push_str(separator);
				}
				current.push_str(value);
			}
			None => {
				self.attrs
					.push((Cow::Borrowed(name), Cow::Owned(value.to_owned())));
			}
		}
	}

	/// Records the first usage error; later mutations become no-ops.
	fn fail(mut self, err: UsageError) -> Self {
		if self.err.is_none() {
			self.err = Some(err);
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_element_creation() {
		let el = Element::new("div");
		assert_eq!(el.tag_name(), "div");
		assert!(!el.is_void());
		assert!(!el.is_root());
		assert!(el.attrs().is_empty());
		assert!(el.child_nodes().is_empty());
		assert!(el.error().is_none());
	}

	#[test]
	fn test_void_detection() {
		assert!(Element::new("br").is_void());
		assert!(Element::new("img").is_void());
		assert!(Element::new("input").is_void());
		assert!(!Element::new("div").is_void());
		assert!(!Element::new("my-widget").is_void());
	}

	#[test]
	fn test_root_element() {
		let root = Element::root();
		assert_eq!(root.tag_name(), "html");
		assert!(root.is_root());
		assert!(!root.is_void());
	}

	#[test]
	fn test_attr_overwrites_in_place() {
		let el = Element::new("a")
			.attr("href", "/old")
			.attr("target", "_blank")
			.attr("href", "/new");
		assert_eq!(el.attrs().len(), 2);
		assert_eq!(el.attrs()[0], ("href".into(), "/new".into()));
		assert_eq!(el.attrs()[1], ("target".into(), "_blank".into()));
	}

	#[test]
	fn test_class_accumulates() {
		let el = Element::new("div").class("a").class("b");
		assert_eq!(el.attrs()[0].1, "a b");
	}

	#[test]
	fn test_class_tokenizes_and_rejoins() {
		let el = Element::new("div").class("  a \t b  ");
		assert_eq!(el.attrs()[0].1, "a b");
	}

	#[test]
	fn test_empty_class_is_noop() {
		let el = Element::new("div").class("").class("   ");
		assert!(el.attrs().is_empty());
		assert!(el.error().is_none());
	}

	#[test]
	fn test_classes_accumulate_left_to_right() {
		let el = Element::new("div").classes(["a", "b c"]);
		assert_eq!(el.attrs()[0].1, "a b c");
	}

	#[test]
	fn test_class_with_semicolon_fails() {
		let el = Element::new("div").class("bad;token");
		assert_eq!(
			el.error(),
			Some(&UsageError::InvalidClass("bad;token".to_string()))
		);
	}

	#[test]
	fn test_style_accumulates() {
		let el = Element::new("div")
			.style("color", "red")
			.style("font-size", "1em");
		assert_eq!(el.attrs()[0].1, "color: red; font-size: 1em");
	}

	#[test]
	fn test_id_rejects_whitespace() {
		let el = Element::new("div").id("a b");
		assert_eq!(el.error(), Some(&UsageError::InvalidId("a b".to_string())));
		assert!(el.render().is_err());
	}

	#[test]
	fn test_data_attribute() {
		let el = Element::new("div").data("test-id", "42");
		assert_eq!(el.attrs()[0], ("data-test-id".into(), "42".into()));
	}

	#[test]
	fn test_child_on_void_fails() {
		let el = Element::new("br").child(Element::new("span"));
		assert_eq!(
			el.error(),
			Some(&UsageError::ChildrenInVoid("br".to_string()))
		);
	}

	#[test]
	fn test_text_on_void_fails() {
		let el = Element::new("img").text("alt text");
		assert_eq!(el.error(), Some(&UsageError::TextInVoid("img".to_string())));
	}

	#[test]
	fn test_nested_root_fails() {
		let el = Element::new("div").child(Element::root());
		assert_eq!(el.error(), Some(&UsageError::NestedRoot("html".to_string())));
	}

	#[test]
	fn test_first_error_wins_and_freezes() {
		let el = Element::new("br").text("a").child(Element::new("span"));
		assert_eq!(el.error(), Some(&UsageError::TextInVoid("br".to_string())));
		// Frozen: the class below is not applied.
		let el = el.class("late");
		assert!(el.attrs().is_empty());
	}

	#[test]
	fn test_clone_is_deep() {
		let base = Element::new("div").class("base");
		let left = base.clone().class("left");
		let right = base.class("right");
		assert_eq!(left.attrs()[0].1, "base left");
		assert_eq!(right.attrs()[0].1, "base right");
	}

	#[test]
	fn test_render_simple() {
		assert_eq!(Element::new("div").render().unwrap(), "<div></div>");
	}

	#[test]
	fn test_render_void_without_closing_tag() {
		let html = Element::new("br").class("sep").render().unwrap();
		assert_eq!(html, r#"<br class="sep">"#);
	}

	#[test]
	fn test_render_text_before_children() {
		let el = Element::new("div")
			.child(Element::new("span"))
			.text("lead");
		assert_eq!(el.render().unwrap(), "<div>lead<span></span></div>");
	}

	#[test]
	fn test_render_escapes_text_and_attrs() {
		let el = Element::new("div")
			.attr("title", "a<b & \"c\"")
			.text("x < y");
		assert_eq!(
			el.render().unwrap(),
			r#"<div title="a&lt;b &amp; &quot;c&quot;">x &lt; y</div>"#
		);
	}

	#[test]
	fn test_render_root_emits_doctype_once() {
		let page = Element::root()
			.child(Element::new("head"))
			.child(Element::new("body"));
		assert_eq!(
			page.render().unwrap(),
			"<!DOCTYPE html><html><head></head><body></body></html>"
		);
	}

	#[test]
	fn test_render_to_streams_bytes() {
		let mut buf = Vec::new();
		let el = Element::new("p").text("hi");
		el.render_to(&mut buf).unwrap();
		assert_eq!(buf, b"<p>hi</p>");
	}
}
