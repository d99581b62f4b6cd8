//! Depth-first serialization of node trees to HTML.
//!
//! The serializer is a single pre-order pass with no backtracking:
//! open tag and attributes, direct text, children in append order,
//! closing tag. It writes through a [`Sink`], so the same walk serves
//! in-memory rendering (`String`, infallible) and streaming output
//! ([`IoSink`] over any [`io::Write`]).

use std::io;

use crate::element::Element;
use crate::error::RenderError;
use crate::escape::escape;
use crate::node::Node;

/// The token sink the serializer writes through.
pub(crate) trait Sink {
	fn write_str(&mut self, s: &str) -> Result<(), RenderError>;
}

impl Sink for String {
	fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
		self.push_str(s);
		Ok(())
	}
}

/// Streams tokens into an [`io::Write`] without intermediate
/// buffering, so a write failure leaves exactly the bytes emitted so
/// far in the sink.
pub(crate) struct IoSink<'a, W: io::Write + ?Sized> {
	inner: &'a mut W,
}

impl<'a, W: io::Write + ?Sized> IoSink<'a, W> {
	pub(crate) fn new(inner: &'a mut W) -> Self {
		Self { inner }
	}
}

impl<W: io::Write + ?Sized> Sink for IoSink<'_, W> {
	fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
		self.inner.write_all(s.as_bytes())?;
		Ok(())
	}
}

/// Serializes a node into the sink.
pub(crate) fn write_node(node: &Node, out: &mut dyn Sink) -> Result<(), RenderError> {
	match node {
		Node::Text(text) => out.write_str(&escape(text)),
		Node::Raw(raw) => out.write_str(raw),
		Node::Element(element) => write_element(element, out),
	}
}

/// Serializes an element into the sink.
///
/// A recorded builder misuse anywhere in the subtree aborts the walk
/// at the offending element.
pub(crate) fn write_element(element: &Element, out: &mut dyn Sink) -> Result<(), RenderError> {
	if let Some(err) = element.error() {
		return Err(err.clone().into());
	}
	if element.is_root() {
		out.write_str("<!DOCTYPE html>")?;
	}
	out.write_str("<")?;
	out.write_str(element.tag_name())?;
	for (name, value) in element.attrs() {
		out.write_str(" ")?;
		out.write_str(name)?;
		out.write_str("=\"")?;
		out.write_str(&escape(value))?;
		out.write_str("\"")?;
	}
	out.write_str(">")?;
	if element.is_void() {
		// Void elements close on the bare `>`: no ` />`, no closing tag.
		return Ok(());
	}
	if let Some(text) = element.direct_text() {
		if !text.is_empty() {
			out.write_str(&escape(text))?;
		}
	}
	for child in element.child_nodes() {
		write_node(child, out)?;
	}
	out.write_str("</")?;
	out.write_str(element.tag_name())?;
	out.write_str(">")
}
