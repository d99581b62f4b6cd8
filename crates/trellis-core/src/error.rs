//! Error types for builder validation and rendering.

use std::io;

/// A recoverable misuse of the builder API.
///
/// The fluent mutators record the first violation inside the element
/// instead of panicking; every later mutation on that element becomes a
/// no-op and the error surfaces from `render`/`render_to` (or early,
/// via [`Element::error`](crate::Element::error)).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
	#[error("cannot add children to void element: <{0}>")]
	ChildrenInVoid(String),

	#[error("cannot set text on void element: <{0}>")]
	TextInVoid(String),

	#[error("invalid id {0:?}: must not contain whitespace")]
	InvalidId(String),

	#[error("invalid class token {0:?}: must not contain whitespace or ';'")]
	InvalidClass(String),

	#[error("root element <{0}> cannot be added as a child")]
	NestedRoot(String),
}

/// Errors surfaced by [`Node::render`](crate::Node::render) and
/// [`Node::render_to`](crate::Node::render_to).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// The tree carries a recorded builder misuse.
	#[error(transparent)]
	Usage(#[from] UsageError),

	/// The sink failed mid-write. Bytes already written are not rolled
	/// back; the caller owns the sink's final state.
	#[error("failed to write rendered HTML")]
	Io(#[from] io::Error),
}
