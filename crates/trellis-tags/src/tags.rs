//! Tag constructors.
//!
//! One zero-argument function per HTML tag, each returning a fresh
//! [`Element`]. Void-ness comes from the core void-tag table, so
//! `br()` refuses children the same way `Element::new("br")` does.
//! Custom (e.g. web-component) tags stay on `Element::new` directly.

use std::borrow::Cow;

use trellis_core::Element;

/// Macro for defining HTML element creation functions
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> Element {
			Element::new($tag)
		}
	};
}

// ============================================================================
// Main Root and Document Metadata Elements
// ============================================================================

/// Create the `<html>` document root.
///
/// Rendering the returned element emits a single `<!DOCTYPE html>`
/// prefix ahead of the open tag. Exactly one root belongs to a tree:
/// adding it as a child of another element is a usage error.
///
/// ## Example
///
/// ```
/// use trellis_tags::{body, head, html, title};
///
/// let page = html()
/// 	.child(head().child(title("Hi")))
/// 	.child(body());
///
/// assert_eq!(
/// 	page.render()?,
/// 	"<!DOCTYPE html><html><head><title>Hi</title></head><body></body></html>",
/// );
/// # Ok::<(), trellis_core::RenderError>(())
/// ```
pub fn html() -> Element {
	Element::root()
}

/// Create a `<title>` element holding the given text.
pub fn title(text: impl Into<Cow<'static, str>>) -> Element {
	Element::new("title").text(text)
}

define_element!(
	/// Create a `<head>` element
	head, "head"
);

define_element!(
	/// Create a `<body>` element
	body, "body"
);

define_element!(
	/// Create a `<base>` element (void)
	///
	/// Specifies the base URL to use for all relative URLs in a document.
	base, "base"
);

define_element!(
	/// Create a `<link>` element (void)
	link, "link"
);

define_element!(
	/// Create a `<meta>` element (void)
	meta, "meta"
);

define_element!(
	/// Create a `<style>` element
	///
	/// Contains style information for a document; the CSS itself goes in
	/// as direct text.
	style, "style"
);

// ============================================================================
// Content Sectioning Elements
// ============================================================================

define_element!(
	/// Create an `<address>` element
	address, "address"
);

define_element!(
	/// Create an `<article>` element
	///
	/// Represents a self-contained composition intended to be
	/// independently distributable or reusable.
	article, "article"
);

define_element!(
	/// Create an `<aside>` element
	aside, "aside"
);

define_element!(
	/// Create a `<footer>` element
	footer, "footer"
);

define_element!(
	/// Create a `<header>` element
	header, "header"
);

define_element!(
	/// Create a `<h1>` element (heading level 1)
	h1, "h1"
);

define_element!(
	/// Create a `<h2>` element (heading level 2)
	h2, "h2"
);

define_element!(
	/// Create a `<h3>` element (heading level 3)
	h3, "h3"
);

define_element!(
	/// Create a `<h4>` element (heading level 4)
	h4, "h4"
);

define_element!(
	/// Create a `<h5>` element (heading level 5)
	h5, "h5"
);

define_element!(
	/// Create a `<h6>` element (heading level 6)
	h6, "h6"
);

define_element!(
	/// Create an `<hgroup>` element
	hgroup, "hgroup"
);

define_element!(
	/// Create a `<main>` element
	///
	/// Represents the dominant content of the body of a document.
	main, "main"
);

define_element!(
	/// Create a `<nav>` element
	nav, "nav"
);

define_element!(
	/// Create a `<search>` element
	search, "search"
);

define_element!(
	/// Create a `<section>` element
	section, "section"
);

// ============================================================================
// Text Content Elements
// ============================================================================

define_element!(
	/// Create a `<blockquote>` element
	blockquote, "blockquote"
);

define_element!(
	/// Create a `<dd>` element
	dd, "dd"
);

define_element!(
	/// Create a `<div>` element
	///
	/// ## Example
	///
	/// ```
	/// use trellis_tags::{div, p};
	///
	/// let container = div()
	/// 	.class("container")
	/// 	.child(p().text("Content"));
	///
	/// assert_eq!(
	/// 	container.render()?,
	/// 	r#"<div class="container"><p>Content</p></div>"#,
	/// );
	/// # Ok::<(), trellis_core::RenderError>(())
	/// ```
	div, "div"
);

define_element!(
	/// Create a `<dl>` element (description list)
	dl, "dl"
);

define_element!(
	/// Create a `<dt>` element (description term)
	dt, "dt"
);

define_element!(
	/// Create a `<figcaption>` element
	figcaption, "figcaption"
);

define_element!(
	/// Create a `<figure>` element
	figure, "figure"
);

define_element!(
	/// Create an `<hr>` element (void)
	///
	/// Represents a thematic break between paragraph-level elements.
	hr, "hr"
);

define_element!(
	/// Create a `<li>` element (list item)
	li, "li"
);

define_element!(
	/// Create a `<menu>` element
	menu, "menu"
);

define_element!(
	/// Create an `<ol>` element (ordered list)
	ol, "ol"
);

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create a `<pre>` element
	///
	/// Represents preformatted text, presented exactly as written.
	pre, "pre"
);

define_element!(
	/// Create a `<ul>` element (unordered list)
	///
	/// ## Example
	///
	/// ```
	/// use trellis_tags::{li, ul};
	///
	/// let list = ul()
	/// 	.child(li().text("Item 1"))
	/// 	.child(li().text("Item 2"));
	///
	/// assert_eq!(list.render()?, "<ul><li>Item 1</li><li>Item 2</li></ul>");
	/// # Ok::<(), trellis_core::RenderError>(())
	/// ```
	ul, "ul"
);

// ============================================================================
// Inline Text Semantics Elements
// ============================================================================

define_element!(
	/// Create an `<a>` element (hyperlink)
	///
	/// ## Example
	///
	/// ```
	/// use trellis_tags::{ElementAttrs, a};
	///
	/// let anchor = a().href("https://example.com").text("Visit");
	/// assert_eq!(
	/// 	anchor.render()?,
	/// 	r#"<a href="https://example.com">Visit</a>"#,
	/// );
	/// # Ok::<(), trellis_core::RenderError>(())
	/// ```
	a, "a"
);

define_element!(
	/// Create an `<abbr>` element (abbreviation)
	abbr, "abbr"
);

define_element!(
	/// Create a `<b>` element
	b, "b"
);

define_element!(
	/// Create a `<bdi>` element (bidirectional isolate)
	bdi, "bdi"
);

define_element!(
	/// Create a `<bdo>` element (bidirectional override)
	bdo, "bdo"
);

define_element!(
	/// Create a `<br>` element (void)
	///
	/// Produces a line break in text.
	br, "br"
);

define_element!(
	/// Create a `<cite>` element
	cite, "cite"
);

define_element!(
	/// Create a `<code>` element
	code, "code"
);

define_element!(
	/// Create a `<data>` element
	///
	/// Links content with a machine-readable translation via its
	/// `value` attribute.
	data, "data"
);

define_element!(
	/// Create a `<dfn>` element (definition)
	dfn, "dfn"
);

define_element!(
	/// Create an `<em>` element (stress emphasis)
	em, "em"
);

define_element!(
	/// Create an `<i>` element
	i, "i"
);

define_element!(
	/// Create a `<kbd>` element (keyboard input)
	kbd, "kbd"
);

define_element!(
	/// Create a `<mark>` element (highlighted text)
	mark, "mark"
);

define_element!(
	/// Create a `<q>` element (inline quotation)
	q, "q"
);

define_element!(
	/// Create an `<rp>` element (ruby fallback parenthesis)
	rp, "rp"
);

define_element!(
	/// Create an `<rt>` element (ruby text)
	rt, "rt"
);

define_element!(
	/// Create a `<ruby>` element
	ruby, "ruby"
);

define_element!(
	/// Create an `<s>` element (strikethrough)
	s, "s"
);

define_element!(
	/// Create a `<samp>` element (sample output)
	samp, "samp"
);

define_element!(
	/// Create a `<small>` element
	small, "small"
);

define_element!(
	/// Create a `<span>` element
	span, "span"
);

define_element!(
	/// Create a `<strong>` element
	strong, "strong"
);

define_element!(
	/// Create a `<sub>` element (subscript)
	sub, "sub"
);

define_element!(
	/// Create a `<sup>` element (superscript)
	sup, "sup"
);

define_element!(
	/// Create a `<time>` element
	time, "time"
);

define_element!(
	/// Create a `<u>` element
	u, "u"
);

define_element!(
	/// Create a `<var>` element (variable name)
	var, "var"
);

define_element!(
	/// Create a `<wbr>` element (void, word break opportunity)
	wbr, "wbr"
);

// ============================================================================
// Image and Multimedia Elements
// ============================================================================

define_element!(
	/// Create an `<area>` element (void, image-map hotspot)
	area, "area"
);

define_element!(
	/// Create an `<audio>` element
	audio, "audio"
);

define_element!(
	/// Create an `<img>` element (void)
	///
	/// ## Example
	///
	/// ```
	/// use trellis_tags::{ElementAttrs, img};
	///
	/// let image = img().src("/logo.png").alt("Logo");
	/// assert_eq!(image.render()?, r#"<img src="/logo.png" alt="Logo">"#);
	/// # Ok::<(), trellis_core::RenderError>(())
	/// ```
	img, "img"
);

define_element!(
	/// Create a `<map>` element (image map)
	map, "map"
);

define_element!(
	/// Create a `<track>` element (void, timed text track)
	track, "track"
);

define_element!(
	/// Create a `<video>` element
	video, "video"
);

// ============================================================================
// Embedded Content Elements
// ============================================================================

define_element!(
	/// Create an `<embed>` element (void)
	embed, "embed"
);

define_element!(
	/// Create an `<iframe>` element
	iframe, "iframe"
);

define_element!(
	/// Create an `<object>` element
	object, "object"
);

define_element!(
	/// Create a `<picture>` element
	picture, "picture"
);

define_element!(
	/// Create a `<source>` element (void)
	///
	/// Specifies media resources for `<picture>`, `<audio>`, or
	/// `<video>`.
	source, "source"
);

// ============================================================================
// SVG and MathML Elements
// ============================================================================

define_element!(
	/// Create an `<svg>` container element
	svg, "svg"
);

define_element!(
	/// Create a `<math>` container element
	math, "math"
);

// ============================================================================
// Scripting Elements
// ============================================================================

define_element!(
	/// Create a `<canvas>` element
	canvas, "canvas"
);

define_element!(
	/// Create a `<noscript>` element
	noscript, "noscript"
);

define_element!(
	/// Create a `<script>` element
	///
	/// Inline script source goes in as direct text; note that direct
	/// text is entity-escaped like any other text.
	script, "script"
);

// ============================================================================
// Demarcating Edits Elements
// ============================================================================

define_element!(
	/// Create a `<del>` element (deleted text)
	del, "del"
);

define_element!(
	/// Create an `<ins>` element (inserted text)
	ins, "ins"
);

// ============================================================================
// Table Content Elements
// ============================================================================

define_element!(
	/// Create a `<caption>` element
	caption, "caption"
);

define_element!(
	/// Create a `<col>` element (void)
	col, "col"
);

define_element!(
	/// Create a `<colgroup>` element
	colgroup, "colgroup"
);

define_element!(
	/// Create a `<table>` element
	table, "table"
);

define_element!(
	/// Create a `<tbody>` element
	tbody, "tbody"
);

define_element!(
	/// Create a `<td>` element (data cell)
	td, "td"
);

define_element!(
	/// Create a `<tfoot>` element
	tfoot, "tfoot"
);

define_element!(
	/// Create a `<th>` element (header cell)
	th, "th"
);

define_element!(
	/// Create a `<thead>` element
	thead, "thead"
);

define_element!(
	/// Create a `<tr>` element (table row)
	tr, "tr"
);

// ============================================================================
// Form Elements
// ============================================================================

define_element!(
	/// Create a `<button>` element
	button, "button"
);

define_element!(
	/// Create a `<datalist>` element
	datalist, "datalist"
);

define_element!(
	/// Create a `<fieldset>` element
	fieldset, "fieldset"
);

define_element!(
	/// Create a `<form>` element
	form, "form"
);

define_element!(
	/// Create an `<input>` element (void)
	///
	/// ## Example
	///
	/// ```
	/// use trellis_tags::{ElementAttrs, input};
	///
	/// let field = input().type_("text").placeholder("Enter text...");
	/// assert_eq!(
	/// 	field.render()?,
	/// 	r#"<input type="text" placeholder="Enter text...">"#,
	/// );
	/// # Ok::<(), trellis_core::RenderError>(())
	/// ```
	input, "input"
);

define_element!(
	/// Create a `<label>` element
	label, "label"
);

define_element!(
	/// Create a `<legend>` element
	legend, "legend"
);

define_element!(
	/// Create a `<meter>` element
	meter, "meter"
);

define_element!(
	/// Create an `<optgroup>` element
	optgroup, "optgroup"
);

define_element!(
	/// Create an `<option>` element (for use with `<select>`)
	option, "option"
);

define_element!(
	/// Create an `<output>` element
	output, "output"
);

define_element!(
	/// Create a `<progress>` element
	progress, "progress"
);

define_element!(
	/// Create a `<select>` element (dropdown)
	select, "select"
);

define_element!(
	/// Create a `<textarea>` element
	textarea, "textarea"
);

// ============================================================================
// Interactive Elements
// ============================================================================

define_element!(
	/// Create a `<details>` element
	details, "details"
);

define_element!(
	/// Create a `<dialog>` element
	dialog, "dialog"
);

define_element!(
	/// Create a `<summary>` element
	summary, "summary"
);

// ============================================================================
// Web Components Elements
// ============================================================================

define_element!(
	/// Create a `<slot>` element
	slot, "slot"
);

define_element!(
	/// Create a `<template>` element
	template, "template"
);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_constructors_fix_tag_and_voidness() {
		assert_eq!(div().tag_name(), "div");
		assert!(!div().is_void());
		assert!(br().is_void());
		assert!(img().is_void());
		assert!(input().is_void());
	}

	#[test]
	fn test_html_is_the_document_root() {
		assert!(html().is_root());
		assert!(!body().is_root());
	}

	#[test]
	fn test_title_carries_text() {
		assert_eq!(title("Docs").render().unwrap(), "<title>Docs</title>");
	}
}
