//! Property-based rendering tests
//!
//! - Text children are always entity-escaped, for any input string.
//! - Raw fragments pass through byte-for-byte.
//! - Re-rendering an unmutated tree is byte-identical.

use proptest::prelude::*;
use trellis::escape;
use trellis::prelude::*;

proptest! {
	#[test]
	fn text_children_are_always_escaped(s in ".*") {
		let markup = div().child(Node::text(s.clone())).render().unwrap();
		let inner = &markup[5..markup.len() - 6];

		// The serialized text is exactly the escaped form of the input.
		prop_assert_eq!(escape(&s), inner);

		// After removing the entities themselves, no markup-significant
		// character from the input survives unescaped.
		let stripped = inner
			.replace("&amp;", "")
			.replace("&lt;", "")
			.replace("&gt;", "")
			.replace("&quot;", "")
			.replace("&#x27;", "");
		prop_assert!(!stripped.contains(['&', '<', '>', '"', '\'']));
	}

	#[test]
	fn attribute_values_are_always_escaped(s in ".*") {
		let markup = div().attr("title", s.clone()).render().unwrap();
		let expected = format!(r#"<div title="{}"></div>"#, escape(&s));
		prop_assert_eq!(markup, expected);
	}

	#[test]
	fn raw_fragments_pass_through_verbatim(s in ".*") {
		let markup = div().child(Node::raw(s.clone())).render().unwrap();
		prop_assert_eq!(markup, format!("<div>{s}</div>"));
	}

	#[test]
	fn rerendering_is_byte_identical(
		classes in proptest::collection::vec("[a-z][a-z0-9-]{0,7}", 1..4),
		text in ".*",
	) {
		let el = div()
			.classes(classes)
			.attr("data-seq", "1")
			.child(span().text(text.clone()))
			.child(Node::text(text));

		let first = el.render().unwrap();
		let second = el.render().unwrap();
		prop_assert_eq!(first, second);
	}

	#[test]
	fn streaming_always_matches_in_memory_rendering(
		text in ".*",
		attr_value in ".*",
	) {
		let el = p().attr("title", attr_value).text(text);
		let markup = el.render().unwrap();

		let mut buf = Vec::new();
		el.render_to(&mut buf).unwrap();
		prop_assert_eq!(buf, markup.into_bytes());
	}
}
