//! Entity escaping for rendered markup.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub fn escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn no_special_chars_borrows() {
		assert_eq!(escape("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("\"test\" 'value'", "&quot;test&quot; &#x27;value&#x27;")]
	#[case("5 > 3 < 7", "5 &gt; 3 &lt; 7")]
	fn special_chars_are_escaped(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape(input), Cow::<str>::Owned(expected.to_string()));
	}

	#[rstest]
	fn empty_input_borrows() {
		assert_eq!(escape(""), Cow::Borrowed(""));
	}
}
