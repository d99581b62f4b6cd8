//! Attribute extension traits.
//!
//! Convenience setters over the single core primitive
//! [`Element::attr`], generated by [`attr_trait!`]. Three method
//! shapes: `valued` setters take the attribute value, `flags` set the
//! bare attribute with an empty value (rendered as `key=""`), and
//! `numeric` setters format an integer value.
//!
//! Method names that collide with Rust keywords use the trailing
//! underscore convention (`type_`, `for_`, `async_`, `loop_`). The
//! cumulative `class`/`style` accumulators and validated `id` stay on
//! [`Element`] itself.

use std::borrow::Cow;

use trellis_core::Element;

/// Defines an attribute extension trait for [`Element`].
macro_rules! attr_trait {
	(
		$(#[$trait_meta:meta])*
		$trait_name:ident {
			valued {
				$($(#[$vmeta:meta])* $vmethod:ident => $vattr:literal,)*
			}
			flags {
				$($(#[$fmeta:meta])* $fmethod:ident => $fattr:literal,)*
			}
			numeric {
				$($(#[$nmeta:meta])* $nmethod:ident => $nattr:literal,)*
			}
		}
	) => {
		$(#[$trait_meta])*
		pub trait $trait_name: Sized {
			$(
				$(#[$vmeta])*
				fn $vmethod(self, value: impl Into<Cow<'static, str>>) -> Self;
			)*
			$(
				$(#[$fmeta])*
				fn $fmethod(self) -> Self;
			)*
			$(
				$(#[$nmeta])*
				fn $nmethod(self, value: i64) -> Self;
			)*
		}

		impl $trait_name for Element {
			$(
				fn $vmethod(self, value: impl Into<Cow<'static, str>>) -> Self {
					self.attr($vattr, value)
				}
			)*
			$(
				fn $fmethod(self) -> Self {
					self.attr($fattr, "")
				}
			)*
			$(
				fn $nmethod(self, value: i64) -> Self {
					self.attr($nattr, value.to_string())
				}
			)*
		}
	};
}

attr_trait!(
	/// Global attributes, valid on every HTML element.
	GlobalAttrs {
		valued {
			/// Sets the `accesskey` keyboard shortcut hint.
			accesskey => "accesskey",
			/// Sets the `autocapitalize` behavior for entered text.
			autocapitalize => "autocapitalize",
			/// Sets the `contenteditable` state.
			contenteditable => "contenteditable",
			/// Sets the text directionality (`ltr`, `rtl`, `auto`).
			dir => "dir",
			/// Sets the `draggable` state.
			draggable => "draggable",
			/// Sets the `enterkeyhint` virtual-keyboard action label.
			enterkeyhint => "enterkeyhint",
			/// Sets the `inputmode` virtual-keyboard hint.
			inputmode => "inputmode",
			/// Sets `is`, naming a customized built-in element.
			is => "is",
			/// Sets the microdata `itemid`.
			itemid => "itemid",
			/// Sets the microdata `itemprop`.
			itemprop => "itemprop",
			/// Sets the microdata `itemref`.
			itemref => "itemref",
			/// Sets the microdata `itemtype`.
			itemtype => "itemtype",
			/// Sets the content language.
			lang => "lang",
			/// Sets the CSP `nonce`.
			nonce => "nonce",
			/// Sets the shadow-tree `part` name list.
			part => "part",
			/// Sets the `popover` state.
			popover => "popover",
			/// Sets the `slot` the element is assigned to.
			slot => "slot",
			/// Sets the `spellcheck` state.
			spellcheck => "spellcheck",
			/// Sets the advisory `title` (typically a tooltip).
			title => "title",
			/// Sets whether the content should be `translate`d.
			translate => "translate",
		}
		flags {
			/// Marks the element to be focused on page load.
			autofocus => "autofocus",
			/// Hides the element from rendering.
			hidden => "hidden",
			/// Makes the element inert to user interaction.
			inert => "inert",
			/// Marks the element as a microdata item scope.
			itemscope => "itemscope",
		}
		numeric {
			/// Sets the `tabindex` focus order.
			tabindex => "tabindex",
		}
	}
);

attr_trait!(
	/// ARIA and role attributes.
	AriaAttrs {
		valued {
			/// Sets the accessible `aria-label`.
			aria_label => "aria-label",
			/// Sets `aria-hidden`, removing the element from the
			/// accessibility tree when `"true"`.
			aria_hidden => "aria-hidden",
			/// Sets the ARIA `role`.
			role => "role",
		}
		flags {
		}
		numeric {
		}
	}
);

attr_trait!(
	/// Element-specific attributes (links, media, forms, tables).
	///
	/// The catalog mirrors the per-element HTML attributes; each
	/// setter is plain overwrite semantics via [`Element::attr`].
	ElementAttrs {
		valued {
			accept => "accept",
			accept_charset => "accept-charset",
			action => "action",
			alt => "alt",
			charset => "charset",
			cite => "cite",
			coords => "coords",
			crossorigin => "crossorigin",
			datetime => "datetime",
			download => "download",
			enctype => "enctype",
			/// Sets `for`, associating a label or output with a control.
			for_ => "for",
			form => "form",
			formaction => "formaction",
			formenctype => "formenctype",
			formmethod => "formmethod",
			formtarget => "formtarget",
			/// Sets the link target URL.
			href => "href",
			hreflang => "hreflang",
			http_equiv => "http-equiv",
			integrity => "integrity",
			kind => "kind",
			label => "label",
			list => "list",
			max => "max",
			media => "media",
			method => "method",
			min => "min",
			name => "name",
			pattern => "pattern",
			placeholder => "placeholder",
			poster => "poster",
			preload => "preload",
			rel => "rel",
			sandbox => "sandbox",
			scope => "scope",
			shape => "shape",
			sizes => "sizes",
			/// Sets the resource URL.
			src => "src",
			srcdoc => "srcdoc",
			srclang => "srclang",
			srcset => "srcset",
			step => "step",
			target => "target",
			/// Sets `type`, e.g. the input control kind.
			type_ => "type",
			usemap => "usemap",
			value => "value",
			wrap => "wrap",
		}
		flags {
			/// Sets `async` on a script.
			async_ => "async",
			autoplay => "autoplay",
			checked => "checked",
			controls => "controls",
			default => "default",
			defer => "defer",
			disabled => "disabled",
			formnovalidate => "formnovalidate",
			/// Sets `loop` on a media element.
			loop_ => "loop",
			multiple => "multiple",
			muted => "muted",
			novalidate => "novalidate",
			open => "open",
			readonly => "readonly",
			required => "required",
			reversed => "reversed",
			selected => "selected",
		}
		numeric {
			cols => "cols",
			colspan => "colspan",
			height => "height",
			maxlength => "maxlength",
			minlength => "minlength",
			rows => "rows",
			rowspan => "rowspan",
			size => "size",
			span => "span",
			start => "start",
			width => "width",
		}
	}
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::{a, button, img, input, ol, td};

	#[test]
	fn test_valued_setters_overwrite() {
		let el = a().href("/old").href("/new");
		assert_eq!(el.render().unwrap(), r#"<a href="/new"></a>"#);
	}

	#[test]
	fn test_flag_setters_render_empty_value() {
		let el = button().disabled();
		assert_eq!(el.render().unwrap(), r#"<button disabled=""></button>"#);
	}

	#[test]
	fn test_numeric_setters_format_values() {
		let el = td().colspan(2).tabindex(-1);
		assert_eq!(
			el.render().unwrap(),
			r#"<td colspan="2" tabindex="-1"></td>"#
		);
	}

	#[test]
	fn test_keyword_escaped_names() {
		let el = input().type_("checkbox").checked();
		assert_eq!(
			el.render().unwrap(),
			r#"<input type="checkbox" checked="">"#
		);
	}

	#[test]
	fn test_aria_attributes() {
		let el = img().src("/x.png").alt("x").aria_hidden("true");
		assert_eq!(
			el.render().unwrap(),
			r#"<img src="/x.png" alt="x" aria-hidden="true">"#
		);
	}

	#[test]
	fn test_numeric_start_on_list() {
		let el = ol().start(3);
		assert_eq!(el.render().unwrap(), r#"<ol start="3"></ol>"#);
	}
}
