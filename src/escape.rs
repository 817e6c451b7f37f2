/*!
 * HTML escaping for untrusted text.
 *
 * Every piece of author text goes through [`escape_html`] before any tag
 * translation happens. The result is wrapped in [`EscapedText`], which is the
 * only input the tag translator accepts, so translated fragments can never be
 * mixed with text that skipped escaping.
 */

use std::fmt;

/// Text in which `&`, `"`, `<` and `>` have been replaced by their entities.
///
/// Can only be built by [`escape_html`]. Anything inside is safe to insert into
/// an HTML document as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EscapedText(String);

impl EscapedText {
    /// Borrow the escaped text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for EscapedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EscapedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entity for an HTML-significant character, if it has one
fn entity_for(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

/// Escape `&`, `"`, `<` and `>` in a single left-to-right pass.
///
/// Entities produced here are never scanned again, so `&` inside `&lt;` is
/// not turned into `&amp;lt;`. Escaping twice is not a no-op though: the
/// second pass sees the `&` of each entity as ordinary text.
pub fn escape_html(text: &str) -> EscapedText {
    // Plain text is the common case
    if !text.chars().any(|c| entity_for(c).is_some()) {
        return EscapedText(text.to_string());
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match entity_for(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    EscapedText(out)
}

/// Escape untrusted text and translate the embedded tag commands into HTML.
///
/// Uses the legacy close behavior: every closing tag becomes `</span>`.
/// See [`crate::render::Renderer`] for the configurable variant.
pub fn escape(text: &str) -> String {
    crate::render::translate_tags(&escape_html(text))
}
