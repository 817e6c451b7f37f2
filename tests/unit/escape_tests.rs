/*!
 * Tests for escaping and the full escape-and-translate pipeline
 */

use sctmark::escape::{escape, escape_html};
use sctmark::render::translate_tags;

/// Text without special characters is returned unchanged
#[test]
fn test_escape_withPlainText_shouldBeIdentity() {
    for text in ["", "plain text", "line one\nline two", "unicode ✓ ß", "it's 100%"] {
        assert_eq!(escape(text), text);
    }
}

/// Escaping twice escapes the ampersands of the first pass
#[test]
fn test_escapeHtml_appliedTwice_shouldNotBeIdempotent() {
    let once = escape_html("a < b");
    let twice = escape_html(once.as_str());

    assert_eq!(once.as_str(), "a &lt; b");
    assert_eq!(twice.as_str(), "a &amp;lt; b");
    assert_ne!(once.as_str(), twice.as_str());
}

/// Plain text survives escaping followed by tag translation
#[test]
fn test_translateTags_afterEscape_withPlainText_shouldRoundTrip() {
    assert_eq!(translate_tags(&escape_html("plain text")), "plain text");
}

/// Script tags are not tags of the markup and stay escaped
#[test]
fn test_escape_withScriptTag_shouldEscapeEverything() {
    assert_eq!(
        escape("<script>alert(1)</script>"),
        "&lt;script&gt;alert(1)&lt;/script&gt;"
    );
}

/// Attribute breaking characters are escaped
#[test]
fn test_escape_withQuotesAndAmpersands_shouldEscape() {
    assert_eq!(
        escape(r#"" onmouseover="x" & y"#),
        "&quot; onmouseover=&quot;x&quot; &amp; y"
    );
}

/// Injection through a tag argument cannot leave the attribute
#[test]
fn test_escape_withQuoteInColorArgument_shouldStayInsideAttribute() {
    let html = escape(r#"<SCT:COLOR:red" onclick="evil()>x<!SCT:COLOR>"#);

    assert!(!html.contains(r#"" onclick=""#));
    assert!(!html.contains("onclick"));
    assert_eq!(html, "x</span>");
}

/// Extra CSS declarations in a color argument drop the whole tag
#[test]
fn test_escape_withCssInColorArgument_shouldDropTag() {
    let html = escape("<SCT:COLOR:red;position:fixed>x<!SCT:COLOR>");

    assert_eq!(html, "x</span>");
    assert!(!html.contains("style="));
}

/// Color names with spaces and underscores are still accepted
#[test]
fn test_escape_withPlainColorArgument_shouldRender() {
    assert_eq!(
        escape("<SCT:COLOR:Dark_Red>x<!SCT:COLOR>"),
        r#"<span style="color:dark_red">x</span>"#
    );
}

/// Pre-escaped entities typed by the author are not tags
#[test]
fn test_escape_withAuthorTypedEntities_shouldNotTranslate() {
    assert_eq!(
        escape("&lt;SCT:BOLD&gt;"),
        "&amp;lt;SCT:BOLD&amp;gt;"
    );
}
