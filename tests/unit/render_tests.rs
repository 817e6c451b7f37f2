/*!
 * Tests for tag translation
 */

use sctmark::escape::{escape, escape_html};
use sctmark::render::{CloseMode, RenderOptions, Renderer};
use sctmark::tags::{tokenize, Command, Segment};
use crate::common;

/// Bold open and close pair
#[test]
fn test_escape_withBoldPair_shouldRenderSpan() {
    assert_eq!(
        escape("<SCT:BOLD>hi<!SCT:BOLD>"),
        r#"<span style="font-weight:bold">hi</span>"#
    );
}

/// Color argument is lowercased
#[test]
fn test_escape_withColor_shouldLowercaseArgument() {
    assert_eq!(
        escape("<SCT:COLOR:RED>x<!SCT:COLOR>"),
        r#"<span style="color:red">x</span>"#
    );
}

/// Header renders on its own without a close
#[test]
fn test_escape_withHeader_shouldRenderCompleteDiv() {
    assert_eq!(
        escape("<SCT:HEADER:Title>"),
        r#"<div class="sct_header"><span>⇙ Title ⇗</span></div>"#
    );
}

/// Section and subsection dividers
#[test]
fn test_escape_withDividers_shouldRenderSeparators() {
    assert_eq!(
        escape("<SCT:SECTION:Setup>"),
        r#"<div class="sct_separator sct_section"><span>⇲ Setup ⇲</span></div>"#
    );
    assert_eq!(
        escape("<SCT:SUBSECTION:Step 1>"),
        r#"<div class="sct_separator sct_subsection"><span>↓ Step 1 ↓</span></div>"#
    );
}

/// Unknown commands vanish, the following text is kept
#[test]
fn test_escape_withUnknownCommand_shouldDropToken() {
    assert_eq!(escape("<SCT:NOPE:x>text"), "text");
    assert_eq!(escape("<SCT:NOPE:x>a < b"), "a &lt; b");
}

/// Command names are case-sensitive
#[test]
fn test_escape_withLowercaseCommand_shouldDropToken() {
    assert_eq!(escape("<SCT:bold>x"), "x");
}

/// Legacy mode closes a header with a stray span close
#[test]
fn test_escape_withClosedHeader_shouldEmitSpanClose() {
    assert_eq!(
        escape("<SCT:HEADER:T>x<!SCT:HEADER>"),
        r#"<div class="sct_header"><span>⇙ T ⇗</span></div>x</span>"#
    );
}

/// Balanced mode drops the close of a self-contained block
#[test]
fn test_render_withBalancedMode_withClosedHeader_shouldOmitSpanClose() {
    common::init_test_logger();
    let renderer = Renderer::with_close_mode(CloseMode::Balanced);

    assert_eq!(
        renderer.render("<SCT:HEADER:T>x<!SCT:HEADER>"),
        r#"<div class="sct_header"><span>⇙ T ⇗</span></div>x"#
    );
}

/// Escaped characters in an argument pass through verbatim
#[test]
fn test_escape_withAmpersandInHeader_shouldKeepEntity() {
    assert_eq!(
        escape("<SCT:HEADER:Q&A>"),
        r#"<div class="sct_header"><span>⇙ Q&amp;A ⇗</span></div>"#
    );
}

/// A token without a closing bracket is plain text
#[test]
fn test_escape_withUnterminatedToken_shouldStayEscaped() {
    assert_eq!(escape("<SCT:BOLD x"), "&lt;SCT:BOLD x");
}

/// Legacy rendering is the default
#[test]
fn test_renderer_default_shouldUseLegacyMode() {
    let renderer = Renderer::default();
    assert_eq!(renderer.options(), &RenderOptions::default());
    assert_eq!(renderer.options().close_mode, CloseMode::Legacy);
    assert_eq!(renderer.render("a<!SCT:BOLD>"), "a</span>");
}

/// The translator and the tokenizer agree on what a tag is
#[test]
fn test_tokenize_withMixedMarkup_shouldExposeCommands() {
    common::init_test_logger();
    let escaped = escape_html("x<SCT:COLOR:Blue>y<!SCT:COLOR><SCT:NOPE>");
    let commands: Vec<Option<Command>> = tokenize(&escaped)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Tag(token) => Some(token.command),
            Segment::Text(_) => None,
        })
        .collect();

    assert_eq!(commands, vec![Some(Command::Color), Some(Command::Color), None]);
}

/// Renderer can be shared across threads
#[test]
fn test_renderer_acrossThreads_shouldProduceSameOutput() {
    let renderer = std::sync::Arc::new(Renderer::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let renderer = renderer.clone();
            std::thread::spawn(move || renderer.render("<SCT:BOLD>hi<!SCT:BOLD>"))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            r#"<span style="font-weight:bold">hi</span>"#
        );
    }
}
