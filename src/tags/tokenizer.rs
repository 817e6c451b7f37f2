/*!
 * Tokenizer for tag tokens embedded in escaped text.
 *
 * Authors write tags as `<SCT:COLOR:RED>` / `<!SCT:COLOR>`. After escaping
 * these read `&lt;SCT:COLOR:RED&gt;` / `&lt;!SCT:COLOR&gt;`, and that escaped
 * form is what gets recognized here. A single scan splits the text into plain
 * text segments and tag tokens.
 */

use std::ops::Range;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::command::Command;
use crate::escape::EscapedText;

/// Prefix that marks a bracketed run of text as a tag
pub const TAG_PREFIX: &str = "SCT";

/// Escaped tag token. The body is matched lazily so a token ends at the first
/// following `&gt;`, and never spans a line terminator (`\n`, `\r`, U+2028, U+2029).
static TAG_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"&lt;(!?){}:([^\r\n\x{{2028}}\x{{2029}}]*?)&gt;",
        TAG_PREFIX
    ))
    .expect("Invalid tag token regex")
});

/// Whether a tag opens or closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
}

/// A tag token found in escaped text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken<'a> {
    /// Open or close
    pub kind: TagKind,
    /// Command name as written, before the first colon
    pub name: &'a str,
    /// Command resolved from `name`, if it is part of the vocabulary and its
    /// argument is acceptable
    pub command: Option<Command>,
    /// Everything after the first colon, empty when there is none
    pub argument: &'a str,
    /// Byte range of the whole token in the escaped text
    pub span: Range<usize>,
}

impl<'a> TagToken<'a> {
    pub fn is_open(&self) -> bool {
        self.kind == TagKind::Open
    }

    pub fn is_close(&self) -> bool {
        self.kind == TagKind::Close
    }
}

/// One piece of tokenized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any tag token, passed through unchanged
    Text(&'a str),
    /// A tag token
    Tag(TagToken<'a>),
}

/// Split a token body into command name and argument at the first colon
fn split_body(body: &str) -> (&str, &str) {
    body.split_once(':').unwrap_or((body, ""))
}

/// Whether `argument` only uses characters allowed in a `COLOR` value.
///
/// The value lands inside a `style` attribute, so `;` and friends would let
/// an author add arbitrary CSS declarations.
pub fn is_valid_color_argument(argument: &str) -> bool {
    argument
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | ' '))
}

/// Resolve the command of a token. An open `COLOR` with an argument outside
/// the allowed character set resolves to nothing and is dropped like an
/// unknown command.
fn resolve_command(kind: TagKind, name: &str, argument: &str) -> Option<Command> {
    match Command::parse(name) {
        Some(Command::Color) if kind == TagKind::Open && !is_valid_color_argument(argument) => {
            debug!("Rejecting COLOR argument '{}'", argument);
            None
        }
        command => command,
    }
}

/// Iterate over the tag tokens of an escaped text, in order
pub fn tag_tokens(escaped: &EscapedText) -> impl Iterator<Item = TagToken<'_>> {
    TAG_TOKEN_REGEX.captures_iter(escaped.as_str()).filter_map(|caps| {
        let whole = caps.get(0)?;
        let bang = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());
        let (name, argument) = split_body(body);
        let kind = if bang.is_empty() { TagKind::Open } else { TagKind::Close };

        Some(TagToken {
            kind,
            name,
            command: resolve_command(kind, name, argument),
            argument,
            span: whole.range(),
        })
    })
}

/// Split escaped text into text segments and tag tokens.
///
/// Concatenating the text segments with the original token spans gives back
/// the input. Empty text segments are never produced.
pub fn tokenize(escaped: &EscapedText) -> Vec<Segment<'_>> {
    let text = escaped.as_str();
    let mut segments = Vec::new();
    let mut last_end = 0;

    for token in tag_tokens(escaped) {
        if token.span.start > last_end {
            segments.push(Segment::Text(&text[last_end..token.span.start]));
        }
        last_end = token.span.end;
        segments.push(Segment::Tag(token));
    }

    if last_end < text.len() {
        segments.push(Segment::Text(&text[last_end..]));
    }

    segments
}
