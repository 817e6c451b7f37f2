/*!
 * Tag translation: maps the token stream of escaped text to HTML.
 *
 * Two close policies exist. `Legacy` turns every closing tag into `</span>`
 * whatever it closes, which is what existing pages expect. `Balanced` keeps a
 * stack of open spans and only emits `</span>` for closes that match one.
 * Closing a span that is not the innermost one closes the spans above it and
 * reopens them afterwards, so the HTML stays properly nested.
 */

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::fragments::{open_fragment, CLOSE_FRAGMENT};
use crate::escape::{escape_html, EscapedText};
use crate::tags::{tokenize, Command, Segment, TagKind, TagToken};

/// How closing tags are rendered
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CloseMode {
    /// Every closing tag renders as `</span>`
    #[default]
    Legacy,
    /// Closing tags only render when they end an open span
    Balanced,
}

impl std::fmt::Display for CloseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Balanced => write!(f, "balanced"),
        }
    }
}

impl std::str::FromStr for CloseMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "balanced" => Ok(Self::Balanced),
            _ => Err(anyhow::anyhow!("Invalid close mode: {}", s)),
        }
    }
}

/// Options for a [`Renderer`]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Close tag policy
    #[serde(default)]
    pub close_mode: CloseMode,
}

/// Renders tag markup into HTML
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Create a renderer using the given close mode
    pub fn with_close_mode(close_mode: CloseMode) -> Self {
        Self::new(RenderOptions { close_mode })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Escape raw text and translate its tags
    pub fn render(&self, raw: &str) -> String {
        self.translate(&escape_html(raw))
    }

    /// Translate the tags of already escaped text
    pub fn translate(&self, escaped: &EscapedText) -> String {
        let mut out = String::with_capacity(escaped.len());
        let mut open_spans: Vec<OpenSpan> = Vec::new();

        for segment in tokenize(escaped) {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Tag(token) => match self.options.close_mode {
                    CloseMode::Legacy => Self::render_legacy(&token, &mut out),
                    CloseMode::Balanced => Self::render_balanced(&token, &mut open_spans, &mut out),
                },
            }
        }

        if !open_spans.is_empty() {
            debug!("Closing {} span(s) left open at end of text", open_spans.len());
            for _ in open_spans.drain(..) {
                out.push_str(CLOSE_FRAGMENT);
            }
        }

        out
    }

    fn render_legacy(token: &TagToken<'_>, out: &mut String) {
        match (token.kind, token.command) {
            (TagKind::Close, command) => {
                if let Some(command) = command.filter(|c| c.is_block()) {
                    warn!(
                        "Closing {} tag at byte {} emits </span> for a self-contained <div>",
                        command, token.span.start
                    );
                }
                out.push_str(CLOSE_FRAGMENT);
            }
            (TagKind::Open, Some(command)) => out.push_str(&open_fragment(command, token.argument)),
            (TagKind::Open, None) => {
                debug!("Dropping unknown tag command '{}'", token.name);
            }
        }
    }

    fn render_balanced(token: &TagToken<'_>, open_spans: &mut Vec<OpenSpan>, out: &mut String) {
        let Some(command) = token.command else {
            debug!("Dropping unknown tag command '{}'", token.name);
            return;
        };

        match token.kind {
            TagKind::Open => {
                let fragment = open_fragment(command, token.argument);
                out.push_str(&fragment);
                if command.is_span() {
                    open_spans.push(OpenSpan { command, fragment });
                }
            }
            TagKind::Close if command.is_block() => {
                warn!(
                    "Ignoring close of self-contained {} tag at byte {}",
                    command, token.span.start
                );
            }
            TagKind::Close => match open_spans.iter().rposition(|s| s.command == command) {
                Some(index) => {
                    let reopened = open_spans.len() - index - 1;
                    if reopened > 0 {
                        debug!(
                            "Close of {} at byte {} crosses {} inner span(s), reopening them",
                            command, token.span.start, reopened
                        );
                    }
                    for _ in index..open_spans.len() {
                        out.push_str(CLOSE_FRAGMENT);
                    }
                    open_spans.remove(index);
                    for span in &open_spans[index..] {
                        out.push_str(&span.fragment);
                    }
                }
                None => {
                    warn!(
                        "Ignoring close of {} at byte {} with no matching open tag",
                        command, token.span.start
                    );
                }
            },
        }
    }
}

/// Span opened in balanced mode, kept with its fragment so it can be reopened
#[derive(Debug)]
struct OpenSpan {
    command: Command,
    fragment: String,
}

/// Translate the tags of escaped text with the legacy close behavior
pub fn translate_tags(escaped: &EscapedText) -> String {
    Renderer::default().translate(escaped)
}
