/*!
 * Conversion of ANSI SGR escape sequences into tag markup.
 *
 * Output captured from terminal programs carries styling as `ESC[...m`
 * sequences. Bold, red and green are mapped onto the tag vocabulary, a reset
 * closes everything opened so far, and every other style code is removed.
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::markup::Tag;
use crate::tags::Command;

/// SGR sequence: `ESC [ codes m`, codes separated by `;`
static SGR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[([0-9;]*)m").expect("Invalid SGR regex")
});

/// Styles that have a tag counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnsiStyle {
    Bold,
    Red,
    Green,
}

impl AnsiStyle {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Bold),
            "31" => Some(Self::Red),
            "32" => Some(Self::Green),
            _ => None,
        }
    }

    fn tag(&self) -> (Command, &'static [&'static str]) {
        match self {
            Self::Bold => (Command::Bold, &[]),
            Self::Red => (Command::Color, &["RED"]),
            Self::Green => (Command::Color, &["GREEN"]),
        }
    }

    fn open_tag(&self) -> String {
        let (command, args) = self.tag();
        Tag::open(command, args)
    }

    fn close_tag(&self) -> String {
        let (command, args) = self.tag();
        Tag::close(command, args)
    }
}

/// Close every open style, innermost first
fn close_all(open: &mut Vec<AnsiStyle>, out: &mut String) {
    while let Some(style) = open.pop() {
        out.push_str(&style.close_tag());
    }
}

/// Rewrite SGR sequences in `text` as tag markup.
///
/// Styles still open at the end of the text are closed there.
pub fn ansi_to_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open: Vec<AnsiStyle> = Vec::new();
    let mut last_end = 0;

    for caps in SGR_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&text[last_end..whole.start()]);
        last_end = whole.end();

        let codes = caps.get(1).map_or("", |m| m.as_str());
        if codes.is_empty() {
            close_all(&mut open, &mut out);
            continue;
        }

        let mut params = codes.split(';');
        while let Some(code) = params.next() {
            match code {
                "0" | "" => close_all(&mut open, &mut out),
                // Extended colors carry their value in the following parameters
                "38" | "48" => match params.next() {
                    Some("5") => {
                        params.next();
                    }
                    Some("2") => {
                        params.nth(2);
                    }
                    other => trace!("Dropping extended color {} with mode {:?}", code, other),
                },
                _ => match AnsiStyle::from_code(code) {
                    Some(style) => {
                        open.push(style);
                        out.push_str(&style.open_tag());
                    }
                    None => trace!("Dropping unsupported SGR code {}", code),
                },
            }
        }
    }

    out.push_str(&text[last_end..]);
    close_all(&mut open, &mut out);
    out
}

/// Convert ANSI styling to markup, then escape and render it
pub fn render_ansi(text: &str) -> String {
    crate::escape::escape(&ansi_to_markup(text))
}
