/*!
 * Builders for tag markup.
 *
 * Programs that produce text for the renderer (test runners, report
 * generators) use these helpers instead of writing `<SCT:...>` by hand.
 * The output is raw markup: it still has to go through
 * [`crate::escape::escape`] or a [`crate::render::Renderer`].
 */

use crate::tags::{Command, TAG_PREFIX};

/// Raw tag markup for a command
pub struct Tag;

impl Tag {
    fn body(command: Command, args: &[&str]) -> String {
        let mut body = format!("{}:{}", TAG_PREFIX, command.name());
        for arg in args {
            body.push(':');
            body.push_str(arg);
        }
        body
    }

    /// `<SCT:CMD:args>`
    pub fn open(command: Command, args: &[&str]) -> String {
        format!("<{}>", Self::body(command, args))
    }

    /// `<!SCT:CMD:args>`
    pub fn close(command: Command, args: &[&str]) -> String {
        format!("<!{}>", Self::body(command, args))
    }

    /// Open tag, text, close tag
    pub fn wrap(command: Command, args: &[&str], text: &str) -> String {
        format!(
            "{}{}{}",
            Self::open(command, args),
            text,
            Self::close(command, args)
        )
    }
}

/// Bold text
pub fn bold(text: &str) -> String {
    Tag::wrap(Command::Bold, &[], text)
}

/// Colored text. The color is written upper-case and lowered again on render.
pub fn color(text: &str, color: &str) -> String {
    Tag::wrap(Command::Color, &[&color.to_uppercase()], text)
}

pub fn red(text: &str) -> String {
    color(text, "red")
}

pub fn green(text: &str) -> String {
    color(text, "green")
}

pub fn blue(text: &str) -> String {
    color(text, "blue")
}

/// Header block. Block commands are self-contained, so only an open tag is written.
pub fn header(title: &str) -> String {
    Tag::open(Command::Header, &[title])
}

pub fn section(title: &str) -> String {
    Tag::open(Command::Section, &[title])
}

pub fn subsection(title: &str) -> String {
    Tag::open(Command::Subsection, &[title])
}
