/*!
 * The fixed command vocabulary of the tag syntax.
 */

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

/// A command recognized inside a tag token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Colored span, argument is the CSS color
    Color,
    /// Bold span
    Bold,
    /// Header block, argument is the title
    Header,
    /// Section divider, argument is the title
    Section,
    /// Subsection divider, argument is the title
    Subsection,
}

impl Command {
    /// All commands, in declaration order
    pub const ALL: [Command; 5] = [
        Command::Color,
        Command::Bold,
        Command::Header,
        Command::Section,
        Command::Subsection,
    ];

    /// Resolve a command name. Matching is exact and case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "COLOR" => Some(Self::Color),
            "BOLD" => Some(Self::Bold),
            "HEADER" => Some(Self::Header),
            "SECTION" => Some(Self::Section),
            "SUBSECTION" => Some(Self::Subsection),
            _ => None,
        }
    }

    // @returns: Name as written in markup
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "COLOR",
            Self::Bold => "BOLD",
            Self::Header => "HEADER",
            Self::Section => "SECTION",
            Self::Subsection => "SUBSECTION",
        }
    }

    /// Whether the open fragment leaves a `<span>` open that a closing tag ends.
    ///
    /// Block commands render a complete `<div>` on their own.
    pub fn is_span(&self) -> bool {
        matches!(self, Self::Color | Self::Bold)
    }

    pub fn is_block(&self) -> bool {
        !self.is_span()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::parse(s).ok_or_else(|| anyhow!("Unknown tag command: {}", s))
    }
}
