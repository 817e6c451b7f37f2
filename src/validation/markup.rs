/*!
 * Structural validation of tag markup.
 *
 * Rendering never fails, so problems in authored markup would otherwise go
 * unnoticed: unknown commands vanish and stray closes end up as `</span>`.
 * This validator walks the same token stream as the renderer and reports
 * them without touching the output.
 */

use log::debug;

use crate::escape::{escape_html, EscapedText};
use crate::tags::{tag_tokens, Command, TagKind};

/// Types of markup issues
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupIssue {
    /// Tag whose command is not in the vocabulary, dropped on render
    UnknownCommand {
        name: String,
        offset: usize,
    },
    /// Known command whose argument is rejected, dropped on render
    InvalidArgument {
        command: Command,
        argument: String,
        offset: usize,
    },
    /// Close of a self-contained block command
    BlockClose {
        command: Command,
        offset: usize,
    },
    /// Close of a span command that is not open
    UnbalancedClose {
        name: String,
        offset: usize,
    },
    /// Close of an open span while spans opened after it are still open
    MisnestedClose {
        command: Command,
        offset: usize,
    },
    /// Span still open at the end of the text
    UnclosedSpan {
        command: Command,
        offset: usize,
    },
}

impl MarkupIssue {
    /// Byte offset of the offending token in the escaped text
    pub fn offset(&self) -> usize {
        match self {
            MarkupIssue::UnknownCommand { offset, .. }
            | MarkupIssue::InvalidArgument { offset, .. }
            | MarkupIssue::BlockClose { offset, .. }
            | MarkupIssue::UnbalancedClose { offset, .. }
            | MarkupIssue::MisnestedClose { offset, .. }
            | MarkupIssue::UnclosedSpan { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for MarkupIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupIssue::UnknownCommand { name, offset } => {
                write!(f, "Unknown tag command '{}' at byte {}", name, offset)
            }
            MarkupIssue::InvalidArgument {
                command,
                argument,
                offset,
            } => {
                write!(
                    f,
                    "Invalid argument '{}' for {} at byte {}",
                    argument, command, offset
                )
            }
            MarkupIssue::BlockClose { command, offset } => {
                write!(
                    f,
                    "Closing tag for block command {} at byte {} has nothing to close",
                    command, offset
                )
            }
            MarkupIssue::UnbalancedClose { name, offset } => {
                write!(f, "Closing tag '{}' at byte {} has no matching open tag", name, offset)
            }
            MarkupIssue::MisnestedClose { command, offset } => {
                write!(
                    f,
                    "Closing tag for {} at byte {} crosses spans opened inside it",
                    command, offset
                )
            }
            MarkupIssue::UnclosedSpan { command, offset } => {
                write!(f, "{} tag opened at byte {} is never closed", command, offset)
            }
        }
    }
}

/// Result of validating one text
#[derive(Debug, Clone)]
pub struct MarkupValidationResult {
    /// Whether validation passed
    pub passed: bool,
    /// Issues found, in text order
    pub issues: Vec<MarkupIssue>,
}

impl MarkupValidationResult {
    fn from_issues(mut issues: Vec<MarkupIssue>) -> Self {
        issues.sort_by_key(|issue| issue.offset());
        Self {
            passed: issues.is_empty(),
            issues,
        }
    }
}

/// Configuration for markup validation
#[derive(Debug, Clone)]
pub struct MarkupValidatorConfig {
    /// Report tags with unknown commands or rejected arguments
    pub check_unknown_commands: bool,
    /// Report closes of block commands
    pub check_block_closes: bool,
    /// Report unmatched, misnested and unclosed spans
    pub check_span_balance: bool,
}

impl Default for MarkupValidatorConfig {
    fn default() -> Self {
        Self {
            check_unknown_commands: true,
            check_block_closes: true,
            check_span_balance: true,
        }
    }
}

/// Validator for tag markup
#[derive(Debug, Clone, Default)]
pub struct MarkupValidator {
    config: MarkupValidatorConfig,
}

impl MarkupValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: MarkupValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate the tags of escaped text
    pub fn validate(&self, escaped: &EscapedText) -> MarkupValidationResult {
        let mut issues = Vec::new();
        let mut open_spans: Vec<(Command, usize)> = Vec::new();

        for token in tag_tokens(escaped) {
            let offset = token.span.start;

            let Some(command) = token.command else {
                if self.config.check_unknown_commands {
                    issues.push(match Command::parse(token.name) {
                        Some(command) => MarkupIssue::InvalidArgument {
                            command,
                            argument: token.argument.to_string(),
                            offset,
                        },
                        None => MarkupIssue::UnknownCommand {
                            name: token.name.to_string(),
                            offset,
                        },
                    });
                }
                continue;
            };

            match token.kind {
                TagKind::Open if command.is_span() => open_spans.push((command, offset)),
                TagKind::Open => {}
                TagKind::Close if command.is_block() => {
                    if self.config.check_block_closes {
                        issues.push(MarkupIssue::BlockClose { command, offset });
                    }
                }
                TagKind::Close => match open_spans.iter().rposition(|(c, _)| *c == command) {
                    Some(index) => {
                        if index + 1 != open_spans.len() && self.config.check_span_balance {
                            issues.push(MarkupIssue::MisnestedClose { command, offset });
                        }
                        open_spans.remove(index);
                    }
                    None => {
                        if self.config.check_span_balance {
                            issues.push(MarkupIssue::UnbalancedClose {
                                name: token.name.to_string(),
                                offset,
                            });
                        }
                    }
                },
            }
        }

        if self.config.check_span_balance {
            issues.extend(
                open_spans
                    .into_iter()
                    .map(|(command, offset)| MarkupIssue::UnclosedSpan { command, offset }),
            );
        }

        debug!("Markup validation: {} issue(s)", issues.len());

        MarkupValidationResult::from_issues(issues)
    }

    /// Count the tag tokens in escaped text
    pub fn count_tags(escaped: &EscapedText) -> usize {
        tag_tokens(escaped).count()
    }
}

/// Escape raw text and validate its markup with the default configuration
pub fn check_markup(raw: &str) -> MarkupValidationResult {
    MarkupValidator::new().validate(&escape_html(raw))
}
