/*!
 * Tag syntax: the command vocabulary and the tokenizer that finds tag tokens
 * in escaped text.
 *
 * - `command`: the fixed set of commands
 * - `tokenizer`: single-scan split of escaped text into segments
 */

pub mod command;
pub mod tokenizer;

pub use self::command::Command;
pub use self::tokenizer::{tag_tokens, tokenize, Segment, TagKind, TagToken, TAG_PREFIX};
