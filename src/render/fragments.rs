/*!
 * Trusted HTML fragments emitted for tag tokens.
 *
 * The argument is embedded without further escaping. That is only sound
 * because it comes out of [`crate::escape::EscapedText`], where `<`, `>`,
 * `"` and `&` are already entities.
 */

use crate::tags::Command;

/// Fragment emitted for a closing tag
pub const CLOSE_FRAGMENT: &str = "</span>";

/// Fragment for an opening tag of `command`
pub fn open_fragment(command: Command, argument: &str) -> String {
    match command {
        Command::Color => format!(r#"<span style="color:{}">"#, argument.to_lowercase()),
        Command::Bold => r#"<span style="font-weight:bold">"#.to_string(),
        Command::Header => format!(
            r#"<div class="sct_header"><span>⇙ {} ⇗</span></div>"#,
            argument
        ),
        Command::Section => format!(
            r#"<div class="sct_separator sct_section"><span>⇲ {} ⇲</span></div>"#,
            argument
        ),
        Command::Subsection => format!(
            r#"<div class="sct_separator sct_subsection"><span>↓ {} ↓</span></div>"#,
            argument
        ),
    }
}
