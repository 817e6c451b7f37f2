/*!
 * # sctmark - safe rendering of SCT tag markup
 *
 * A Rust library that turns plain text carrying a small tag syntax into HTML
 * that is safe to insert into a page.
 *
 * ## Features
 *
 * - Unconditional escaping of `&`, `"`, `<` and `>` in author text
 * - Translation of a fixed set of tag commands into trusted HTML:
 *   - `COLOR`, `BOLD` (inline spans)
 *   - `HEADER`, `SECTION`, `SUBSECTION` (block dividers)
 * - Legacy and balanced handling of closing tags
 * - Builders that produce tag markup from code
 * - Conversion of ANSI terminal styling into tag markup
 * - Structural validation of markup
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `escape`: HTML escaping and the `EscapedText` type
 * - `tags`: Command vocabulary and tokenizer
 * - `render`: Fragments and the renderer:
 *   - `render::fragments`: HTML emitted per command
 *   - `render::renderer`: Close policies
 * - `markup`: Tag markup builders
 * - `ansi`: ANSI SGR to markup conversion
 * - `validation`: Markup validation
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the application
 *
 * Text must pass through `escape` before tags are translated. The translator
 * only accepts `EscapedText`, so that order cannot be skipped.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod ansi;
pub mod app_config;
pub mod errors;
pub mod escape;
pub mod markup;
pub mod render;
pub mod tags;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use escape::{escape, escape_html, EscapedText};
pub use render::{translate_tags, CloseMode, RenderOptions, Renderer};
pub use tags::{tokenize, Command, Segment, TagKind, TagToken};
pub use validation::{check_markup, MarkupIssue, MarkupValidator};
pub use errors::{AppError, ConfigError};
