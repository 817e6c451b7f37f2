/*!
 * HTML rendering of tag markup.
 *
 * - `fragments`: the fixed HTML emitted per command
 * - `renderer`: close policies and the token-to-HTML walk
 */

pub mod fragments;
pub mod renderer;

pub use self::fragments::{open_fragment, CLOSE_FRAGMENT};
pub use self::renderer::{translate_tags, CloseMode, RenderOptions, Renderer};
