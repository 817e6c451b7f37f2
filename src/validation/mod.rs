/*!
 * Validation module for authored markup.
 *
 * - `markup`: Reports unknown commands and unbalanced or misplaced closes
 */

pub mod markup;

// Re-export main types
pub use markup::{
    check_markup, MarkupIssue, MarkupValidationResult, MarkupValidator, MarkupValidatorConfig,
};
