//! Utils module split into submodules

mod counting;
mod errors;
mod format;
mod operand;
mod validation;

pub use counting::catalan;
pub use errors::UtilsError;
pub use format::format_result_set;
pub use operand::parse_operand;
pub use validation::{is_valid_expression, validate_expression};
