//! Expression module: grouping trees and their enumeration

mod ast;
mod build;
mod display;
mod eval;

pub use ast::Expression;
pub use build::enumerate_groupings;

#[cfg(test)]
mod tests;
