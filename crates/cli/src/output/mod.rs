//! Output formatting for check results.

pub mod json;
pub mod text;
