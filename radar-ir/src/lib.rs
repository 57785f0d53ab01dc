pub mod join;
pub mod labels;
pub mod types;

pub use join::{JoinError, build_output_table, resolve_selector};
pub use labels::{DataType, function_label};
pub use types::*;
