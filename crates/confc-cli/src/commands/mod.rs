//! Command implementations

mod create;
mod generate;

pub use create::run_create;
pub use generate::run_generate;
