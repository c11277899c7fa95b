//! Application state module

mod forms;
mod page;

pub use forms::*;
pub use page::*;
