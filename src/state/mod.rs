//! Application state module

mod banner_state;
mod forms;

pub use banner_state::*;
pub use forms::*;
