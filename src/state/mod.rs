//! Application state module

mod app_state;
mod forms;
mod records;
mod route;

pub use app_state::*;
pub use forms::*;
pub use records::*;
pub use route::*;
