//! Long running processes: the ui renderer loop and the fetch worker.

pub mod fetch;
pub mod renderer;
