//! Message passing between the renderer and the fetch process.

pub mod channel;
pub mod fetch;
pub mod message;
pub mod renderer;
pub mod traits;
