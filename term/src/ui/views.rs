//! View implementations for the screens of the UI.

pub mod tours;
pub mod traits;
