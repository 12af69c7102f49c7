//! Reusable UI components.

pub mod card;
pub mod footer;
pub mod header;
