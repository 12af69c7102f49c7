//! Terminal UI components, views, and colors.

pub mod app;
pub mod colors;
pub mod components;
pub mod views;
