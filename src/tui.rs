//! Terminal frontend: app state, input controller, and drawing.

pub mod app;
pub mod controller;
pub mod ui;
