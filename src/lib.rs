pub mod app;
pub mod color;
pub mod physics;
pub mod render;
pub mod state;
pub mod ui;
