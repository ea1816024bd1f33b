#![no_std]

extern crate alloc;

pub mod canvas;
pub mod config;
pub mod ui;

pub use canvas::{Canvas, Letterbox};
pub use config::GuiConfig;
