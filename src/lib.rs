pub mod assets;
pub mod config;
pub mod gui;
pub mod model;
