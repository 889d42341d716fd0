pub mod commands;
pub mod constants;
pub mod render;
