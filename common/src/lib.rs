pub mod config;
pub mod image;
pub mod theme;
