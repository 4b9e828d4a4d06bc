pub mod document;
pub mod loader;
pub mod render;
