pub mod canvas;
pub mod error;
pub mod matrix;
pub mod metadata;
