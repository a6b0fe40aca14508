pub mod config;
pub mod scale;
pub mod scene;
pub mod sort;
pub mod summary;
