pub mod audio;
pub mod image;
pub mod pdf;
