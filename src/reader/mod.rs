pub mod audio_reader;
pub mod buffer;
pub mod config;
pub mod decoder;
pub mod error;
pub mod locator;
