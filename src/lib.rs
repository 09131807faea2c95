//! Decode an audio file into an owned buffer of f32 samples.
//!
//! ```no_run
//! use audio_reader::AudioReader;
//!
//! let mut reader = AudioReader::new();
//! let frames = reader.read("clip.wav")?;
//! println!("{} frames at {} Hz", frames, reader.sample_rate());
//! # Ok::<(), audio_reader::ReadError>(())
//! ```

pub mod reader;

pub use reader::audio_reader::AudioReader;
pub use reader::buffer::AudioData;
pub use reader::config::ReaderConfig;
pub use reader::decoder::{symphonia_decoder::SymphoniaDecoder, AudioDecoder};
pub use reader::error::{ConfigError, ReadError};
pub use reader::locator::ResourceLocator;
