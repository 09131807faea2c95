use tracing::{debug, info, warn};

use crate::reader::buffer::AudioData;
use crate::reader::config::ReaderConfig;
use crate::reader::decoder::{symphonia_decoder::SymphoniaDecoder, AudioDecoder};
use crate::reader::error::{ReadError, Result};
use crate::reader::locator::ResourceLocator;

/// Upper bound on samples reserved up front from a header's frame count.
const MAX_RESERVE_SAMPLES: u64 = 1 << 20;

/// Loads an audio resource and holds its decoded samples.
///
/// The reader is either empty or holds the result of its last successful
/// read. A failed read always leaves it empty, so a caller can never see the
/// previous file's samples and mistake them for the new one's.
#[derive(Debug, Default)]
pub struct AudioReader {
    config: ReaderConfig,
    data: Option<AudioData>,
}

impl AudioReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config, data: None }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Decodes the whole resource and replaces the current contents.
    ///
    /// Returns the number of frames decoded. Zero is a valid result for an
    /// empty file; failures are reported through [`ReadError`].
    pub fn read<L: Into<ResourceLocator>>(&mut self, resource: L) -> Result<usize> {
        let locator = resource.into();
        self.data = None;

        debug!("Reading {}", locator);
        let decoder = SymphoniaDecoder::open(&locator, &self.config)?;
        if let Some(secs) = decoder.duration() {
            debug!("{} declares {:.3} s of audio", locator, secs);
        }
        let frames = self.load_from(decoder)?;

        info!(
            "Read {}: {} frames, {} Hz, {} channels",
            locator,
            frames,
            self.sample_rate(),
            self.channels()
        );
        Ok(frames)
    }

    /// Drains an opened decoder into the reader.
    ///
    /// Same replacement and failure semantics as [`read`](Self::read).
    pub fn load_from<D: AudioDecoder>(&mut self, mut decoder: D) -> Result<usize> {
        self.data = None;

        let mut samples = Vec::new();
        if let Some(frames) = decoder.expected_frames() {
            let channels = decoder.channels().max(1) as u64;
            // Declared count comes from the file header; cap the reservation.
            let hint = frames.saturating_mul(channels).min(MAX_RESERVE_SAMPLES) as usize;
            samples.reserve(hint);
        }

        while let Some(block) = decoder.decode_next()? {
            samples.extend_from_slice(&block);
        }

        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        if channels == 0 {
            return Err(ReadError::UnsupportedFormat(
                "channel count could not be determined".to_string(),
            ));
        }

        let audio = AudioData::from_interleaved(samples, channels, sample_rate)?;
        let decoded = audio.num_frames();

        if let Some(expected) = decoder
            .expected_frames()
            .filter(|_| decoder.frame_count_is_exact())
        {
            if (decoded as u64) < expected {
                if self.config.strict {
                    return Err(ReadError::DecodeFailure(format!(
                        "stream truncated: decoded {} of {} frames",
                        decoded, expected
                    )));
                }
                warn!("Stream truncated: decoded {} of {} frames", decoded, expected);
            }
        }

        self.data = Some(audio);
        Ok(decoded)
    }

    /// Sample rate of the loaded audio in Hz, 0 when empty.
    pub fn sample_rate(&self) -> u32 {
        self.data.as_ref().map_or(0, AudioData::sample_rate)
    }

    /// Number of frames loaded, 0 when empty.
    pub fn num_frames(&self) -> usize {
        self.data.as_ref().map_or(0, AudioData::num_frames)
    }

    pub fn channels(&self) -> u16 {
        self.data.as_ref().map_or(0, AudioData::channels)
    }

    /// Interleaved samples of the loaded audio.
    pub fn data(&self) -> Option<&[f32]> {
        self.data.as_ref().map(AudioData::samples)
    }

    pub fn audio(&self) -> Option<&AudioData> {
        self.data.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    /// Releases the loaded samples.
    pub fn clear(&mut self) {
        self.data = None;
    }

    /// Moves the loaded samples out, leaving the reader empty.
    pub fn take(&mut self) -> Option<AudioData> {
        self.data.take()
    }
}
