use crate::reader::error::{ReadError, Result};

/// Decoded audio owned by a reader.
///
/// Samples are interleaved frame by frame (`[L0, R0, L1, R1, ...]`), so the
/// buffer length is always a whole number of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioData {
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl AudioData {
    /// Wraps interleaved samples.
    /// Fails if there are no channels or the length is not a whole number of frames.
    pub fn from_interleaved(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(ReadError::DecodeFailure("decoded audio has no channels".to_string()));
        }
        if samples.len() % channels as usize != 0 {
            return Err(ReadError::DecodeFailure(format!(
                "{} samples is not a whole number of {}-channel frames",
                samples.len(),
                channels
            )));
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Returns all samples, interleaved.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the number of frames in the buffer.
    pub fn num_frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the length of the audio in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate > 0 {
            self.num_frames() as f64 / self.sample_rate as f64
        } else {
            0.0
        }
    }

    /// Returns the samples of one frame, one per channel.
    pub fn frame(&self, index: usize) -> Option<&[f32]> {
        let width = self.channels as usize;
        let start = index.checked_mul(width)?;
        self.samples.get(start..start.checked_add(width)?)
    }

    pub fn frames(&self) -> std::slice::ChunksExact<'_, f32> {
        self.samples.chunks_exact(self.channels as usize)
    }

    /// Iterates over the samples of a single channel.
    /// Returns None if the channel does not exist.
    pub fn channel(&self, channel: u16) -> Option<impl Iterator<Item = f32> + '_> {
        if channel >= self.channels {
            return None;
        }
        Some(
            self.samples
                .iter()
                .skip(channel as usize)
                .step_by(self.channels as usize)
                .copied(),
        )
    }

    /// Averages all channels into one sample per frame.
    pub fn to_mono(&self) -> Vec<f32> {
        if self.channels == 1 {
            return self.samples.clone();
        }
        let scale = 1.0 / self.channels as f32;
        self.frames()
            .map(|frame| frame.iter().sum::<f32>() * scale)
            .collect()
    }

    /// Returns the largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
    }
}
