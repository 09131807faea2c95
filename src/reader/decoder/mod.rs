pub mod symphonia_decoder;

use crate::reader::error::Result;

pub trait AudioDecoder {
    /// Decodes the next block of audio data and returns it as interleaved f32 samples.
    /// Returns Ok(None) when the end of the stream is reached.
    fn decode_next(&mut self) -> Result<Option<Vec<f32>>>;

    /// Returns the sample rate of the audio.
    fn sample_rate(&self) -> u32;

    /// Returns the number of channels, or 0 if not known yet.
    fn channels(&self) -> u16;

    /// Returns the number of frames the container declares, if any.
    fn expected_frames(&self) -> Option<u64>;

    /// Whether `expected_frames` is an exact count rather than an estimate.
    fn frame_count_is_exact(&self) -> bool {
        true
    }

    /// Returns the total duration of the audio in seconds, if known.
    fn duration(&self) -> Option<f64> {
        let rate = self.sample_rate();
        self.expected_frames()
            .filter(|_| rate > 0)
            .map(|frames| frames as f64 / rate as f64)
    }
}
