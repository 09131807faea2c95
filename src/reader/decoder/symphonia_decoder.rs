use std::fs::File;

use symphonia::core::audio::{SampleBuffer, SignalSpec};
use symphonia::core::codecs::{
    CodecType, Decoder, DecoderOptions, CODEC_TYPE_MP1, CODEC_TYPE_MP2, CODEC_TYPE_MP3,
    CODEC_TYPE_NULL,
};
use symphonia::core::errors::Error;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

use crate::reader::config::ReaderConfig;
use crate::reader::decoder::AudioDecoder;
use crate::reader::error::{ReadError, Result};
use crate::reader::locator::ResourceLocator;

/// Decodes a local file through symphonia's default format and codec registries.
pub struct SymphoniaDecoder {
    reader: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    sample_rate: u32,
    channels: u16,
    expected_frames: Option<u64>,
    exact_frames: bool,
    strict: bool,
    sample_buf: Option<SampleBuffer<f32>>,
    buf_frames: u64,
    buf_spec: Option<SignalSpec>,
}

impl SymphoniaDecoder {
    pub fn open(locator: &ResourceLocator, config: &ReaderConfig) -> Result<Self> {
        let path = locator
            .path()
            .ok_or_else(|| ReadError::unavailable(locator, "only local files can be read"))?;
        if path.is_dir() {
            return Err(ReadError::unavailable(locator, "is a directory"));
        }
        let file = File::open(path).map_err(|e| ReadError::unavailable(locator, e))?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = locator.extension() {
            hint.with_extension(&ext);
        }

        let meta_opts = MetadataOptions::default();
        let fmt_opts = FormatOptions {
            enable_gapless: config.enable_gapless,
            ..Default::default()
        };
        let dec_opts = DecoderOptions {
            verify: config.verify,
            ..Default::default()
        };

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &fmt_opts, &meta_opts)
            .map_err(|e| match e {
                Error::IoError(ref err) if err.kind() != std::io::ErrorKind::UnexpectedEof => {
                    ReadError::unavailable(locator, err)
                }
                other => ReadError::UnsupportedFormat(format!("{}: {}", locator, other)),
            })?;

        let reader = probed.format;

        let track = reader
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| {
                ReadError::UnsupportedFormat(format!("{}: no supported audio tracks found", locator))
            })?;

        let track_id = track.id;
        let params = &track.codec_params;
        let sample_rate = params.sample_rate.ok_or_else(|| {
            ReadError::UnsupportedFormat(format!("{}: sample rate not declared", locator))
        })?;
        let channels = params.channels.map(|c| c.count() as u16).unwrap_or(0);
        let expected_frames = params.n_frames;
        let exact_frames = !is_mpeg_audio(params.codec);

        let decoder = symphonia::default::get_codecs()
            .make(params, &dec_opts)
            .map_err(|e| ReadError::UnsupportedFormat(format!("{}: {}", locator, e)))?;

        debug!(
            "Opened {}: track={}, sample_rate={}, channels={}, frames={:?} (exact={})",
            locator, track_id, sample_rate, channels, expected_frames, exact_frames
        );

        Ok(Self {
            reader,
            decoder,
            track_id,
            sample_rate,
            channels,
            expected_frames,
            exact_frames,
            strict: config.strict,
            sample_buf: None,
            buf_frames: 0,
            buf_spec: None,
        })
    }
}

impl AudioDecoder for SymphoniaDecoder {
    fn decode_next(&mut self) -> Result<Option<Vec<f32>>> {
        loop {
            let packet = match self.reader.next_packet() {
                Ok(packet) => packet,
                Err(Error::IoError(ref err)) if err.kind() == std::io::ErrorKind::UnexpectedEof => {
                    return Ok(None)
                }
                Err(Error::ResetRequired) => {
                    return Err(ReadError::DecodeFailure(
                        "stream parameters changed mid-decode".to_string(),
                    ))
                }
                Err(err) => return Err(ReadError::DecodeFailure(err.to_string())),
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            match self.decoder.decode(&packet) {
                Ok(audio_buf) => {
                    let spec = *audio_buf.spec();
                    let frames = audio_buf.capacity() as u64;

                    if self.buf_spec != Some(spec) || frames > self.buf_frames {
                        self.sample_buf = None;
                        self.buf_frames = frames;
                        self.buf_spec = Some(spec);
                    }
                    self.sample_rate = spec.rate;
                    self.channels = spec.channels.count() as u16;

                    let sample_buf = self
                        .sample_buf
                        .get_or_insert_with(|| SampleBuffer::<f32>::new(frames, spec));
                    sample_buf.copy_interleaved_ref(audio_buf);
                    return Ok(Some(sample_buf.samples().to_vec()));
                }
                Err(Error::DecodeError(err)) if !self.strict => {
                    warn!("Skipping corrupt packet: {}", err);
                    continue;
                }
                Err(Error::DecodeError(err)) => {
                    return Err(ReadError::DecodeFailure(format!("corrupt packet: {}", err)))
                }
                Err(err) => return Err(ReadError::DecodeFailure(err.to_string())),
            }
        }
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn expected_frames(&self) -> Option<u64> {
        self.expected_frames
    }

    fn frame_count_is_exact(&self) -> bool {
        self.exact_frames
    }
}

/// MPEG audio streams without a Xing/VBRI header only carry an estimated frame count.
fn is_mpeg_audio(codec: CodecType) -> bool {
    codec == CODEC_TYPE_MP1 || codec == CODEC_TYPE_MP2 || codec == CODEC_TYPE_MP3
}
