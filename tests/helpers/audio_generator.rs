//! WAV fixtures with known contents for reader tests.

#![allow(dead_code)]

use hound::{SampleFormat, WavSpec, WavWriter};
use std::f32::consts::PI;
use std::path::Path;

/// Writes a 16-bit WAV where every sample of every channel is `value`.
pub fn write_constant_wav<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    channels: u16,
    frames: u32,
    value: i16,
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for _ in 0..frames {
        for _ in 0..channels {
            writer.write_sample(value)?;
        }
    }
    writer.finalize()
}

/// Writes a 16-bit stereo WAV: left channel a sine, right channel silent.
pub fn write_sine_left_wav<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    frames: u32,
    frequency_hz: f32,
    amplitude: f32,
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for frame in 0..frames {
        let t = frame as f32 / sample_rate as f32;
        let value = (2.0 * PI * frequency_hz * t).sin() * amplitude * i16::MAX as f32;
        writer.write_sample(value as i16)?;
        writer.write_sample(0i16)?;
    }
    writer.finalize()
}

/// Writes a mono 32-bit float WAV with the given samples.
pub fn write_float_wav<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    samples: &[f32],
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

/// Cuts a file down to `keep` bytes.
pub fn truncate_file<P: AsRef<Path>>(path: P, keep: u64) -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new().write(true).open(path)?;
    file.set_len(keep)
}

/// Samples per MPEG-1 Layer III frame.
pub const MP3_FRAME_SAMPLES: u32 = 1152;

/// Writes a mono 44.1 kHz MPEG-1 Layer III stream with no Xing/VBRI header.
///
/// Each `(kbps, count)` run adds `count` frames at that bitrate. Side info and
/// main data are all zero, so every frame decodes to silence. Mixing bitrates
/// makes the stream VBR, which leaves the container's frame count an estimate.
pub fn write_silent_vbr_mp3<P: AsRef<Path>>(path: P, runs: &[(u32, u32)]) -> std::io::Result<()> {
    let mut bytes = Vec::new();
    for &(kbps, count) in runs {
        let bitrate_index: u8 = match kbps {
            32 => 1,
            64 => 5,
            128 => 9,
            320 => 14,
            other => panic!("unsupported test bitrate {}", other),
        };
        let frame_len = (144 * kbps * 1000 / 44100) as usize;
        for _ in 0..count {
            let start = bytes.len();
            // Sync, MPEG-1, Layer III, no CRC / bitrate, 44.1 kHz, no padding / mono.
            bytes.extend_from_slice(&[0xFF, 0xFB, bitrate_index << 4, 0xC0]);
            bytes.resize(start + frame_len, 0);
        }
    }
    std::fs::write(path, bytes)
}
