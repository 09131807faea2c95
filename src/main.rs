use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use audio_reader::{AudioReader, ReaderConfig};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Decode audio files and print what was read
#[derive(Parser, Debug)]
#[command(name = "audio-reader")]
#[command(version)]
struct Args {
    /// Files or file:// URLs to read
    #[arg(required = true)]
    locations: Vec<String>,

    /// TOML file with reader settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip corrupt packets instead of failing
    #[arg(long)]
    lenient: bool,

    /// Also report the peak of the mono downmix
    #[arg(long)]
    mono: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audio_reader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ReaderConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReaderConfig::default(),
    };
    if args.lenient {
        config.strict = false;
    }

    let mut reader = AudioReader::with_config(config);
    let mut failures = 0;

    for location in &args.locations {
        if let Err(e) = reader.read(location) {
            error!("{}", e);
            failures += 1;
            continue;
        }
        let Some(audio) = reader.audio() else {
            continue;
        };

        println!("{}", location);
        println!("  sample rate: {} Hz", audio.sample_rate());
        println!("  channels:    {}", audio.channels());
        println!("  frames:      {}", audio.num_frames());
        println!("  duration:    {:.3} s", audio.duration_secs());
        println!("  peak:        {:.4}", audio.peak());
        if args.mono {
            let mono_peak = audio.to_mono().iter().fold(0.0f32, |p, s| p.max(s.abs()));
            println!("  mono peak:   {:.4}", mono_peak);
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
