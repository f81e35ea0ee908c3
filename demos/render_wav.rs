//! Renders a typed melody to a WAV file without an audio device.
//!
//! Each character of `--keys` is looked up in the 37-key layout and plucked
//! `--spacing` milliseconds after the previous one; unknown characters are
//! rests.
//!
//! ```text
//! cargo run --example render_wav --features wav -- --keys "zxcvbnm," --output scale.wav
//! ```

#[path = "common/cli.rs"]
mod cli;

use anyhow::Result;
use clap::Parser;
use cli::SynthArgs;
use plectrum::render::{PluckEvent, render, write_wav};
use plectrum::{DEFAULT_SAMPLE_RATE, KeyLayout, StringBank};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "render_wav")]
#[command(about = "Render plucked strings to a WAV file", long_about = None)]
struct Cli {
    #[command(flatten)]
    synth: SynthArgs,

    /// Keys to pluck, in order
    #[arg(long, default_value = "zxcvbnm,")]
    keys: String,

    /// Milliseconds between plucks
    #[arg(long, value_name = "MS", default_value_t = 250)]
    spacing: u64,

    /// Extra seconds rendered after the last pluck
    #[arg(long, value_name = "SECONDS", default_value_t = 2.0)]
    tail: f64,

    /// Seed for pluck noise
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output file
    #[arg(long, short, default_value = "pluck.wav")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    let config = cli.synth.to_config(DEFAULT_SAMPLE_RATE)?;
    let layout = KeyLayout::guitar_hero();
    let mut bank = StringBank::for_layout(&config, &layout)?;

    let spacing = cli.spacing * u64::from(config.sample_rate) / 1000;
    let events: Vec<PluckEvent> = cli
        .keys
        .chars()
        .enumerate()
        .filter_map(|(i, key)| {
            layout
                .index_of(key)
                .map(|index| PluckEvent::new(i as u64 * spacing, index))
        })
        .collect();

    let tail = (cli.tail.max(0.0) * f64::from(config.sample_rate)) as u64;
    let ticks = cli.keys.chars().count() as u64 * spacing + tail;

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let samples = render(&mut bank, &events, ticks, &mut rng)?;

    let peak = samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
    write_wav(&cli.output, config.sample_rate, &samples)?;

    println!(
        "Wrote {} ({} plucks, {} samples, peak {:.3})",
        cli.output.display(),
        events.len(),
        samples.len(),
        peak
    );
    Ok(())
}
