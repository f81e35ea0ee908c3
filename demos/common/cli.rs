//! Command-line synth settings shared by the demos.

use clap::{Args, ValueEnum};
use plectrum::tuning::DEFAULT_STRETCH;
use plectrum::{CONCERT_A, DEFAULT_DECAY, SynthConfig, Tuning};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TuningArg {
    /// Twelve-tone equal temperament
    Equal,
    /// Stretched tuning, see --stretch
    Stretched,
}

/// Synth parameters
#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Sample rate in Hz (defaults to the output device's rate, or 44100 offline)
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<u32>,

    /// Pitch of the reference key in Hz
    #[arg(long, value_name = "HZ", default_value_t = CONCERT_A)]
    pub concert_pitch: f64,

    /// Tuning scheme
    #[arg(long, value_enum, default_value_t = TuningArg::Stretched)]
    pub tuning: TuningArg,

    /// Step ratio for stretched tuning
    #[arg(long, value_name = "RATIO", default_value_t = DEFAULT_STRETCH)]
    pub stretch: f64,

    /// Per-step energy decay, in [0, 1)
    #[arg(long, default_value_t = DEFAULT_DECAY)]
    pub decay: f64,
}

impl SynthArgs {
    /// Builds the synth configuration; `fallback_rate` is used when no
    /// sample rate was given.
    pub fn to_config(&self, fallback_rate: u32) -> plectrum::Result<SynthConfig> {
        let tuning = match self.tuning {
            TuningArg::Equal => Tuning::EqualTemperament,
            TuningArg::Stretched => Tuning::Stretched {
                ratio: self.stretch,
            },
        };
        let config = SynthConfig::default()
            .with_sample_rate(self.sample_rate.unwrap_or(fallback_rate))
            .with_concert_pitch(self.concert_pitch)
            .with_tuning(tuning)
            .with_decay(self.decay);
        config.validate()?;
        Ok(config)
    }
}
