//! Offline rendering of a pluck schedule to a WAV file.

use crate::{Result, StringBank};
use rand::Rng;
use std::path::Path;

/// A pluck scheduled at a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluckEvent {
    /// Tick at which the string is plucked, before that tick's sample is read
    pub at: u64,
    /// String index
    pub index: usize,
}

impl PluckEvent {
    /// Creates a pluck of string `index` at tick `at`.
    pub fn new(at: u64, index: usize) -> Self {
        Self { at, index }
    }
}

/// Runs `bank` for `ticks` ticks, applying `events` as their tick comes up.
///
/// Events may be given in any order. Out-of-range indices are ignored like
/// any other pluck.
pub fn render<R: Rng + ?Sized>(
    bank: &mut StringBank,
    events: &[PluckEvent],
    ticks: u64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let mut events = events.to_vec();
    events.sort_by_key(|event| event.at);
    let mut pending = events.iter().peekable();

    let mut output = Vec::with_capacity(ticks as usize);
    for tick in 0..ticks {
        while let Some(event) = pending.next_if(|event| event.at <= tick) {
            bank.pluck(event.index, rng)?;
        }
        output.push(bank.tick()?);
    }
    Ok(output)
}

/// Writes `samples` as a mono 32-bit float WAV file.
///
/// Samples are written as-is; nothing is clamped.
pub fn write_wav(path: impl AsRef<Path>, sample_rate: u32, samples: &[f64]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
    for &sample in samples {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;

    tracing::info!(
        path = %path.as_ref().display(),
        samples = samples.len(),
        "wav written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SynthConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_render_waits_for_first_event() {
        let mut bank = StringBank::new(&SynthConfig::default(), 37).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let out = render(&mut bank, &[PluckEvent::new(100, 24)], 400, &mut rng).unwrap();

        assert_eq!(out.len(), 400);
        assert!(out[..100].iter().all(|&s| s == 0.0));
        assert!(out[100..].iter().any(|&s| s != 0.0));
        assert_eq!(bank.time(), 300);
    }

    #[test]
    fn test_render_orders_events() {
        let events = [PluckEvent::new(50, 10), PluckEvent::new(0, 24)];
        let mut a = StringBank::new(&SynthConfig::default(), 37).unwrap();
        let mut b = StringBank::new(&SynthConfig::default(), 37).unwrap();
        let out_a = render(&mut a, &events, 200, &mut StdRng::seed_from_u64(4)).unwrap();
        let mut reversed = events;
        reversed.reverse();
        let out_b = render(&mut b, &reversed, 200, &mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn test_write_wav() {
        let path = std::env::temp_dir().join(format!("plectrum-{}.wav", std::process::id()));
        let samples = [0.0, 0.25, -0.25, 0.5];
        write_wav(&path, 44100, &samples).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 44100);
        assert_eq!(reader.spec().channels, 1);
        let read: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(read, vec![0.0, 0.25, -0.25, 0.5]);

        std::fs::remove_file(&path).unwrap();
    }
}
