//! Shared plumbing for the interactive demos: audio device, terminal, logging.

pub mod cli;

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::fs::File;
use std::io::stdout;
use std::panic;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Audio state the output stream pulls samples from.
pub trait ExampleAudioState: Send + 'static {
    fn next_sample(&mut self) -> f64;
}

/// Key handling result that controls the event loop
pub enum KeyAction {
    /// Continue the event loop
    Continue,
    /// Exit the event loop
    Exit,
}

/// Runs an interactive audio demo with terminal UI.
///
/// * `make_state` - Builds the audio state for the output device's sample rate
/// * `initial_ui` - Draws the initial UI
/// * `key_handler` - Handles key events and decides whether to continue
pub fn run_interactive_example<S, M, F, K>(
    make_state: M,
    initial_ui: F,
    key_handler: K,
) -> Result<()>
where
    S: ExampleAudioState,
    M: FnOnce(u32) -> Result<S>,
    F: FnOnce(&Arc<Mutex<S>>) -> Result<()>,
    K: Fn(&Arc<Mutex<S>>, &KeyEvent) -> Result<KeyAction>,
{
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate().0;
    tracing::info!(sample_rate, channels = config.channels(), "audio output opened");

    let state = Arc::new(Mutex::new(make_state(sample_rate)?));

    let _stream = match config.sample_format() {
        SampleFormat::F32 => create_audio_stream::<f32, S>(&device, &config.into(), state.clone())?,
        SampleFormat::I16 => create_audio_stream::<i16, S>(&device, &config.into(), state.clone())?,
        SampleFormat::U16 => create_audio_stream::<u16, S>(&device, &config.into(), state.clone())?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    // Restore the terminal if anything panics while it is in raw mode
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    initial_ui(&state)?;

    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key_event) = event::read()?
        {
            match key_handler(&state, &key_event)? {
                KeyAction::Continue => {}
                KeyAction::Exit => break,
            }
        }
    }

    cleanup_terminal();

    Ok(())
}

/// Creates an audio stream that pulls samples from the audio state.
fn create_audio_stream<T, S>(
    device: &cpal::Device,
    config: &StreamConfig,
    state: Arc<Mutex<S>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
    S: ExampleAudioState,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let Ok(mut state) = state.lock() else {
                return;
            };
            for frame in data.chunks_mut(channels) {
                // The synth does not clamp; the device does
                let sample = state.next_sample().clamp(-1.0, 1.0);
                let value: T = T::from_sample(sample);
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| tracing::error!(%err, "audio stream error"),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

/// Cleans up terminal state (cursor, alternate screen, raw mode).
fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// ESC or Ctrl-C. Letter keys are all notes.
pub fn is_quit_key(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Sends log output to `path`; without a path, logging stays off so the
/// raw-mode terminal is not garbled.
pub fn init_logging(path: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(File::create(path)?))
        .init();
    Ok(())
}
