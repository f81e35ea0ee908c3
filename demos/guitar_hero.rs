//! Interactive plucked-string keyboard.
//!
//! Two rows of the computer keyboard play 37 strings:
//!
//! ```text
//!  2   4 5   7 8 9   -   =         d f g   j k   ; '
//! q w e r t y u i o p [     z x c v b n m , . /  (space)
//! ```
//!
//! `v` sounds the concert pitch. ESC or Ctrl-C quits.
//!
//! ```text
//! cargo run --example guitar_hero -- --tuning equal --log-file synth.log
//! ```

mod common;

use anyhow::Result;
use clap::Parser;
use common::cli::SynthArgs;
use common::{ExampleAudioState, KeyAction, init_logging, is_quit_key, run_interactive_example};
use crossterm::{
    ExecutableCommand,
    event::{KeyCode, KeyEvent, KeyEventKind},
};
use plectrum::{KeyLayout, StringBank};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Parser, Debug)]
#[command(name = "guitar_hero")]
#[command(about = "Play Karplus-Strong strings from the keyboard", long_about = None)]
struct Cli {
    #[command(flatten)]
    synth: SynthArgs,

    /// Seed for pluck noise (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    verbose: bool,
}

struct GuitarHeroState {
    bank: StringBank,
    rng: StdRng,
}

impl ExampleAudioState for GuitarHeroState {
    fn next_sample(&mut self) -> f64 {
        match self.bank.tick() {
            Ok(sample) => sample,
            Err(err) => {
                tracing::error!(%err, "tick failed");
                0.0
            }
        }
    }
}

fn draw_ui(layout: &KeyLayout, last: Option<(char, f64)>) -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(crossterm::terminal::Clear(
        crossterm::terminal::ClearType::All,
    ))?;
    stdout.execute(crossterm::cursor::MoveTo(0, 0))?;
    write!(stdout, "Guitar Hero - {} strings | ESC = quit\r\n\r\n", layout.len())?;
    write!(stdout, "  2   4 5   7 8 9   -   =         d f g   j k   ; '\r\n")?;
    write!(stdout, " q w e r t y u i o p [     z x c v b n m , . /  (space)\r\n\r\n")?;
    match last {
        Some((key, freq)) => write!(stdout, "Plucked '{}' ({:.2} Hz)", key, freq)?,
        None => write!(stdout, "Press a key to pluck a string")?,
    }
    stdout.flush()?;
    Ok(())
}

fn handle_key(
    state: &Arc<Mutex<GuitarHeroState>>,
    layout: &KeyLayout,
    key_event: &KeyEvent,
) -> Result<KeyAction> {
    if is_quit_key(key_event) {
        return Ok(KeyAction::Exit);
    }
    if key_event.kind != KeyEventKind::Press {
        return Ok(KeyAction::Continue);
    }

    let KeyCode::Char(key) = key_event.code else {
        return Ok(KeyAction::Continue);
    };
    let Some(index) = layout.index_of(key) else {
        return Ok(KeyAction::Continue);
    };

    let frequency = {
        let mut guard = state
            .lock()
            .map_err(|_| anyhow::anyhow!("audio state lock poisoned"))?;
        let s = &mut *guard;
        s.bank.pluck(index, &mut s.rng)?;
        s.bank.config().frequency(index)
    };
    tracing::debug!(%key, index, frequency, "pluck");

    draw_ui(layout, Some((key, frequency)))?;
    Ok(KeyAction::Continue)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let layout = KeyLayout::guitar_hero();
    let seed = cli.seed;

    run_interactive_example(
        |device_rate| {
            let config = cli.synth.to_config(device_rate)?;
            let bank = StringBank::for_layout(&config, &layout)?;
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Ok(GuitarHeroState { bank, rng })
        },
        |_state| draw_ui(&layout, None),
        |state, key_event| handle_key(state, &layout, key_event),
    )?;

    println!("\nGoodbye!");
    Ok(())
}
