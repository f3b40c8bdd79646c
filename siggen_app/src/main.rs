//! Headless harness that stands in for the GUI shell: it drives the engine
//! frame by frame from the command line, honoring the same session
//! configuration and save triggers the UI would supply.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;

use siggen_core::{PulseTrain, Sine, WhiteNoise};
use siggen_daq::{Engine, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "siggen", about = "Signal generator: synthesize waveforms and record PDAT files")]
struct Args {
    /// Session configuration JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Signal-set preset JSON. Without it a demo stack is used
    /// (50 Hz sine + white noise + 10 Hz pulse train).
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Sampling frequency in Hz.
    #[arg(long)]
    sampling_freq: Option<u32>,

    /// Sample window duration in seconds.
    #[arg(long)]
    duration: Option<f64>,

    /// Directory recordings are written into.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Enable periodic capture at this interval in seconds.
    #[arg(long)]
    save_interval: Option<f64>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Sleep between frames in milliseconds (simulated frame cadence).
    #[arg(long, default_value_t = 0)]
    frame_period_ms: u64,

    /// Skip the explicit save on the final frame.
    #[arg(long)]
    no_final_save: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(freq) = args.sampling_freq {
        session.sampling_freq = freq;
    }
    if let Some(duration) = args.duration {
        session.duration = duration;
    }
    if let Some(dir) = args.output_dir {
        session.output_dir = dir;
    }
    if let Some(interval) = args.save_interval {
        session.periodic_save = true;
        session.save_interval_secs = interval;
    }
    std::fs::create_dir_all(&session.output_dir)?;

    let mut engine = Engine::new();
    match &args.preset {
        Some(path) => engine.load_preset(path)?,
        None => {
            engine.signals_mut().add(Sine::new(50.0, 0.0, 1.0));
            engine.signals_mut().add(WhiteNoise::new(0.2));
            engine.signals_mut().add(PulseTrain::new(10.0, 0.5, 0.5));
        }
    }
    log::info!(
        "running {} frame(s), {} waveform(s), {} Hz x {} s",
        args.frames,
        engine.signals().len(),
        session.sampling_freq,
        session.duration
    );

    for frame in 0..args.frames {
        let last = frame + 1 == args.frames;
        let save_now = last && !args.no_final_save;
        let outcome = engine.frame(&session, save_now);
        if let Some(path) = outcome.saved {
            println!("saved {} samples to {}", outcome.sample_count, path.display());
        }
        if !last && args.frame_period_ms > 0 {
            thread::sleep(Duration::from_millis(args.frame_period_ms));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("siggen: {err}");
            ExitCode::FAILURE
        }
    }
}
