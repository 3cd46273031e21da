//! brace-topia — terminal runner for the segregation model.
//!
//! With `--cycles N` the run prints cycles 0 through N one after another and
//! exits.  Without it, each cycle redraws the screen in place and the run
//! continues until Ctrl-C.

mod cli;
mod settings;


use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use bt_output::{RenderMode, TextRenderer};
use bt_sim::{Sim, SimBuilder};

use cli::Args;
use settings::{RunPlan, Settings};

fn main() -> Result<()> {
    // Logs go to stderr so they never land inside a redrawn frame.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None       => Settings::default(),
    }
    .merge(&args);
    let plan = RunPlan::resolve(&settings)?;

    let mut sim = SimBuilder::new(plan.config.clone()).build()?;
    let out = BufWriter::new(io::stdout().lock());

    if plan.is_bounded() {
        let mut renderer = TextRenderer::new(out, &plan.config, RenderMode::Scroll);
        sim.run(&mut renderer)?;
        check_output(&mut renderer)?;
    } else {
        let mut renderer = TextRenderer::new(out, &plan.config, RenderMode::Frame);
        run_until_interrupted(&mut sim, &mut renderer, plan.delay)?;
    }
    Ok(())
}

/// Step the simulation with a pause after each cycle until Ctrl-C arrives.
fn run_until_interrupted<W: Write>(
    sim:      &mut Sim,
    renderer: &mut TextRenderer<W>,
    delay:    Duration,
) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst))
        .context("installing the Ctrl-C handler")?;

    while running.load(Ordering::SeqCst) {
        sim.step(renderer)?;
        check_output(renderer)?;
        thread::sleep(delay);
    }

    info!("interrupted after cycle {}", sim.cycle().0.saturating_sub(1));
    sim.stop(renderer);
    check_output(renderer)
}

fn check_output<W: Write>(renderer: &mut TextRenderer<W>) -> Result<()> {
    match renderer.take_error() {
        Some(err) => Err(err).context("writing to stdout"),
        None      => Ok(()),
    }
}
