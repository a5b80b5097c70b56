//! Wave resonance walkthrough — the default scenario end to end.
//!
//! Builds the scalar wave simulator with the default constants
//! (100x100 grid, banded material map, diamond pulse), runs the full
//! 500 steps, and prints per-interval field statistics plus a coarse
//! ASCII rendering of the final frame.
//!
//! Run with:
//!   cargo run --example wave_resonance

use seiche_core::Simulator;
use seiche_sim::{WaveConfig, WaveSimulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Seiche wave resonance ===\n");

    let config = WaveConfig::default();
    println!(
        "Grid: {n}x{n}, dx = {dx}, dt = {dt}, {steps} steps",
        n = config.sim.n,
        dx = config.sim.dx,
        dt = config.sim.dt,
        steps = config.sim.steps,
    );
    println!(
        "Material bands: {:?}, damping = {}\n",
        config.bands,
        config.damping()
    );

    let mut sim = WaveSimulator::new(config)?;
    while !sim.is_complete() {
        sim.advance()?;
        let t = sim.steps_completed();
        if t % 100 == 0 {
            let h = sim.height();
            let mean_abs = h.mean_abs();
            let max = h.as_slice().iter().cloned().fold(f32::MIN, f32::max);
            let min = h.as_slice().iter().cloned().fold(f32::MAX, f32::min);
            println!("  step {t:>3}: mean|h| = {mean_abs:.6}, h in [{min:.5}, {max:.5}]");
        }
    }

    let playback = sim.playback();
    println!(
        "\nRecorded {} frames for playback at {} ms/frame, color scale [{}, {}]",
        sim.frames().len(),
        playback.frame_interval_ms,
        playback.color_scale.unwrap().min,
        playback.color_scale.unwrap().max,
    );

    // Coarse ASCII view of the final frame: sample every 4th cell.
    let last = sim.frames().last().expect("run recorded frames");
    let limit = WaveSimulator::COLOR_LIMIT;
    println!("\nFinal frame (downsampled):");
    for r in (0..last.rows()).step_by(4) {
        let row: String = (0..last.cols())
            .step_by(4)
            .map(|c| {
                let v = last.get(r, c);
                if v > limit / 2.0 {
                    '#'
                } else if v > limit / 8.0 {
                    '+'
                } else if v < -limit / 2.0 {
                    '='
                } else if v < -limit / 8.0 {
                    '-'
                } else {
                    '.'
                }
            })
            .collect();
        println!("  {row}");
    }

    println!("\nDone.");
    Ok(())
}
