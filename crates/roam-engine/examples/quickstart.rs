//! Console walkthrough of a single simulation.
//!
//! Demonstrates: default config → traced steps → manual edits → run to
//! completion. Set `RUST_LOG=debug` to see the engine's log lines.

use roam_engine::{SimConfig, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Roam Quickstart ===\n");

    let mut sim = Simulation::new(SimConfig {
        width: 8,
        height: 6,
        initial_agents: 5,
        seed: Some(2024),
        ..SimConfig::default()
    })?;
    println!("seed {} on a {}x{} grid\n", sim.seed(), sim.width(), sim.height());

    // --- A few traced steps ---
    for _ in 0..3 {
        sim.step(true)?;
    }

    // --- Manual edits ---
    sim.add_agent_at(0, 0)?;
    sim.add_agent_at(7, 5)?;
    sim.remove_agent_at(4, 3)?;
    print!("{}", sim.snapshot());

    // --- Finish quietly ---
    let summary = sim.run_to_completion(false)?;
    print!("{}", sim.snapshot());
    println!(
        "covered {} cells in {} more steps ({} rejected draws)",
        sim.cell_count(),
        summary.steps,
        summary.rejected_draws,
    );

    // --- Reset and watch an empty board ---
    sim.reset(5, 5, 0);
    let summary = sim.run_to_completion(true)?;
    println!("empty board stopped after {} step", summary.steps);
    Ok(())
}
