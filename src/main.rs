use fluidsim::{Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "cascade.yaml")]
    file_name: String,

    /// Report particle positions every this many steps
    #[arg(short, long, default_value_t = 50)]
    report_every: usize,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let params = scenario.parameters;
    let mut sim = scenario.simulation;

    let steps = (params.t_end / params.dt).ceil() as usize;
    println!(
        "simulation initialized with {} particles, {} steps of dt = {}",
        sim.num_particles(),
        steps,
        params.dt
    );

    // The presentation layer stands here: read positions between completed
    // steps, never mutate simulation state
    for i in 0..steps {
        sim.step()?;

        if args.report_every > 0 && (i + 1) % args.report_every == 0 {
            report(sim.time(), &sim.positions());
        }
    }
    report(sim.time(), &sim.positions());

    Ok(())
}

/// Print the first few particle positions at time `t`
fn report(t: f64, positions: &[fluidsim::NVec3]) {
    let shown = positions.len().min(3);
    for (i, x) in positions.iter().take(shown).enumerate() {
        println!("t = {t:7.3}, p{i} = ({:9.5}, {:9.5}, {:9.5})", x[0], x[1], x[2]);
    }
}
