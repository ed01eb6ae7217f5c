use vortexsim::{DemoConfig, DemoKindConfig};
use vortexsim::{FanScenario, OrbitScenario, VortexScenario};
use vortexsim::{run_fan, run_orbit, run_vortex};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "vortex.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_demo_from_yaml() -> Result<DemoConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let demo_cfg: DemoConfig = serde_yaml::from_reader(reader)?;

    Ok(demo_cfg)
}

fn main() -> Result<()> {
    let demo_cfg = load_demo_from_yaml()?;

    let scene = demo_cfg.scene;
    match demo_cfg.demo {
        DemoKindConfig::Vortex(cfg) => {
            let scenario = VortexScenario::build(scene, cfg);
            run_vortex(scenario);
        }
        DemoKindConfig::Orbit(cfg) => {
            let scenario = OrbitScenario::build(scene, cfg);
            run_orbit(scenario);
        }
        DemoKindConfig::Fan(cfg) => {
            let scenario = FanScenario::build(scene, cfg);
            run_fan(scenario);
        }
    }

    //bench_vortex();
    //bench_orbit();

    Ok(())
}
