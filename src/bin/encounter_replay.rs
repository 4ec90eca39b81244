use naxxramas::config::InstanceTuning;
use naxxramas::instance::status::EncounterId;
use naxxramas::scripting::replay::{load_replay_script, run_replay};
use std::path::Path;

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let Some(script_path) = args.get(1) else {
        return Err("usage: encounter_replay <script.yaml> [data-root]".to_string());
    };
    let tuning = match args.get(2) {
        Some(root) => InstanceTuning::load(Path::new(root))?,
        None => InstanceTuning::default(),
    };
    let script = load_replay_script(Path::new(script_path))?;
    let report = run_replay(&script, tuning)?;

    println!("encounter replay: {}", script_path);
    for step in &report.steps {
        match step.blocked {
            Some(true) => println!("{:>3}. {} (blocked)", step.index, step.event),
            _ => println!("{:>3}. {}", step.index, step.event),
        }
        for effect in &step.effects {
            println!("     - {:?}", effect);
        }
    }

    println!("final encounter state:");
    for id in EncounterId::ALL {
        println!("- {}: {}", id, report.encounters[id.index()]);
    }
    match &report.saved {
        Some(saved) => println!("- saved: {}", saved),
        None => println!("- saved: never"),
    }
    Ok(())
}
