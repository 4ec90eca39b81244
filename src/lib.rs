pub mod config;
pub mod entities;
pub mod instance;
pub mod persistence;
pub mod scripting;
pub mod telemetry;
pub mod world;

pub use instance::coordinator::NaxxramasInstance;
pub use world::instance_map::InstanceMap;

use instance::status::{EncounterId, EncounterStatus};
use persistence::store::InstanceStore;

pub fn run(args: &[String]) -> Result<(), String> {
    let config = config::AppConfig::from_args(args)?;
    telemetry::logging::init(&config.root)?;
    let tuning = config::InstanceTuning::load(&config.root)?;
    let mut store = InstanceStore::new(config.save_dir.clone());
    let ids = match config.instance_id {
        Some(id) => vec![id],
        None => store.instance_ids().map_err(|err| err.to_string())?,
    };
    tracing::info!(
        root = %config.root.display(),
        instances = ids.len(),
        "instance report started"
    );

    println!("naxxramas: instance report");
    println!("- root: {}", config.root.display());
    println!("- save dir: {}", store.dir().display());
    println!("- instances: {}", ids.len());

    let mut failures = 0usize;
    for id in ids {
        let data = match store.load(id) {
            Ok(Some(data)) => data,
            Ok(None) => {
                println!("instance {}: no save", id);
                continue;
            }
            Err(err) => {
                eprintln!("naxxramas: instance {} {}", id, err);
                failures += 1;
                continue;
            }
        };
        let seed = config.rng_seed.unwrap_or(u64::from(id));
        let mut instance = NaxxramasInstance::new(tuning.clone(), seed);
        if !instance.load(Some(&data)) {
            failures += 1;
            continue;
        }
        print_progress(id, &instance);
    }

    if failures > 0 {
        return Err(format!("{} instance save(s) could not be loaded", failures));
    }
    Ok(())
}

fn print_progress(id: u32, instance: &NaxxramasInstance) {
    let bosses = &EncounterId::ALL[..=EncounterId::Kelthuzad.index()];
    let cleared = bosses
        .iter()
        .filter(|boss| instance.get_data(**boss) == EncounterStatus::Done)
        .count();
    println!("instance {}: {}/{} bosses defeated", id, cleared, bosses.len());
    for boss in bosses {
        let status = instance.get_data(*boss);
        if status != EncounterStatus::NotStarted {
            println!("- {}: {}", boss, status);
        }
    }
    let deathless = instance.get_data(EncounterId::UndyingFailed) != EncounterStatus::Done;
    println!("- deathless run: {}", if deathless { "intact" } else { "failed" });
}
