use serde::Deserialize;
use std::path::{Path, PathBuf};

const TUNING_FILE: &str = "naxxramas.yaml";

#[derive(Debug)]
pub struct AppConfig {
    pub root: PathBuf,
    pub instance_id: Option<u32>,
    pub save_dir: PathBuf,
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        if args.len() < 2 {
            return Err("usage: naxxramas <data-root> [instance-id]".to_string());
        }

        let root = Path::new(&args[1]).to_path_buf();
        let instance_id = match args.get(2) {
            Some(value) => Some(
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| format!("invalid instance id '{}'", value))?,
            ),
            None => None,
        };
        let save_dir = non_empty_env("NAXX_SAVE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("save").join("instances"));
        let rng_seed = match non_empty_env("NAXX_RNG_SEED") {
            Some(value) => Some(
                value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid NAXX_RNG_SEED '{}'", value))?,
            ),
            None => None,
        };
        Ok(Self {
            root,
            instance_id,
            save_dir,
            rng_seed,
        })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Durations driving the instance's timed events. Every field can be
/// overridden from `naxxramas.yaml` in the data root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InstanceTuning {
    pub living_poison_interval_ms: u32,
    pub living_poison_lifespan_ms: u32,
    pub scream_interval_ms: u32,
    pub scream_jitter_secs: u32,
    pub taunt_delay_ms: u32,
    pub horsemen_window_ms: u32,
    pub sapphiron_respawn_ms: u32,
    pub kelthuzad_trigger_despawn_ms: u32,
    pub portal_respawn_secs: u32,
}

impl Default for InstanceTuning {
    fn default() -> Self {
        Self {
            living_poison_interval_ms: 5000,
            living_poison_lifespan_ms: 15_000,
            scream_interval_ms: 120_000,
            scream_jitter_secs: 30,
            taunt_delay_ms: 5000,
            horsemen_window_ms: 15_000,
            sapphiron_respawn_ms: 22_000,
            kelthuzad_trigger_despawn_ms: 5000,
            portal_respawn_secs: 30 * 60,
        }
    }
}

impl InstanceTuning {
    /// Loads `naxxramas.yaml` from the data root, or the defaults when the
    /// file does not exist.
    pub fn load(root: &Path) -> Result<Self, String> {
        let path = root.join(TUNING_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("tuning read failed for {}: {}", path.display(), err)),
        };
        Self::parse(&content).map_err(|err| format!("tuning {}: {}", path.display(), err))
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|err| err.to_string())
    }
}
