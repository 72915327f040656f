use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use orb_dungeon_system_solver::DEFAULT_PROGRESS_INTERVAL;
use orb_dungeon_world::DungeonConfig;
use serde::Deserialize;

use crate::Cli;

/// Attempt budget used when neither the command line nor the file sets one.
pub(crate) const DEFAULT_MAX_TRIES: u64 = 10_000_000;

/// Settings read from a TOML configuration file. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    initial_health: Option<i32>,
    size: Option<u32>,
    desired_orbs: Option<u32>,
    auto: Option<bool>,
    max_tries: Option<u64>,
    progress_interval: Option<u64>,
    seed: Option<u64>,
    layout: Option<String>,
}

impl FileConfig {
    /// Reads and parses the configuration file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to load config file at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse config toml contents")
    }
}

/// Fully resolved run settings after layering defaults, file and flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Dungeon generated when no layout code is provided.
    pub dungeon: DungeonConfig,
    /// Whether the solver plays instead of the user.
    pub auto: bool,
    /// Attempt budget handed to the solver.
    pub max_tries: u64,
    /// Number of tries between progress lines; zero disables them.
    pub progress_interval: u64,
    /// Fixed seed for grid generation and the solver.
    pub seed: Option<u64>,
    /// Layout code replacing random generation.
    pub layout: Option<String>,
}

impl Settings {
    /// Layers command-line flags over the file settings and built-in defaults.
    pub(crate) fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let layout = cli.layout.clone().or(file.layout);
        let initial_health = match cli.initial_health.or(file.initial_health) {
            Some(health) => health,
            // A layout code carries its own starting health.
            None if layout.is_some() => 0,
            None => bail!("initial health is required (--initial-health or config file)"),
        };

        Ok(Self {
            dungeon: DungeonConfig {
                size: cli
                    .size
                    .or(file.size)
                    .unwrap_or(DungeonConfig::DEFAULT_SIZE),
                desired_orb_count: cli
                    .desired_orbs
                    .or(file.desired_orbs)
                    .unwrap_or(DungeonConfig::DEFAULT_DESIRED_ORB_COUNT),
                initial_health,
            },
            auto: cli.auto || file.auto.unwrap_or(false),
            max_tries: cli
                .max_tries
                .or(file.max_tries)
                .unwrap_or(DEFAULT_MAX_TRIES),
            progress_interval: cli
                .progress_interval
                .or(file.progress_interval)
                .unwrap_or(DEFAULT_PROGRESS_INTERVAL),
            seed: cli.seed.or(file.seed),
            layout,
        })
    }
}
