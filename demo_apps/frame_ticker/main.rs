//! Frame Ticker
//!
//! Loads named animator configurations from JSON, advances them together for a
//! number of ticks and logs every frame change.
//!
//! ```text
//! RUST_LOG=debug frame_ticker [config.json] [ticks] [seed]
//! ```
//!
//! Without a config path the bundled `torches.json` is used.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tickframe::{AnimatorConfig, AnimatorHandle, AnimatorSet, StdRandom};

const BUNDLED_CONFIG: &str = include_str!("torches.json");
const DEFAULT_TICKS: u32 = 60;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let source = match args.next() {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => BUNDLED_CONFIG.to_string(),
    };
    let ticks = match args.next() {
        Some(raw) => raw.parse().with_context(|| format!("invalid tick count: {raw}"))?,
        None => DEFAULT_TICKS,
    };
    let random = match args.next() {
        Some(raw) => {
            let seed = raw.parse().with_context(|| format!("invalid seed: {raw}"))?;
            StdRandom::seeded(seed)
        }
        None => StdRandom::new(),
    };

    let configs: BTreeMap<String, AnimatorConfig> =
        serde_json::from_str(&source).context("parsing animator configs")?;

    let mut set = AnimatorSet::with_random(random);
    let mut names: BTreeMap<AnimatorHandle, String> = BTreeMap::new();
    for (name, config) in configs {
        let handle = set
            .insert(config)
            .with_context(|| format!("animator '{name}'"))?;
        names.insert(handle, name);
    }

    log::info!("Ticking {} animators for {ticks} ticks", set.len());

    let mut changes = 0usize;
    for tick in 1..=ticks {
        for handle in set.advance_all(1) {
            changes += 1;
            if let (Some(name), Some(frame)) = (names.get(&handle), set.current_frame(handle)) {
                log::info!("tick {tick:>4}: {name:<10} -> frame {frame}");
            }
        }
    }

    log::info!("{changes} frame changes in {ticks} ticks");
    Ok(())
}
