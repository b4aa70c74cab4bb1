//! Global context for CLI commands

use anyhow::{Context as _, Result};
use pressloop_core::config::Config;
use pressloop_core::{Callback, ContentItem, HookRegistry, LoopContext, item::load_feed};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory
pub const CONFIG_FILE: &str = "pressloop.toml";

/// Loaded feed, configuration and the registry built from it
pub struct Context {
    pub config: Config,
    pub items: Vec<ContentItem>,
    pub hooks: HookRegistry,
    pub loop_context: LoopContext,
    pub verbose: bool,
}

impl Context {
    /// Load configuration and the feed at `feed`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config file is missing or invalid
    /// - `./pressloop.toml` exists but is invalid
    /// - A configured subscription names an unknown callback
    /// - The feed cannot be read or parsed
    pub fn new(feed: &Path, config: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config = load_config(config)?;
        let hooks = build_registry(&config)?;
        let items = load_feed(feed)?;

        Ok(Self {
            loop_context: LoopContext::with_markers(config.markers.clone()),
            config,
            items,
            hooks,
            verbose,
        })
    }
}

fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let candidate = env::current_dir()?.join(CONFIG_FILE);
            if !candidate.exists() {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                return Ok(Config::default());
            }
            candidate
        }
    };

    tracing::debug!("Loading config from {}", path.display());
    Config::from_file(&path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Registry with the built-in transforms plus every configured subscription
fn build_registry(config: &Config) -> Result<HookRegistry> {
    let hooks = HookRegistry::with_builtins();

    for sub in &config.subscriptions {
        hooks.register(
            &sub.event,
            Callback::named(sub.callback.as_str()),
            sub.priority.unwrap_or(config.hooks.default_priority),
            sub.accepted_args.unwrap_or(config.hooks.default_accepted_args),
        )?;
    }

    Ok(hooks)
}
