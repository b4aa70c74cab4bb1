//! Runtime configuration (pressloop.toml) and shared constants

pub mod consts;
mod model;

pub use consts::events;
pub use model::{Config, HooksConfig, RenderConfig, SubscriptionConfig};
