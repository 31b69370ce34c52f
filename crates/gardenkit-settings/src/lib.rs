//! GardenKit Settings Crate
//!
//! Handles the key-value persistence the planner stores its model in, typed
//! persisted values on top of it, and the planner configuration file.

pub mod config;
pub mod error;
pub mod keys;
pub mod persisted;
pub mod store;

pub use config::{OverlaySettings, PlannerConfig, StorageSettings, WeatherSettings};
pub use error::{
    ConfigError, ConfigResult, SettingsError, SettingsResult, StoreError, StoreResult,
};
pub use persisted::PersistedState;
pub use store::{load_value, save_value, JsonFileStore, KeyValueStore, MemoryStore};
