//! A typed value mirrored into a key-value store.
//!
//! Reads are served from the local copy. Writes update the local copy at
//! once and are sent to the store in the background, so callers never wait
//! on storage latency. Writes of one value are applied one at a time, and a
//! write is dropped once a newer one has reached the store, so the last
//! `set` always wins.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::StoreResult;
use crate::store::{load_value, KeyValueStore};

pub struct PersistedState<T> {
    key: String,
    value: T,
    store: Arc<dyn KeyValueStore>,
    /// Generation of the local value, bumped by every `set`.
    generation: u64,
    /// Generation last written to the store. Held while writing.
    written: Arc<Mutex<u64>>,
}

impl<T> std::fmt::Debug for PersistedState<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedState")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<T> PersistedState<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the stored value, falling back to `default` when the key is
    /// absent, unreadable or holds a value of another shape.
    pub async fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = match load_value(store.as_ref(), &key).await {
            Ok(Some(value)) => {
                info!("Loaded persisted {}", key);
                value
            }
            Ok(None) => default,
            Err(e) => {
                warn!("Ignoring persisted {}: {}", key, e);
                default
            }
        };
        Self {
            key,
            value,
            store,
            generation: 0,
            written: Arc::new(Mutex::new(0)),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and writes it in the background.
    ///
    /// A failed write is logged; the local copy keeps the new value either
    /// way. Must be called within a tokio runtime.
    pub fn set(&mut self, value: T) -> JoinHandle<StoreResult<()>> {
        self.value = value;
        self.generation += 1;
        let generation = self.generation;
        let encoded = serde_json::to_value(&self.value);
        let store = Arc::clone(&self.store);
        let written = Arc::clone(&self.written);
        let key = self.key.clone();
        tokio::spawn(async move {
            let mut last = written.lock().await;
            if *last > generation {
                debug!("Skipping stale write {} of {}", generation, key);
                return Ok(());
            }
            let result = match encoded {
                Ok(value) => store.set(&key, value).await,
                Err(e) => Err(e.into()),
            };
            match &result {
                Ok(()) => *last = generation,
                Err(e) => error!("Failed to persist {}: {}", key, e),
            }
            result
        })
    }

    /// Writes the current value and waits for the store.
    pub async fn save(&self) -> StoreResult<()> {
        let mut last = self.written.lock().await;
        if *last > self.generation {
            return Ok(());
        }
        self.store
            .set(&self.key, serde_json::to_value(&self.value)?)
            .await?;
        *last = self.generation;
        Ok(())
    }
}
