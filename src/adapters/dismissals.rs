use crate::domain::ports::{DismissalStore, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tokio::sync::Mutex;

pub const DISMISSALS_FILE: &str = "dismissed_suggestions.json";

type DismissalMap = BTreeMap<String, BTreeSet<String>>;

/// Dismissed rule ids per user, kept in one JSON document on a [`Storage`].
pub struct JsonDismissalStore<S: Storage> {
    storage: S,
    // serialises read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl<S: Storage> JsonDismissalStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<DismissalMap> {
        if !self.storage.exists(DISMISSALS_FILE).await {
            return Ok(DismissalMap::new());
        }
        let bytes = self.storage.read_file(DISMISSALS_FILE).await?;
        if bytes.is_empty() {
            return Ok(DismissalMap::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, map: &DismissalMap) -> Result<()> {
        let json = serde_json::to_vec_pretty(map)?;
        self.storage.write_file(DISMISSALS_FILE, &json).await
    }
}

#[async_trait]
impl<S: Storage> DismissalStore for JsonDismissalStore<S> {
    async fn dismissed(&self, user_id: &str) -> Result<HashSet<String>> {
        let map = self.load().await?;
        Ok(map
            .get(user_id)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn dismiss(&self, user_id: &str, rule_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load().await?;
        let inserted = map
            .entry(user_id.to_string())
            .or_default()
            .insert(rule_id.to_string());
        if inserted {
            tracing::debug!("Dismissing '{}' for user '{}'", rule_id, user_id);
            self.save(&map).await?;
        }
        Ok(())
    }

    async fn restore_all(&self, user_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load().await?;
        if map.remove(user_id).is_some() {
            self.save(&map).await?;
        }
        Ok(())
    }
}
