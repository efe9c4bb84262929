use crate::domain::model::Suggestion;
use crate::domain::ports::DismissalStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Drops the suggestions `user_id` has dismissed, keeping rule order.
pub async fn active_suggestions<D: DismissalStore + ?Sized>(
    store: &D,
    user_id: &str,
    suggestions: Vec<Suggestion>,
) -> Result<Vec<Suggestion>> {
    let dismissed = store.dismissed(user_id).await?;
    let total = suggestions.len();
    let active: Vec<Suggestion> = suggestions
        .into_iter()
        .filter(|s| !dismissed.contains(&s.id))
        .collect();

    tracing::debug!(
        "{} of {} suggestions hidden for user '{}'",
        total - active.len(),
        total,
        user_id
    );
    Ok(active)
}

#[derive(Debug, Default)]
pub struct InMemoryDismissalStore {
    by_user: Mutex<HashMap<String, HashSet<String>>>,
}

impl InMemoryDismissalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DismissalStore for InMemoryDismissalStore {
    async fn dismissed(&self, user_id: &str) -> Result<HashSet<String>> {
        let by_user = self.by_user.lock().unwrap_or_else(|e| e.into_inner());
        Ok(by_user.get(user_id).cloned().unwrap_or_default())
    }

    async fn dismiss(&self, user_id: &str, rule_id: &str) -> Result<()> {
        let mut by_user = self.by_user.lock().unwrap_or_else(|e| e.into_inner());
        by_user
            .entry(user_id.to_string())
            .or_default()
            .insert(rule_id.to_string());
        Ok(())
    }

    async fn restore_all(&self, user_id: &str) -> Result<()> {
        let mut by_user = self.by_user.lock().unwrap_or_else(|e| e.into_inner());
        by_user.remove(user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SuggestionKind;

    fn suggestion(id: &str) -> Suggestion {
        Suggestion::new(id, SuggestionKind::Info, "title", "description")
    }

    #[test]
    fn test_dismissals_are_per_user() {
        tokio_test::block_on(async {
            let store = InMemoryDismissalStore::new();
            store.dismiss("ana", "add-passport").await.unwrap();

            let all = vec![suggestion("trip-approaching"), suggestion("add-passport")];
            let for_ana = active_suggestions(&store, "ana", all.clone()).await.unwrap();
            assert_eq!(for_ana, vec![suggestion("trip-approaching")]);

            let for_rui = active_suggestions(&store, "rui", all.clone()).await.unwrap();
            assert_eq!(for_rui, all);
        });
    }

    #[test]
    fn test_restore_all() {
        tokio_test::block_on(async {
            let store = InMemoryDismissalStore::new();
            store.dismiss("ana", "boost-progress").await.unwrap();
            store.restore_all("ana").await.unwrap();
            assert!(store.dismissed("ana").await.unwrap().is_empty());
        });
    }
}
