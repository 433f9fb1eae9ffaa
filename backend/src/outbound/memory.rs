//! In-memory preference store adapter.
//!
//! Documents are keyed by user and category under a read-write lock.
//! Suitable for single-process deployments and tests; a database-backed
//! adapter can replace it behind the same port.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{PreferenceStore, PreferenceStoreError};
use crate::domain::{Category, CategoryPreferences, PreferenceDocument, UserId};

#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    documents: RwLock<HashMap<(Uuid, Category), CategoryPreferences>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> Result<
        std::sync::RwLockReadGuard<'_, HashMap<(Uuid, Category), CategoryPreferences>>,
        PreferenceStoreError,
    > {
        self.documents
            .read()
            .map_err(|_| PreferenceStoreError::unavailable("preference lock poisoned"))
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(
        &self,
        user_id: &UserId,
        category: Category,
    ) -> Result<Option<PreferenceDocument>, PreferenceStoreError> {
        let documents = self.read()?;
        Ok(documents
            .get(&(*user_id.as_uuid(), category))
            .cloned()
            .map(|preferences| PreferenceDocument::new(user_id.clone(), preferences)))
    }

    async fn all(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PreferenceDocument>, PreferenceStoreError> {
        let documents = self.read()?;
        let mut found: Vec<PreferenceDocument> = documents
            .iter()
            .filter(|((uuid, _), _)| uuid == user_id.as_uuid())
            .map(|(_, preferences)| PreferenceDocument::new(user_id.clone(), preferences.clone()))
            .collect();
        found.sort_by_key(|document| document.category().as_str());
        Ok(found)
    }

    async fn put(&self, document: PreferenceDocument) -> Result<(), PreferenceStoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| PreferenceStoreError::unavailable("preference lock poisoned"))?;
        documents.insert(
            (*document.user_id.as_uuid(), document.category()),
            document.preferences,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips_a_document() {
        let store = InMemoryPreferenceStore::new();
        let user = UserId::random();
        let preferences = CategoryPreferences::Food {
            cuisines: vec!["thai".to_owned()],
            dietary: vec!["vegetarian".to_owned()],
        };
        store
            .put(PreferenceDocument::new(user.clone(), preferences.clone()))
            .await
            .expect("put");

        let found = store.get(&user, Category::Food).await.expect("get");
        assert_eq!(found.map(|document| document.preferences), Some(preferences));
    }

    #[tokio::test]
    async fn put_replaces_the_existing_category_document() {
        let store = InMemoryPreferenceStore::new();
        let user = UserId::random();
        for cuisine in ["thai", "mexican"] {
            store
                .put(PreferenceDocument::new(
                    user.clone(),
                    CategoryPreferences::Food {
                        cuisines: vec![cuisine.to_owned()],
                        dietary: Vec::new(),
                    },
                ))
                .await
                .expect("put");
        }

        let all = store.all(&user).await.expect("all");
        assert_eq!(all.len(), 1);
        assert_eq!(
            all[0].preferences,
            CategoryPreferences::Food {
                cuisines: vec!["mexican".to_owned()],
                dietary: Vec::new(),
            }
        );
    }

    #[tokio::test]
    async fn users_do_not_see_each_other() {
        let store = InMemoryPreferenceStore::new();
        let alice = UserId::random();
        let bob = UserId::random();
        store
            .put(PreferenceDocument::new(
                alice.clone(),
                CategoryPreferences::default_for(Category::News),
            ))
            .await
            .expect("put");

        assert_eq!(store.get(&bob, Category::News).await, Ok(None));
        assert_eq!(store.all(&bob).await, Ok(Vec::new()));
    }
}
