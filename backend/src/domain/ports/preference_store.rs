//! Port for the user preference store.
//!
//! The store is read-only from the aggregation core's perspective: feeds
//! call [`PreferenceStore::get`] fresh on every request and never cache
//! documents across calls. The write operations exist for the preference
//! management endpoints, which sit outside the aggregation pipeline.

use async_trait::async_trait;

use crate::domain::{Category, PreferenceDocument, UserId};

/// Errors raised by preference store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceStoreError {
    /// The store could not be reached.
    #[error("preference store unavailable: {message}")]
    Unavailable { message: String },
    /// A read or write failed during execution.
    #[error("preference store query failed: {message}")]
    Query { message: String },
}

impl PreferenceStoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Keyed access to per-category preference documents.
///
/// Must be safe under concurrent reads; the aggregation core never writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Fetch one category's document for a user, `None` when absent.
    async fn get(
        &self,
        user_id: &UserId,
        category: Category,
    ) -> Result<Option<PreferenceDocument>, PreferenceStoreError>;

    /// Fetch every stored document for a user.
    async fn all(&self, user_id: &UserId)
        -> Result<Vec<PreferenceDocument>, PreferenceStoreError>;

    /// Insert or replace one category's document.
    async fn put(&self, document: PreferenceDocument) -> Result<(), PreferenceStoreError>;
}

/// Fixture store for tests that never finds a document and discards writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePreferenceStore;

#[async_trait]
impl PreferenceStore for FixturePreferenceStore {
    async fn get(
        &self,
        _user_id: &UserId,
        _category: Category,
    ) -> Result<Option<PreferenceDocument>, PreferenceStoreError> {
        Ok(None)
    }

    async fn all(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<PreferenceDocument>, PreferenceStoreError> {
        Ok(Vec::new())
    }

    async fn put(&self, _document: PreferenceDocument) -> Result<(), PreferenceStoreError> {
        Ok(())
    }
}
