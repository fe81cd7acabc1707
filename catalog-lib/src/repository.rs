//! Product repository port and the in-memory adapter.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;

use crate::error::RepositoryError;
use crate::model::Product;

/// The repository port the UI layer programs against.
///
/// Every operation returns an explicit success/failure result; callers
/// decide between optimistic state updates and user-visible errors.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns all products in insertion order.
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Stores a new product. Fails on duplicate id or invalid fields.
    async fn create(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Replaces the product stored under `id` with the given fields.
    /// The stored id wins over whatever id the payload carries.
    async fn update(&self, id: &str, product: Product) -> Result<Product, RepositoryError>;

    /// Deletes the product stored under `id`.
    async fn remove(&self, id: &str) -> Result<(), RepositoryError>;

    /// Returns whether a product with this id already exists.
    async fn verify_id(&self, id: &str) -> Result<bool, RepositoryError>;
}

/// An in-memory repository backed by a concurrent map.
///
/// Insertion order is preserved for `list_all`, since the table renders
/// unsorted rows in source order and relies on it for stable ties.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    store: DashMap<String, (u64, Product)>,
    seq: AtomicU64,
    today: NaiveDate,
}

impl InMemoryProductRepository {
    /// Creates an empty repository validating against the current date.
    pub fn new() -> Self {
        Self::with_reference_date(Utc::now().date_naive())
    }

    /// Creates an empty repository validating release dates against a
    /// fixed reference date. Used by tests to stay off the wall clock.
    pub fn with_reference_date(today: NaiveDate) -> Self {
        Self {
            store: DashMap::new(),
            seq: AtomicU64::new(0),
            today,
        }
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no products are stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut entries: Vec<(u64, Product)> = self
            .store
            .iter()
            .map(|e| (e.value().0, e.value().1.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries.into_iter().map(|(_, p)| p).collect())
    }

    async fn create(&self, product: Product) -> Result<Product, RepositoryError> {
        product.validate(self.today)?;
        if self.store.contains_key(&product.id) {
            return Err(RepositoryError::duplicate(&product.id));
        }
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.store
            .insert(product.id.clone(), (seq, product.clone()));
        log::debug!("[repo] created product {}", product.id);
        Ok(product)
    }

    async fn update(&self, id: &str, product: Product) -> Result<Product, RepositoryError> {
        let merged = Product {
            id: id.to_string(),
            ..product
        };
        merged.validate(self.today)?;

        let Some(mut entry) = self.store.get_mut(id) else {
            return Err(RepositoryError::not_found(id));
        };
        entry.1 = merged.clone();
        log::debug!("[repo] updated product {id}");
        Ok(merged)
    }

    async fn remove(&self, id: &str) -> Result<(), RepositoryError> {
        if self.store.remove(id).is_none() {
            return Err(RepositoryError::not_found(id));
        }
        log::debug!("[repo] removed product {id}");
        Ok(())
    }

    async fn verify_id(&self, id: &str) -> Result<bool, RepositoryError> {
        Ok(self.store.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: "A demo catalog product".into(),
            logo: "https://example.com/logo.png".into(),
            date_release: today(),
            date_revision: today().checked_add_months(Months::new(12)).unwrap(),
        }
    }

    fn repo() -> InMemoryProductRepository {
        InMemoryProductRepository::with_reference_date(today())
    }

    #[tokio::test]
    async fn create_then_list_preserves_insertion_order() {
        let repo = repo();
        repo.create(product("visa-01", "Visa Gold")).await.unwrap();
        repo.create(product("amex-02", "Amex Platinum")).await.unwrap();
        repo.create(product("mc-03", "Mastercard Black")).await.unwrap();

        let ids: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["visa-01", "amex-02", "mc-03"]);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let repo = repo();
        repo.create(product("visa-01", "Visa Gold")).await.unwrap();

        let err = repo.create(product("visa-01", "Visa Gold II")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateId { .. }));
    }

    #[tokio::test]
    async fn invalid_product_is_rejected() {
        let repo = repo();
        let mut p = product("visa-01", "Visa Gold");
        p.name = "xy".into();

        let err = repo.create(p).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Invalid(_)));
    }

    #[tokio::test]
    async fn update_keeps_the_stored_id() {
        let repo = repo();
        repo.create(product("visa-01", "Visa Gold")).await.unwrap();

        let mut changes = product("other-id", "Visa Gold Plus");
        changes.description = "Renamed demo product".into();
        let updated = repo.update("visa-01", changes).await.unwrap();

        assert_eq!(updated.id, "visa-01", "payload id is ignored");
        assert_eq!(updated.name, "Visa Gold Plus");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn update_and_remove_report_missing_ids() {
        let repo = repo();

        let err = repo.update("ghost", product("ghost", "Ghost Card")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));

        let err = repo.remove("ghost").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn verify_id_reports_existing_ids() {
        let repo = repo();
        repo.create(product("visa-01", "Visa Gold")).await.unwrap();

        assert!(repo.verify_id("visa-01").await.unwrap());
        assert!(!repo.verify_id("visa-99").await.unwrap());
    }

    #[tokio::test]
    async fn remove_deletes_the_product() {
        let repo = repo();
        repo.create(product("visa-01", "Visa Gold")).await.unwrap();
        repo.remove("visa-01").await.unwrap();

        assert!(repo.is_empty());
        assert!(!repo.verify_id("visa-01").await.unwrap());
    }
}
