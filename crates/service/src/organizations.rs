use std::sync::Arc;

use tracing::warn;

use models::{Category, Organization, OrganizationInput};

use crate::errors::ServiceError;
use crate::storage::JsonDocStore;

/// CRUD operations over one category's organization list.
///
/// Every call runs a full load → locate/mutate → persist cycle against the
/// backing document; nothing is cached between requests.
#[derive(Clone)]
pub struct OrganizationStore {
    store: Arc<JsonDocStore>,
}

impl OrganizationStore {
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocStore::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// All records of one category, ascending by numeric funding amount.
    ///
    /// Amounts that do not reduce to digits sort after every well-formed
    /// amount, ordered by id among themselves, and are logged rather than
    /// failing the request.
    pub async fn list_sorted(&self, category: Category) -> Vec<Organization> {
        let doc = self.store.load().await;
        let mut records = doc.list(category).clone();
        records.sort_by_cached_key(|org| match org.funding_value() {
            Ok(value) => (false, value, org.id),
            Err(e) => {
                warn!(category = %category, id = org.id, error = %e,
                    "malformed funding amount; sorting record last");
                (true, 0, org.id)
            }
        });
        records
    }

    /// Single record by category and id.
    pub async fn get(&self, category: Category, id: u32) -> Option<Organization> {
        let doc = self.store.load().await;
        doc.list(category).iter().find(|org| org.id == id).cloned()
    }

    /// Append a new record, assigning the next id within the category. Any
    /// id in the caller's payload is ignored.
    pub async fn create(
        &self,
        category: Category,
        input: OrganizationInput,
    ) -> Result<Organization, ServiceError> {
        self.store
            .update(|doc| {
                let id = doc.next_id(category);
                let record = input.into_record(id);
                doc.list_mut(category).push(record.clone());
                Ok(record)
            })
            .await
    }

    /// Overwrite one record's funding amount with the supplied value,
    /// verbatim. No format validation happens here; malformed values are
    /// surfaced at sort time instead.
    pub async fn update_funding(
        &self,
        category: Category,
        id: u32,
        fund_amount: String,
    ) -> Result<Organization, ServiceError> {
        self.store
            .update(|doc| {
                let record = doc
                    .list_mut(category)
                    .iter_mut()
                    .find(|org| org.id == id)
                    .ok_or_else(|| ServiceError::not_found("organization"))?;
                record.fund_amount = fund_amount;
                Ok(record.clone())
            })
            .await
    }

    /// Remove one record by id, returning its prior contents.
    pub async fn delete(
        &self,
        category: Category,
        id: u32,
    ) -> Result<Organization, ServiceError> {
        self.store
            .update(|doc| {
                let list = doc.list_mut(category);
                let idx = list
                    .iter()
                    .position(|org| org.id == id)
                    .ok_or_else(|| ServiceError::not_found("organization"))?;
                Ok(list.remove(idx))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (Arc<OrganizationStore>, std::path::PathBuf) {
        let tmp = std::env::temp_dir()
            .join(format!("organizations_{}.json", uuid::Uuid::new_v4()));
        let store = OrganizationStore::new(&tmp).await.expect("store");
        (store, tmp)
    }

    fn input(name: &str, amount: &str) -> OrganizationInput {
        OrganizationInput { org_name: name.into(), fund_amount: amount.into() }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_per_category() -> Result<(), anyhow::Error> {
        let (store, tmp) = store().await;

        let first = store.create(Category::Orphanage, input("First", "₹100")).await?;
        assert_eq!(first.id, 1);
        let second = store.create(Category::Orphanage, input("Second", "₹200")).await?;
        assert_eq!(second.id, 2);

        // Id namespaces are per category.
        let other = store.create(Category::OldageHome, input("Other", "₹300")).await?;
        assert_eq!(other.id, 1);

        // First record is still present and retrievable.
        let fetched = store.get(Category::Orphanage, 1).await.expect("present");
        assert_eq!(fetched, first);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn next_id_follows_max_surviving_id() -> Result<(), anyhow::Error> {
        let (store, tmp) = store().await;

        store.create(Category::Orphanage, input("A", "₹1")).await?;
        store.create(Category::Orphanage, input("B", "₹2")).await?;
        store.delete(Category::Orphanage, 1).await?;

        // Max surviving id is 2, so the next assignment is 3.
        let next = store.create(Category::Orphanage, input("C", "₹3")).await?;
        assert_eq!(next.id, 3);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn list_sorts_ascending_by_numeric_amount() -> Result<(), anyhow::Error> {
        let (store, tmp) = store().await;

        store.create(Category::Orphanage, input("Big", "₹1,000")).await?;
        store.create(Category::Orphanage, input("Small", "₹500")).await?;
        store.create(Category::Orphanage, input("Mid", "₹750")).await?;

        let sorted = store.list_sorted(Category::Orphanage).await;
        let names: Vec<_> = sorted.iter().map(|o| o.org_name.as_str()).collect();
        assert_eq!(names, ["Small", "Mid", "Big"]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn malformed_amounts_sort_last() -> Result<(), anyhow::Error> {
        let (store, tmp) = store().await;

        store.create(Category::Orphanage, input("Broken", "unknown")).await?;
        store.create(Category::Orphanage, input("Cheap", "₹10")).await?;

        let sorted = store.list_sorted(Category::Orphanage).await;
        let names: Vec<_> = sorted.iter().map(|o| o.org_name.as_str()).collect();
        assert_eq!(names, ["Cheap", "Broken"]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_funding_stores_value_verbatim() -> Result<(), anyhow::Error> {
        let (store, tmp) = store().await;

        let rec = store.create(Category::OldageHome, input("Home", "₹100")).await?;
        let updated = store
            .update_funding(Category::OldageHome, rec.id, "₹9,999".into())
            .await?;
        assert_eq!(updated.fund_amount, "₹9,999");

        let fetched = store.get(Category::OldageHome, rec.id).await.expect("present");
        assert_eq!(fetched.fund_amount, "₹9,999");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_funding_missing_id_is_not_found() -> Result<(), anyhow::Error> {
        let (store, tmp) = store().await;
        let res = store.update_funding(Category::Orphanage, 42, "₹1".into()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_returns_prior_record_and_empties_list() -> Result<(), anyhow::Error> {
        let (store, tmp) = store().await;

        let rec = store.create(Category::Orphanage, input("Only", "₹50")).await?;
        let removed = store.delete(Category::Orphanage, rec.id).await?;
        assert_eq!(removed, rec);

        assert!(store.get(Category::Orphanage, rec.id).await.is_none());
        assert!(store.list_sorted(Category::Orphanage).await.is_empty());

        let res = store.delete(Category::Orphanage, rec.id).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn categories_do_not_interfere() -> Result<(), anyhow::Error> {
        let (store, tmp) = store().await;

        store.create(Category::Orphanage, input("Orph", "₹1")).await?;
        store.create(Category::OldageHome, input("Home", "₹2")).await?;

        store.delete(Category::Orphanage, 1).await?;
        assert!(store.get(Category::OldageHome, 1).await.is_some());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
