use std::sync::Arc;

use tracing::{info, instrument};

use crate::address::repository::AddressStore;
use crate::errors::ServiceError;

/// Application service for the address table. Stateless between calls; every
/// operation is one store call, with no retry on failure.
pub struct AddressService<S: AddressStore> {
    store: Arc<S>,
}

impl<S: AddressStore> AddressService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn create(
        &self,
        id: &str,
        street: &str,
        city: Option<&str>,
        country: &str,
    ) -> Result<models::address::Model, ServiceError> {
        let created = self.store.insert(id, street, city, country).await?;
        info!(id = %created.id, "address_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<models::address::Model>, ServiceError> {
        self.store.select_all().await
    }

    /// Returns the (possibly empty) match set; a missing id is not an error.
    pub async fn get_by_id(&self, id: &str) -> Result<Vec<models::address::Model>, ServiceError> {
        self.store.select_by_id(id).await
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn update(
        &self,
        id: &str,
        street: &str,
        city: Option<&str>,
        country: &str,
    ) -> Result<models::address::Model, ServiceError> {
        let updated = self.store.update_by_id(id, street, city, country).await?;
        info!(id = %updated.id, "address_updated");
        Ok(updated)
    }

    /// Returns NotFound when no row matched; a repeated delete is not
    /// idempotent-success.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let deleted = self.store.delete_by_id(id).await?;
        if !deleted {
            return Err(ServiceError::not_found("address"));
        }
        info!(id = %id, "address_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use models::address::Model;

    use super::*;

    /// In-memory store double; preserves insertion order like the table scan.
    struct MemoryAddressStore {
        rows: Mutex<Vec<Model>>,
    }

    impl MemoryAddressStore {
        fn new() -> Arc<Self> {
            Arc::new(Self { rows: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl AddressStore for MemoryAddressStore {
        async fn insert(
            &self,
            id: &str,
            street: &str,
            city: Option<&str>,
            country: &str,
        ) -> Result<Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|r| r.id == id) {
                return Err(ServiceError::Db(format!(
                    "duplicate key value violates unique constraint: {}",
                    id
                )));
            }
            let row = Model {
                id: id.to_string(),
                street: street.to_string(),
                city: city.map(|c| c.to_string()),
                country: country.to_string(),
            };
            rows.push(row.clone());
            Ok(row)
        }

        async fn select_all(&self) -> Result<Vec<Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn select_by_id(&self, id: &str) -> Result<Vec<Model>, ServiceError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.id == id)
                .cloned()
                .collect())
        }

        async fn update_by_id(
            &self,
            id: &str,
            street: &str,
            city: Option<&str>,
            country: &str,
        ) -> Result<Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
                return Err(ServiceError::not_found("address"));
            };
            row.street = street.to_string();
            if let Some(c) = city {
                row.city = Some(c.to_string());
            }
            row.country = country.to_string();
            Ok(row.clone())
        }

        async fn delete_by_id(&self, id: &str) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            Ok(rows.len() < before)
        }
    }

    fn service() -> AddressService<MemoryAddressStore> {
        AddressService::new(MemoryAddressStore::new())
    }

    #[tokio::test]
    async fn create_then_list_contains_exactly_one_match() {
        let svc = service();
        svc.create("a1", "Main St", None, "US").await.unwrap();
        let all = svc.list().await.unwrap();
        let matches: Vec<_> = all.iter().filter(|r| r.id == "a1").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].street, "Main St");
        assert_eq!(matches[0].city, None);
        assert_eq!(matches[0].country, "US");
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let svc = service();
        svc.create("a1", "Main St", None, "US").await.unwrap();
        let err = svc.create("a1", "Other St", None, "DE").await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        // First row is untouched.
        let rows = svc.get_by_id("a1").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].street, "Main St");
    }

    #[tokio::test]
    async fn update_missing_id_reports_not_found_and_changes_nothing() {
        let svc = service();
        svc.create("a1", "Main St", None, "US").await.unwrap();
        let err = svc.update("missing", "X", None, "Y").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let all = svc.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].street, "Main St");
    }

    #[tokio::test]
    async fn update_changes_fields_and_keeps_id() {
        let svc = service();
        svc.create("a1", "Main St", Some("Austin"), "US").await.unwrap();
        let updated = svc.update("a1", "Second St", Some("Berlin"), "DE").await.unwrap();
        assert_eq!(updated.id, "a1");
        assert_eq!(updated.street, "Second St");
        assert_eq!(updated.city.as_deref(), Some("Berlin"));
        assert_eq!(updated.country, "DE");
        let rows = svc.get_by_id("a1").await.unwrap();
        assert_eq!(rows[0], updated);
    }

    #[tokio::test]
    async fn update_without_city_keeps_stored_city() {
        let svc = service();
        svc.create("a1", "Main St", Some("Austin"), "US").await.unwrap();
        let updated = svc.update("a1", "Second St", None, "US").await.unwrap();
        assert_eq!(updated.city.as_deref(), Some("Austin"));
    }

    #[tokio::test]
    async fn delete_missing_id_reports_not_found() {
        let svc = service();
        let err = svc.delete("missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_row_and_repeat_is_not_found() {
        let svc = service();
        svc.create("a1", "Main St", None, "US").await.unwrap();
        svc.create("a2", "Oak Ave", None, "US").await.unwrap();
        svc.delete("a1").await.unwrap();
        let all = svc.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "a2");
        let err = svc.delete("a1").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_by_id_on_empty_table_returns_empty_set() {
        let svc = service();
        let rows = svc.get_by_id("missing").await.unwrap();
        assert!(rows.is_empty());
    }
}
