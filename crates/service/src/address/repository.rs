use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Abstract store over the address table: one method per single-statement
/// operation, each reporting affected rows through its return shape.
#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn insert(
        &self,
        id: &str,
        street: &str,
        city: Option<&str>,
        country: &str,
    ) -> Result<models::address::Model, ServiceError>;
    async fn select_all(&self) -> Result<Vec<models::address::Model>, ServiceError>;
    async fn select_by_id(&self, id: &str) -> Result<Vec<models::address::Model>, ServiceError>;
    async fn update_by_id(
        &self,
        id: &str,
        street: &str,
        city: Option<&str>,
        country: &str,
    ) -> Result<models::address::Model, ServiceError>;
    async fn delete_by_id(&self, id: &str) -> Result<bool, ServiceError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmAddressStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AddressStore for SeaOrmAddressStore {
    async fn insert(
        &self,
        id: &str,
        street: &str,
        city: Option<&str>,
        country: &str,
    ) -> Result<models::address::Model, ServiceError> {
        crate::db::address_service::create_address(&self.db, id, street, city, country).await
    }

    async fn select_all(&self) -> Result<Vec<models::address::Model>, ServiceError> {
        crate::db::address_service::list_addresses(&self.db).await
    }

    async fn select_by_id(&self, id: &str) -> Result<Vec<models::address::Model>, ServiceError> {
        crate::db::address_service::get_address_by_id(&self.db, id).await
    }

    async fn update_by_id(
        &self,
        id: &str,
        street: &str,
        city: Option<&str>,
        country: &str,
    ) -> Result<models::address::Model, ServiceError> {
        crate::db::address_service::update_address(&self.db, id, street, city, country).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        crate::db::address_service::delete_address(&self.db, id).await
    }
}
