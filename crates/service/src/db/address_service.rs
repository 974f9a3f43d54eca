use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::ServiceError;
use models::address::{self, Entity as AddressEntity};

/// List every address row.
pub async fn list_addresses(db: &DatabaseConnection) -> Result<Vec<address::Model>, ServiceError> {
    let rows = AddressEntity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create an address after validation. Duplicate ids fail at the primary key.
pub async fn create_address(
    db: &DatabaseConnection,
    id: &str,
    street: &str,
    city: Option<&str>,
    country: &str,
) -> Result<address::Model, ServiceError> {
    // validations are in models::address
    let created = address::create(db, id, street, city, country).await?;
    Ok(created)
}

/// Select the rows matching `id`. The match set may be empty; callers decide
/// whether that is an error.
pub async fn get_address_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Vec<address::Model>, ServiceError> {
    let rows = AddressEntity::find()
        .filter(address::Column::Id.eq(id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Update street, country, and (when supplied) city of the row matching `id`.
/// The id itself is immutable. Zero matched rows is NotFound.
pub async fn update_address(
    db: &DatabaseConnection,
    id: &str,
    street: &str,
    city: Option<&str>,
    country: &str,
) -> Result<address::Model, ServiceError> {
    address::validate_street(street)?;
    address::validate_country(country)?;
    let current = AddressEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else {
        return Err(ServiceError::not_found("address"));
    };
    let mut am: address::ActiveModel = existing.into();
    am.street = Set(street.to_string());
    if let Some(c) = city {
        am.city = Set(Some(c.to_string()));
    }
    am.country = Set(country.to_string());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete the row matching `id`; returns true if a row was removed.
pub async fn delete_address(db: &DatabaseConnection, id: &str) -> Result<bool, ServiceError> {
    let res = AddressEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn address_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(());
        }
        let db = get_db().await?;

        let id = format!("svc_addr_{}", Uuid::new_v4());

        let a = create_address(&db, &id, "Main St", None, "US").await?;
        assert_eq!(a.id, id);
        assert_eq!(a.city, None);

        let found = get_address_by_id(&db, &id).await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].street, "Main St");

        // Duplicate id is rejected by the primary key, not classified further.
        let dup = create_address(&db, &id, "Other St", None, "DE").await;
        assert!(dup.is_err());

        let updated = update_address(&db, &id, "Second St", Some("Berlin"), "DE").await?;
        assert_eq!(updated.id, id);
        assert_eq!(updated.street, "Second St");
        assert_eq!(updated.city.as_deref(), Some("Berlin"));
        assert_eq!(updated.country, "DE");

        // Absent city leaves the stored value untouched.
        let updated = update_address(&db, &id, "Third St", None, "DE").await?;
        assert_eq!(updated.city.as_deref(), Some("Berlin"));

        let all = list_addresses(&db).await?;
        assert!(all.iter().any(|x| x.id == id));

        let deleted = delete_address(&db, &id).await?;
        assert!(deleted);
        let deleted_again = delete_address(&db, &id).await?;
        assert!(!deleted_again);

        let missing = update_address(&db, &id, "X", None, "Y").await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));

        let empty = get_address_by_id(&db, &id).await?;
        assert!(empty.is_empty());

        Ok(())
    }
}
