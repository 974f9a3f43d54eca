use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    /// Caller-supplied identifier; uniqueness comes from the primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub street: String,
    pub city: Option<String>,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_id(id: &str) -> Result<(), ModelError> {
    if id.trim().is_empty() {
        return Err(ModelError::Validation("id required".into()));
    }
    Ok(())
}

pub fn validate_street(street: &str) -> Result<(), ModelError> {
    if street.trim().is_empty() {
        return Err(ModelError::Validation("street required".into()));
    }
    Ok(())
}

pub fn validate_country(country: &str) -> Result<(), ModelError> {
    if country.trim().is_empty() {
        return Err(ModelError::Validation("country required".into()));
    }
    Ok(())
}

/// Insert one address row. An absent city is stored as NULL.
pub async fn create(
    db: &DatabaseConnection,
    id: &str,
    street: &str,
    city: Option<&str>,
    country: &str,
) -> Result<Model, ModelError> {
    validate_id(id)?;
    validate_street(street)?;
    validate_country(country)?;
    let am = ActiveModel {
        id: Set(id.to_string()),
        street: Set(street.to_string()),
        city: Set(city.map(|c| c.to_string())),
        country: Set(country.to_string()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
