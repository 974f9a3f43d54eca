use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateAddressInput {
    pub id: String,
    pub street: String,
    #[serde(default)]
    pub city: Option<String>,
    pub country: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateAddressInput {
    pub id: String,
    pub street: String,
    #[serde(default)]
    pub city: Option<String>,
    pub country: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteAddressInput {
    pub id: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct AddressIdQuery {
    pub id: String,
}

/// Row projection returned by every procedure; an unknown city is omitted.
#[derive(Debug, Serialize)]
pub struct AddressView {
    pub id: String,
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub country: String,
}

impl From<models::address::Model> for AddressView {
    fn from(m: models::address::Model) -> Self {
        Self { id: m.id, street: m.street, city: m.city, country: m.country }
    }
}

#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageDataEnvelope<T> {
    pub message: &'static str,
    pub data: T,
}

#[utoipa::path(
    post, path = "/address/createAddress", tag = "address",
    request_body = crate::openapi::CreateAddressInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Failed to create address")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateAddressInput>,
) -> Result<Json<DataEnvelope<AddressView>>, JsonApiError> {
    match state
        .addresses
        .create(&input.id, &input.street, input.city.as_deref(), &input.country)
        .await
    {
        Ok(m) => Ok(Json(DataEnvelope { data: m.into() })),
        Err(e) if e.is_validation() => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error"))
        }
        // Store-level failures (duplicate id included) are not classified.
        Err(e) => {
            error!(id = %input.id, err = %e, "create address failed");
            Err(JsonApiError::internal("Failed to create address"))
        }
    }
}

#[utoipa::path(
    get, path = "/address/getAddresses", tag = "address",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "Failed to fetch addresses")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<DataEnvelope<Vec<AddressView>>>, JsonApiError> {
    match state.addresses.list().await {
        Ok(rows) => {
            info!(count = rows.len(), "list addresses");
            Ok(Json(DataEnvelope { data: rows.into_iter().map(Into::into).collect() }))
        }
        Err(e) => {
            error!(err = %e, "fetch addresses failed");
            Err(JsonApiError::internal("Failed to fetch addresses"))
        }
    }
}

#[utoipa::path(
    get, path = "/address/getAddressById", tag = "address",
    params(AddressIdQuery),
    responses(
        (status = 200, description = "OK; data is empty when no row matches")
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Query(q): Query<AddressIdQuery>,
) -> Result<Json<DataEnvelope<Vec<AddressView>>>, JsonApiError> {
    // A missing id yields an empty match set, never NotFound.
    match state.addresses.get_by_id(&q.id).await {
        Ok(rows) => Ok(Json(DataEnvelope { data: rows.into_iter().map(Into::into).collect() })),
        Err(e) => {
            error!(id = %q.id, err = %e, "get address by id failed");
            Err(JsonApiError::internal("Internal Server Error"))
        }
    }
}

#[utoipa::path(
    post, path = "/address/updateAddress", tag = "address",
    request_body = crate::openapi::UpdateAddressInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Json(input): Json<UpdateAddressInput>,
) -> Result<Json<MessageDataEnvelope<AddressView>>, JsonApiError> {
    match state
        .addresses
        .update(&input.id, &input.street, input.city.as_deref(), &input.country)
        .await
    {
        Ok(m) => Ok(Json(MessageDataEnvelope {
            message: "Address successfully updated",
            data: m.into(),
        })),
        Err(service::errors::ServiceError::NotFound(_)) => {
            Err(JsonApiError::not_found("Address not found"))
        }
        Err(e) if e.is_validation() => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error"))
        }
        Err(e) => {
            error!(id = %input.id, err = %e, "update address failed");
            Err(JsonApiError::internal("Internal Server Error"))
        }
    }
}

#[utoipa::path(
    post, path = "/address/deleteAddress", tag = "address",
    request_body = crate::openapi::DeleteAddressInputDoc,
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Json(input): Json<DeleteAddressInput>,
) -> Result<Json<MessageEnvelope>, JsonApiError> {
    match state.addresses.delete(&input.id).await {
        Ok(()) => Ok(Json(MessageEnvelope { message: "Address successfully deleted" })),
        Err(service::errors::ServiceError::NotFound(_)) => {
            Err(JsonApiError::not_found("Address not found"))
        }
        Err(e) => {
            error!(id = %input.id, err = %e, "delete address failed");
            Err(JsonApiError::internal("Internal Server Error"))
        }
    }
}
