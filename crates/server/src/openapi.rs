use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct AddressDoc {
    pub id: String,
    pub street: String,
    pub city: Option<String>,
    pub country: String,
}

#[derive(ToSchema)]
pub struct CreateAddressInputDoc {
    pub id: String,
    pub street: String,
    pub city: Option<String>,
    pub country: String,
}

#[derive(ToSchema)]
pub struct UpdateAddressInputDoc {
    pub id: String,
    pub street: String,
    pub city: Option<String>,
    pub country: String,
}

#[derive(ToSchema)]
pub struct DeleteAddressInputDoc {
    pub id: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::addresses::create,
        crate::routes::addresses::list,
        crate::routes::addresses::get_by_id,
        crate::routes::addresses::update,
        crate::routes::addresses::delete,
    ),
    components(
        schemas(
            HealthResponse,
            AddressDoc,
            CreateAddressInputDoc,
            UpdateAddressInputDoc,
            DeleteAddressInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "address")
    )
)]
pub struct ApiDoc;
