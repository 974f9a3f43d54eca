use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use service::address::{repository::SeaOrmAddressStore, service::AddressService};

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub auth: ServerAuthConfig,
    pub addresses: Arc<AddressService<SeaOrmAddressStore>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

/// Mint an HS256 token. Token issuance normally happens out of band; this
/// exists for tests and local tooling.
pub fn issue_token(secret: &str, sub: &str, ttl_secs: u64) -> anyhow::Result<String> {
    let exp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() + ttl_secs;
    let claims = Claims { sub: sub.to_string(), exp: exp as usize };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Middleware: require a valid bearer token on protected procedures.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let path = req.uri().path().to_string();

    let authz = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let Some(h) = authz else {
        tracing::warn!(path = %path, "missing Authorization header");
        return Err(StatusCode::UNAUTHORIZED);
    };
    let prefix = "Bearer ";
    if !h.starts_with(prefix) {
        tracing::warn!(path = %path, "invalid Authorization format (expect Bearer)");
        return Err(StatusCode::UNAUTHORIZED);
    }
    let token = &h[prefix.len()..];

    let key = DecodingKey::from_secret(state.auth.jwt_secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    match decode::<Claims>(token, &key, &validation) {
        Ok(_data) => Ok(next.run(req).await),
        Err(e) => {
            tracing::error!(path = %path, err = %e, "token validation failed");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
