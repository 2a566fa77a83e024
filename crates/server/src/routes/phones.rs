use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use models::{Characteristic, Phone};
use tracing::info;

use crate::body::parse_json_body;
use crate::errors::ApiError;
use crate::state::AppState;

/// Create and persist a list of phones in memory
///
/// Replaces the whole collection; duplicate identifiers keep the last record.
#[utoipa::path(
    post, path = "/phones", tag = "phones",
    request_body = [crate::openapi::PhoneDoc],
    responses(
        (status = 201, description = "Stored phones", body = [crate::openapi::PhoneDoc]),
        (status = 422, description = "Validation Error", body = crate::openapi::ValidationErrorDoc)
    )
)]
pub async fn replace_all(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<Phone>>), ApiError> {
    let phones: Vec<Phone> = parse_json_body(&headers, &body)?;
    let stored = state.phones.replace_all(phones).await;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Get the list of phones previously saved in memory
#[utoipa::path(
    get, path = "/phones", tag = "phones",
    responses(
        (status = 200, description = "Stored phones", body = [crate::openapi::PhoneDoc])
    )
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Phone>> {
    let phones = state.phones.list().await;
    info!(count = phones.len(), "list phones");
    Json(phones)
}

/// Get a single phone by its identifier
#[utoipa::path(
    get, path = "/phones/{id}", tag = "phones",
    params(("id" = String, Path, description = "Phone identifier")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PhoneDoc),
        (status = 404, description = "Phone not found", body = crate::openapi::NotFoundDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Phone>, ApiError> {
    let phone = state.phones.get(&id).await?;
    Ok(Json(phone))
}

/// Update only the characteristics of a phone
#[utoipa::path(
    put, path = "/phones/{id}/characteristics", tag = "phones",
    params(("id" = String, Path, description = "Phone identifier")),
    request_body = crate::openapi::CharacteristicDoc,
    responses(
        (status = 200, description = "Updated phone", body = crate::openapi::PhoneDoc),
        (status = 404, description = "Phone not found", body = crate::openapi::NotFoundDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ValidationErrorDoc)
    )
)]
pub async fn update_characteristics(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Phone>, ApiError> {
    let characteristics: Characteristic = parse_json_body(&headers, &body)?;
    let updated = state.phones.update_characteristics(&id, characteristics).await?;
    Ok(Json(updated))
}
