use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::user_dto::{CreateUserPayload, UserListQuery, UserResponse},
    error::{Error, Result},
    AppState,
};

/// Parses a raw `limit` value. Non-numeric input counts as 0, and anything
/// outside [1, 25] falls back to the default of 10.
fn page_limit(raw: Option<&str>) -> i64 {
    let limit = raw.and_then(|v| v.parse::<i64>().ok()).unwrap_or(0);
    if (1..=25).contains(&limit) {
        limit
    } else {
        10
    }
}

/// Parses a raw `offset` value. Non-numeric input counts as 0; negative
/// offsets are clamped to 0.
fn page_offset(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok()).unwrap_or(0).max(0)
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse> {
    let limit = page_limit(query.limit.as_deref());
    let offset = page_offset(query.offset.as_deref());

    let users = state.user_service.list(limit, offset).await?;
    let users: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    // A body that does not decode is the client's fault; respond 400 with
    // an empty body and insert nothing.
    let Json(payload) = payload.map_err(|_| Error::BadRequest)?;

    state.user_service.create(payload).await?;
    Ok(StatusCode::CREATED)
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get_by_uuid(id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_in_range_passes_through() {
        assert_eq!(page_limit(Some("1")), 1);
        assert_eq!(page_limit(Some("17")), 17);
        assert_eq!(page_limit(Some("25")), 25);
    }

    #[test]
    fn limit_outside_range_defaults_to_ten() {
        assert_eq!(page_limit(Some("0")), 10);
        assert_eq!(page_limit(Some("-3")), 10);
        assert_eq!(page_limit(Some("26")), 10);
        assert_eq!(page_limit(Some("30")), 10);
    }

    #[test]
    fn limit_missing_or_non_numeric_defaults_to_ten() {
        assert_eq!(page_limit(None), 10);
        assert_eq!(page_limit(Some("")), 10);
        assert_eq!(page_limit(Some("abc")), 10);
    }

    #[test]
    fn offset_clamps_to_non_negative() {
        assert_eq!(page_offset(Some("5")), 5);
        assert_eq!(page_offset(Some("0")), 0);
        assert_eq!(page_offset(Some("-5")), 0);
    }

    #[test]
    fn offset_missing_or_non_numeric_is_zero() {
        assert_eq!(page_offset(None), 0);
        assert_eq!(page_offset(Some("xyz")), 0);
    }
}
