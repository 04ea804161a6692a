use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{IdPath, JsonBody, ValidatedJson};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{UpdateUserRequest, User, UserDraft};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
///
/// Mount it with `nest("/api/users", ..)`; the `Location` header of a created user is
/// derived from the mount path.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// GET /users
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    Ok(Json(service.list_users().await?))
}

/// POST /users
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(draft): ValidatedJson<UserDraft>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(draft).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), user.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// GET /users/{id}
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    Ok(Json(service.get_user(id).await?))
}

/// PUT /users/{id}
///
/// The body id is checked against the path before the fields are validated.
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> UserResult<StatusCode> {
    service.update_user(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /users/{id}
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
