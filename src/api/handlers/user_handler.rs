//! REST handlers for the user collection.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};

use crate::api::extractors::{JsonBody, UserIdPath};
use crate::api::AppState;
use crate::config::USERS_PATH;
use crate::domain::{User, UserInput};
use crate::errors::{AppError, AppResult};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            USERS_PATH,
            get(list_users).post(create_user).delete(clear_users),
        )
        .route(
            &format!("{}/:id", USERS_PATH),
            put(update_user).get(get_user).delete(delete_user),
        )
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed or incomplete body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users, ascending by id
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found (empty body)")
    )
)]
pub async fn get_user(State(state): State<AppState>, UserIdPath(id): UserIdPath) -> Response {
    match state.user_service.get_user(id).await {
        Ok(user) => Json(user).into_response(),
        Err(AppError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    request_body = UserInput,
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Malformed or incomplete body"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    payload: Result<JsonBody<UserInput>, AppError>,
) -> AppResult<Json<User>> {
    let JsonBody(input) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            // An absent user is reported ahead of a bad body
            state.user_service.get_user(id).await?;
            return Err(rejection);
        }
    };

    let user = state.user_service.update_user(id, input).await?;
    Ok(Json(user))
}

/// Delete user by id; succeeds whether or not the user existed
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted or already absent")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every user
#[utoipa::path(
    delete,
    path = "/users",
    tag = "Users",
    responses(
        (status = 204, description = "All users deleted")
    )
)]
pub async fn clear_users(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.user_service.clear_users().await?;
    Ok(StatusCode::NO_CONTENT)
}
