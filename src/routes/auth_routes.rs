//! Rutas de autenticación y administración de usuarios

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use uuid::Uuid;

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    LoginEnvelope, LoginRequest, MeResponse, RegisterEnvelope, RegisterRequest, SessionUser,
    UpdateUserRequest, UserEnvelope, UserResponse, VerifyResponse,
};
use crate::dto::common::MessageResponse;
use crate::middleware::auth::{admin_only, auth_required, AuthenticatedUser, TOKEN_COOKIE};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_auth_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/register", post(register))
        .route("/users", get(get_users))
        .route("/users/:id", put(update_user).delete(delete_user))
        .route_layer(middleware::from_fn(admin_only));

    let protected = Router::new()
        .route("/profile", get(get_profile))
        .route("/verify", get(verify_session))
        .route("/me", get(me))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_required));

    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .merge(protected)
}

/// Construir la cookie de sesión HTTP-only
fn session_cookie(token: String, expiration_secs: u64) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(expiration_secs as i64))
        .build()
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginEnvelope>), AppError> {
    let jwt_config = JwtConfig::from(&state.config);
    let controller = AuthController::new(state.pool.clone());

    let (token, envelope) = controller.login(request, &jwt_config).await?;
    let jar = jar.add(session_cookie(token, state.config.jwt_expiration));

    Ok((jar, Json(envelope)))
}

async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let removal = Cookie::build((TOKEN_COOKIE, "")).path("/").build();
    (
        jar.remove(removal),
        Json(MessageResponse::new("Cierre de sesión exitoso")),
    )
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterEnvelope>), AppError> {
    let controller = AuthController::new(state.pool.clone());
    let envelope = controller.register(request).await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

async fn get_profile(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let profile = controller.profile(user.user_id).await?;
    Ok(Json(profile))
}

async fn verify_session(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        is_valid: true,
        user: SessionUser {
            id: user.user_id,
            role: user.role.as_str().to_string(),
        },
    })
}

async fn me(Extension(user): Extension<AuthenticatedUser>) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: user.user_id,
        role: user.role.as_str().to_string(),
    })
}

async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let users = controller.list_users().await?;
    Ok(Json(users))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserEnvelope>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let envelope = controller.update_user(id, request).await?;
    Ok(Json(envelope))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.delete_user(id).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only_strict() {
        let cookie = session_cookie("abc.def.ghi".to_string(), 10800);

        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        // 3 horas de vigencia, igual que el token
        assert_eq!(cookie.max_age(), Some(Duration::seconds(10800)));
    }
}
