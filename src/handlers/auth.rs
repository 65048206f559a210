//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 갱신 엔드포인트와 현재 사용자 조회 엔드포인트입니다.
//! 세 인증 엔드포인트는 모두 `{"token": ..., "refreshToken": ...}` 을 반환합니다.
//!
//! # Endpoints
//!
//! - `POST /api/v1/auth/register`
//! - `POST /api/v1/auth/login`
//! - `POST /api/v1/auth/refresh-token`
//! - `GET /api/v1/me` (베어러 토큰 필요)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::users::request::auth_request::validation_failure;
use crate::domain::dto::users::{CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::auth::AuthenticationService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/register`
#[post("/register")]
pub async fn register(
    auth_service: web::Data<AuthenticationService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(validation_failure)?;

    let result = auth_service.register(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 로그인 핸들러
///
/// 사용자명/비밀번호가 틀린 경우와 사용자가 없는 경우는 같은 401 응답을 받습니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthenticationService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(validation_failure)?;

    let result = auth_service.login(&payload.username, &payload.password).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 토큰 갱신 핸들러
///
/// `refreshToken` 이 없거나 비어 있으면 오케스트레이터를 호출하지 않고 400 을 돌려줍니다.
///
/// # Endpoint
/// `POST /api/v1/auth/refresh-token`
#[post("/refresh-token")]
pub async fn refresh_token(
    auth_service: web::Data<AuthenticationService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(validation_failure)?;

    let result = auth_service.refresh(&payload.refresh_token).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 현재 인증된 사용자 조회
///
/// # Endpoint
/// `GET /api/v1/me`
#[get("")]
pub async fn current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(CurrentUserResponse::from(user)))
}
