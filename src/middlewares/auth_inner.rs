//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser, RequiredRole};
use crate::errors::errors::AppError;
use crate::services::auth::{extract_bearer_token, AuthenticationService};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let auth_result = resolve_user(&req).await;

            match (&mode, auth_result) {
                // 저장소 장애 등 서버 측 실패는 인증 실패로 위장하지 않는다
                (_, Err(err)) if err.status_code().is_server_error() => {
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                },
                (AuthMode::Required, Err(_)) | (AuthMode::Required, Ok(None)) => {
                    log::warn!("인증 실패: {}", req.path());
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "유효한 인증 토큰이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                (AuthMode::Required, Ok(Some(user))) => {
                    if let Some(ref required) = required_role {
                        if !required.is_satisfied(user.role) {
                            log::warn!("권한 부족: 사용자 {} ({}), 필요 권한: {:?}",
                                user.username, user.role.as_str(), required);
                            let response = HttpResponse::Forbidden()
                                .json(serde_json::json!({
                                    "error": "insufficient_permissions",
                                    "message": "접근 권한이 부족합니다"
                                }));
                            let (req, _) = req.into_parts();
                            let res = ServiceResponse::new(req, response)
                                .map_into_right_body();
                            return Ok(res);
                        }
                    }

                    log::debug!("인증 성공: 사용자 {}", user.username);
                    req.extensions_mut().insert(user);
                },
                (AuthMode::Optional, Ok(Some(user))) => {
                    let allowed = required_role
                        .as_ref()
                        .map_or(true, |required| required.is_satisfied(user.role));

                    if allowed {
                        log::debug!("선택적 인증 성공: 사용자 {}", user.username);
                        req.extensions_mut().insert(user);
                    } else {
                        log::debug!("선택적 인증: 권한 부족하지만 진행 허용");
                    }
                },
                (AuthMode::Optional, _) => {
                    log::debug!("선택적 인증: 유효한 토큰 없음, 요청 진행");
                },
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 베어러 토큰으로 사용자를 확인합니다.
///
/// # Returns
///
/// * `Ok(Some(user))` - 토큰이 유효하고 주체가 저장소에 존재하는 경우
/// * `Ok(None)` - `Authorization` 헤더가 없거나 베어러 형식이 아닌 경우
/// * `Err(AppError)` - 토큰 검증 실패, 사용자 없음, 저장소 실패
async fn resolve_user(req: &ServiceRequest) -> Result<Option<AuthenticatedUser>, AppError> {
    let auth_service = req
        .app_data::<web::Data<AuthenticationService>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("AuthenticationService가 등록되지 않았습니다".to_string()))?;
    let tokens = auth_service.token_service();

    let header = req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let username = match tokens.username_from_bearer_header(header)? {
        Some(username) => username,
        None => return Ok(None),
    };

    let identity = auth_service
        .identity_store()
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::IdentityNotFound(username.clone()))?;

    let token = header.and_then(extract_bearer_token).unwrap_or_default();
    if !tokens.is_access_token_valid(token, &identity.username) {
        return Ok(None);
    }

    Ok(Some(AuthenticatedUser::from(&identity)))
}
