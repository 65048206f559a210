//! 베어러 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고, 토큰 주체를 사용자 저장소에서
//! 다시 조회한 뒤 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 extensions 에 넣습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::entities::users::Role;
use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 베어러 토큰 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_role: None,
        }
    }

    pub fn new_with_role(mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            mode,
            required_role: Some(required_role),
        }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// 특정 역할 요구 인증 미들웨어 생성
    pub fn required_with_role(role: Role) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::Single(role))
    }

    /// 복수 역할 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_roles(roles: Vec<Role>) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::Any(roles))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::Duration;
    use serde_json::Map;
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
    use crate::domain::models::token::TokenClass;
    use crate::repositories::users::IdentityStore;
    use crate::domain::entities::users::Identity;
    use crate::services::auth::authentication_service::tests::{fixture, register_request};

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    async fn maybe_whoami(user: OptionalUser) -> HttpResponse {
        match user.0 {
            Some(user) => HttpResponse::Ok().body(user.username),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[actix_web::test]
    async fn test_required_mode() {
        let f = fixture();
        let pair = f.service.register(register_request("alice", "pw")).await.unwrap();
        let data = web::Data::new(f.service);

        let app = test::init_service(
            App::new().app_data(data.clone()).service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let ok = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
            .to_request();
        let res = test::call_service(&app, ok).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "alice");

        let missing = test::TestRequest::get().uri("/me").to_request();
        assert_eq!(test::call_service(&app, missing).await.status(), StatusCode::UNAUTHORIZED);

        let refresh_as_bearer = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", pair.refresh_token)))
            .to_request();
        assert_eq!(
            test::call_service(&app, refresh_as_bearer).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let lowercase_scheme = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("bearer {}", pair.access_token)))
            .to_request();
        assert_eq!(
            test::call_service(&app, lowercase_scheme).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_token_for_unknown_identity_is_rejected() {
        let f = fixture();
        let token = f
            .service
            .token_service()
            .issue("ghost", Map::new(), TokenClass::Access, Duration::minutes(15))
            .unwrap();
        let data = web::Data::new(f.service);

        let app = test::init_service(
            App::new().app_data(data).service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_role_requirement() {
        let f = fixture();
        let user_pair = f.service.register(register_request("alice", "pw")).await.unwrap();
        let admin = Identity::new(
            "Root".to_string(),
            "root@example.com".to_string(),
            "root".to_string(),
            "$2b$04$hash".to_string(),
        )
        .with_role(Role::Admin);
        f.store.save(admin.clone()).await.unwrap();
        let admin_token = f.service.token_service().issue_access_token(&admin).unwrap();
        let data = web::Data::new(f.service);

        let app = test::init_service(
            App::new().app_data(data).service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_role(Role::Admin))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let as_user = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", format!("Bearer {}", user_pair.access_token)))
            .to_request();
        assert_eq!(test::call_service(&app, as_user).await.status(), StatusCode::FORBIDDEN);

        let as_admin = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", format!("Bearer {}", admin_token)))
            .to_request();
        assert_eq!(test::call_service(&app, as_admin).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_optional_mode_allows_anonymous() {
        let f = fixture();
        let pair = f.service.register(register_request("alice", "pw")).await.unwrap();
        let data = web::Data::new(f.service);

        let app = test::init_service(
            App::new().app_data(data).service(
                web::scope("/maybe")
                    .wrap(AuthMiddleware::optional())
                    .route("", web::get().to(maybe_whoami)),
            ),
        )
        .await;

        let anonymous = test::TestRequest::get().uri("/maybe").to_request();
        let res = test::call_service(&app, anonymous).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "anonymous");

        let garbage = test::TestRequest::get()
            .uri("/maybe")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        assert_eq!(test::read_body(test::call_service(&app, garbage).await).await, "anonymous");

        let authed = test::TestRequest::get()
            .uri("/maybe")
            .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
            .to_request();
        assert_eq!(test::read_body(test::call_service(&app, authed).await).await, "alice");
    }

    #[actix_web::test]
    async fn test_role_constructors() {
        let single = AuthMiddleware::required_with_role(Role::Admin);
        let any = AuthMiddleware::required_with_roles(vec![Role::User, Role::Admin]);

        assert_eq!(single.mode, AuthMode::Required);
        assert!(matches!(single.required_role, Some(RequiredRole::Single(Role::Admin))));
        assert!(any.required_role.map_or(false, |r| r.is_satisfied(Role::User)));
        assert!(AuthMiddleware::optional().required_role.is_none());
    }
}
