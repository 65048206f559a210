//! 인증 코어 메인 애플리케이션
//!
//! 서명 키를 해석하고 인증 서비스를 조립한 뒤 Actix-web HTTP 서버를 구동합니다.
//! 서명 키 설정이 잘못되면 요청을 받기 전에 종료합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use chatbot_auth_backend::config::{PasswordConfig, ServerConfig};
use chatbot_auth_backend::errors::AppError;
use chatbot_auth_backend::repositories::users::{IdentityStore, InMemoryIdentityStore};
use chatbot_auth_backend::routes::configure_all_routes;
use chatbot_auth_backend::services::auth::{
    AuthenticationService, BcryptCredentialVerifier, KeyProvider, TokenService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 인증 서비스 시작중...");

    let auth_service = match build_authentication_service() {
        Ok(service) => web::Data::new(service),
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(auth_service).await
}

/// 서명 키, 사용자 저장소, 자격 증명 검증기를 조립합니다.
///
/// # Errors
///
/// * `AppError::ConfigurationError` - 서명 키가 없거나 형식이 잘못된 경우
fn build_authentication_service() -> Result<AuthenticationService, AppError> {
    let keys = KeyProvider::initialize()?;
    let tokens = Arc::new(TokenService::new(keys));

    let store: Arc<dyn IdentityStore> = Arc::new(InMemoryIdentityStore::new());
    let verifier = Arc::new(BcryptCredentialVerifier::new(
        store.clone(),
        PasswordConfig::bcrypt_cost(),
    ));

    Ok(AuthenticationService::new(store, verifier, tokens))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(auth_service: web::Data<AuthenticationService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .app_data(auth_service.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr 로만 남긴다
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    if let Err(e) = loaded {
        eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=info,token_audit=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드 개발 서버(`http://localhost:3000`)에서의 호출을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
