//! Application factory
//!
//! Builds the Actix-web application around a verification service so the
//! binary and the integration tests share one routing table.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use otp_core::repositories::IssuanceLog;
use otp_core::services::{CodeGenerator, NotificationSender};
use otp_shared::config::{Environment, ServerConfig};

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::cors::create_cors;
use crate::routes::otp::{send_otp, verify_otp, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<L, N, G>(
    app_state: web::Data<AppState<L, N, G>>,
    server: &ServerConfig,
    environment: Environment,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    L: IssuanceLog + 'static,
    N: NotificationSender + 'static,
    G: CodeGenerator + 'static,
{
    let cors = create_cors(server, environment);

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .route("/send-otp", web::post().to(send_otp::<L, N, G>))
        .route("/verify-otp", web::post().to(verify_otp::<L, N, G>))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
