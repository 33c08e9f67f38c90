use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use otp_api::app::create_app;
use otp_api::config::{self, Config};
use otp_api::routes::otp::AppState;
use otp_core::services::{RandomCodeGenerator, VerificationService, VerificationServiceConfig};
use otp_infra::{create_mail_transport, JsonlIssuanceLog, MailTransport};

type OtpState = AppState<JsonlIssuanceLog, MailTransport, RandomCodeGenerator>;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let loaded = config::load();

    // Configuration errors are still logged with the default filter
    let environment = loaded
        .as_ref()
        .map(|config| config.environment)
        .unwrap_or_default();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(environment.default_log_level()),
    );

    let config = loaded
        .map_err(|e| {
            log::error!("Invalid configuration: {}", e);
            e
        })
        .context("invalid configuration")?;
    info!("Starting OTP API Server ({})", config.environment);

    let state = web::Data::new(build_state(&config).await?);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let server = config.server.clone();
    HttpServer::new(move || create_app(state.clone(), &server, environment))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}

/// Wire the issuance log, mail transport and code generator together
async fn build_state(config: &Config) -> anyhow::Result<OtpState> {
    let log = JsonlIssuanceLog::open(&config.log_store)
        .await
        .with_context(|| {
            format!(
                "failed to open issuance log at {}",
                config.log_store.file_path().display()
            )
        })?;
    info!("Issuance log: {}", log.path().display());

    let transport =
        create_mail_transport(&config.mail).context("failed to set up mail transport")?;
    info!("Mail transport: {}", config.mail.transport_name());

    let service = VerificationService::new(
        Arc::new(log),
        Arc::new(transport),
        Arc::new(RandomCodeGenerator),
        VerificationServiceConfig::from(&config.otp),
    );

    Ok(AppState {
        verification_service: Arc::new(service),
        expose_code: config.otp.expose_code,
    })
}
