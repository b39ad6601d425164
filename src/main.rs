use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use quoteflow::config::{Config, LogFormat};
use quoteflow::middleware::ErrorLogger;
use quoteflow::modules::{self, finance_api::FinanceApi, quotes::QuoteConversionService};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("quoteflow={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting quote conversion service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let api: Arc<dyn FinanceApi> = Arc::new(config.finance_api.create_client()?);
    let service = web::Data::new(QuoteConversionService::new(api));
    let currency = web::Data::new(config.finance_api.display_currency()?);

    tracing::info!(
        finance_api = config.finance_api.base_url.as_str(),
        display_currency = %currency.get_ref(),
        "Finance API client initialized"
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let allowed_origin = config.server.allowed_origin.clone();
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(ErrorLogger)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .app_data(currency.clone())
            .configure(modules::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
