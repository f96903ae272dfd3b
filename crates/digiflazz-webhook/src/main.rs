use actix_web::{web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use digiflazz_webhook::routes;
use digiflazz_webhook::{LoggingHandler, WebhookState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let secret: Vec<u8> = match std::env::var("DIGIFLAZZ_WEBHOOK_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
    {
        Some(s) => s.into_bytes(),
        None => {
            tracing::error!(
                "DIGIFLAZZ_WEBHOOK_SECRET is required. \
                 Use the secret configured for this hook in the Digiflazz dashboard."
            );
            std::process::exit(1);
        }
    };

    let metrics_token = std::env::var("METRICS_TOKEN")
        .ok()
        .filter(|s| !s.is_empty())
        .map(|s| s.into_bytes());

    if metrics_token.is_none() {
        tracing::warn!("METRICS_TOKEN not set, /metrics endpoint is disabled");
    }

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state = web::Data::new(
        WebhookState::new(secret, LoggingHandler).with_metrics_token(metrics_token),
    );

    tracing::info!("Digiflazz webhook receiver listening on port {port}");
    tracing::info!("  POST http://localhost:{port}/webhook");
    tracing::info!("  GET  http://localhost:{port}/health");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(65_536))
            .configure(routes::configure::<LoggingHandler>)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
