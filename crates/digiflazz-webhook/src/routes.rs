use actix_web::{get, web, HttpRequest, HttpResponse};
use digiflazz::{WebhookError, WebhookEvent, EVENT_HEADER, SIGNATURE_HEADER};
use subtle::ConstantTimeEq;

use crate::handler::WebhookHandler;
use crate::metrics;
use crate::state::WebhookState;

/// Register every route for handler type `H`.
///
/// The matching `web::Data<WebhookState<H>>` must be added as app data.
pub fn configure<H: WebhookHandler>(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .route("/webhook", web::post().to(receive::<H>))
        .route("/metrics", web::get().to(metrics_endpoint::<H>));
}

fn header_str<'a>(req: &'a HttpRequest, name: &str) -> &'a str {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Validate the signature header on an incoming webhook.
/// Returns an error response if the signature is missing or invalid.
fn validate_signature<H>(
    req: &HttpRequest,
    body: &[u8],
    state: &WebhookState<H>,
) -> Result<(), HttpResponse> {
    let header = header_str(req, SIGNATURE_HEADER);

    match digiflazz::verify_signature(&state.secret, body, header) {
        Ok(()) => Ok(()),
        Err(WebhookError::MissingSignature) => {
            tracing::warn!("webhook signature header missing");
            metrics::WEBHOOK_REJECTIONS
                .with_label_values(&["missing_signature"])
                .inc();
            Err(HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "authentication required"
            })))
        }
        Err(e) => {
            tracing::warn!(error = %e, "webhook signature rejected");
            metrics::WEBHOOK_REJECTIONS
                .with_label_values(&["invalid_signature"])
                .inc();
            Err(HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "authentication failed"
            })))
        }
    }
}

/// `POST /webhook`: verify, decode, dispatch.
pub async fn receive<H: WebhookHandler>(
    req: HttpRequest,
    state: web::Data<WebhookState<H>>,
    body: web::Bytes,
) -> HttpResponse {
    if let Err(resp) = validate_signature(&req, &body, &state) {
        return resp;
    }

    let event = match WebhookEvent::parse(header_str(&req, EVENT_HEADER), &body) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "webhook payload rejected");
            metrics::WEBHOOK_REJECTIONS
                .with_label_values(&["malformed"])
                .inc();
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "invalid webhook",
                "message": e.to_string(),
            }));
        }
    };

    let name = event.name();
    match event.transaction() {
        Some(tx) => tracing::info!(
            event = name,
            ref_id = %tx.ref_id,
            status = %tx.status,
            "webhook accepted"
        ),
        None => tracing::info!(event = name, "webhook accepted"),
    }

    match state.handler.handle(event).await {
        Ok(()) => {
            metrics::WEBHOOK_EVENTS.with_label_values(&[name]).inc();
            HttpResponse::Ok().json(serde_json::json!({
                "ok": true,
                "event": name,
            }))
        }
        Err(e) => {
            tracing::error!(event = name, error = %e, "webhook handler failed");
            metrics::WEBHOOK_REJECTIONS
                .with_label_values(&["handler"])
                .inc();
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "handler failed"
            }))
        }
    }
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "digiflazz-webhook",
    }))
}

/// `GET /metrics`: Prometheus text, bearer-token protected.
pub async fn metrics_endpoint<H: WebhookHandler>(
    req: HttpRequest,
    state: web::Data<WebhookState<H>>,
) -> HttpResponse {
    let Some(token) = &state.metrics_token else {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "forbidden",
            "message": "Set METRICS_TOKEN to access /metrics"
        }));
    };

    let authorized = header_str(&req, "authorization")
        .strip_prefix("Bearer ")
        .map(|t| bool::from(t.as_bytes().ct_eq(token)))
        .unwrap_or(false);

    if !authorized {
        return HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "unauthorized",
            "message": "Valid Bearer token required for /metrics"
        }));
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics::metrics_output())
}
