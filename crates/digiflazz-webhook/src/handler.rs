use std::future::Future;

use digiflazz::WebhookEvent;

/// Receives verified, decoded webhook events.
///
/// Returning an error makes the server answer 500 so Digiflazz retries the
/// delivery.
pub trait WebhookHandler: Send + Sync + 'static {
    fn handle(&self, event: WebhookEvent) -> impl Future<Output = Result<(), String>> + Send;
}

/// Logs every event and accepts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHandler;

impl WebhookHandler for LoggingHandler {
    async fn handle(&self, event: WebhookEvent) -> Result<(), String> {
        match &event {
            WebhookEvent::Create(tx) | WebhookEvent::Update(tx) => tracing::info!(
                event = event.name(),
                ref_id = %tx.ref_id,
                customer_no = %tx.customer_no,
                sku = %tx.buyer_sku_code,
                status = %tx.status,
                rc = tx.rc.as_ref().map(|rc| rc.as_str()).unwrap_or(""),
                sn = %tx.sn,
                "transaction webhook"
            ),
            WebhookEvent::Ping(ping) => tracing::info!(
                hook_id = %ping.hook_id,
                url = %ping.hook.url,
                hook_type = %ping.hook.hook_type,
                "ping webhook"
            ),
        }
        Ok(())
    }
}
