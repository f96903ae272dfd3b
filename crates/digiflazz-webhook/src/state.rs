/// Shared application state for the webhook server.
pub struct WebhookState<H> {
    /// Secret configured for the hook in the Digiflazz dashboard.
    pub secret: Vec<u8>,
    pub handler: H,
    /// Bearer token for `/metrics`. Without one the endpoint is forbidden.
    pub metrics_token: Option<Vec<u8>>,
}

impl<H> WebhookState<H> {
    pub fn new(secret: impl Into<Vec<u8>>, handler: H) -> Self {
        Self {
            secret: secret.into(),
            handler,
            metrics_token: None,
        }
    }

    pub fn with_metrics_token(mut self, token: Option<Vec<u8>>) -> Self {
        self.metrics_token = token;
        self
    }
}
