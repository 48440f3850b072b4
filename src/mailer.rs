use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::config::MailerConfig;

/// Outbound mail delivery. Callers treat sends as best effort.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_welcome_email(&self, to: &str, name: &str) -> anyhow::Result<()>;
}

fn welcome_subject() -> &'static str {
    "Welcome to AuthFort"
}

fn welcome_body(name: &str) -> String {
    format!(
        "Hello {name},\n\nYour AuthFort account has been created successfully.\n"
    )
}

/// Delivers mail through an HTTP mail API (JSON body, bearer key).
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from_address: String,
}

impl HttpMailer {
    pub fn new(config: &MailerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send_welcome_email(&self, to: &str, name: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from_address,
                "to": to,
                "subject": welcome_subject(),
                "text": welcome_body(name),
            }))
            .send()
            .await
            .context("mail API request")?;

        if !response.status().is_success() {
            anyhow::bail!("mail API responded with {}", response.status());
        }
        debug!(%to, "welcome email sent");
        Ok(())
    }
}

/// Fallback when no mail endpoint is configured: log the send and succeed.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_welcome_email(&self, to: &str, name: &str) -> anyhow::Result<()> {
        info!(%to, %name, "welcome email (no mailer endpoint configured, logged only)");
        Ok(())
    }
}
