use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MailerConfig {
    pub endpoint: String,
    pub api_key: String,
    pub from_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub mailer: Option<MailerConfig>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        // No MAILER_ENDPOINT means welcome mails are logged instead of delivered.
        let mailer = std::env::var("MAILER_ENDPOINT").ok().map(|endpoint| MailerConfig {
            endpoint,
            api_key: std::env::var("MAILER_API_KEY").unwrap_or_default(),
            from_address: std::env::var("MAILER_FROM")
                .unwrap_or_else(|_| "no-reply@authfort.local".into()),
        });
        Ok(Self {
            database_url,
            mailer,
        })
    }
}
