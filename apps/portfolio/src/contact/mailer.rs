use std::time::Duration;

use async_trait::async_trait;
use lettre::address::AddressError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::info;

use crate::config::SmtpConfig;
use crate::contact::form::ContactForm;
use crate::errors::AppError;

const SMTP_TIMEOUT: Duration = Duration::from_secs(20);
const IMPLICIT_TLS_PORT: u16 = 465;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP is not configured (missing {})", .0.join(", "))]
    NotConfigured(Vec<&'static str>),

    #[error("invalid address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

impl From<MailError> for AppError {
    fn from(e: MailError) -> Self {
        AppError::Mail(e.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Delivers contact submissions. Carried in `AppState` as `Arc<dyn Mailer>`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), MailError>;
}

// ────────────────────────────────────────────────────────────────────────────
// SmtpMailer: authenticated SMTP via lettre
// ────────────────────────────────────────────────────────────────────────────

/// Opens one authenticated SMTP session per message.
///
/// Port 465 uses implicit TLS, anything else upgrades with STARTTLS.
/// Missing credentials are only an error once something is actually sent.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, form: &ContactForm) -> Result<Message, MailError> {
        let missing = self.config.missing_fields();
        if !missing.is_empty() {
            return Err(MailError::NotConfigured(missing));
        }
        let from = parse_mailbox(self.config.from_email.as_deref().unwrap_or_default())?;
        let to = parse_mailbox(self.config.to_email.as_deref().unwrap_or_default())?;

        let mut builder = Message::builder().from(from).to(to);
        // A malformed submitter address just loses the Reply-To header.
        if let Ok(address) = form.email.trim().parse::<Address>() {
            let name = form.name.trim();
            builder = builder.reply_to(Mailbox::new(
                (!name.is_empty()).then(|| name.to_string()),
                address,
            ));
        }

        Ok(builder
            .subject(form.subject_line())
            .header(ContentType::TEXT_PLAIN)
            .body(form.compose_body())?)
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let host = self.config.host.as_str();
        let builder = if self.config.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        };

        let credentials = Credentials::new(
            self.config.username.clone().unwrap_or_default(),
            self.config.password.clone().unwrap_or_default(),
        );

        Ok(builder
            .port(self.config.port)
            .credentials(credentials)
            .timeout(Some(SMTP_TIMEOUT))
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, form: &ContactForm) -> Result<(), MailError> {
        let message = self.build_message(form)?;
        let response = self.transport()?.send(message).await?;
        info!(
            "Contact message from {} relayed via {} ({})",
            form.email.trim(),
            self.config.host,
            response.code()
        );
        Ok(())
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, MailError> {
    raw.parse::<Mailbox>().map_err(|source| MailError::InvalidAddress {
        address: raw.to_string(),
        source,
    })
}
