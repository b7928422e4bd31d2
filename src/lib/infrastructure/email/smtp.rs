//! SMTP email service implementation

use std::time::Duration;

use async_trait::async_trait;
use clap::{ArgAction, Parser, ValueEnum};
use lettre::{
    message::header::ContentType,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};
use tracing::debug;

use crate::domain::notification::{Mailer, MailerError, Message};

/// How the SMTP connection is secured
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TlsMode {
    /// Plain text connection
    None,

    /// Upgrade with STARTTLS when the server offers it
    #[default]
    Opportunistic,

    /// Require STARTTLS
    Required,

    /// TLS from the first byte (SMTPS)
    Wrapper,
}

/// SMTP configuration
#[derive(Clone, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT", default_value = "25")]
    pub port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASS", hide_env_values = true)]
    pub password: String,

    /// The sender email address, defaults to the username
    #[clap(long, env = "SMTP_SENDER")]
    pub sender: Option<String>,

    /// How the connection is secured
    #[clap(long = "tls", env = "SMTP_TLS", value_enum, default_value_t = TlsMode::Opportunistic)]
    pub tls_mode: TlsMode,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value_t = true, action = ArgAction::Set)]
    pub verify_tls: bool,

    /// Connection and command timeout, in seconds
    #[clap(long = "timeout", env = "SMTP_TIMEOUT", default_value = "30")]
    pub timeout_secs: u64,
}

/// SMTP mailer
#[derive(Debug, Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SMTPConfig) -> Self {
        Self { config }
    }

    /// The address messages are sent from
    pub fn sender(&self) -> &str {
        self.config
            .sender
            .as_deref()
            .unwrap_or(&self.config.username)
    }

    fn tls(&self) -> Result<Tls, MailerError> {
        let parameters = || {
            TlsParameters::builder(self.config.host.clone())
                .dangerous_accept_invalid_certs(!self.config.verify_tls)
                .build()
        };

        Ok(match self.config.tls_mode {
            TlsMode::None => Tls::None,
            TlsMode::Opportunistic => Tls::Opportunistic(parameters()?),
            TlsMode::Required => Tls::Required(parameters()?),
            TlsMode::Wrapper => Tls::Wrapper(parameters()?),
        })
    }

    /// Builds a transport for a single send.
    ///
    /// The transport owns its connection, so dropping it closes the session.
    pub fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(self.config.host.as_str())
                .port(self.config.port)
                .credentials(creds)
                .tls(self.tls()?)
                .timeout(Some(Duration::from_secs(self.config.timeout_secs)))
                .build(),
        )
    }

    fn build_message(&self, message: &Message) -> Result<lettre::Message, MailerError> {
        Ok(lettre::Message::builder()
            .from(self.sender().parse()?)
            .to(message.to.as_str().parse()?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.plain_body.clone())?)
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send_email(&self, message: &Message) -> Result<(), MailerError> {
        let email = self.build_message(message)?;
        let transport = self.transport()?;

        debug!(
            host = %self.config.host,
            port = self.config.port,
            tls = ?self.config.tls_mode,
            "submitting message"
        );

        match transport.send(email).await {
            Ok(response) => {
                debug!(code = %response.code(), "message accepted");
                Ok(())
            }
            Err(e) => Err(MailerError::SendError(e.into())),
        }
    }
}
