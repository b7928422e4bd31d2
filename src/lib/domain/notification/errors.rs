use thiserror::Error;
use tracing::debug;

use super::MailerError;

/// Errors that can occur when sending a seat notification
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Connecting to, authenticating with or sending through the SMTP server failed
    #[error("{0}")]
    SmtpFailure(anyhow::Error),

    /// The sender or recipient address was rejected while building the message
    #[error("invalid email address")]
    InvalidEmailAddress,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<MailerError> for NotificationError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> NotificationError");

        match err {
            MailerError::SendError(e) => NotificationError::SmtpFailure(e),
            MailerError::InvalidEmail => NotificationError::InvalidEmailAddress,
            MailerError::UnknownError(e) => NotificationError::UnknownError(e),
        }
    }
}
