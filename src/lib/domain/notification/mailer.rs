//! Mailer port

use async_trait::async_trait;

mod errors;

pub use errors::MailerError;

use super::Message;

/// Delivers composed messages
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to deliver. Its recipient is the only one addressed.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send_email(&self, message: &Message) -> Result<(), MailerError>;
}
