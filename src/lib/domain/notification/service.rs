//! Seat notification service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::{
    EmailAddress, Mailer, Message, NotificationError, SeatAvailableTemplate, SeatLocation,
};

/// Seat notification service
#[async_trait]
pub trait NotificationService: Send + Sync + 'static {
    /// Builds the notification for a seat without sending it.
    fn compose(&self, location: &SeatLocation) -> Message;

    /// Tells the configured recipient that a seat has become available.
    ///
    /// # Arguments
    /// * `location` - The [`SeatLocation`] that became available.
    ///
    /// # Returns
    /// - [`Ok`] once the SMTP server accepted the message.
    /// - [`Err`] containing a [`NotificationError`] if the message could not be sent.
    async fn send_seat_notification(&self, location: &SeatLocation)
        -> Result<(), NotificationError>;
}

/// Seat notification service implementation
#[derive(Debug, Clone)]
pub struct NotificationServiceImpl<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    recipient: EmailAddress,
}

impl<M> NotificationServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new notification service which always notifies `recipient`.
    pub fn new(mailer: Arc<M>, recipient: EmailAddress) -> Self {
        Self { mailer, recipient }
    }
}

#[async_trait]
impl<M> NotificationService for NotificationServiceImpl<M>
where
    M: Mailer,
{
    fn compose(&self, location: &SeatLocation) -> Message {
        let template = SeatAvailableTemplate::new(location);

        Message {
            to: self.recipient.clone(),
            subject: template.subject(),
            plain_body: template.render_plain(),
        }
    }

    async fn send_seat_notification(
        &self,
        location: &SeatLocation,
    ) -> Result<(), NotificationError> {
        let message = self.compose(location);

        info!(%location, recipient = %self.recipient, "sending seat notification");

        match self.mailer.send_email(&message).await {
            Ok(()) => {
                info!(%location, "seat notification sent");
                Ok(())
            }
            Err(e) => {
                error!(%location, error = %e, "could not send seat notification");
                Err(e.into())
            }
        }
    }
}
