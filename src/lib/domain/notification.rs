//! Seat availability notifications.

mod email_address;
mod errors;
pub mod mailer;
mod message;
mod seat_location;
mod service;
mod template;

pub use email_address::{EmailAddress, EmailAddressError};
pub use errors::NotificationError;
pub use mailer::{Mailer, MailerError};
pub use message::Message;
pub use seat_location::{SeatLocation, SeatLocationError};
pub use service::{NotificationService, NotificationServiceImpl};
pub use template::SeatAvailableTemplate;
