//! Email message

use std::fmt;

use super::EmailAddress;

/// Email message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub plain_body: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To: {}", self.to)?;
        writeln!(f, "Subject: {}", self.subject)?;
        write!(f, "{}", self.plain_body)
    }
}
