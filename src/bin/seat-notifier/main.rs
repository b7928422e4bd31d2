#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends an email when a seat becomes available

use std::{
    io::{self, Write},
    process::ExitCode,
    sync::Arc,
};

use anyhow::Result;
use clap::Parser;
use seat_notifier::{
    domain::notification::{
        EmailAddress, NotificationError, NotificationService, NotificationServiceImpl,
        SeatLocation,
    },
    infrastructure::email::smtp::{SMTPConfig, SMTPMailer},
};

const EXIT_SENT: u8 = 0;
const EXIT_SEND_FAILED: u8 = 1;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[command(version, about = "Send an email when a seat becomes available")]
pub struct Args {
    /// The row of the seat
    pub row: String,

    /// The seat number within the row
    pub seat: String,

    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// The address to notify
    #[clap(long, env = "RECIPIENT")]
    pub recipient: String,

    /// Print the message instead of sending it
    #[clap(long)]
    pub dry_run: bool,
}

#[mutants::skip]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();

    let location = SeatLocation::new(&args.row, &args.seat)?;
    let recipient = EmailAddress::new(&args.recipient)?;

    let service = NotificationServiceImpl::new(Arc::new(SMTPMailer::new(args.smtp)), recipient);

    if args.dry_run {
        println!("{}", service.compose(&location));

        return Ok(ExitCode::SUCCESS);
    }

    let result = service.send_seat_notification(&location).await;

    Ok(ExitCode::from(report(result, &mut io::stdout().lock())?))
}

/// Prints the outcome of a send and returns the process exit status.
fn report(result: Result<(), NotificationError>, out: &mut impl Write) -> io::Result<u8> {
    match result {
        Ok(()) => {
            writeln!(out, "邮件发送成功")?;

            Ok(EXIT_SENT)
        }
        Err(e) => {
            writeln!(out, "Error: 无法发送邮件 {e}")?;

            Ok(EXIT_SEND_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use testresult::TestResult;

    use super::*;

    const SMTP_FLAGS: [&str; 8] = [
        "--host",
        "smtp.example.com",
        "--username",
        "notifier@example.com",
        "--password",
        "secret",
        "--recipient",
        "recipient@example.com",
    ];

    #[test]
    fn test_row_and_seat_are_positional() -> TestResult {
        let args = Args::try_parse_from(
            ["seat-notifier", "3", "12"].into_iter().chain(SMTP_FLAGS),
        )?;

        assert_eq!(args.row, "3");
        assert_eq!(args.seat, "12");
        assert_eq!(args.recipient, "recipient@example.com");
        assert!(!args.dry_run);

        Ok(())
    }

    #[test]
    fn test_missing_seat_is_rejected() {
        let result = Args::try_parse_from(["seat-notifier", "3"].into_iter().chain(SMTP_FLAGS));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_row_and_seat_is_rejected() {
        let result = Args::try_parse_from(["seat-notifier"].into_iter().chain(SMTP_FLAGS));

        assert!(result.is_err());
    }

    #[test]
    fn test_dry_run_flag() -> TestResult {
        let args = Args::try_parse_from(
            ["seat-notifier", "--dry-run", "3", "12"]
                .into_iter()
                .chain(SMTP_FLAGS),
        )?;

        assert!(args.dry_run);

        Ok(())
    }

    #[test]
    fn test_report_success() -> TestResult {
        let mut out = Vec::new();

        let code = report(Ok(()), &mut out)?;

        assert_eq!(String::from_utf8(out)?, "邮件发送成功\n");
        assert_eq!(code, 0);

        Ok(())
    }

    #[test]
    fn test_report_smtp_failure() -> TestResult {
        let mut out = Vec::new();

        let code = report(
            Err(NotificationError::SmtpFailure(anyhow!(
                "Connection error: Connection refused (os error 111)"
            ))),
            &mut out,
        )?;

        assert_eq!(
            String::from_utf8(out)?,
            "Error: 无法发送邮件 Connection error: Connection refused (os error 111)\n"
        );
        assert_eq!(code, 1);

        Ok(())
    }
}
