//! Seat available email template

use super::SeatLocation;

/// Subject and body of the "seat available" email
#[derive(Debug)]
pub struct SeatAvailableTemplate<'a> {
    location: &'a SeatLocation,
}

impl<'a> SeatAvailableTemplate<'a> {
    /// Creates a new `SeatAvailableTemplate`
    pub fn new(location: &'a SeatLocation) -> Self {
        Self { location }
    }

    /// The email subject
    pub fn subject(&self) -> String {
        format!(
            "第{row}排{seat}号位空出啦！",
            row = self.location.row(),
            seat = self.location.seat()
        )
    }

    /// Renders the plain text body of the email
    pub fn render_plain(&self) -> String {
        format!(
            "\n第 {row} 排 {seat} 号位已经空出。\n\n赶紧去抢\n",
            row = self.location.row(),
            seat = self.location.seat()
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_subject_concatenates_row_and_seat() -> TestResult {
        let location = SeatLocation::new("3", "12")?;

        let template = SeatAvailableTemplate::new(&location);

        assert_eq!(template.subject(), "第3排12号位空出啦！");

        Ok(())
    }

    #[test]
    fn test_plain_body_layout() -> TestResult {
        let location = SeatLocation::new("3", "12")?;

        let body = SeatAvailableTemplate::new(&location).render_plain();

        assert_eq!(body, "\n第 3 排 12 号位已经空出。\n\n赶紧去抢\n");

        Ok(())
    }

    #[test]
    fn test_plain_body_mentions_row_and_seat() -> TestResult {
        let location = SeatLocation::new("3", "12")?;

        let body = SeatAvailableTemplate::new(&location).render_plain();

        assert!(body.contains("第 3 排 12 号位已经空出。"));
        assert!(body.contains("赶紧去抢"));

        Ok(())
    }
}
