use chrono::{NaiveDate, NaiveTime};

use cadence_domain::shared::DomainError;

pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidInput(format!("Invalid date (want YYYY-MM-DD): {}", s)))
}

/// Accepts HH:MM and HH:MM:SS.
pub fn parse_time(s: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| DomainError::InvalidInput(format!("Invalid time (want HH:MM[:SS]): {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_time_shapes() {
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("09:30:15").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 15).unwrap()
        );
        assert!(parse_time("9am").is_err());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("02/03/2025").is_err());
        assert!(parse_date("2025-06-15").is_ok());
    }
}
