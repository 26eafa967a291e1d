use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// `KSh 12,345`, rounded to the shilling.
pub fn ksh(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("KSh {sign}{}", group_thousands(rounded.abs() as u64))
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn rfc3339(at: OffsetDateTime) -> String {
    at.format(&Rfc3339)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// `2025-01-31 14:05` for an RFC 3339 timestamp; unparsable input is echoed back.
pub fn display_timestamp(raw: &str) -> String {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(at) => format!(
            "{:04}-{:02}-{:02} {:02}:{:02}",
            at.year(),
            u8::from(at.month()),
            at.day(),
            at.hour(),
            at.minute()
        ),
        Err(_) => raw.to_string(),
    }
}

/// `YYYYMMDD`, used in export file names.
pub fn date_stamp(at: OffsetDateTime) -> String {
    format!("{:04}{:02}{:02}", at.year(), u8::from(at.month()), at.day())
}

/// Date and time strings in the shape the ride form inputs expect.
pub fn date_and_time(at: OffsetDateTime) -> (String, String) {
    (
        format!("{:04}-{:02}-{:02}", at.year(), u8::from(at.month()), at.day()),
        format!("{:02}:{:02}", at.hour(), at.minute()),
    )
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn shillings_are_grouped() {
        assert_eq!(ksh(0.0), "KSh 0");
        assert_eq!(ksh(260.0), "KSh 260");
        assert_eq!(ksh(25_000.0), "KSh 25,000");
        assert_eq!(ksh(1_234_567.4), "KSh 1,234,567");
        assert_eq!(ksh(-5_000.0), "KSh -5,000");
    }

    #[test]
    fn timestamps_format_for_display() {
        assert_eq!(display_timestamp("2025-01-31T14:05:09Z"), "2025-01-31 14:05");
        assert_eq!(display_timestamp("yesterday"), "yesterday");
        let at = datetime!(2025-03-04 09:07 UTC);
        assert_eq!(date_stamp(at), "20250304");
        assert_eq!(date_and_time(at), ("2025-03-04".to_string(), "09:07".to_string()));
        assert_eq!(rfc3339(at), "2025-03-04T09:07:00Z");
    }
}
