/// Result of a tracking lookup. There is no backing store; two demo
/// identifiers resolve to canned statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingStatus {
    InTransit,
    Delivered,
    NotFound,
}

impl TrackingStatus {
    pub fn message(&self) -> &'static str {
        match self {
            TrackingStatus::InTransit => "Package is in transit. Expected delivery: 2 days.",
            TrackingStatus::Delivered => "Package delivered successfully.",
            TrackingStatus::NotFound => "Tracking ID not found. Please check and try again.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TrackingStatus::InTransit => "✅",
            TrackingStatus::Delivered => "📦",
            TrackingStatus::NotFound => "❌",
        }
    }
}

pub fn lookup_tracking(tracking_id: &str) -> TrackingStatus {
    match tracking_id {
        "SP12345" => TrackingStatus::InTransit,
        "SP67890" => TrackingStatus::Delivered,
        _ => TrackingStatus::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids() {
        assert_eq!(lookup_tracking("SP12345"), TrackingStatus::InTransit);
        assert_eq!(lookup_tracking("SP67890"), TrackingStatus::Delivered);
    }

    #[test]
    fn everything_else_is_not_found() {
        for id in ["", "sp12345", " SP12345", "SP123456", "SP00000"] {
            assert_eq!(lookup_tracking(id), TrackingStatus::NotFound, "{id:?}");
        }
        assert!(lookup_tracking("nope").message().contains("not found"));
    }
}
