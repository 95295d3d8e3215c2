use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;

/// Current wall-clock time in the business timezone
pub fn now_in(tz: Tz) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&tz).fixed_offset()
}

/// Generate an opaque document id (UUID v4, hyphenated)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_unique_uuid() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_now_in_uses_zone_offset() {
        let lagos = now_in(chrono_tz::Africa::Lagos);
        assert_eq!(lagos.offset().local_minus_utc(), 3600);
        let utc = now_in(chrono_tz::UTC);
        assert_eq!(utc.offset().local_minus_utc(), 0);
    }
}
