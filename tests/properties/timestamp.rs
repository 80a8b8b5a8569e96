//! Property tests for provider timestamp parsing.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use bce_cert_cleaner::parse_timestamp;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(input in ".{0,40}") {
        let _ = parse_timestamp(&input);
    }

    /// PROPERTY: All accepted layouts of one instant agree.
    #[test]
    fn property_layouts_agree(secs in 0i64..4_000_000_000) {
        let instant = Utc.timestamp_opt(secs, 0).unwrap();
        let zulu = instant.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let shanghai = instant
            .with_timezone(&chrono::FixedOffset::east_opt(8 * 3600).unwrap())
            .format("%Y-%m-%dT%H:%M:%S+08:00")
            .to_string();

        prop_assert_eq!(parse_timestamp(&zulu).unwrap(), instant);
        prop_assert_eq!(parse_timestamp(&shanghai).unwrap(), instant);
    }
}
