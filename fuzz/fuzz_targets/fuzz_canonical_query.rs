#![no_main]

use libfuzzer_sys::fuzz_target;

use bce_cert_cleaner::infrastructure::bce::{canonical_query, uri_encode};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let pairs: Vec<(&str, &str)> = raw
            .split('&')
            .map(|kv| kv.split_once('=').unwrap_or((kv, "")))
            .collect();
        assert!(canonical_query(&pairs).is_ascii());
        assert!(uri_encode(raw).is_ascii());
    }
});
