#![no_main]

use lexis_i18n::icu::parse;
use lexis_i18n::{MessageFormatter, params};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(message) = std::str::from_utf8(data) else {
        return;
    };
    if message.len() > 4096 {
        return;
    }

    // Parsing never fails and never panics.
    let parsed = parse(message);

    // Text without clauses must come back unchanged.
    if parsed.is_plain() && !message.contains(['{', '}']) {
        let out = MessageFormatter::new().format(message, &params! {}, "en");
        assert_eq!(out, message);
    }

    let mf = MessageFormatter::new();
    let p = params! { "n" => 3, "count" => 1, "gender" => "female", "name" => "Ann" };
    for locale in ["en", "fr", "ar", "ru", "pl", "ja", ""] {
        let _ = mf.format(message, &p, locale);
    }
});
