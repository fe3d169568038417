#![no_main]

use libfuzzer_sys::fuzz_target;
use docid::names::parse;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(query) = parse(text) {
            // a parsed name must parse again to the same query
            let rendered = query.to_string();
            assert_eq!(parse(&rendered).ok(), Some(query));
        }
    }
});
