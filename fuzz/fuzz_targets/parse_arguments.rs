#![no_main]

use benchplan::plan::arguments;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the grammar parser
        if let Ok(map) = arguments::parse(s) {
            // If parsing succeeds, the canonical rendering must parse too
            let rendered = arguments::render(&map);
            let _ = arguments::parse(&rendered);
        }
    }
});
