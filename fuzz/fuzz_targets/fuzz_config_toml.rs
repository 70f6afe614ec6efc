#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing with unknown-key tracking must never panic
        let _ = railgen::config::parse_with_warnings(content, std::path::Path::new("railgen.toml"));
    }
});
