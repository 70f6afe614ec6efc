#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let status = 400 + u16::from(data[0]) % 200;
    let body = String::from_utf8_lossy(&data[1..]);
    let _ = railgen::infrastructure::http::map_error_response(status, &body);
});
