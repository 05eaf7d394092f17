#![no_main]

use libfuzzer_sys::fuzz_target;
use status_errors::bad_request_with;

fuzz_target!(|data: &[u8]| {
    let err = bad_request_with(String::from_utf8_lossy(data).into_owned());
    let mut buffer = String::new();
    err.log_entry().write_to(&mut buffer).unwrap();
    assert!(buffer.len() <= 1024 + 64);
});
