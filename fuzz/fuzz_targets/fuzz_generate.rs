#![no_main]

use libfuzzer_sys::fuzz_target;
use status_errors::{ErrorDescriptor, ErrorMethodTable, StatusCode};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest).into_owned();
    let code = StatusCode::ALL[selector as usize % StatusCode::ALL.len()];

    let descriptors = [
        ErrorDescriptor::new(text.clone(), code, "fuzz default"),
        ErrorDescriptor::new("fixed", StatusCode::NotFound, text.clone()),
    ];
    let table = ErrorMethodTable::build(&descriptors);

    for method in &table {
        let err = method.with_message(text.clone());
        assert_eq!(err.message(), text);
        assert_eq!(err.status_code(), method.status_code());
    }
    let _ = StatusCode::try_from(u16::from_le_bytes([selector, rest.first().copied().unwrap_or(0)]));
});
