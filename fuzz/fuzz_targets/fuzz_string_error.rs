#![no_main]

use libfuzzer_sys::fuzz_target;
use uds_errors::{format_message, format_name, ErrorRegistry};

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }

    let code = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let size = usize::from(data[4]);
    let registry = ErrorRegistry::with_builtins();

    let mut buf = vec![0xa5u8; size];
    if let Some(text) = format_message(&registry, code, &mut buf) {
        assert!(text.len() < size);
    }
    assert!(size == 0 || buf[size - 1] == 0);

    let mut buf = vec![0xa5u8; size];
    if let Some(text) = format_name(&registry, code, &mut buf) {
        assert!(text.len() < size);
    }
});
