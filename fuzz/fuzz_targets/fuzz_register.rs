#![no_main]

use libfuzzer_sys::fuzz_target;
use uds_errors::{ErrorRegistry, UDS_ERROR_INFOS};

const NAMES: [&str; 4] = ["A", "B", "C", "UDS Error"];

fuzz_target!(|data: &[u8]| {
    let mut registry = ErrorRegistry::with_builtins();

    for chunk in data.chunks_exact(10) {
        let name = NAMES[usize::from(chunk[0]) % NAMES.len()];
        let first = i32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        let last = i32::from_le_bytes([chunk[5], chunk[6], chunk[7], chunk[8]]);
        let mapped = usize::from(chunk[9]).min(UDS_ERROR_INFOS.len());

        let before = registry.clone();
        if registry.register(name, first, last, &UDS_ERROR_INFOS[..mapped]).is_err() {
            assert_eq!(registry, before);
        }
    }

    let blocks = registry.blocks();
    for (i, a) in blocks.iter().enumerate() {
        for b in &blocks[i + 1..] {
            assert_ne!(a.name(), b.name());
            assert!(a.max() <= b.base() || b.max() <= a.base());
        }
    }
});
