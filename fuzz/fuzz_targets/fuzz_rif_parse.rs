#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic: errors are fine, panics are bugs.
        if let Ok(rif) = rif::Rif::parse(s) {
            let again = rif::Rif::parse(rif.raw()).expect("parsed RIF must re-parse");
            assert_eq!(rif, again);
            for format in rif::format::RifFormat::ALL {
                let _ = rif.format(format);
            }
        }
    }
});
