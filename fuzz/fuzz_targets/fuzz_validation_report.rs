#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let report = rif::validation_report(s);
        assert_eq!(report.is_valid, rif::is_structurally_valid(s));
        assert_eq!(report.is_valid, report.errors.is_empty());
        let _ = rif::is_partially_valid(s);
        let _ = rif::extract_type(s);
    }
});
