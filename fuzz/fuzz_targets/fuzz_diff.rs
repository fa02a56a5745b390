#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the differ and classifier on pairs of JSON documents.
///
/// Input is split at the first NUL byte; both halves must decode. Checks
/// that a document never differs from itself and that every change
/// produces at most one impact.
fuzz_target!(|data: &[u8]| {
    let Some(split) = data.iter().position(|&b| b == 0) else {
        return;
    };
    let (Ok(a), Ok(b)) = (
        serde_json::from_slice::<serde_json::Value>(&data[..split]),
        serde_json::from_slice::<serde_json::Value>(&data[split + 1..]),
    ) else {
        return;
    };

    assert!(cfgdiff::diff::diff_values(&a, &a).is_empty());

    let changes = cfgdiff::diff::diff_values(&a, &b);
    let impacts = cfgdiff::risk::RiskClassifier::new().classify(&changes);
    assert!(impacts.len() <= changes.len());
});
