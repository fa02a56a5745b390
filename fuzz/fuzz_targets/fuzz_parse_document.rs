#![no_main]
use cfgdiff::model::DocumentFormat;
use libfuzzer_sys::fuzz_target;

/// Fuzz document decoding.
///
/// Feeds arbitrary UTF-8 to both decoders and to content sniffing, the
/// path taken for files with an unrecognized extension.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = cfgdiff::parsers::parse_document_str(s, DocumentFormat::Json);
        let _ = cfgdiff::parsers::parse_document_str(s, DocumentFormat::Yaml);
        let _ = cfgdiff::parsers::sniff_content(s);
    }
});
