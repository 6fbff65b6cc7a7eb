#![no_main]
use libfuzzer_sys::fuzz_target;
use zncview_irc::parse_line;

fuzz_target!(|data: &[u8]| {
    // Panic-freedom over arbitrary input. The parser expects &str, so we
    // convert lossily to also cover inputs that are "almost" text.
    let s = String::from_utf8_lossy(data);
    let _ = parse_line(&s);
});
