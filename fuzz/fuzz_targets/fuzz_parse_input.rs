#![no_main]

use libfuzzer_sys::fuzz_target;

use exitload_core::field::FieldId;
use exitload_core::input::parse_input;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Should not panic, and never yields NaN
    let value = parse_input(text);
    assert!(!value.is_nan());

    // A commit always lands inside the slider bounds
    for id in FieldId::ALL {
        let field = id.default_field();
        let clamped = field.clamp(value);
        assert!(field.contains(clamped), "{id}: {clamped} outside bounds");
    }
});
