#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shorthand_shortid::ShortIdEncoder;

#[derive(Debug, Arbitrary)]
struct Input {
    value: u128,
    symbols: Vec<String>,
}

// Encoding never panics for any alphabet the constructor accepts, and
// decodable alphabets always give the value back.
fuzz_target!(|input: Input| {
    let Ok(encoder) = ShortIdEncoder::from_symbols(input.symbols) else {
        return;
    };
    let token = encoder.encode_u128(input.value);
    if encoder.alphabet().is_decodable() {
        assert_eq!(encoder.decode(&token), Ok(input.value));
    }
});
