#![no_main]

use libfuzzer_sys::fuzz_target;
use shorthand_humanize::{format_relative_time_with, PreconditionViolation};

fuzz_target!(|input: (i128, String)| {
    let (seconds, delimiter) = input;
    match format_relative_time_with(seconds, &delimiter) {
        Ok(phrase) => {
            assert!(seconds >= 0);
            assert!(phrase.ends_with(" ago"));
        }
        Err(e) => {
            assert!(seconds < 0);
            assert_eq!(e, PreconditionViolation::NegativeSeconds(seconds));
        }
    }
});
