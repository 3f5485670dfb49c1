#![no_main]

use json::{JsonError, parse_json};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    match parse_json(data) {
        Ok(_) => {}
        Err(JsonError::Empty) => assert!(data.trim().is_empty()),
        Err(JsonError::Syntax(failure)) => {
            // every failure in the chain points inside the input
            for f in failure.chain() {
                assert!(f.location().offset <= data.len());
                assert!(data.is_char_boundary(f.location().offset));
            }
        }
    }
});
