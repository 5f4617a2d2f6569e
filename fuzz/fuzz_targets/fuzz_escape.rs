#![no_main]
use basic_json::{Value, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|s: String| {
    let bytes = encode(&Value::string(s.as_str()));
    let back: String = match serde_json::from_slice(&bytes) {
        Ok(back) => back,
        Err(e) => panic!(
            "Encoded string does not parse!\nInput: {:?}\nEncoded: {}\nError: {}",
            s,
            String::from_utf8_lossy(&bytes),
            e
        ),
    };
    assert_eq!(back, s);
});
