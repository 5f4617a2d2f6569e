#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(original) = serde_json::from_str::<serde_json::Value>(s) {
            let value = match basic_json::wrap(&original) {
                Ok(v) => v,
                Err(e) => panic!("wrap rejected a JSON document: {}", e),
            };
            let encoded = basic_json::encode_to_string(&value);
            match serde_json::from_str::<serde_json::Value>(&encoded) {
                Ok(decoded) => {
                    if original != decoded {
                        panic!(
                            "Roundtrip mismatch!\nOriginal JSON: {}\nEncoded: {}\nDecoded: {}",
                            s, encoded, decoded
                        );
                    }
                }
                Err(e) => {
                    panic!("Encoded output is not JSON!\nOriginal: {}\nEncoded: {}\nError: {}", s, encoded, e);
                }
            }
        }
    }
});
