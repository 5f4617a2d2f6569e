#![no_main]
use arbitrary::Arbitrary;
use basic_json::{Value, encode};
use libfuzzer_sys::fuzz_target;

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::bool(u.arbitrary()?),
            2 => Value::from(u.arbitrary::<i64>()?),
            3 => Value::from(u.arbitrary::<u64>()?),
            4 => Value::from(u.arbitrary::<String>()?),
            5..=7 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut items = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    items.push(fv.to_value(u, depth + 1)?);
                }
                Value::from(items)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut entries = Vec::with_capacity(size);
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    entries.push((key, fv.to_value(u, depth + 1)?));
                }
                Value::object(entries)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_value(&mut u, 0) {
            let bytes = encode(&value);
            let parsed: serde_json::Value = match serde_json::from_slice(&bytes) {
                Ok(v) => v,
                Err(e) => panic!(
                    "Encoded output is not JSON!\nValue: {:?}\nEncoded: {}\nError: {}",
                    value,
                    String::from_utf8_lossy(&bytes),
                    e
                ),
            };
            let rewrapped = match basic_json::wrap(&parsed) {
                Ok(v) => v,
                Err(e) => panic!("wrap rejected parsed output: {}", e),
            };
            // Integer widths may differ after parsing; the bytes may not.
            let again = encode(&rewrapped);
            if again != bytes {
                panic!(
                    "Structured roundtrip mismatch!\nOriginal: {:?}\nEncoded: {}\nRe-encoded: {}",
                    value,
                    String::from_utf8_lossy(&bytes),
                    String::from_utf8_lossy(&again)
                );
            }
        }
    }
});
