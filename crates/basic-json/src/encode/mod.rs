//! Encoding pipeline: one recursive walk over [`Value`], generic over the
//! [`Sink`] it writes into. Every public entry point funnels through
//! [`encode_into`], so all of them produce the same bytes.

mod escape;
pub mod sink;

use std::io;

use crate::{Result, value::Value};
use sink::{FmtSink, Sink, SliceSink};

/// Encode `value` as compact JSON text.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    let Ok(()) = encode_into(value, &mut out);
    out
}

/// Encode `value` as a `String`. Same text as [`encode`].
pub fn encode_to_string(value: &Value) -> String {
    value.to_string()
}

/// Encode `value` into `sink`.
///
/// Fails only when the sink rejects a write; the sink may then hold a
/// truncated prefix of the output.
pub fn encode_into<S: Sink + ?Sized>(value: &Value, sink: &mut S) -> core::result::Result<(), S::Error> {
    match value {
        Value::True => sink.write_bytes(b"true"),
        Value::False => sink.write_bytes(b"false"),
        Value::Null => sink.write_bytes(b"null"),
        Value::Number(n) => n.with_canonical(|s| sink.write_bytes(s.as_bytes())),
        Value::String(s) => escape::write_quoted(sink, s),
        Value::Array(items) => {
            sink.write_byte(b'[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    sink.write_byte(b',')?;
                }
                encode_into(item, sink)?;
            }
            sink.write_byte(b']')
        }
        Value::Object(entries) => {
            sink.write_byte(b'{')?;
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    sink.write_byte(b',')?;
                }
                escape::write_quoted(sink, key)?;
                sink.write_byte(b':')?;
                encode_into(item, sink)?;
            }
            sink.write_byte(b'}')
        }
    }
}

/// Encode `value` into an `io::Write`.
///
/// The whole document is encoded into memory first and handed to the writer
/// in a single `write_all`. Use [`IoSink`](sink::IoSink) with [`encode_into`] to stream
/// piece by piece instead.
pub fn encode_to_writer<W: io::Write>(value: &Value, mut writer: W) -> Result<()> {
    let buf = encode(value);
    if let Err(e) = writer.write_all(&buf) {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %value.kind(), len = buf.len(), error = %e, "writer rejected encoded output");
        return Err(e.into());
    }
    Ok(())
}

/// Encode `value` into a fixed-capacity buffer, returning the number of bytes
/// written.
pub fn encode_to_slice(value: &Value, buf: &mut [u8]) -> Result<usize> {
    let mut sink = SliceSink::new(buf);
    if let Err(e) = encode_into(value, &mut sink) {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %value.kind(), written = sink.position(), error = %e, "buffer rejected encoded output");
        return Err(e);
    }
    Ok(sink.position())
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        encode_into(self, &mut FmtSink::new(f))
    }
}
