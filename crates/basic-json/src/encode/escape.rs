use crate::encode::sink::Sink;

const HEX: &[u8; 16] = b"0123456789abcdef";

enum Escape {
    /// Backslash followed by this byte.
    Short(u8),
    /// `\uXXXX` with lowercase hex digits.
    Unicode(u16),
}

fn escape_for(ch: char) -> Option<Escape> {
    match ch {
        '"' => Some(Escape::Short(b'"')),
        '\\' => Some(Escape::Short(b'\\')),
        '\n' => Some(Escape::Short(b'n')),
        '\r' => Some(Escape::Short(b'r')),
        '\t' => Some(Escape::Short(b't')),
        '\u{0C}' => Some(Escape::Short(b'f')),
        '\u{08}' => Some(Escape::Short(b'b')),
        // C0 and C1 controls plus DEL; all fit in four hex digits.
        c if c.is_control() => Some(Escape::Unicode(c as u16)),
        _ => None,
    }
}

/// Write `s` as a quoted JSON string.
///
/// Characters that need no escape are copied through as UTF-8, one slice per
/// unescaped run.
pub(crate) fn write_quoted<S: Sink + ?Sized>(out: &mut S, s: &str) -> Result<(), S::Error> {
    out.write_byte(b'"')?;
    let mut run_start = 0;
    for (i, ch) in s.char_indices() {
        let Some(escape) = escape_for(ch) else {
            continue;
        };
        if run_start < i {
            out.write_bytes(&s.as_bytes()[run_start..i])?;
        }
        match escape {
            Escape::Short(b) => out.write_bytes(&[b'\\', b])?,
            Escape::Unicode(code) => {
                let seq = [
                    b'\\',
                    b'u',
                    HEX[(code >> 12) as usize & 0xF],
                    HEX[(code >> 8) as usize & 0xF],
                    HEX[(code >> 4) as usize & 0xF],
                    HEX[code as usize & 0xF],
                ];
                out.write_bytes(&seq)?;
            }
        }
        run_start = i + ch.len_utf8();
    }
    if run_start < s.len() {
        out.write_bytes(&s.as_bytes()[run_start..])?;
    }
    out.write_byte(b'"')
}
