//! Escape decoding for raw string slices.
//!
//! The tree keeps strings exactly as they appear between the quotes. Decoding
//! happens here, on request, into owned text.

use std::borrow::Cow;

use super::types::JsonStr;

impl<'a> JsonStr<'a> {
    /// Decode escape sequences into text.
    ///
    /// Borrows when the slice has no backslash and is valid UTF-8. `\uXXXX`
    /// pairs forming a surrogate pair decode to one code point; an unpaired
    /// surrogate becomes U+FFFD, as does invalid UTF-8 in the raw bytes.
    pub fn unescape(&self) -> Cow<'a, str> {
        let raw = self.as_bytes();
        if !raw.contains(&b'\\') {
            return String::from_utf8_lossy(raw);
        }
        Cow::Owned(unescape_bytes(raw))
    }
}

fn hex4(bytes: &[u8]) -> Option<u32> {
    let digits = bytes.get(..4)?;
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let text = std::str::from_utf8(digits).ok()?;
    u32::from_str_radix(text, 16).ok()
}

fn unescape_bytes(raw: &[u8]) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(raw.len());
    let mut i = 0;
    while let Some(&b) = raw.get(i) {
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }
        let Some(&escaped) = raw.get(i + 1) else {
            out.push(b);
            break;
        };
        i += 2;
        let simple = match escaped {
            b'"' => Some(b'"'),
            b'\\' => Some(b'\\'),
            b'/' => Some(b'/'),
            b'b' => Some(0x08),
            b'f' => Some(0x0C),
            b'n' => Some(b'\n'),
            b'r' => Some(b'\r'),
            b't' => Some(b'\t'),
            _ => None,
        };
        if let Some(byte) = simple {
            out.push(byte);
            continue;
        }
        if escaped != b'u' {
            out.extend_from_slice(&[b'\\', escaped]);
            continue;
        }

        let Some(unit) = raw.get(i..).and_then(hex4) else {
            out.extend_from_slice("\u{FFFD}".as_bytes());
            continue;
        };
        i += 4;

        let ch = if (0xD800..=0xDBFF).contains(&unit) {
            let low = raw
                .get(i..i + 2)
                .filter(|prefix| *prefix == b"\\u")
                .and_then(|_| raw.get(i + 2..))
                .and_then(hex4)
                .filter(|low| (0xDC00..=0xDFFF).contains(low));
            match low {
                Some(low) => {
                    i += 6;
                    char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                }
                None => None,
            }
        } else {
            char::from_u32(unit)
        };

        let mut buf = [0u8; 4];
        out.extend_from_slice(ch.unwrap_or('\u{FFFD}').encode_utf8(&mut buf).as_bytes());
    }

    match String::from_utf8(out) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
