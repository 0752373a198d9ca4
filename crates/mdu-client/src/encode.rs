//! Query-parameter encoding with `encodeURIComponent` semantics.
//!
//! Unreserved bytes are `A-Z a-z 0-9 - _ . ! ~ * ' ( )`; every other byte of
//! the UTF-8 encoding becomes `%XX` with uppercase hex. Spaces are `%20`,
//! never `+`.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if is_unreserved(b) {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(b >> 4)]));
            out.push(char::from(HEX[usize::from(b & 0x0f)]));
        }
    }
    out
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}
