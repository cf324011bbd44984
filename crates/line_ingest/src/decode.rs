/// Turns a line's bytes into text.
///
/// Valid UTF-8 (the common case) is borrowed in place. Invalid sequences are
/// replaced with U+FFFD and the result is written into `chars`, which the
/// caller sizes so this never reallocates.
pub fn decode_line<'a>(bytes: &'a [u8], chars: &'a mut String) -> &'a str {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text;
    }

    chars.clear();
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                chars.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                chars.push_str(std::str::from_utf8(valid).unwrap_or_default());
                chars.push(char::REPLACEMENT_CHARACTER);
                match err.error_len() {
                    Some(len) => rest = &after[len..],
                    None => break,
                }
            }
        }
    }
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_is_borrowed_without_copy() {
        let bytes = "Zürich\tCH".as_bytes();
        let mut chars = String::new();
        let text = decode_line(bytes, &mut chars);
        assert_eq!(text, "Zürich\tCH");
        assert_eq!(text.as_ptr(), bytes.as_ptr());
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        let mut chars = String::with_capacity(64);
        let text = decode_line(b"ab\xffcd\xe2\x82", &mut chars);
        assert_eq!(text, "ab\u{FFFD}cd\u{FFFD}");
    }
}
