//! Quote aware splitting of a link header.
use super::matches;

/// Split `value` on `delim`, ignoring delimiters inside a quoted string or a URI reference.
///
/// Inside a quoted string, a backslash escapes the following byte. An unterminated quoted string
/// or URI reference extends to the end of the input.
///
/// The scan is a single forward pass, each byte is visited at most once per block test.
pub(crate) fn split(value: &str, delim: u8) -> Split<'_> {
    debug_assert!(delim.is_ascii());
    Split { rest: Some(value), delim }
}

/// Iterator returned by [`split`].
#[derive(Debug)]
pub(crate) struct Split<'a> {
    rest: Option<&'a str>,
    delim: u8,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.rest?;
        let bytes = value.as_bytes();
        let delim = self.delim;

        let mut state = bytes;
        let mut quoted = false;
        let mut bracketed = false;

        loop {
            match (quoted, bracketed) {
                (true, _) => matches::skip_blocks!(state, b'"', b'\\'),
                (false, true) => matches::skip_blocks!(state, b'>'),
                (false, false) => matches::skip_blocks!(state, b'"', b'<', delim),
            }

            let Some((&byte, rest)) = state.split_first() else {
                self.rest = None;
                return Some(value);
            };
            state = rest;

            match byte {
                b'\\' if quoted => {
                    if let Some((_, rest)) = state.split_first() {
                        state = rest;
                    }
                }
                b'"' if !bracketed => quoted = !quoted,
                b'<' if !quoted => bracketed = true,
                b'>' if !quoted => bracketed = false,
                _ if byte == delim && !quoted && !bracketed => {
                    // `delim` is ASCII, both sides are on a char boundary
                    let at = bytes.len() - state.len() - 1;
                    self.rest = Some(&value[at + 1..]);
                    return Some(&value[..at]);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::split;

    #[test]
    fn test_split() {
        macro_rules! test {
            ($input:literal, $delim:literal => [$($out:literal),* $(,)?]) => {
                let parts = split($input, $delim).collect::<Vec<_>>();
                let expected: &[&str] = &[$($out),*];
                assert_eq!(parts, expected, "input: {:?}", $input);
            };
        }

        test!("", b',' => [""]);
        test!("a", b',' => ["a"]);
        test!("a,b", b',' => ["a", "b"]);
        test!("a,", b',' => ["a", ""]);
        test!("<a>; rel=\"x,y\", <b>", b',' => ["<a>; rel=\"x,y\"", " <b>"]);
        test!("<https://x/?name=What,+me+worry>; rel=next", b',' => [
            "<https://x/?name=What,+me+worry>; rel=next",
        ]);
        test!("<https://x/a;b=c>; rel=next; title=\"a;b\"", b';' => [
            "<https://x/a;b=c>",
            " rel=next",
            " title=\"a;b\"",
        ]);
        test!(r#"title="say \"hi, there\"", <b>"#, b',' => [
            r#"title="say \"hi, there\"""#,
            " <b>",
        ]);
        test!("title=\"unterminated, <b>", b',' => ["title=\"unterminated, <b>"]);
        test!("<unterminated, rel=next", b',' => ["<unterminated, rel=next"]);
        // longer than a block, the delimiter sits past the first few blocks
        test!("<https://example.com/a/very/long/path>; rel=\"first second\",<b>", b',' => [
            "<https://example.com/a/very/long/path>; rel=\"first second\"",
            "<b>",
        ]);
        test!("<é,ü>; title=\"ç,ñ\",ß", b',' => ["<é,ü>; title=\"ç,ñ\"", "ß"]);
    }
}
