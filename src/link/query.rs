use std::collections::HashMap;

use percent_encoding::percent_decode_str;

use crate::common::ByteStr;

/// Decompose the query string of `url` into `params`, later pairs overwrite earlier ones.
///
/// Pairs are `application/x-www-form-urlencoded`, pairs with an empty name are skipped.
pub(crate) fn expand(url: &ByteStr, params: &mut HashMap<ByteStr, ByteStr>) {
    let Some((_, query)) = url.split_once('?') else {
        return;
    };
    let query = match query.split_once('#') {
        Some((query, _fragment)) => query,
        None => query,
    };

    for pair in query.split('&') {
        let (name, value) = match pair.split_once('=') {
            Some(ok) => ok,
            None => (pair, ""),
        };
        if name.is_empty() {
            continue;
        }
        params.insert(decode(url, name), decode(url, value));
    }
}

/// Decode a form component, only allocating if there is something to decode.
fn decode(url: &ByteStr, component: &str) -> ByteStr {
    if !component.contains(['+', '%']) {
        return url.slice_ref(component);
    }
    let component = component.replace('+', " ");
    ByteStr::from(percent_decode_str(&component).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::expand;
    use crate::common::ByteStr;

    fn expanded(url: &'static str) -> HashMap<ByteStr, ByteStr> {
        let mut params = HashMap::new();
        expand(&ByteStr::from_static(url), &mut params);
        params
    }

    #[test]
    fn test_expand() {
        let params = expanded("https://x/?client_id=1&page=2&per_page=100");
        assert_eq!(params.len(), 3);
        assert_eq!(params["client_id"], "1");
        assert_eq!(params["page"], "2");
        assert_eq!(params["per_page"], "100");

        let params = expanded("https://x/?name=What,+me+worry");
        assert_eq!(params["name"], "What, me worry");

        let params = expanded("/search?q=caf%C3%A9%20au%20lait&page=1#results");
        assert_eq!(params["q"], "café au lait");
        assert_eq!(params["page"], "1");

        let params = expanded("https://x/?page=1&page=2&&=orphan&flag");
        assert_eq!(params.len(), 2);
        assert_eq!(params["page"], "2");
        assert_eq!(params["flag"], "");

        assert!(expanded("https://x/segment;foo=bar").is_empty());
        assert!(expanded("https://x/?").is_empty());
    }
}
