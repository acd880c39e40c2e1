use std::collections::{HashMap, hash_map};

use super::{Config, query, scan};
use crate::common::ByteStr;
use crate::log::debug;

/// A single link, the target of one relation.
///
/// A link always have a `url` and a single word `rel`, plus every other parameter of the
/// link-value it was parsed from.
#[derive(Clone, PartialEq, Eq)]
pub struct Link {
    url: ByteStr,
    rel: ByteStr,
    /// does not contain `url` or `rel`
    params: HashMap<ByteStr, ByteStr>,
}

impl Link {
    /// Returns the link target, without the surrounding angle brackets.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the relation type of this link.
    #[inline]
    pub fn rel(&self) -> &str {
        &self.rel
    }

    /// Returns the value of the given parameter.
    ///
    /// `url` and `rel` are always present.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "url" => Some(self.url.as_str()),
            "rel" => Some(self.rel.as_str()),
            _ => self.params.get(name).map(ByteStr::as_str),
        }
    }

    /// Returns `true` if the link have the given parameter.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of parameters, including `url` and `rel`.
    #[inline]
    pub fn len(&self) -> usize {
        self.params.len() + 2
    }

    /// Always returns `false`, a link contains at least `url` and `rel`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over all parameters, including `url` and `rel`, in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            head: [("url", &self.url), ("rel", &self.rel)].into_iter(),
            params: self.params.iter(),
        }
    }
}

impl std::fmt::Debug for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Link {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`Link`] parameters.
#[derive(Debug)]
pub struct Iter<'a> {
    head: std::array::IntoIter<(&'static str, &'a ByteStr), 2>,
    params: hash_map::Iter<'a, ByteStr, ByteStr>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((name, value)) = self.head.next() {
            return Some((name, value.as_str()));
        }
        self.params.next().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.params.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter<'_> { }

// ===== Parsing =====

/// A parsed link-value, before its relation types are fanned out.
#[derive(Debug)]
pub(crate) struct LinkValue {
    url: ByteStr,
    rel: ByteStr,
    params: HashMap<ByteStr, ByteStr>,
}

impl LinkValue {
    /// Parse a single trimmed link-value, `value` must be a subset of `source`.
    ///
    /// The target is the text between the first `<` and the following `>`, anything before it is
    /// ignored. Returns `None` if the link-value have no URI reference or no `rel` parameter.
    pub(crate) fn parse(source: &ByteStr, value: &str, config: &Config) -> Option<Self> {
        let Some((_, target)) = value.split_once('<') else {
            debug!("link-value without URI reference dropped: {value:?}");
            return None;
        };
        let Some((url, rest)) = target.split_once('>') else {
            debug!("link-value with unterminated URI reference dropped: {value:?}");
            return None;
        };
        let url = source.slice_ref(url);

        let mut explicit = HashMap::new();

        // anything between `>` and the first `;` is not a parameter
        for param in scan::split(rest, b';').skip(1) {
            let Some((name, param_value)) = param.split_once('=') else {
                debug!("link parameter without value skipped: {param:?}");
                continue;
            };
            let name = name.trim();
            let param_value = unquote(param_value.trim());
            if name.is_empty() || param_value.is_empty() {
                debug!("empty link parameter skipped: {param:?}");
                continue;
            }
            explicit.insert(source.slice_ref(name), source.slice_ref(param_value));
        }

        // the relation type only ever comes from an explicit parameter
        let Some(rel) = explicit.remove("rel") else {
            debug!("link-value without relation type dropped: {value:?}");
            return None;
        };

        let mut params = HashMap::new();
        if config.expand_query {
            query::expand(&url, &mut params);
            params.remove("rel");
        }
        params.extend(explicit);
        params.remove("url");

        Some(Self { url, rel, params })
    }

    /// Insert one [`Link`] per relation type, later links overwrite earlier ones.
    pub(crate) fn insert_into(self, links: &mut HashMap<ByteStr, Link>) {
        let Self { url, rel, params } = self;
        for word in rel.split_whitespace() {
            let key = rel.slice_ref(word);
            let link = Link {
                url: url.clone(),
                rel: key.clone(),
                params: params.clone(),
            };
            links.insert(key, link);
        }
    }
}

/// Strip exactly one pair of surrounding double quotes, escape sequences are kept as is.
fn unquote(value: &str) -> &str {
    match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(unquoted) => unquoted,
        None => value,
    }
}

#[cfg(test)]
mod test {
    use super::unquote;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"next\""), "next");
        assert_eq!(unquote("next"), "next");
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"a \\\"b\\\"\""), "a \\\"b\\\"");
        assert_eq!(unquote("\"open"), "\"open");
    }
}
