use std::collections::{HashMap, hash_map};

use super::{Config, Link, entry::LinkValue, scan};
use crate::common::ByteStr;

/// Links of a header, keyed by relation type.
///
/// Never empty, a header without any usable link is parsed as `None`.
#[derive(Clone, PartialEq, Eq)]
pub struct Links {
    map: HashMap<ByteStr, Link>,
}

impl Links {
    pub(crate) fn build(source: &ByteStr, config: &Config) -> Option<Self> {
        let mut map = HashMap::new();

        for value in scan::split(source, b',') {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if let Some(link) = LinkValue::parse(source, value, config) {
                link.insert_into(&mut map);
            }
        }

        if map.is_empty() {
            None
        } else {
            Some(Self { map })
        }
    }

    /// Returns the link with the given relation type.
    #[inline]
    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.map.get(rel)
    }

    /// Returns `true` if there is a link with the given relation type.
    #[inline]
    pub fn contains(&self, rel: &str) -> bool {
        self.map.contains_key(rel)
    }

    /// Returns the number of relation types.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Always returns `false`, a header without any usable link is parsed as `None`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over relation types, in arbitrary order.
    pub fn rels(&self) -> impl ExactSizeIterator<Item = &str> {
        self.map.keys().map(ByteStr::as_str)
    }

    /// Returns an iterator over relation types and their links, in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { iter: self.map.iter() }
    }
}

impl std::ops::Index<&str> for Links {
    type Output = Link;

    /// # Panics
    ///
    /// Panics if there is no link with the given relation type.
    #[inline]
    fn index(&self, rel: &str) -> &Self::Output {
        match self.map.get(rel) {
            Some(link) => link,
            None => panic!("no link with relation type {rel:?}"),
        }
    }
}

impl std::fmt::Debug for Links {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// ===== Iterators =====

/// Iterator over [`Links`].
#[derive(Debug)]
pub struct Iter<'a> {
    iter: hash_map::Iter<'a, ByteStr, Link>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Link);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(rel, link)| (rel.as_str(), link))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> { }

impl<'a> IntoIterator for &'a Links {
    type Item = (&'a str, &'a Link);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owned iterator over [`Links`].
#[derive(Debug)]
pub struct IntoIter {
    iter: hash_map::IntoIter<ByteStr, Link>,
}

impl Iterator for IntoIter {
    type Item = (ByteStr, Link);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for IntoIter { }

impl IntoIterator for Links {
    type Item = (ByteStr, Link);
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { iter: self.map.into_iter() }
    }
}
