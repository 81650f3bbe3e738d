use crate::error::{ProfileError, Result};

/// A `key<sep>value` token split at its first separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Split `text` on the first occurrence of `separator`.
///
/// Any further separators stay in the value, so `a=b=c` yields `a` and `b=c`.
/// A missing separator or a blank key is an error.
pub fn split_key_value(text: &str, separator: char) -> Result<KeyValue> {
    let invalid = || ProfileError::InvalidFormat {
        token: text.to_string(),
        separator,
    };
    let (key, value) = text.split_once(separator).ok_or_else(invalid)?;
    if key.trim().is_empty() {
        return Err(invalid());
    }

    Ok(KeyValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Ordered options of one section.
///
/// Keys are unique. Inserting an existing key overwrites its value but keeps
/// the position it was first inserted at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<KeyValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|kv| kv.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(KeyValue { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|kv| kv.key == key)
            .map(|kv| kv.value.as_str())
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        self.entries
            .iter_mut()
            .find(|kv| kv.key == key)
            .map(|kv| &mut kv.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|kv| kv.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<KeyValue> for Options {
    fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
        let mut options = Self::new();
        for kv in iter {
            options.insert(kv.key, kv.value);
        }
        options
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = &'a KeyValue;
    type IntoIter = std::slice::Iter<'a, KeyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
