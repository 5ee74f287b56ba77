use std::ops::Index;
use std::slice;

/// A single URL parameter, consisting of a key and a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The parameters captured by a lookup, in the order they appear in the path.
///
/// The router hands out buffers sized to the largest number of parameters in
/// any registered route (see [`Router::params_buffer`](crate::Router::params_buffer)),
/// so filling one during a lookup never reallocates.
///
/// ```rust
/// use radixroute::Params;
///
/// let mut params = Params::with_capacity(2);
/// # params.push("user", "gordon");
/// assert_eq!(params.get("user"), Some("gordon"));
/// assert_eq!(params.by_name("post"), "");
/// assert_eq!(&params[0].key, "user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params(Vec<Param>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Returns the value of the first parameter registered under `name`.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.0
            .iter()
            .find(|param| param.key == name)
            .map(|param| param.value.as_str())
    }

    /// Like [`get`](Params::get), but an absent parameter reads as `""`.
    pub fn by_name(&self, name: impl AsRef<str>) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    pub fn iter(&self) -> slice::Iter<'_, Param> {
        self.0.iter()
    }

    /// Drops all captured parameters, keeping the allocation for the next lookup.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[doc(hidden)]
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push(Param::new(key, value));
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }
}

impl Index<usize> for Params {
    type Output = Param;

    fn index(&self, i: usize) -> &Param {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Param;
    type IntoIter = slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Number of wildcard markers in a route pattern.
pub(crate) fn count_params(path: &str) -> usize {
    path.bytes().filter(|&c| c == b':' || c == b'*').count()
}
