use std::collections::BTreeMap;

/// Flags parsed from one invocation, each with its captured values.
///
/// A flag that took no value (or whose value never arrived) maps to an empty
/// list. Keys always start with `--`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: BTreeMap<String, Vec<String>>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` with no value, discarding anything captured by an
    /// earlier occurrence.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.flags.insert(name.into(), Vec::new());
    }

    /// Append a value to an already recorded flag.
    ///
    /// Returns `false` if `name` has not been recorded.
    pub fn push_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.flags.get_mut(name) {
            Some(values) => {
                values.push(value.into());
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// All values captured for `name`.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.flags.get(name).map(Vec::as_slice)
    }

    /// The first value captured for `name`, if any.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.flags
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}
