use crate::value::Value;
use derive_more::IntoIterator;

///
/// Document
///
/// Field-name → value mapping that remembers insertion order.
///
/// - Field names are unique; re-inserting a name replaces the value in place.
/// - Order is significant for marshaling only. Comparison sorts fields by
///   name first, so two documents with the same fields in a different order
///   are Equal.
///

#[derive(Clone, Debug, Default, IntoIterator, PartialEq)]
pub struct Document {
    #[into_iterator(owned, ref)]
    fields: Vec<(String, Value)>,
}

impl Document {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name` to `value`, returning the previous value if the field
    /// already existed. An existing field keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();

        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.fields[index].1, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Append without the duplicate scan. Callers must already know `name`
    /// is absent.
    pub(crate) fn push_unchecked(&mut self, name: String, value: Value) {
        self.fields.push((name, value));
    }

    /// Remove a field, preserving the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.position(name)?;

        Some(self.fields.remove(index).1)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(field, value)| (field == name).then_some(value))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Fields ordered by name (byte order), as the comparator walks them.
    pub(crate) fn sorted_fields(&self) -> Vec<(&str, &Value)> {
        let mut fields: Vec<_> = self.iter().collect();
        fields.sort_unstable_by(|(left, _), (right, _)| left.as_bytes().cmp(right.as_bytes()));

        fields
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(field, _)| field == name)
    }
}

impl<K, V> FromIterator<(K, V)> for Document
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Self::new();
        for (name, value) in iter {
            doc.insert(name, value);
        }

        doc
    }
}

impl<K, V> Extend<(K, V)> for Document
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
