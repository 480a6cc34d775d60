use crate::error::{Error, Result};
use crate::{TagType, Value};

/// An NBT list: anonymous values that all have the declared element type.
///
/// The element type is fixed when the list is created. Any attempt to add a
/// value of another type fails immediately and leaves the list untouched, so a
/// `List` can never hold mixed types.
///
/// An empty list of unknown type is conventionally declared with
/// [`TagType::End`]. Nothing can be pushed onto such a list.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element_type: TagType,
    elements: Vec<Value>,
}

impl List {
    pub fn new(element_type: TagType) -> Self {
        Self {
            element_type,
            elements: Vec::new(),
        }
    }

    /// Build a list from existing values, checking every one against the
    /// element type.
    pub fn from_values<I>(element_type: TagType, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut list = Self::new(element_type);
        for v in values {
            list.push(v)?;
        }
        Ok(list)
    }

    pub fn element_type(&self) -> TagType {
        self.element_type
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.check(&value)?;
        self.elements.push(value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.elements
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.elements.len()))
    }

    /// Mutable access to an element. Changing the variant of the element
    /// through this reference would break the list's invariant, so the
    /// reference is only handed out for compounds and lists, whose contents
    /// can change without changing their type. Use [`List::set`] to replace
    /// scalar elements.
    pub fn get_mut(&mut self, index: usize) -> Result<ElementMut<'_>> {
        let len = self.elements.len();
        match self.elements.get_mut(index) {
            Some(Value::List(l)) => Ok(ElementMut::List(l)),
            Some(Value::Compound(c)) => Ok(ElementMut::Compound(c)),
            Some(_) => Ok(ElementMut::Scalar),
            None => Err(Error::index_out_of_range(index, len)),
        }
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        self.check(&value)?;
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        Ok(std::mem::replace(slot, value))
    }

    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index >= self.elements.len() {
            return Err(Error::index_out_of_range(index, self.elements.len()));
        }
        Ok(self.elements.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Push without checking the element type. The decoder only produces
    /// values of the declared type, so the check would be redundant there.
    pub(crate) fn push_unchecked(&mut self, value: Value) {
        debug_assert_eq!(value.tag_type(), self.element_type);
        self.elements.push(value);
    }

    pub(crate) fn with_capacity(element_type: TagType, cap: usize) -> Self {
        Self {
            element_type,
            elements: Vec::with_capacity(cap),
        }
    }

    fn check(&self, value: &Value) -> Result<()> {
        let found = value.tag_type();
        if found != self.element_type {
            return Err(Error::type_mismatch(self.element_type, found));
        }
        Ok(())
    }
}

/// Mutable view of a list element, see [`List::get_mut`].
#[derive(Debug)]
pub enum ElementMut<'a> {
    List(&'a mut List),
    Compound(&'a mut crate::Compound),
    /// Scalars must be replaced with [`List::set`].
    Scalar,
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
