use crate::html::Tag;
use std::slice::Iter;

/// Stack of open elements: tags whose start tag has been scanned, but whose
/// end hasn't been resolved yet, either explicitly or implicitly.
/// The last item is the innermost open element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagStack {
    items: Vec<Tag>,
}

impl TagStack {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TagStack {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn from_items(items: Vec<Tag>) -> Self {
        TagStack { items }
    }

    #[inline]
    pub fn push(&mut self, tag: Tag) {
        trace!(@stack "push", tag);

        self.items.push(tag);
    }

    /// Removes the innermost open element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Scanners check the stack before popping,
    /// so this can only be caused by a bug in the scanner itself.
    #[inline]
    pub fn pop(&mut self) -> Tag {
        let tag = self
            .items
            .pop()
            .expect("Tag stack should not be empty when an element is closed");

        trace!(@stack "pop", tag);

        tag
    }

    #[inline]
    pub fn peek(&self) -> Option<&Tag> {
        self.items.last()
    }

    /// Searches the stack from the innermost element outwards.
    #[inline]
    pub fn contains_equal(&self, target: &Tag) -> bool {
        self.items.iter().rev().any(|tag| tag == target)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the outermost element to the innermost one.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Tag> {
        self.items.iter()
    }
}

impl<'s> IntoIterator for &'s TagStack {
    type Item = &'s Tag;
    type IntoIter = Iter<'s, Tag>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Tag> for TagStack {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        TagStack::from_items(iter.into_iter().collect())
    }
}
