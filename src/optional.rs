//! The optional value type and its constructors

use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

/// An optional value: either a present value of type `T` or nothing.
///
/// Values are built through the constructors below ([`Optional::some`],
/// [`Optional::none`] and the `from_*` bridges). The default is the absent
/// variant.
///
/// ```
/// use optional::{Optional, unwrap};
///
/// assert_eq!(unwrap(Optional::some("abc")), ("abc", true));
/// assert_eq!(unwrap(Optional::<&str>::none()), ("", false));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Create a present value
    pub const fn some(value: T) -> Self {
        Self(Some(value))
    }

    /// Create an absent value
    pub const fn none() -> Self {
        Self(None)
    }

    /// Copy the referent of a nullable reference.
    ///
    /// The result owns its own clone; it does not alias `value`.
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// let s = String::from("abc");
    /// assert_eq!(Optional::from_ptr(Some(&s)), Optional::some(s.clone()));
    /// assert_eq!(Optional::<String>::from_ptr(None), Optional::none());
    /// ```
    pub fn from_ptr(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        match value {
            Some(v) => Self::some(v.clone()),
            None => Self::none(),
        }
    }

    /// Keep the value of a successful result, discard errors.
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::some(v),
            Err(_) => Self::none(),
        }
    }

    /// Bridge a `(value, found)` pair
    pub fn from_existence_check(value: T, exists: bool) -> Self {
        if exists {
            Self::some(value)
        } else {
            Self::none()
        }
    }

    /// Take the first element of `iter`, if any.
    ///
    /// At most one element is pulled. The rest of the iterator is dropped
    /// without being advanced, so infinite sources are fine.
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// assert_eq!(Optional::from_iterator(1..), Optional::some(1));
    /// assert_eq!(Optional::from_iterator(std::iter::empty::<i32>()), Optional::none());
    /// ```
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self(iter.into_iter().next())
    }

    /// Returns `true` if a value is present
    pub fn is_some(&self) -> bool {
        crate::ops::is_some(self)
    }

    /// Returns `true` if no value is present
    pub fn is_none(&self) -> bool {
        crate::ops::is_none(self)
    }

    /// Borrow the held value, `None` when absent
    pub fn ptr(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Mutably borrow the held value. Writes through the reference update
    /// this option.
    pub fn ptr_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    /// Iterate the held value: one element when present, none otherwise.
    ///
    /// Each call starts over from the current state.
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// let some = Optional::some("abc");
    /// assert_eq!(some.iter().collect::<Vec<_>>(), vec![&"abc"]);
    /// assert_eq!(Optional::<&str>::none().iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.0.as_ref() }
    }

    /// Mutable iteration over the held value
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { inner: self.0.as_mut() }
    }

    /// Convert into a standard `Option`
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Presence marker carrying no value, used by the predicates.
    pub(crate) fn marker(&self) -> Optional<()> {
        Optional(self.0.as_ref().map(|_| ()))
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        crate::ops::equal(self, other)
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Borrowing iterator returned by [`Optional::iter`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`Optional::iter_mut`]
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the held value
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.0 }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
