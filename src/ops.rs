//! Predicates and combinators over [`Optional`]

use crate::Optional;

/// Unwrap the contained value.
///
/// Returns `(value, true)` when present and `(T::default(), false)` when
/// absent. Never panics.
pub fn unwrap<T: Default>(opt: Optional<T>) -> (T, bool) {
    match opt.into_option() {
        Some(v) => (v, true),
        None => (T::default(), false),
    }
}

/// Returns `true` if the option holds a value
pub fn is_some<T>(opt: &Optional<T>) -> bool {
    let (_, present) = unwrap(opt.marker());
    present
}

/// Returns `true` if the option holds nothing
pub fn is_none<T>(opt: &Optional<T>) -> bool {
    let (_, present) = unwrap(opt.marker());
    !present
}

/// Returns the first present option, or an absent one if none is present.
///
/// Options are inspected left to right and nothing after the first present
/// one is pulled.
///
/// ```
/// use optional::{Optional, or};
///
/// let got = or([Optional::none(), Optional::some(10), Optional::some(20)]);
/// assert_eq!(got, Optional::some(10));
/// assert_eq!(or(Vec::<Optional<i32>>::new()), Optional::none());
/// ```
pub fn or<T, I>(opts: I) -> Optional<T>
where
    I: IntoIterator<Item = Optional<T>>,
{
    for opt in opts {
        if let Some(v) = opt.into_iter().next() {
            return Optional::some(v);
        }
    }
    Optional::none()
}

/// Returns `true` if `x` and `y` are equal.
///
/// - both absent: equal
/// - both present with equal values: equal
/// - otherwise: not equal
pub fn equal<T: PartialEq>(x: &Optional<T>, y: &Optional<T>) -> bool {
    match (x.ptr(), y.ptr()) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
