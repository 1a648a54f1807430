//! Normalized equality by canonical string form.

use std::fmt::Display;

/// Compare two values by their [`Display`] output.
///
/// `:symbol`, `"symbol"` and a record whose display is `symbol` are all the
/// same; `1` and `"1"` are the same. The comparison is case-sensitive.
pub trait SameAs: Display {
    fn same_as<U: Display + ?Sized>(&self, other: &U) -> bool {
        same_as(self, other)
    }
}

impl<T: Display + ?Sized> SameAs for T {}

/// Free-function form of [`SameAs::same_as`].
pub fn same_as<A, B>(a: &A, b: &B) -> bool
where
    A: Display + ?Sized,
    B: Display + ?Sized,
{
    a.to_string() == b.to_string()
}
