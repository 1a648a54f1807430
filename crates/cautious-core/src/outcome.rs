//! What a deferred computation may return, and when that counts as present.

use cautious_types::Value;
use std::collections::{BTreeMap, HashMap};

/// The result of a deferred computation, collapsed to "a value" or "no value".
///
/// `None`, `Err(_)` and [`Value::Nil`] are absent. `Some(x)` and `Ok(x)` are
/// as present as `x` is, so `Some(Value::Nil)` and `Ok(Value::Nil)` are absent
/// too. A type of your own takes part by implementing this trait, usually
/// with `Some(self)`.
pub trait Outcome {
    type Output;

    fn into_present(self) -> Option<Self::Output>;
}

impl<T: Outcome> Outcome for Option<T> {
    type Output = T::Output;

    fn into_present(self) -> Option<T::Output> {
        self.and_then(Outcome::into_present)
    }
}

impl<T: Outcome, E> Outcome for Result<T, E> {
    type Output = T::Output;

    fn into_present(self) -> Option<T::Output> {
        self.ok().and_then(Outcome::into_present)
    }
}

impl Outcome for Value {
    type Output = Value;

    fn into_present(self) -> Option<Value> {
        (!self.is_nil()).then_some(self)
    }
}

impl<'a> Outcome for &'a Value {
    type Output = &'a Value;

    fn into_present(self) -> Option<&'a Value> {
        (!self.is_nil()).then_some(self)
    }
}

/// Plain data is always present, owned or borrowed.
macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Outcome for $ty {
                type Output = $ty;

                fn into_present(self) -> Option<$ty> {
                    Some(self)
                }
            }

            impl<'a> Outcome for &'a $ty {
                type Output = &'a $ty;

                fn into_present(self) -> Option<&'a $ty> {
                    Some(self)
                }
            }
        )*
    };
}

always_present!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

impl<'a> Outcome for &'a str {
    type Output = &'a str;

    fn into_present(self) -> Option<&'a str> {
        Some(self)
    }
}

impl<'a, T> Outcome for &'a [T] {
    type Output = &'a [T];

    fn into_present(self) -> Option<&'a [T]> {
        Some(self)
    }
}

impl<T> Outcome for Vec<T> {
    type Output = Vec<T>;

    fn into_present(self) -> Option<Vec<T>> {
        Some(self)
    }
}

impl<'a, T> Outcome for &'a Vec<T> {
    type Output = &'a Vec<T>;

    fn into_present(self) -> Option<&'a Vec<T>> {
        Some(self)
    }
}

impl<K, V> Outcome for BTreeMap<K, V> {
    type Output = BTreeMap<K, V>;

    fn into_present(self) -> Option<BTreeMap<K, V>> {
        Some(self)
    }
}

impl<K, V, S> Outcome for HashMap<K, V, S> {
    type Output = HashMap<K, V, S>;

    fn into_present(self) -> Option<HashMap<K, V, S>> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_defers_to_its_contents() {
        assert_eq!(Some(Value::Nil).into_present(), None);
        assert_eq!(Some(Some(3)).into_present(), Some(3));
        assert_eq!(Some(None::<i32>).into_present(), None);
        assert_eq!(Some(&Value::Nil).into_present(), None);
        assert_eq!(Some(&7_u8).into_present(), Some(&7));
    }
}
