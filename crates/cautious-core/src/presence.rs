//! Presence predicate.

use cautious_types::Value;

/// Whether a value is the absence-of-value marker.
///
/// Agrees with [`Outcome`](crate::Outcome): `None` is nil, and `Some(x)` is
/// nil exactly when `x` is.
pub trait Presence {
    fn is_nil(&self) -> bool;

    fn not_nil(&self) -> bool {
        !self.is_nil()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_nil(&self) -> bool {
        self.as_ref().map_or(true, Presence::is_nil)
    }
}

impl Presence for Value {
    fn is_nil(&self) -> bool {
        Value::is_nil(self)
    }
}

impl<P: Presence + ?Sized> Presence for &P {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

macro_rules! never_nil {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil!(
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
    str,
    String,
);

impl<T> Presence for [T] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> Presence for Vec<T> {
    fn is_nil(&self) -> bool {
        false
    }
}
