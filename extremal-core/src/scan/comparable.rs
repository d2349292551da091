//! Key projection used to order scanned elements.

/// A value that can be ordered through a projected key.
///
/// The projection must be stable: calling [`Comparable::key`] twice on the
/// same element has to produce keys that compare equal. Keys only need
/// [`PartialOrd`]; incomparable keys (such as `NaN`) never displace the
/// current best because every comparison is strict.
pub trait Comparable {
    /// Projected key, possibly borrowing from the element.
    type Key<'a>: PartialOrd + Clone
    where
        Self: 'a;

    /// Returns the ordering key of `self`.
    fn key(&self) -> Self::Key<'_>;
}

macro_rules! comparable_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Comparable for $ty {
                type Key<'a> = $ty;

                #[inline]
                fn key(&self) -> Self::Key<'_> {
                    *self
                }
            }
        )*
    };
}

comparable_by_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    bool, char,
);

impl Comparable for str {
    type Key<'a> = &'a str;

    #[inline]
    fn key(&self) -> Self::Key<'_> {
        self
    }
}

impl Comparable for String {
    type Key<'a> = &'a str;

    #[inline]
    fn key(&self) -> Self::Key<'_> {
        self.as_str()
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    type Key<'a>
        = T::Key<'a>
    where
        Self: 'a;

    #[inline]
    fn key(&self) -> Self::Key<'_> {
        (**self).key()
    }
}

impl<T: Comparable + ?Sized> Comparable for Box<T> {
    type Key<'a>
        = T::Key<'a>
    where
        Self: 'a;

    #[inline]
    fn key(&self) -> Self::Key<'_> {
        (**self).key()
    }
}
