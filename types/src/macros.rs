//! Macros for spelling builders without writing the sequence out by hand.
//!
//! # Example
//!
//! ```
//! use beautiful_types::{array, fun, lfun, pfun, plfun, tylist};
//! use static_assertions::assert_type_eq_all;
//!
//! // Sequences
//! assert_type_eq_all!(tylist![u8, u16], beautiful_types::Cons<u8, tylist![u16]>);
//!
//! // Arrays, outermost dimension first
//! assert_type_eq_all!(array![u8; 2, 3], [[u8; 3]; 2]);
//! assert_type_eq_all!(array![u8], [u8]);
//!
//! // Functions: `fun!` lists the return type last, `lfun!` first
//! assert_type_eq_all!(fun![&'static str, usize], lfun![usize, &'static str]);
//! assert_type_eq_all!(pfun![u8, u8, bool], plfun![bool, u8, u8], fn(u8, u8) -> bool);
//! ```

/// A type-level sequence.
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `tylist![]` | `Nil` |
/// | `tylist![A, B, C]` | `Cons<A, Cons<B, Cons<C, Nil>>>` |
#[macro_export]
macro_rules! tylist {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::tylist![$($tail),*]>
    };
}

/// Array type with element type first and dimensions after a `;`.
///
/// `array![T]` is the unknown-bound array `[T]`.
#[macro_export]
macro_rules! array {
    ($elem:ty $(;)?) => { $crate::Array<$elem, $crate::Nil> };
    ($elem:ty; $($dim:expr),+ $(,)?) => {
        $crate::Array<$elem, $crate::tylist![$($crate::Dim<{ $dim }>),+]>
    };
}

/// Function type, return type first.
#[macro_export]
macro_rules! lfun {
    ($($ty:ty),+ $(,)?) => { $crate::LFun<$crate::tylist![$($ty),+]> };
}

/// Function type, return type last.
#[macro_export]
macro_rules! fun {
    ($($ty:ty),+ $(,)?) => { $crate::Fun<$crate::tylist![$($ty),+]> };
}

/// Function pointer, return type first.
#[macro_export]
macro_rules! plfun {
    ($($ty:ty),+ $(,)?) => { $crate::PLFun<$crate::tylist![$($ty),+]> };
}

/// Function pointer, return type last.
#[macro_export]
macro_rules! pfun {
    ($($ty:ty),+ $(,)?) => { $crate::PFun<$crate::tylist![$($ty),+]> };
}

#[cfg(test)]
mod tests {
    use crate::{Cons, Dim, Nil};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(tylist![], Nil);
    assert_type_eq_all!(tylist![u8,], Cons<u8, Nil>);
    assert_type_eq_all!(tylist![u8, [u16], str], Cons<u8, Cons<[u16], Cons<str, Nil>>>);

    const SIDE: usize = 4;
    assert_type_eq_all!(array![u8; SIDE, SIDE * 2], [[u8; 8]; 4]);
    assert_type_eq_all!(array![u8;], [u8]);
    assert_type_eq_all!(array![u8; 7], crate::Array<u8, Cons<Dim<7>, Nil>>);

    assert_type_eq_all!(fun![()], dyn Fn());
    assert_type_eq_all!(fun![u8, u16, u32], dyn Fn(u8, u16) -> u32);
    assert_type_eq_all!(lfun![u32, u8, u16], dyn Fn(u8, u16) -> u32);
    assert_type_eq_all!(pfun![&'static [u8], usize], fn(&'static [u8]) -> usize);
    assert_type_eq_all!(plfun![usize, &'static [u8]], fn(&'static [u8]) -> usize);

    #[test]
    fn test_macros_in_signatures() {
        fn apply_all(f: pfun![u8, u8], xs: &mut array![u8]) {
            for x in xs.iter_mut() {
                *x = f(*x);
            }
        }

        let mut xs: array![u8; 3] = [1, 2, 3];
        apply_all(|x| x + 1, &mut xs);
        assert_eq!(xs, [2, 3, 4]);
    }
}
