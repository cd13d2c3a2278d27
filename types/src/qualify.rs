//! Qualifier wrappers.
//!
//! Rust types carry no `const`/`volatile` qualifiers, so the qualifying
//! builders wrap the value instead. Both wrappers are `#[repr(transparent)]`
//! and have the layout of `T`.

use core::{cell::UnsafeCell, fmt, ops::Deref, ptr};

/// A `T` that only ever hands out shared access.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Const<T>(T);

impl<T> Const<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Const<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Const<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Const<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Const").field(&self.0).finish()
    }
}

/// A `T` whose every access is a volatile read or write.
///
/// Accesses are never elided or merged by the optimizer, which is what
/// memory-mapped registers and values shared with signal handlers need.
#[repr(transparent)]
pub struct Volatile<T>(UnsafeCell<T>);

impl<T> Volatile<T> {
    pub const fn new(value: T) -> Self {
        Self(UnsafeCell::new(value))
    }

    pub fn into_inner(self) -> T {
        self.0.into_inner()
    }

    pub fn as_ptr(&self) -> *mut T {
        self.0.get()
    }
}

impl<T: Copy> Volatile<T> {
    pub fn read(&self) -> T {
        // SAFETY: the pointer comes from our own cell and is valid and aligned.
        unsafe { ptr::read_volatile(self.0.get()) }
    }

    pub fn write(&self, value: T) {
        // SAFETY: as in `read`; `Volatile` is `!Sync`, so no other thread
        // can access the cell concurrently.
        unsafe { ptr::write_volatile(self.0.get(), value) }
    }

    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.write(f(self.read()));
    }
}

impl<T: Copy + Default> Default for Volatile<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy> Clone for Volatile<T> {
    fn clone(&self) -> Self {
        Self::new(self.read())
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Volatile<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Volatile").field(&self.read()).finish()
    }
}

static_assertions::assert_eq_size!(Const<u64>, u64);
static_assertions::assert_eq_size!(Volatile<u32>, u32);
static_assertions::assert_eq_align!(Volatile<u64>, u64);
static_assertions::assert_not_impl_any!(Volatile<u8>: Sync);
