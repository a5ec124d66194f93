//! Non-null reference-counted handle.
//!
//! [`Ref<T>`] wraps an `Arc<T>` and guarantees there is no null state to
//! observe: the only fallible entry points are the conversions from
//! handles that can actually be null ([`Ref::from_nullable`],
//! [`Ref::from_weak`]), and every other operation preserves non-nullness
//! structurally. Sharing and release follow `Arc` — atomic reference
//! counts, deterministic drop of the pointee with the last handle.

use std::sync::{Arc, Weak};

use core::fmt;
use core::ops::Deref;
use thiserror::Error;

/// Rejected construction of a [`Ref`] from a null shared handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid null reference")]
pub struct NullRef;

/// A shared-ownership handle that is never null.
///
/// Pointee access goes through `Deref`, with no per-access check — the
/// invariant is established once at construction. Conversions out of the
/// non-null world are explicit: [`Ref::into_shared`] surrenders the raw
/// `Arc`, and [`Ref::upcast`] re-wraps it as a supertype handle.
///
/// # Example
///
/// ```rust
/// use strata_common::refs::{Ref, make_ref};
/// use std::sync::Arc;
///
/// let r = make_ref(vec![1, 2, 3]);
/// assert_eq!(r.len(), 3);
///
/// // Clones share ownership of the same vector.
/// let other = r.clone();
/// assert!(Arc::ptr_eq(r.as_shared(), other.as_shared()));
/// ```
pub struct Ref<T: ?Sized> {
    inner: Arc<T>,
}

impl<T: ?Sized> Ref<T> {
    /// Wrap an `Arc`, which is non-null by construction. Infallible.
    pub fn new(inner: Arc<T>) -> Self {
        Self { inner }
    }

    /// Convert from a nullable shared handle.
    ///
    /// This is the checked boundary: `None` is rejected with [`NullRef`],
    /// and nothing past this point can reintroduce a null state.
    pub fn from_nullable(shared: Option<Arc<T>>) -> Result<Self, NullRef> {
        shared.map(|inner| Self { inner }).ok_or(NullRef)
    }

    /// Upgrade a weak handle, rejecting one whose pointee is already gone.
    pub fn from_weak(weak: &Weak<T>) -> Result<Self, NullRef> {
        weak.upgrade().map(|inner| Self { inner }).ok_or(NullRef)
    }

    /// Borrow the underlying shared handle.
    pub fn as_shared(&self) -> &Arc<T> {
        &self.inner
    }

    /// Surrender the underlying shared handle.
    ///
    /// One-way escape hatch for code that expects an `Arc` (or an
    /// `Option<Arc<T>>`): the result re-permits null-shaped states, so
    /// coming back requires the checked boundary again.
    pub fn into_shared(self) -> Arc<T> {
        self.inner
    }

    /// Convert into a handle to a supertype of `T`, preserving referential
    /// identity.
    ///
    /// `coerce` carries the unsize coercion on the underlying `Arc`; at a
    /// call site with a target annotation it is just `|shared| shared`.
    /// A non-null `T` is a non-null `U`, so this always succeeds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strata_common::refs::{Ref, make_ref};
    /// use std::sync::Arc;
    ///
    /// trait Node {
    ///     fn id(&self) -> u32;
    /// }
    ///
    /// struct Leaf(u32);
    /// impl Node for Leaf {
    ///     fn id(&self) -> u32 {
    ///         self.0
    ///     }
    /// }
    ///
    /// let leaf = make_ref(Leaf(7));
    /// let node: Ref<dyn Node> = leaf.upcast(|shared| shared as Arc<dyn Node>);
    /// assert_eq!(node.id(), 7);
    /// ```
    pub fn upcast<U: ?Sized>(self, coerce: impl FnOnce(Arc<T>) -> Arc<U>) -> Ref<U> {
        Ref {
            inner: coerce(self.inner),
        }
    }
}

/// Allocate a new `T` and wrap it. Effectively infallible — allocation
/// failure aborts the process rather than returning a value.
pub fn make_ref<T>(value: T) -> Ref<T> {
    Ref {
        inner: Arc::new(value),
    }
}

impl<T: ?Sized> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> Deref for Ref<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: ?Sized> From<Arc<T>> for Ref<T> {
    fn from(inner: Arc<T>) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized> From<Ref<T>> for Arc<T> {
    fn from(r: Ref<T>) -> Self {
        r.inner
    }
}

impl<T: ?Sized> TryFrom<Option<Arc<T>>> for Ref<T> {
    type Error = NullRef;
    fn try_from(shared: Option<Arc<T>>) -> Result<Self, NullRef> {
        Self::from_nullable(shared)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&self.inner).finish()
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
