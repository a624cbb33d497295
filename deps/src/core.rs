//! Key declarations and the slot state shared by both registries.

use std::any::{Any, TypeId};

/// The state of one registry slot.
///
/// Lazy keys start out `Unset`; eager keys start out `Set` with their declared
/// default. A slot never goes back to `Unset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<V> {
  Unset,
  Set(V),
}

impl<V> Slot<V> {
  pub fn is_set(&self) -> bool {
    matches!(self, Slot::Set(_))
  }

  pub fn as_ref(&self) -> Slot<&V> {
    match self {
      Slot::Unset => Slot::Unset,
      Slot::Set(value) => Slot::Set(value),
    }
  }

  pub fn into_option(self) -> Option<V> {
    match self {
      Slot::Unset => None,
      Slot::Set(value) => Some(value),
    }
  }
}

/// How a key was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
  /// Declared with a default, always readable.
  Eager,
  /// Declared without a default, readable only after the first write.
  Lazy,
}

/// A type tag naming one dependency.
///
/// The key type itself is the identity of its slot: every use of `K` in any
/// registry resolves to the same storage, no matter where it is named from.
/// Most keys are declared with [`eager_key!`](crate::eager_key) or
/// [`lazy_key!`](crate::lazy_key) instead of implementing this by hand.
///
/// # Examples
///
/// ```
/// use fibre_deps::{Key, KeyKind, Slot};
///
/// struct Retries;
///
/// impl Key for Retries {
///   type Value = u32;
///
///   fn initial() -> Slot<u32> {
///     Slot::Set(3)
///   }
/// }
///
/// assert_eq!(Retries::kind(), KeyKind::Eager);
/// ```
pub trait Key: Any {
  type Value: Clone + 'static;

  /// The slot contents before anything is written.
  fn initial() -> Slot<Self::Value>;

  fn kind() -> KeyKind {
    if Self::initial().is_set() {
      KeyKind::Eager
    } else {
      KeyKind::Lazy
    }
  }

  fn name() -> &'static str {
    std::any::type_name::<Self>()
  }
}

pub(crate) fn slot_id<K: Key>() -> TypeId {
  TypeId::of::<K>()
}
