//! A read/write accessor bound to one registry slot.

use crate::core::Key;
use crate::error::RegistryError;
use crate::global::global;
use crate::registry::Registry;
use std::fmt;
use std::marker::PhantomData;

/// A handle that forwards reads and writes to the slot of `K`.
///
/// The binding is fixed at construction. A `Dependency` owns nothing, so it can
/// be copied and dropped freely without affecting the registry.
///
/// # Examples
///
/// ```
/// use fibre_deps::{eager_key, global, Dependency};
///
/// eager_key!(Verbose: bool = false);
///
/// let verbose = Dependency::<Verbose>::new();
/// assert!(!verbose.read());
///
/// verbose.write(true);
/// assert!(global().get::<Verbose>());
/// ```
pub struct Dependency<'r, K: Key> {
  registry: &'r Registry,
  _key: PhantomData<fn() -> K>,
}

impl<K: Key> Dependency<'static, K>
where
  K::Value: Send + Sync,
{
  /// Binds to the slot of `K` in the global registry.
  pub fn new() -> Self {
    Self::in_registry(global())
  }
}

impl<'r, K: Key> Dependency<'r, K>
where
  K::Value: Send + Sync,
{
  /// Binds to the slot of `K` in `registry`.
  pub fn in_registry(registry: &'r Registry) -> Self {
    Self {
      registry,
      _key: PhantomData,
    }
  }

  /// Reads the bound slot.
  ///
  /// # Panics
  ///
  /// Panics if the slot is an unset lazy key.
  pub fn read(&self) -> K::Value {
    self.registry.get::<K>()
  }

  pub fn try_read(&self) -> Result<K::Value, RegistryError> {
    self.registry.try_get::<K>()
  }

  pub fn write(&self, value: K::Value) {
    self.registry.set::<K>(value);
  }

  pub fn registry(&self) -> &'r Registry {
    self.registry
  }
}

impl<K: Key> Default for Dependency<'static, K>
where
  K::Value: Send + Sync,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Key> Clone for Dependency<'_, K> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<K: Key> Copy for Dependency<'_, K> {}

impl<K: Key> fmt::Debug for Dependency<'_, K> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Dependency").field(&K::name()).finish()
  }
}
