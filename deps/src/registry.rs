//! The thread-safe `Registry` and its slot operations.

use crate::core::{slot_id, Key, Slot};
use crate::error::RegistryError;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

type SlotCell = Arc<dyn Any + Send + Sync>;
type TypedSlot<V> = Arc<Mutex<Slot<V>>>;

/// A typed key-to-value store.
///
/// Every key type owns exactly one slot. A slot is created from [`Key::initial`]
/// the first time the key is touched, so eager keys read back their default and
/// lazy keys stay unset until written. There is no removal and no enumeration.
///
/// The store is sharded and safe to share between threads. Each slot carries its
/// own lock; the shard lock is only held while a slot is looked up or created.
#[derive(Default)]
pub struct Registry {
  slots: DashMap<TypeId, SlotCell>,
}

impl Registry {
  /// Creates a new, empty `Registry`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- PRIVATE HELPERS ---

  fn slot<K: Key>(&self) -> TypedSlot<K::Value>
  where
    K::Value: Send + Sync,
  {
    let id = slot_id::<K>();
    let existing = self.slots.get(&id).map(|slot| Arc::clone(slot.value()));
    let slot = match existing {
      Some(slot) => slot,
      None => {
        // Built outside the shard lock so a default may itself read the registry.
        let initial = K::initial();
        let created = self.slots.entry(id).or_insert_with(|| {
          tracing::trace!(key = K::name(), set = initial.is_set(), "slot created");
          let cell: SlotCell = Arc::new(Mutex::new(initial));
          cell
        });
        Arc::clone(created.value())
      }
    };
    downcast::<K>(slot)
  }

  fn unset_fatal<K: Key>(err: RegistryError) -> ! {
    tracing::error!(key = K::name(), "dependency read before it was set");
    panic!("{}", err)
  }

  // --- PUBLIC API ---

  /// Returns the current value for `K`.
  ///
  /// # Panics
  ///
  /// Panics if `K` is a lazy key that has never been written. Reading an unset
  /// dependency is a programming error; use [`Registry::try_get`] to check first.
  pub fn get<K: Key>(&self) -> K::Value
  where
    K::Value: Send + Sync,
  {
    match self.try_get::<K>() {
      Ok(value) => value,
      Err(err) => Self::unset_fatal::<K>(err),
    }
  }

  /// Returns the current value for `K`, or [`RegistryError::Unset`] if a lazy key
  /// has not been written yet.
  pub fn try_get<K: Key>(&self) -> Result<K::Value, RegistryError>
  where
    K::Value: Send + Sync,
  {
    let slot = self.slot::<K>();
    let value = Slot::as_ref(&slot.lock()).into_option().cloned();
    tracing::trace!(key = K::name(), found = value.is_some(), "read");
    value.ok_or(RegistryError::Unset { key: K::name() })
  }

  /// Stores `value` for `K`, replacing whatever was there.
  pub fn set<K: Key>(&self, value: K::Value)
  where
    K::Value: Send + Sync,
  {
    tracing::trace!(key = K::name(), "write");
    let slot = match self.slots.entry(slot_id::<K>()) {
      Entry::Occupied(entry) => Arc::clone(entry.get()),
      Entry::Vacant(entry) => {
        let cell: SlotCell = Arc::new(Mutex::new(Slot::Set(value)));
        entry.insert(cell);
        return;
      }
    };
    *downcast::<K>(slot).lock() = Slot::Set(value);
  }

  /// Same as [`Registry::set`] but hands the registry back for chained setup.
  ///
  /// # Examples
  ///
  /// ```
  /// use fibre_deps::{eager_key, lazy_key, Registry};
  ///
  /// eager_key!(Port: u16 = 80);
  /// lazy_key!(Host: String);
  ///
  /// let registry = Registry::new();
  /// registry.with::<Port>(8080).with::<Host>("localhost".to_string());
  ///
  /// assert_eq!(registry.get::<Port>(), 8080);
  /// assert_eq!(registry.get::<Host>(), "localhost");
  /// ```
  pub fn with<K: Key>(&self, value: K::Value) -> &Self
  where
    K::Value: Send + Sync,
  {
    self.set::<K>(value);
    self
  }

  /// Whether a read of `K` would succeed.
  pub fn is_set<K: Key>(&self) -> bool
  where
    K::Value: Send + Sync,
  {
    let set = self.slot::<K>().lock().is_set();
    set
  }

  /// Modifies the value for `K` in place.
  ///
  /// Only the slot of `K` stays locked while `f` runs: `f` may read and write
  /// other keys, but must not touch `K` itself through this registry.
  ///
  /// # Panics
  ///
  /// Panics like [`Registry::get`] when `K` is unset.
  pub fn update<K: Key>(&self, f: impl FnOnce(&mut K::Value))
  where
    K::Value: Send + Sync,
  {
    let slot = self.slot::<K>();
    let updated = match &mut *slot.lock() {
      Slot::Set(value) => {
        f(value);
        true
      }
      Slot::Unset => false,
    };

    if updated {
      tracing::trace!(key = K::name(), "update");
    } else {
      Self::unset_fatal::<K>(RegistryError::Unset { key: K::name() });
    }
  }
}

impl fmt::Debug for Registry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Registry")
      .field("slots", &self.slots.len())
      .finish()
  }
}

// Slots are keyed by the key's own `TypeId`, so the stored type always matches.
fn downcast<K: Key>(slot: SlotCell) -> TypedSlot<K::Value>
where
  K::Value: Send + Sync,
{
  match slot.downcast::<Mutex<Slot<K::Value>>>() {
    Ok(slot) => slot,
    Err(_) => unreachable!("slot for {} holds a foreign type", K::name()),
  }
}
