//! The process-wide registry and its initialization point.

use crate::error::RegistryError;
use crate::registry::Registry;
use once_cell::sync::OnceCell;

// The one and only global registry. Set once, never torn down.
static GLOBAL_REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Installs `registry` as the global registry.
///
/// Call this at startup, before anything reads through [`global`], to seed the
/// process with a registry that was configured up front. Fails with
/// [`RegistryError::AlreadyInstalled`] if a global registry already exists,
/// including one created implicitly by an earlier call to [`global`].
///
/// # Examples
///
/// ```
/// use fibre_deps::{global, install, lazy_key, Registry};
///
/// lazy_key!(DatabaseUrl: String);
///
/// let registry = Registry::new();
/// registry.set::<DatabaseUrl>("postgres://localhost/app".to_string());
/// install(registry).unwrap();
///
/// assert_eq!(global().get::<DatabaseUrl>(), "postgres://localhost/app");
/// ```
pub fn install(registry: Registry) -> Result<&'static Registry, RegistryError> {
  let mut installed = false;
  let global = GLOBAL_REGISTRY.get_or_init(|| {
    installed = true;
    registry
  });

  if installed {
    tracing::debug!("global registry installed");
    Ok(global)
  } else {
    Err(RegistryError::AlreadyInstalled)
  }
}

/// Provides a reference to the global registry.
///
/// # Initialization order
///
/// If [`install`] was never called, the first call to `global` installs an
/// empty registry and logs a warning. From then on the global is fixed, and any
/// later [`install`] fails with [`RegistryError::AlreadyInstalled`]. Processes
/// that seed the registry up front must call [`install`] before anything reads
/// through `global`, including [`resolve!`](crate::resolve) and
/// [`Dependency::new`](crate::Dependency::new).
pub fn global() -> &'static Registry {
  GLOBAL_REGISTRY.get_or_init(|| {
    tracing::warn!("global registry used before install, starting with an empty one");
    Registry::new()
  })
}
