use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
  /// A lazy key was read before its first write.
  #[error("Value must be set before it is read: {key}")]
  Unset { key: &'static str },

  #[error("The global registry has already been installed")]
  AlreadyInstalled,
}
