//! # Fibre Deps
//!
//! A tiny, thread-safe, typed dependency registry for Rust.
//!
//! Dependencies are addressed by key types rather than strings, so a value is
//! registered and fetched with its real type and no casting at the call site.
//! Two references to the same key type always share one slot.
//!
//! ## Core Concepts
//!
//! - **Eager keys**: declared with a default, always readable. See [`eager_key!`].
//! - **Lazy keys**: declared without a default. Reading one before it is written is a
//!   programming error and panics. See [`lazy_key!`].
//! - **Registry**: the key-to-value store. [`Registry::new`] builds an isolated one,
//!   [`global()`] returns the process-wide instance and [`install`] seeds it explicitly.
//! - **Dependency**: a copyable accessor bound to one slot, forwarding reads and writes.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_deps::{eager_key, global, lazy_key, resolve, Dependency};
//!
//! eager_key!(pub Timeout: u64 = 30);
//! lazy_key!(pub ServiceName: String);
//!
//! fn main() {
//!   // Wire things up once at startup.
//!   global()
//!     .with::<ServiceName>("billing".to_string())
//!     .with::<Timeout>(10);
//!
//!   // Read them back anywhere.
//!   assert_eq!(resolve!(ServiceName), "billing");
//!
//!   // Or hold on to a slot.
//!   let timeout = Dependency::<Timeout>::new();
//!   timeout.write(timeout.read() * 2);
//!   assert_eq!(resolve!(Timeout), 20);
//! }
//! ```

mod core;
mod dependency;
mod error;
mod global;
mod macros;
mod registry;

pub use crate::core::{Key, KeyKind, Slot};
pub use dependency::Dependency;
pub use error::RegistryError;
pub use global::{global, install};
pub use registry::Registry;
