//! Public macros for declaring keys and resolving them.

/// Declares one or more eager keys.
///
/// Each key is a zero-sized type whose slot starts out holding the given default.
///
/// # Examples
///
/// ```
/// use fibre_deps::{eager_key, global};
///
/// eager_key! {
///   /// Requests allowed in flight.
///   pub MaxInFlight: usize = 64;
///   Greeting: String = String::from("hello");
/// }
///
/// assert_eq!(global().get::<MaxInFlight>(), 64);
/// assert_eq!(global().get::<Greeting>(), "hello");
/// ```
#[macro_export]
macro_rules! eager_key {
    ($($(#[$meta:meta])* $vis:vis $name:ident : $value:ty = $default:expr);+ $(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            $vis struct $name;

            impl $crate::Key for $name {
                type Value = $value;

                fn initial() -> $crate::Slot<$value> {
                    $crate::Slot::Set($default)
                }
            }
        )+
    };
}

/// Declares one or more lazy keys.
///
/// Each key is a zero-sized type whose slot starts out unset. Reading it before
/// the first write panics.
///
/// # Examples
///
/// ```
/// use fibre_deps::{global, lazy_key};
///
/// lazy_key!(pub ApiToken: String);
///
/// assert!(!global().is_set::<ApiToken>());
/// global().set::<ApiToken>("secret".to_string());
/// assert_eq!(global().get::<ApiToken>(), "secret");
/// ```
#[macro_export]
macro_rules! lazy_key {
    ($($(#[$meta:meta])* $vis:vis $name:ident : $value:ty);+ $(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            $vis struct $name;

            impl $crate::Key for $name {
                type Value = $value;

                fn initial() -> $crate::Slot<$value> {
                    $crate::Slot::Unset
                }
            }
        )+
    };
}

/// Reads a key, panicking if it is an unset lazy key.
///
/// Without a second argument the global registry is used.
///
/// # Examples
///
/// ```
/// use fibre_deps::{eager_key, resolve, Registry};
///
/// eager_key!(Workers: u8 = 4);
///
/// assert_eq!(resolve!(Workers), 4);
///
/// let registry = Registry::new();
/// registry.set::<Workers>(8);
/// assert_eq!(resolve!(Workers, registry), 8);
/// ```
#[macro_export]
macro_rules! resolve {
    ($key:ty) => {
        $crate::global().get::<$key>()
    };

    ($key:ty, $registry:expr) => {
        $registry.get::<$key>()
    };
}

/// Reads a key, returning `None` if it is an unset lazy key.
///
/// Without a second argument the global registry is used.
#[macro_export]
macro_rules! maybe_resolve {
    ($key:ty) => {
        $crate::global().try_get::<$key>().ok()
    };

    ($key:ty, $registry:expr) => {
        $registry.try_get::<$key>().ok()
    };
}
