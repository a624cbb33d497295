use fibre_deps::{eager_key, global, lazy_key, Key, KeyKind, RegistryError};

// --- Test Fixtures ---

#[derive(Debug, Clone, PartialEq, Eq)]
struct Endpoint {
  host: String,
  port: u16,
}

eager_key! {
  MaxConnections: u32 = 16;
  DefaultEndpoint: Endpoint = Endpoint { host: "localhost".to_string(), port: 80 };
  OverwrittenFlag: bool = false;
}

lazy_key! {
  UnsetToken: String;
  SessionSecret: String;
  RetryCount: u64;
  MissingUpdate: Vec<u8>;
}

// Both names refer to one key type, and therefore to one slot.
mod settings {
  fibre_deps::lazy_key!(pub SharedLabel: &'static str);
}
type LabelAlias = settings::SharedLabel;

// --- Basic Tests ---

#[test]
fn test_eager_key_reads_default() {
  assert_eq!(MaxConnections::kind(), KeyKind::Eager);
  assert_eq!(global().get::<MaxConnections>(), 16);
  assert_eq!(
    global().get::<DefaultEndpoint>(),
    Endpoint {
      host: "localhost".to_string(),
      port: 80
    }
  );
}

#[test]
fn test_eager_key_last_write_wins() {
  global().set::<OverwrittenFlag>(true);
  assert!(global().get::<OverwrittenFlag>());

  for flag in [false, true, false] {
    global().set::<OverwrittenFlag>(flag);
    assert_eq!(global().get::<OverwrittenFlag>(), flag);
  }
}

#[test]
fn test_lazy_key_set_then_overwrite() {
  assert_eq!(SessionSecret::kind(), KeyKind::Lazy);
  assert!(!global().is_set::<SessionSecret>());

  global().set::<SessionSecret>("first".to_string());
  assert!(global().is_set::<SessionSecret>());
  assert_eq!(global().get::<SessionSecret>(), "first");

  global().set::<SessionSecret>("second".to_string());
  assert_eq!(global().get::<SessionSecret>(), "second");
}

#[test]
#[should_panic(expected = "Value must be set before it is read")]
fn test_get_panics_on_unset_lazy_key() {
  global().get::<UnsetToken>();
}

#[test]
fn test_try_get_reports_unset_lazy_key() {
  let err = global().try_get::<RetryCount>().unwrap_err();
  assert_eq!(
    err,
    RegistryError::Unset {
      key: RetryCount::name()
    }
  );
  assert!(err.to_string().contains("RetryCount"));

  global().set::<RetryCount>(3);
  assert_eq!(global().try_get::<RetryCount>(), Ok(3));
}

#[test]
fn test_same_key_resolves_to_one_slot() {
  global().set::<settings::SharedLabel>("written through the path");
  assert_eq!(global().get::<LabelAlias>(), "written through the path");

  global().set::<LabelAlias>("written through the alias");
  assert_eq!(
    global().get::<settings::SharedLabel>(),
    "written through the alias"
  );
}

#[test]
fn test_update_modifies_in_place() {
  eager_key!(Tags: Vec<&'static str> = vec!["a"]);

  global().update::<Tags>(|tags| tags.push("b"));
  assert_eq!(global().get::<Tags>(), vec!["a", "b"]);
}

#[test]
#[should_panic(expected = "Value must be set before it is read")]
fn test_update_panics_on_unset_lazy_key() {
  global().update::<MissingUpdate>(|bytes| bytes.clear());
}
