use fibre_deps::{eager_key, global, install, lazy_key, resolve, Registry};

eager_key! {
  Port: u16 = 8080;
  Verbose: bool = false;
}

lazy_key!(DatabaseUrl: String);

fn serve() {
  println!(
    "Listening on port {} (verbose: {}), database at {}",
    resolve!(Port),
    resolve!(Verbose),
    resolve!(DatabaseUrl)
  );
}

fn main() {
  // --- Configure everything before anything reads ---
  let registry = Registry::new();
  registry
    .with::<DatabaseUrl>("postgres://localhost/app".to_string())
    .with::<Verbose>(true);

  install(registry).expect("the global registry is installed once, here");

  serve();

  // Eager keys that were never configured still carry their default.
  assert_eq!(global().get::<Port>(), 8080);
}
