use fibre_deps::{global, lazy_key, resolve};
use std::panic;

lazy_key!(ApiToken: String);

fn main() {
  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to read a lazy key that was never set...");

  let result = panic::catch_unwind(|| {
    // This line will panic!
    let _token = resolve!(ApiToken);
  });

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the non-panicking `try_get()` method ---
  println!("\nNow, reading through the fallible `try_get()` method...");

  match global().try_get::<ApiToken>() {
    Ok(_) => panic!("Should not have found a value!"),
    Err(err) => println!("Correctly received an error: {err}"),
  }
}
