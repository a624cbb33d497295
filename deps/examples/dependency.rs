use fibre_deps::{eager_key, Dependency, Registry};

eager_key!(Theme: &'static str = "light");

// A component that keeps a handle on its dependency instead of a copy of it.
struct Renderer<'r> {
  theme: Dependency<'r, Theme>,
}

impl Renderer<'_> {
  fn render(&self) -> String {
    format!("<body class=\"{}\">", self.theme.read())
  }
}

fn main() {
  let registry = Registry::new();
  let renderer = Renderer {
    theme: Dependency::in_registry(&registry),
  };
  println!("{}", renderer.render());

  // Writes through any handle to the slot are seen by every other handle.
  Dependency::<Theme>::in_registry(&registry).write("dark");
  println!("{}", renderer.render());
  assert_eq!(renderer.render(), "<body class=\"dark\">");
}
