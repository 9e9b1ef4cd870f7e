use super::*;

fn _inspect(value: Value<'_>) -> String {
  let mut inspector = Inspector::new(String::new());
  inspector.inspect(&value).unwrap();
  inspector.into_inner()
}

#[test]
fn int_value() {
  insta::assert_snapshot!(_inspect(Value::from(42_i64)), @r###"
  Value: 42
  Type: int
  Exception demo: Caught exception: bad variant access: requested double, but int is active
  Using get_if: It's an int with value 42
  -----------------
  "###);
}

#[test]
#[allow(clippy::approx_constant)]
fn float_value() {
  insta::assert_snapshot!(_inspect(Value::from(3.14159_f64)), @r###"
  Value: 3.14159
  Type: double
  Exception demo: Caught exception: bad variant access: requested int, but double is active
  Using get_if: It's a double with value 3.14159
  -----------------
  "###);
}

#[test]
fn text_value() {
  insta::assert_snapshot!(_inspect(Value::from("Hello, variant!")), @r###"
  Value: Hello, variant!
  Type: string
  Exception demo: Caught exception: bad variant access: requested int, but string is active
  Using get_if: It's a string with value "Hello, variant!"
  -----------------
  "###);
}

#[test]
fn demo_inspects_every_example_in_order() {
  let mut out = String::new();
  demo(&mut out).unwrap();

  let values: Vec<_> = out
    .lines()
    .filter_map(|line| line.strip_prefix("Value: "))
    .collect();
  assert_eq!(values, ["42", "3.14159", "Hello, variant!"]);
  assert_eq!(out.lines().filter(|line| *line == SEPARATOR).count(), 3);
  assert_eq!(out.lines().count(), 15);
}

#[test]
fn each_value_is_five_lines() {
  for value in examples() {
    let out = _inspect(value);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Value: "));
    assert!(lines[1].starts_with("Type: "));
    assert!(lines[2].starts_with("Exception demo: Caught exception: "));
    assert!(lines[3].starts_with("Using get_if: It's a"));
    assert_eq!(lines[4], SEPARATOR);
  }
}

#[test]
fn write_errors_propagate() {
  struct Full;

  impl Write for Full {
    fn write_str(&mut self, _: &str) -> fmt::Result {
      Err(fmt::Error)
    }
  }

  let mut inspector = Inspector::new(Full);
  assert!(inspector.inspect(&Value::from(1_i64)).is_err());
}

#[test]
fn demo_lines_use_the_demonstration_labels() {
  let mut out = String::new();
  demo(&mut out).unwrap();
  let lines: Vec<_> = out.lines().collect();

  assert_eq!(
    lines[2],
    "Exception demo: Caught exception: bad variant access: requested double, but int is active"
  );
  assert_eq!(lines[3], "Using get_if: It's an int with value 42");
  assert_eq!(lines[8], "Using get_if: It's a double with value 3.14159");
  assert_eq!(
    lines[13],
    "Using get_if: It's a string with value \"Hello, variant!\""
  );
}
