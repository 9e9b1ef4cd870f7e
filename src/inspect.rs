//! Walks a [`Value`] through printing, type naming, checked access and
//! probing, one line each.

use core::fmt::{self, Write};

use crate::value::{Value, Visit};

pub const SEPARATOR: &str = "-----------------";

pub struct Inspector<W> {
    out: W,
}

impl<W: Write> Inspector<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn inspect(&mut self, value: &Value<'_>) -> fmt::Result {
        log::debug!("inspecting {}", value.kind());

        self.print_value(value)?;
        self.print_kind(value)?;
        self.checked_access(value)?;
        self.probe(value)?;
        writeln!(self.out, "{SEPARATOR}")
    }

    fn print_value(&mut self, value: &Value<'_>) -> fmt::Result {
        write!(self.out, "Value: ")?;
        value.visit(&mut WriteAlternative(&mut self.out))?;
        writeln!(self.out)
    }

    fn print_kind(&mut self, value: &Value<'_>) -> fmt::Result {
        let name = value.visit_with(|_| "int", |_| "double", |_| "string");
        writeln!(self.out, "Type: {name}")
    }

    /// Requests an alternative that is not active and handles the failure.
    ///
    /// The guess is a two-way branch: `double` when an `int` is held,
    /// `int` otherwise.
    fn checked_access(&mut self, value: &Value<'_>) -> fmt::Result {
        write!(self.out, "Exception demo: ")?;
        let result = if value.is_int() {
            value.get::<f64>().map(Value::from)
        } else {
            value.get::<i64>().map(Value::from)
        };
        match result {
            Ok(v) => writeln!(self.out, "{v}"),
            Err(e) => {
                log::debug!("handled {e}");
                writeln!(self.out, "Caught exception: {e}")
            }
        }
    }

    fn probe(&mut self, value: &Value<'_>) -> fmt::Result {
        write!(self.out, "Using get_if: ")?;
        if let Some(v) = value.get_if::<i64>() {
            write!(self.out, "It's an int with value {v}")?;
        } else if let Some(v) = value.get_if::<f64>() {
            write!(self.out, "It's a double with value {v}")?;
        } else if let Some(v) = value.get_if::<&str>() {
            write!(self.out, "It's a string with value \"{v}\"")?;
        }
        writeln!(self.out)
    }
}

struct WriteAlternative<'w, W>(&'w mut W);

impl<'v, W: Write> Visit<'v> for WriteAlternative<'_, W> {
    type Output = fmt::Result;

    fn visit_int(&mut self, value: i64) -> fmt::Result {
        write!(self.0, "{value}")
    }

    fn visit_float(&mut self, value: f64) -> fmt::Result {
        write!(self.0, "{value}")
    }

    fn visit_text(&mut self, value: &'v str) -> fmt::Result {
        self.0.write_str(value)
    }
}

/// The three demo values: one per alternative.
#[allow(clippy::approx_constant)]
pub fn examples() -> [Value<'static>; 3] {
    [
        Value::from(42_i64),
        Value::from(3.14159_f64),
        Value::from("Hello, variant!"),
    ]
}

/// Inspect each of [`examples`] in turn.
pub fn demo(out: impl Write) -> fmt::Result {
    let mut inspector = Inspector::new(out);
    for value in examples() {
        inspector.inspect(&value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
