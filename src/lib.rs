#[macro_use]
mod macros;

pub mod error;

pub mod lex;

pub mod syn;

pub mod value;

pub mod inspect;

mod util;

use beef::lean::Cow;

pub type Str<'a> = Cow<'a, str>;

pub use error::{Error, Result, WrongAlternative};
pub use inspect::Inspector;
pub use value::{Alternative, Kind, Value, Visit};
