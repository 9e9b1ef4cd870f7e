use std::fmt::Display;

use crate::error::{Result, WrongAlternative};
use crate::Str;

/// A value holding exactly one of a closed set of alternatives.
///
/// ```
/// use tagged::{Kind, Value};
///
/// let value = Value::from(42_i64);
/// assert_eq!(value.kind(), Kind::Int);
/// assert_eq!(value.get_if::<f64>(), None);
/// assert!(value.get::<f64>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Int(i64),
    Float(f64),
    Text(Str<'a>),
}

/// Names the alternative active in a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Float,
    Text,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Float => "double",
            Kind::Text => "string",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A type that can be read out of one alternative of a [`Value`].
pub trait Alternative<'v>: Sized {
    const KIND: Kind;

    fn try_from_value(value: &'v Value<'_>) -> Option<Self>;
}

/// Handlers for every alternative of a [`Value`].
///
/// There are no default methods, so an implementation that forgets an
/// alternative does not compile.
pub trait Visit<'v> {
    type Output;

    fn visit_int(&mut self, value: i64) -> Self::Output;
    fn visit_float(&mut self, value: f64) -> Self::Output;
    fn visit_text(&mut self, value: &'v str) -> Self::Output;
}

impl<'a> Value<'a> {
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Text(_) => Kind::Text,
        }
    }

    #[inline]
    pub fn holds<'v, T: Alternative<'v>>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Read the value as `T`, failing if `T` is not the active alternative.
    #[inline]
    pub fn get<'v, T: Alternative<'v>>(&'v self) -> Result<T, WrongAlternative> {
        T::try_from_value(self).ok_or_else(|| {
            let e = WrongAlternative::new(T::KIND, self.kind());
            log::trace!("get: {e}");
            e
        })
    }

    #[inline]
    pub fn get_if<'v, T: Alternative<'v>>(&'v self) -> Option<T> {
        T::try_from_value(self)
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[inline]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn visit<'v, V: Visit<'v>>(&'v self, visitor: &mut V) -> V::Output {
        log::trace!("visit {}", self.kind());
        match self {
            Value::Int(v) => visitor.visit_int(*v),
            Value::Float(v) => visitor.visit_float(*v),
            Value::Text(v) => visitor.visit_text(&**v),
        }
    }

    pub fn visit_with<'v, R>(
        &'v self,
        on_int: impl FnOnce(i64) -> R,
        on_float: impl FnOnce(f64) -> R,
        on_text: impl FnOnce(&'v str) -> R,
    ) -> R {
        log::trace!("visit {}", self.kind());
        match self {
            Value::Int(v) => on_int(*v),
            Value::Float(v) => on_float(*v),
            Value::Text(v) => on_text(&**v),
        }
    }

    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Int(v) => Value::Int(v),
            Value::Float(v) => Value::Float(v),
            Value::Text(v) => Value::Text(Str::owned(v.into_owned())),
        }
    }

    pub fn parse(src: &'a str) -> Result<Self> {
        crate::syn::parse(src)
    }
}

copy_alternative!(Int(i64));
copy_alternative!(Float(f64));

impl<'v> Alternative<'v> for &'v str {
    const KIND: Kind = Kind::Text;

    #[inline]
    fn try_from_value(value: &'v Value<'_>) -> Option<Self> {
        value.text()
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Text(Str::borrowed(value))
    }
}

impl From<String> for Value<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(Str::owned(value))
    }
}

impl<'a> From<Str<'a>> for Value<'a> {
    #[inline]
    fn from(value: Str<'a>) -> Self {
        Self::Text(value)
    }
}

impl Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => Display::fmt(v, f),
            Value::Float(v) => Display::fmt(v, f),
            Value::Text(v) => f.write_str(v),
        }
    }
}
