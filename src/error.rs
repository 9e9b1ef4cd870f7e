use core::fmt::{self, Debug, Display, Write};
use std::sync::Arc;

use crate::lex::Span;
use crate::util::num_digits;
use crate::value::Kind;
use crate::Str;

pub type Result<T, E = Error> = ::std::result::Result<T, E>;

/// Returned by [`Value::get`][crate::Value::get] when the requested
/// alternative is not the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongAlternative {
    pub requested: Kind,
    pub active: Kind,
}

impl WrongAlternative {
    #[inline]
    pub fn new(requested: Kind, active: Kind) -> Self {
        Self { requested, active }
    }
}

impl Display for WrongAlternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bad variant access: requested {}, but {} is active",
            self.requested, self.active
        )
    }
}

impl std::error::Error for WrongAlternative {}

#[derive(Clone)]
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Clone)]
enum ErrorKind {
    Access(WrongAlternative),
    Spanned(Arc<str>, Str<'static>, Span),
}

impl Error {
    #[inline]
    pub fn spanned(
        message: impl Into<Str<'static>>,
        span: impl Into<Span>,
        src: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            kind: Box::new(ErrorKind::Spanned(src.into(), message.into(), span.into())),
        }
    }

    pub fn wrong_alternative(&self) -> Option<WrongAlternative> {
        match &*self.kind {
            ErrorKind::Access(e) => Some(*e),
            ErrorKind::Spanned(..) => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match &*self.kind {
            ErrorKind::Access(_) => None,
            ErrorKind::Spanned(_, _, span) => Some(*span),
        }
    }

    pub fn message(&self) -> String {
        match &*self.kind {
            ErrorKind::Access(e) => e.to_string(),
            ErrorKind::Spanned(_, message, _) => (**message).to_owned(),
        }
    }
}

impl From<WrongAlternative> for Error {
    #[inline]
    fn from(value: WrongAlternative) -> Self {
        Self {
            kind: Box::new(ErrorKind::Access(value)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Location {
    line_num: usize,
    line_start: usize,
    line_end: usize,
}

impl Location {
    fn from_source_span(source: &str, span: &Span) -> Self {
        let line_start = source[..span.start()]
            .rfind('\n')
            .map(|v| v + 1)
            .unwrap_or(0);
        let line_num = 1 + source[..line_start].lines().count();
        let line_end = source[span.start()..]
            .find('\n')
            .map(|v| v + span.start())
            .unwrap_or(source.len());

        Self {
            line_num,
            line_start,
            line_end,
        }
    }
}

impl std::error::Error for Error {}

impl Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.kind, f)
    }
}

impl Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access(e) => f.debug_tuple("WrongAlternative").field(e).finish(),
            Self::Spanned(_, m, s) => f.debug_tuple("SpannedError").field(m).field(s).finish(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.kind {
            ErrorKind::Access(e) => Display::fmt(e, f),
            ErrorKind::Spanned(src, message, span) => report_spanned(f, src, message, span),
        }
    }
}

fn report_spanned(out: &mut impl Write, src: &str, text: &str, span: &Span) -> fmt::Result {
    let loc = Location::from_source_span(src, span);
    let ln = loc.line_num;
    let lw = num_digits(loc.line_num);
    let pos = span.start() - loc.line_start;
    let len = if span.end() > loc.line_end {
        loc.line_end - span.start()
    } else {
        span.end() - span.start()
    };
    let line = &src[loc.line_start..loc.line_end];

    writeln!(out, "{text}")?;
    writeln!(out, "{ln} |  {line}")?;
    write!(out, "{:lw$} |  {:pos$}{:^<len$}", "", "", "^")
}

// error constructors
impl Error {
    #[inline]
    pub fn expected_literal(src: &str) -> Self {
        Error::spanned("error: expected a literal", Span::empty_at(src.len()), src)
    }

    #[inline]
    pub fn unexpected_token(span: impl Into<Span>, src: &str) -> Self {
        Error::spanned("error: unexpected token", span, src)
    }

    #[inline]
    pub fn trailing_input(span: impl Into<Span>, src: &str) -> Self {
        Error::spanned("error: unexpected trailing input", span, src)
    }

    #[inline]
    pub fn invalid_int(span: impl Into<Span>, src: &str) -> Self {
        Error::spanned("error: invalid integer literal", span, src)
    }

    #[inline]
    pub fn invalid_float(span: impl Into<Span>, src: &str) -> Self {
        Error::spanned("error: invalid float literal", span, src)
    }

    #[inline]
    pub fn invalid_escape(span: impl Into<Span>, src: &str) -> Self {
        Error::spanned("error: invalid escape sequence", span, src)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn wrong_alternative_describes_both_kinds() {
        let e = WrongAlternative::new(Kind::Float, Kind::Int);
        assert_eq!(
            e.to_string(),
            "bad variant access: requested double, but int is active"
        );

        let e = Error::from(e);
        assert_eq!(
            e.wrong_alternative(),
            Some(WrongAlternative::new(Kind::Float, Kind::Int))
        );
        assert_eq!(e.span(), None);
    }

    #[test]
    fn spanned_error_underlines_the_span() {
        let e = Error::invalid_int(0..5, "99999");
        assert_eq!(
            e.to_string(),
            indoc! {"
                error: invalid integer literal
                1 |  99999
                  |  ^^^^^"}
        );
        assert_eq!(e.wrong_alternative(), None);
        assert_eq!(e.message(), "error: invalid integer literal");
    }

    #[test]
    fn location_finds_the_enclosing_line() {
        let src = "\"a\nb\" 1";
        let loc = Location::from_source_span(src, &Span::from(6..7));
        assert_eq!(loc.line_num, 2);
        assert_eq!((loc.line_start, loc.line_end), (3, 7));
    }

    #[test]
    fn report_uses_the_line_holding_the_span() {
        let e = Error::trailing_input(6..7, "\"a\nb\" 1");
        assert_eq!(
            e.to_string(),
            indoc! {"
                error: unexpected trailing input
                2 |  b\" 1
                  |     ^"}
        );
    }
}
