use logos::Logos;

use crate::error::{Error, Result};
use crate::lex::{Span, Token};
use crate::value::Value;
use crate::Str;

/// Read a single literal from `src`.
///
/// Text literals without escapes borrow from `src`.
pub fn parse(src: &str) -> Result<Value<'_>> {
    let mut lexer = Token::lexer(src);

    let token = match lexer.next() {
        Some(Ok(token)) => token,
        Some(Err(())) => return Err(Error::unexpected_token(lexer.span(), src)),
        None => return Err(Error::expected_literal(src)),
    };
    let span = Span::from(lexer.span());
    let lexeme = lexer.slice();

    let value = match token {
        Token::Int => lexeme
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| Error::invalid_int(span, src))?,
        Token::Float => lexeme
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Value::Float)
            .ok_or_else(|| Error::invalid_float(span, src))?,
        Token::Str => Value::Text(unescape(src, span)?),
    };

    if lexer.next().is_some() {
        return Err(Error::trailing_input(lexer.span(), src));
    }

    log::debug!("read {token} as {}", value.kind());
    Ok(value)
}

fn unescape(src: &str, span: Span) -> Result<Str<'_>> {
    // strip quotes
    let start = span.start() + 1;
    let inner = &src[start..span.end() - 1];
    if !inner.contains('\\') {
        return Ok(Str::borrowed(inner));
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        out.push(match chars.next() {
            Some((_, 'n')) => '\n',
            Some((_, 't')) => '\t',
            Some((_, 'r')) => '\r',
            Some((_, '0')) => '\0',
            Some((_, '\\')) => '\\',
            Some((_, '"')) => '"',
            next => {
                let end = next.map_or(inner.len(), |(j, c)| j + c.len_utf8());
                return Err(Error::invalid_escape(start + i..start + end, src));
            }
        });
    }

    Ok(Str::owned(out))
}
