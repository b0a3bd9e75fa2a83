//! The one place where text and numbers are coerced into `f64`/`i32`.
//!
//! Both the CSV loader and the reducers go through this module, so a value
//! like `" 39 "` means the same thing whether it comes from a file or from a
//! caller.

use logos::Logos;

use crate::error::ValueError;

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Ignore this regex pattern between tokens
enum Token {
    #[regex(r"[+-]?[0-9]+")]
    Integer,
    #[regex(r"[+-]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+")]
    Decimal,
}

/// Lex `s` as exactly one number token, surrounded by optional whitespace.
fn single_token(s: &str) -> Result<(Token, &str), ValueError> {
    let mut lexer = Token::lexer(s);
    let token = match lexer.next() {
        Some(Ok(token)) => token,
        _ => return Err(ValueError::NotNumeric(s.to_string())),
    };
    let slice = lexer.slice();
    if lexer.next().is_some() {
        return Err(ValueError::NotNumeric(s.to_string()));
    }
    Ok((token, slice))
}

/// Parse a whole number. Decimals are rejected, as are values that do not
/// fit in an `i32`.
pub fn parse_integer(s: &str) -> Result<i32, ValueError> {
    match single_token(s)? {
        (Token::Integer, slice) => slice
            .parse()
            .map_err(|_| ValueError::OutOfRange(s.to_string())),
        (Token::Decimal, _) => Err(ValueError::NotNumeric(s.to_string())),
    }
}

/// Parse any integer or decimal literal, with an optional exponent.
pub fn parse_float(s: &str) -> Result<f64, ValueError> {
    let (_, slice) = single_token(s)?;
    slice
        .parse()
        .map_err(|_| ValueError::NotNumeric(s.to_string()))
}

/// Anything the reducers and the converter accept: plain numbers or their
/// textual form.
pub trait Numeric {
    fn to_f64(&self) -> Result<f64, ValueError>;
}

macro_rules! numeric_primitive {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn to_f64(&self) -> Result<f64, ValueError> {
                    Ok(f64::from(*self))
                }
            }
        )*
    };
}

numeric_primitive!(i8, i16, i32, u8, u16, u32, f32, f64);

impl Numeric for i64 {
    fn to_f64(&self) -> Result<f64, ValueError> {
        Ok(*self as f64)
    }
}

impl Numeric for usize {
    fn to_f64(&self) -> Result<f64, ValueError> {
        Ok(*self as f64)
    }
}

impl Numeric for str {
    fn to_f64(&self) -> Result<f64, ValueError> {
        parse_float(self)
    }
}

impl Numeric for String {
    fn to_f64(&self) -> Result<f64, ValueError> {
        parse_float(self)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_f64(&self) -> Result<f64, ValueError> {
        (**self).to_f64()
    }
}
