//! Exact evaluation of display equations.
//!
//! Accepts non-negative integer literals, `+ - * /`, the display operators
//! `×` and `÷`, unary minus, and parentheses. Arithmetic is done over
//! reduced rationals so division never rounds: `7 ÷ 2` is `7/2`, not `3`.

use std::iter::Peekable;
use std::str::Chars;

/// A reduced fraction with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Create a reduced fraction. Returns `None` for a zero denominator or
    /// when the reduced form does not fit in `i64`.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Option<Self> {
        Self::reduce(num, den).ok()
    }

    fn reduce(num: i64, den: i64) -> Result<Self, EvalError> {
        if den == 0 {
            return Err(EvalError::DivisionByZero);
        }
        // i128 so that negating i64::MIN cannot overflow
        let g = i128::from(gcd(num.unsigned_abs(), den.unsigned_abs()).max(1));
        let sign: i128 = if den < 0 { -1 } else { 1 };
        let fit = |v: i128| i64::try_from(v).map_err(|_| EvalError::Overflow);
        Ok(Self {
            num: fit(sign * i128::from(num) / g)?,
            den: fit(sign * i128::from(den) / g)?,
        })
    }

    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    #[must_use]
    pub fn numerator(self) -> i64 {
        self.num
    }

    #[must_use]
    pub fn denominator(self) -> i64 {
        self.den
    }

    /// The integer value, if the fraction is whole.
    #[must_use]
    pub fn as_integer(self) -> Option<i64> {
        (self.den == 1).then_some(self.num)
    }

    fn add(self, rhs: Self) -> Result<Self, EvalError> {
        let num = self
            .num
            .checked_mul(rhs.den)
            .and_then(|a| rhs.num.checked_mul(self.den).and_then(|b| a.checked_add(b)))
            .ok_or(EvalError::Overflow)?;
        let den = self.den.checked_mul(rhs.den).ok_or(EvalError::Overflow)?;
        Self::reduce(num, den)
    }

    fn neg(self) -> Result<Self, EvalError> {
        let num = self.num.checked_neg().ok_or(EvalError::Overflow)?;
        Ok(Self { num, den: self.den })
    }

    fn mul(self, rhs: Self) -> Result<Self, EvalError> {
        let num = self.num.checked_mul(rhs.num).ok_or(EvalError::Overflow)?;
        let den = self.den.checked_mul(rhs.den).ok_or(EvalError::Overflow)?;
        Self::reduce(num, den)
    }

    fn div(self, rhs: Self) -> Result<Self, EvalError> {
        if rhs.num == 0 {
            return Err(EvalError::DivisionByZero);
        }
        // mul renormalizes the sign of the flipped denominator
        self.mul(Self { num: rhs.den, den: rhs.num })
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    UnexpectedChar { found: char, position: usize },
    UnexpectedEnd,
    TrailingInput { position: usize },
    DivisionByZero,
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::UnexpectedChar { found, position } => {
                write!(f, "unexpected '{}' at position {}", found, position)
            }
            EvalError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            EvalError::TrailingInput { position } => {
                write!(f, "trailing input at position {}", position)
            }
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::Overflow => write!(f, "arithmetic overflow"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluate an equation exactly.
///
/// ```
/// use rgba_puzzle::equations::{evaluate, Rational};
///
/// assert_eq!(evaluate("(8 ÷ 4) + 3").unwrap(), Rational::integer(5));
/// assert_eq!(evaluate("7 / 2").unwrap().as_integer(), None);
/// ```
pub fn evaluate(expression: &str) -> Result<Rational, EvalError> {
    let mut parser = Parser {
        chars: expression.chars().peekable(),
        position: 0,
    };
    let value = parser.expr()?;
    parser.skip_whitespace();
    if parser.chars.peek().is_some() {
        return Err(EvalError::TrailingInput { position: parser.position });
    }
    Ok(value)
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    position: usize,
}

impl Parser<'_> {
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position += 1;
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    fn peek_token(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.peek().copied()
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<Rational, EvalError> {
        let mut value = self.term()?;
        loop {
            match self.peek_token() {
                Some('+') => {
                    self.bump();
                    value = value.add(self.term()?)?;
                }
                Some('-') => {
                    self.bump();
                    value = value.add(self.term()?.neg()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    // term := factor (('*' | '×' | '/' | '÷') factor)*
    fn term(&mut self) -> Result<Rational, EvalError> {
        let mut value = self.factor()?;
        loop {
            match self.peek_token() {
                Some('*' | '×') => {
                    self.bump();
                    value = value.mul(self.factor()?)?;
                }
                Some('/' | '÷') => {
                    self.bump();
                    value = value.div(self.factor()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    // factor := number | '(' expr ')' | '-' factor
    fn factor(&mut self) -> Result<Rational, EvalError> {
        match self.peek_token() {
            None => Err(EvalError::UnexpectedEnd),
            Some('(') => {
                self.bump();
                let value = self.expr()?;
                match self.peek_token() {
                    Some(')') => {
                        self.bump();
                        Ok(value)
                    }
                    Some(found) => Err(EvalError::UnexpectedChar { found, position: self.position }),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            Some('-') => {
                self.bump();
                self.factor()?.neg()
            }
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(found) => Err(EvalError::UnexpectedChar { found, position: self.position }),
        }
    }

    fn number(&mut self) -> Result<Rational, EvalError> {
        let mut value: i64 = 0;
        while let Some(digit) = self.chars.peek().and_then(|c| c.to_digit(10)) {
            self.bump();
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit)))
                .ok_or(EvalError::Overflow)?;
        }
        Ok(Rational::integer(value))
    }
}
