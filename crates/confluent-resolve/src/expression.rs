//! Arithmetic over substituted numeric properties.
//!
//! Grammar:
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/' | '%') unary)*
//! unary  := ('-' | '+') unary | atom
//! atom   := number | '(' expr ')'
//! number := digits ['.' digits] [('e' | 'E') ['+' | '-'] digits]
//! ```

use std::iter::Peekable;
use std::str::Chars;

/// Nesting limit for parentheses and unary operators.
const MAX_DEPTH: usize = 64;

/// Evaluates `input` as an arithmetic expression. The result is finite.
pub fn evaluate(input: &str) -> Result<f64, String> {
    let mut parser = Parser {
        chars: input.chars().peekable(),
        depth: 0,
    };
    let value = parser.expr()?;
    parser.skip_whitespace();
    if let Some(c) = parser.chars.peek() {
        return Err(format!("unexpected '{c}'"));
    }
    if !value.is_finite() {
        return Err("result is not a finite number".to_string());
    }
    Ok(value)
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    depth: usize,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<f64, String> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some('+') => {
                    self.chars.next();
                    value += self.term()?;
                }
                Some('-') => {
                    self.chars.next();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, String> {
        let mut value = self.unary()?;
        loop {
            self.skip_whitespace();
            let op = match self.chars.peek() {
                Some(&op @ ('*' | '/' | '%')) => op,
                _ => return Ok(value),
            };
            self.chars.next();
            let rhs = self.unary()?;
            value = match op {
                '*' => value * rhs,
                _ if rhs == 0.0 => return Err("division by zero".to_string()),
                '/' => value / rhs,
                _ => value % rhs,
            };
        }
    }

    fn unary(&mut self) -> Result<f64, String> {
        self.skip_whitespace();
        match self.chars.peek() {
            Some('-') => {
                self.chars.next();
                self.nested(|p| p.unary()).map(|v| -v)
            }
            Some('+') => {
                self.chars.next();
                self.nested(|p| p.unary())
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64, String> {
        self.skip_whitespace();
        match self.chars.peek() {
            Some('(') => {
                self.chars.next();
                let value = self.nested(|p| p.expr())?;
                self.skip_whitespace();
                match self.chars.next() {
                    Some(')') => Ok(value),
                    _ => Err("missing ')'".to_string()),
                }
            }
            Some(c) if c.is_ascii_digit() || *c == '.' => self.number(),
            Some(c) => Err(format!("unexpected '{c}'")),
            None => Err("unexpected end of expression".to_string()),
        }
    }

    fn number(&mut self) -> Result<f64, String> {
        let mut text = String::new();
        self.take_digits(&mut text);
        if self.chars.peek() == Some(&'.') {
            text.push('.');
            self.chars.next();
            self.take_digits(&mut text);
        }
        if matches!(self.chars.peek(), Some('e' | 'E')) {
            text.push('e');
            self.chars.next();
            if let Some(&sign @ ('+' | '-')) = self.chars.peek() {
                text.push(sign);
                self.chars.next();
            }
            self.take_digits(&mut text);
        }
        text.parse::<f64>()
            .map_err(|_| format!("invalid number '{text}'"))
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.chars.next();
        }
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> Result<f64, String>) -> Result<f64, String> {
        if self.depth >= MAX_DEPTH {
            return Err("expression nested too deeply".to_string());
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }
}
