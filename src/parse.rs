//! Parsing of formula text into a raw tree.
//!
//! A hand-written recursive descent over the character stream, with one
//! function per precedence tier: additive, multiplicative, exponentiation
//! (right-associative), unary minus, then units. The grammar agrees with the
//! renderer, so rendering a parsed tree and re-parsing the result reaches a
//! fixed point.

use crate::error::ParseError;
use crate::node::op::{BinaryOp, Constant, UnaryOp};
use crate::node::raw::RawNode;

/// Parses formula text into a raw tree, ready for adoption. Fails without
/// side effects.
pub fn parse(source: &str) -> Result<RawNode, ParseError> {
    let mut parser = Parser {
        chars: source.chars().collect(),
        index: 0,
    };

    let result = parser.parse_level1()?;

    // Leftover input is an error
    parser.skip_whitespace();
    if !parser.eoi() {
        return Err(ParseError::TrailingInput(parser.index));
    }

    Ok(result)
}

struct Parser {
    chars: Vec<char>,
    index: usize,
}

impl Parser {
    fn current(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn eoi(&self) -> bool {
        self.index >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes the given character, skipping leading whitespace, if it is
    /// next in the input.
    fn accept(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Additive tier: `a + b`, `a - b`, left-associative.
    fn parse_level1(&mut self) -> Result<RawNode, ParseError> {
        let mut out = self.parse_level2()?;

        loop {
            if self.accept('+') {
                out = RawNode::binary(BinaryOp::Add, out, self.parse_level2()?);
            } else if self.accept('-') {
                out = RawNode::binary(BinaryOp::Sub, out, self.parse_level2()?);
            } else {
                break;
            }
        }

        Ok(out)
    }

    /// Multiplicative tier: `a * b`, `a / b`, left-associative.
    fn parse_level2(&mut self) -> Result<RawNode, ParseError> {
        let mut out = self.parse_level3()?;

        loop {
            if self.accept('*') {
                out = RawNode::binary(BinaryOp::Mul, out, self.parse_level3()?);
            } else if self.accept('/') {
                out = RawNode::binary(BinaryOp::Div, out, self.parse_level3()?);
            } else {
                break;
            }
        }

        Ok(out)
    }

    /// Exponentiation tier: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
    fn parse_level3(&mut self) -> Result<RawNode, ParseError> {
        let base = self.parse_level4()?;

        if self.accept('^') {
            Ok(RawNode::binary(BinaryOp::Pow, base, self.parse_level3()?))
        } else {
            Ok(base)
        }
    }

    /// Unary tier: any run of leading minus signs.
    fn parse_level4(&mut self) -> Result<RawNode, ParseError> {
        if self.accept('-') {
            Ok(RawNode::unary(UnaryOp::Negate, self.parse_level4()?))
        } else {
            self.parse_unit()
        }
    }

    /// A single unit: a parenthesised group, a number, a `$`-prefixed
    /// variable, a constant, a bare variable, or a function call.
    fn parse_unit(&mut self) -> Result<RawNode, ParseError> {
        self.skip_whitespace();

        let Some(c) = self.current() else {
            return Err(ParseError::UnexpectedEnd);
        };

        if c == '(' {
            self.advance();
            let inner = self.parse_level1()?;
            if !self.accept(')') {
                return Err(ParseError::Expected("')'", self.index));
            }
            return Ok(RawNode::parens(inner));
        }

        if c == '$' {
            self.advance();
            let name = self.parse_name()?;
            // Keep the sigil in the stored name, exactly as written
            return Ok(RawNode::Variable(format!("${name}")));
        }

        if c.is_ascii_digit() || c == '.' {
            return self.parse_number();
        }

        if c.is_alphabetic() || c == '_' {
            let name = self.parse_name()?;

            self.skip_whitespace();
            if self.current() == Some('(') {
                self.advance();
                return Ok(RawNode::Call(name, self.parse_arguments()?));
            }

            return Ok(match name.as_str() {
                "pi" => RawNode::Constant(Constant::Pi),
                "e" => RawNode::Constant(Constant::E),
                _ => RawNode::Variable(name),
            });
        }

        Err(ParseError::UnexpectedChar(c, self.index))
    }

    /// The argument list of a call, after the opening parenthesis has been
    /// consumed. Zero arguments is accepted.
    fn parse_arguments(&mut self) -> Result<Vec<RawNode>, ParseError> {
        let mut args = Vec::new();

        if self.accept(')') {
            return Ok(args);
        }

        loop {
            args.push(self.parse_level1()?);

            if self.accept(',') {
                continue;
            }
            if self.accept(')') {
                break;
            }
            return Err(ParseError::Expected("',' or ')'", self.index));
        }

        Ok(args)
    }

    fn parse_name(&mut self) -> Result<String, ParseError> {
        let mut name = String::new();

        while let Some(c) = self.current() {
            if c.is_alphanumeric() || c == '_' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if name.is_empty() {
            return Err(ParseError::Expected("a name", self.index));
        }

        Ok(name)
    }

    fn parse_number(&mut self) -> Result<RawNode, ParseError> {
        let start = self.index;

        while let Some(c) = self.current() {
            if c.is_ascii_digit() || c == '.' {
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.chars[start..self.index].iter().collect();
        text.parse::<f64>()
            .map(RawNode::Number)
            .map_err(|_| ParseError::Expected("a number", start))
    }
}
