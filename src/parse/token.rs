//! Tokenizer for angle expressions
//!
//! Accepted alphabet:
//! - decimal literals (`12`, `0.5`, `.25`, `1e-3`)
//! - `pi` (any case) or `π`
//! - operators `+ - * /` and parentheses
//! - whitespace, ignored

use super::errors::{ParseError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Num(f64),
    Pi,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    /// True for tokens that end a value: a number, π, or `)`
    pub fn ends_value(&self) -> bool {
        matches!(self, Token::Num(_) | Token::Pi | Token::RParen)
    }

    /// True for tokens that start a value: a number, π, or `(`
    pub fn starts_value(&self) -> bool {
        matches!(self, Token::Num(_) | Token::Pi | Token::LParen)
    }
}

/// Splits `input` into tokens, inserting `*` for implicit multiplication
/// (`3pi` becomes `3 * pi`, `2(pi)` becomes `2 * (pi)`)
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut raw = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '+' => Some(Token::Plus),
            '-' | '−' => Some(Token::Minus),
            '*' | '×' => Some(Token::Star),
            '/' | '÷' => Some(Token::Slash),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            'π' => Some(Token::Pi),
            _ => None,
        };
        if let Some(tok) = simple {
            raw.push(tok);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            i = scan_number(&chars, i);
            let literal: String = chars[start..i].iter().collect();
            let value = literal
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber(literal.clone()))?;
            raw.push(Token::Num(value));
            continue;
        }

        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphanumeric() {
                i += 1;
            }
            let name: String = chars[start..i].iter().collect();
            if name.eq_ignore_ascii_case("pi") {
                raw.push(Token::Pi);
                continue;
            }
            return Err(ParseError::UnknownName(name));
        }

        return Err(ParseError::UnexpectedChar { ch: c, position: i });
    }

    Ok(insert_implicit_products(raw))
}

/// Index one past the end of the numeric literal starting at `start`
fn scan_number(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }
    // exponent, only when followed by digits so "2e" stays an error elsewhere
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

fn insert_implicit_products(raw: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(raw.len());
    for tok in raw {
        let implicit = match (out.last(), &tok) {
            // "2 3" stays adjacent so the parser reports a missing operator
            (Some(Token::Num(_)), Token::Num(_)) => false,
            (Some(prev), next) => prev.ends_value() && next.starts_value(),
            (None, _) => false,
        };
        if implicit {
            out.push(Token::Star);
        }
        out.push(tok);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fraction() {
        assert_eq!(
            tokenize("pi/4").unwrap(),
            vec![Token::Pi, Token::Slash, Token::Num(4.0)]
        );
        assert_eq!(
            tokenize("π / 4").unwrap(),
            vec![Token::Pi, Token::Slash, Token::Num(4.0)]
        );
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(
            tokenize("3PI/4").unwrap(),
            vec![
                Token::Num(3.0),
                Token::Star,
                Token::Pi,
                Token::Slash,
                Token::Num(4.0)
            ]
        );
        assert_eq!(
            tokenize("2(pi)").unwrap(),
            vec![
                Token::Num(2.0),
                Token::Star,
                Token::LParen,
                Token::Pi,
                Token::RParen
            ]
        );
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(tokenize(".25").unwrap(), vec![Token::Num(0.25)]);
        assert_eq!(tokenize("1e-3").unwrap(), vec![Token::Num(0.001)]);
        assert_eq!(
            tokenize("1.2.3"),
            Err(ParseError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn test_rejects_other_names() {
        assert_eq!(
            tokenize("__import__"),
            Err(ParseError::UnexpectedChar { ch: '_', position: 0 })
        );
        assert_eq!(
            tokenize("exp(1)"),
            Err(ParseError::UnknownName("exp".to_string()))
        );
        assert_eq!(
            tokenize("2^3"),
            Err(ParseError::UnexpectedChar { ch: '^', position: 1 })
        );
    }
}
