//! Shunting-yard conversion to RPN and RPN evaluation
//!
//! Only the four basic operators, unary minus/plus and parentheses exist, so
//! evaluation can never do anything but arithmetic on `f64`.

use std::f64::consts::PI;

use super::errors::{ParseError, Result};
use super::token::Token;

/// Operators after unary/binary disambiguation
#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
}

impl Op {
    fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
            Op::Neg => 3,
        }
    }

    fn is_right_associative(self) -> bool {
        matches!(self, Op::Neg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Item {
    Value(f64),
    Op(Op),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Op(Op),
    LParen,
}

/// Converts infix tokens to postfix order
fn to_rpn(tokens: &[Token]) -> Result<Vec<Item>> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut ops: Vec<StackEntry> = Vec::new();
    // a value (number, π, closed group) was the last thing seen
    let mut prev_was_value = false;

    for tok in tokens {
        match tok {
            Token::Num(v) => {
                if prev_was_value {
                    return Err(ParseError::MissingOperator);
                }
                out.push(Item::Value(*v));
                prev_was_value = true;
            }
            Token::Pi => {
                if prev_was_value {
                    return Err(ParseError::MissingOperator);
                }
                out.push(Item::Value(PI));
                prev_was_value = true;
            }
            Token::LParen => {
                ops.push(StackEntry::LParen);
                prev_was_value = false;
            }
            Token::RParen => {
                loop {
                    match ops.pop() {
                        Some(StackEntry::LParen) => break,
                        Some(StackEntry::Op(op)) => out.push(Item::Op(op)),
                        None => return Err(ParseError::MismatchedParens),
                    }
                }
                prev_was_value = true;
            }
            Token::Plus if !prev_was_value => {
                // unary plus is a no-op
            }
            Token::Minus if !prev_was_value => {
                ops.push(StackEntry::Op(Op::Neg));
            }
            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                let op = match tok {
                    Token::Plus => Op::Add,
                    Token::Minus => Op::Sub,
                    Token::Star => Op::Mul,
                    _ => Op::Div,
                };
                if !prev_was_value {
                    return Err(ParseError::MissingOperand);
                }
                while let Some(StackEntry::Op(top)) = ops.last().copied() {
                    let pops = if op.is_right_associative() {
                        top.precedence() > op.precedence()
                    } else {
                        top.precedence() >= op.precedence()
                    };
                    if !pops {
                        break;
                    }
                    out.push(Item::Op(top));
                    ops.pop();
                }
                ops.push(StackEntry::Op(op));
                prev_was_value = false;
            }
        }
    }

    while let Some(entry) = ops.pop() {
        match entry {
            StackEntry::Op(op) => out.push(Item::Op(op)),
            StackEntry::LParen => return Err(ParseError::MismatchedParens),
        }
    }

    Ok(out)
}

fn pop_operand(stack: &mut Vec<f64>) -> Result<f64> {
    stack.pop().ok_or(ParseError::MissingOperand)
}

fn eval_rpn(items: &[Item]) -> Result<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for item in items {
        let value = match *item {
            Item::Value(v) => v,
            Item::Op(op) => {
                let rhs = pop_operand(&mut stack)?;
                match op {
                    Op::Neg => -rhs,
                    Op::Add => pop_operand(&mut stack)? + rhs,
                    Op::Sub => pop_operand(&mut stack)? - rhs,
                    Op::Mul => pop_operand(&mut stack)? * rhs,
                    Op::Div => {
                        let lhs = pop_operand(&mut stack)?;
                        if rhs == 0.0 {
                            return Err(ParseError::DivisionByZero);
                        }
                        lhs / rhs
                    }
                }
            }
        };
        stack.push(value);
    }

    match stack.as_slice() {
        [value] if value.is_finite() => Ok(*value),
        [_] => Err(ParseError::NonFinite),
        [] => Err(ParseError::MissingOperand),
        _ => Err(ParseError::MissingOperator),
    }
}

/// Evaluates a token stream produced by [`tokenize`](super::token::tokenize)
pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64> {
    let rpn = to_rpn(tokens)?;
    eval_rpn(&rpn)
}
