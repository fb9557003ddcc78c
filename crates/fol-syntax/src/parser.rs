//! Recursive-descent parser for the surface formula language.
//!
//! Precedence, lowest to highest: implication `->` (right-associative);
//! `|` and `&` (sugar over implication and negation); unary `~`;
//! quantifiers `!x(.)`/`?x(.)`; equality `=`; `+` then `*`; atoms (`0`,
//! `S(.)`, parenthesized groups, identifiers).
//!
//! Identifier case decides sort: an uppercase-leading identifier is a
//! logic variable, a lowercase-leading one a numeric variable. Unlike the
//! line this was distilled from — which parsed every bare identifier as
//! numeric first and reinterpreted it after the fact when no `=` followed
//! — the case convention lets this parser commit to a sort the moment it
//! reads the identifier's first character, so each grammar rule always
//! knows which kind of term it is building.

use std::rc::Rc;

use fol_term::{LogicExpr, NumericExpr};

use crate::error::ParseError;
use crate::tokenizer::Tokenizer;

/// Parses `text` as a full logic formula.
pub fn parse_formula(text: &str) -> Result<Rc<LogicExpr>, ParseError> {
    let mut tokenizer = Tokenizer::new(text);
    let formula = parse_implies(&mut tokenizer)?;
    tokenizer.skip_whitespace();
    if tokenizer.current().is_some() {
        return Err(ParseError::TrailingInput { position: tokenizer.position() });
    }
    Ok(formula)
}

/// Parses `text` as a standalone numeric term (used by CLI subcommands
/// that take a bare term rather than a full formula, such as an
/// Instantiation witness).
pub fn parse_numeric(text: &str) -> Result<Rc<NumericExpr>, ParseError> {
    let mut tokenizer = Tokenizer::new(text);
    let term = parse_add(&mut tokenizer)?;
    tokenizer.skip_whitespace();
    if tokenizer.current().is_some() {
        return Err(ParseError::TrailingInput { position: tokenizer.position() });
    }
    Ok(term)
}

fn expect(tokenizer: &mut Tokenizer, c: char) -> Result<(), ParseError> {
    if tokenizer.eat(c) {
        Ok(())
    } else {
        Err(ParseError::Expected { expected: c, found: tokenizer.current(), position: tokenizer.position() })
    }
}

fn parse_identifier(tokenizer: &mut Tokenizer) -> Result<String, ParseError> {
    tokenizer.skip_whitespace();
    match tokenizer.current() {
        Some(c) if c.is_alphanumeric() => Ok(tokenizer.read_identifier()),
        found => Err(ParseError::InvalidIdentifier { found, position: tokenizer.position() }),
    }
}

fn parse_implies(tokenizer: &mut Tokenizer) -> Result<Rc<LogicExpr>, ParseError> {
    let left = parse_or(tokenizer)?;
    tokenizer.skip_whitespace();
    if tokenizer.current() == Some('-') && tokenizer.peek() == Some('>') {
        tokenizer.advance();
        tokenizer.advance();
        let right = parse_implies(tokenizer)?;
        return Ok(left.implies(&right));
    }
    Ok(left)
}

fn parse_or(tokenizer: &mut Tokenizer) -> Result<Rc<LogicExpr>, ParseError> {
    let mut left = parse_and(tokenizer)?;
    loop {
        tokenizer.skip_whitespace();
        if tokenizer.current() != Some('|') {
            break;
        }
        tokenizer.advance();
        let right = parse_and(tokenizer)?;
        left = left.not().implies(&right);
    }
    Ok(left)
}

fn parse_and(tokenizer: &mut Tokenizer) -> Result<Rc<LogicExpr>, ParseError> {
    let mut left = parse_unary(tokenizer)?;
    loop {
        tokenizer.skip_whitespace();
        if tokenizer.current() != Some('&') {
            break;
        }
        tokenizer.advance();
        let right = parse_unary(tokenizer)?;
        left = left.implies(&right.not()).not();
    }
    Ok(left)
}

fn parse_unary(tokenizer: &mut Tokenizer) -> Result<Rc<LogicExpr>, ParseError> {
    tokenizer.skip_whitespace();
    match tokenizer.current() {
        Some('~') => {
            tokenizer.advance();
            let inner = parse_unary(tokenizer)?;
            Ok(inner.not())
        }
        Some('!') => {
            tokenizer.advance();
            let var = parse_identifier(tokenizer)?;
            expect(tokenizer, '(')?;
            let body = parse_implies(tokenizer)?;
            expect(tokenizer, ')')?;
            Ok(LogicExpr::forall(var, &body))
        }
        Some('?') => {
            tokenizer.advance();
            let var = parse_identifier(tokenizer)?;
            expect(tokenizer, '(')?;
            let body = parse_implies(tokenizer)?;
            expect(tokenizer, ')')?;
            Ok(LogicExpr::forall(var, &body.not()).not())
        }
        Some('(') => {
            // A leading `(` is ambiguous in isolation: `(x+y)=z` opens a
            // numeric grouping that feeds an equality, while `(A->B)`
            // opens a logic grouping. Try the equality reading first —
            // it fails cleanly (a mismatched inner paren, or a missing
            // `=`) when the parens were actually a logic grouping — and
            // fall back to parsing a parenthesized formula otherwise.
            let checkpoint = tokenizer.position();
            match parse_equality(tokenizer) {
                Ok(equality) => Ok(equality),
                Err(_) => {
                    tokenizer.set_position(checkpoint);
                    tokenizer.advance();
                    let inner = parse_implies(tokenizer)?;
                    expect(tokenizer, ')')?;
                    Ok(inner)
                }
            }
        }
        Some(c) if c.is_uppercase() => {
            let name = tokenizer.read_identifier();
            Ok(LogicExpr::var(name))
        }
        _ => parse_equality(tokenizer),
    }
}

fn parse_equality(tokenizer: &mut Tokenizer) -> Result<Rc<LogicExpr>, ParseError> {
    let left = parse_add(tokenizer)?;
    expect(tokenizer, '=')?;
    let right = parse_add(tokenizer)?;
    Ok(LogicExpr::equals(&left, &right))
}

fn parse_add(tokenizer: &mut Tokenizer) -> Result<Rc<NumericExpr>, ParseError> {
    let mut left = parse_mul(tokenizer)?;
    loop {
        tokenizer.skip_whitespace();
        if tokenizer.current() != Some('+') {
            break;
        }
        tokenizer.advance();
        let right = parse_mul(tokenizer)?;
        left = left.add(&right);
    }
    Ok(left)
}

fn parse_mul(tokenizer: &mut Tokenizer) -> Result<Rc<NumericExpr>, ParseError> {
    let mut left = parse_num_term(tokenizer)?;
    loop {
        tokenizer.skip_whitespace();
        if tokenizer.current() != Some('*') {
            break;
        }
        tokenizer.advance();
        let right = parse_num_term(tokenizer)?;
        left = left.multiply(&right);
    }
    Ok(left)
}

fn parse_num_term(tokenizer: &mut Tokenizer) -> Result<Rc<NumericExpr>, ParseError> {
    tokenizer.skip_whitespace();
    match tokenizer.current() {
        Some('0') => {
            tokenizer.advance();
            Ok(Rc::new(NumericExpr::Zero))
        }
        Some('S') => {
            tokenizer.advance();
            expect(tokenizer, '(')?;
            let inner = parse_add(tokenizer)?;
            expect(tokenizer, ')')?;
            Ok(inner.successor())
        }
        Some('(') => {
            tokenizer.advance();
            let inner = parse_add(tokenizer)?;
            expect(tokenizer, ')')?;
            Ok(inner)
        }
        Some(c) if c.is_alphanumeric() => {
            let name = tokenizer.read_identifier();
            Ok(NumericExpr::var(name))
        }
        found => Err(ParseError::InvalidIdentifier { found, position: tokenizer.position() }),
    }
}
