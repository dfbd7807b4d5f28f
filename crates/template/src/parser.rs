//! A `nom`-based parser for the token expression grammar.
use crate::ast::{Argument, Expression};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{alpha1, multispace1},
    combinator::{map, recognize},
    multi::many1,
    sequence::{pair, preceded},
};
use serde_json::json;

/// Parses the trimmed text between `{{` and `}}`.
///
/// This parser never fails: anything that does not match the
/// helper-invocation grammar is treated as a single path expression, which
/// the resolver later degrades to the empty string if it cannot be found.
pub fn parse_expression(input: &str) -> Expression {
    let input = input.trim();
    match expression(input) {
        Ok(("", expr)) => expr,
        _ => Expression::Path(input.to_string()),
    }
}

// --- Combinators ---

fn expression(input: &str) -> IResult<&str, Expression> {
    alt((
        helper_call, // Must come first so `inc @index` is not parsed as a bare path.
        map(token, |p: &str| Expression::Path(p.to_string())),
    ))
    .parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))
    .parse(input)
}

/// One whitespace-delimited token (`totals.tamTinh`, `@index`, `1000`,
/// `"Đã thu"`).
fn token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace()).parse(input)
}

fn helper_call(input: &str) -> IResult<&str, Expression> {
    map(
        pair(identifier, many1(preceded(multispace1, map(token, argument)))),
        |(name, args): (&str, Vec<Argument>)| Expression::HelperCall {
            name: name.to_string(),
            args,
        },
    )
    .parse(input)
}

/// Classifies an argument token: quoted strings and bare numbers are
/// literals, everything else is a path to resolve against the context.
fn argument(token: &str) -> Argument {
    for quote in ['"', '\''] {
        if token.len() >= 2 {
            if let Some(inner) = token
                .strip_prefix(quote)
                .and_then(|t| t.strip_suffix(quote))
            {
                return Argument::Literal(json!(inner));
            }
        }
    }
    if let Ok(n) = token.parse::<i64>() {
        return Argument::Literal(json!(n));
    }
    if let Ok(n) = token.parse::<f64>() {
        return Argument::Literal(json!(n));
    }
    Argument::Path(token.to_string())
}
