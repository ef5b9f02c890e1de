use nom::branch::alt;
use nom::character::complete::multispace0;
use nom::combinator::{eof, map, opt, value, verify};
use nom::error::ErrorKind;
use nom::multi::many1;
use nom::sequence::{preceded, terminated};

use super::*;

const AS_OPERATORS: [&str; 3] = ["and", "or", "except"];

fn is_as_number(part: &str) -> bool {
    part.len() > 2 && part.starts_with("AS") && part[2..].chars().all(|c| c.is_ascii_digit())
}

//
// AS numbers, as-set names (hierarchical ones included) and PeerAS
//
pub(crate) fn is_as_name(token: &str) -> bool {
    let upper = token.to_ascii_uppercase();
    upper == "PEERAS"
        || upper
            .split(':')
            .all(|part| is_as_number(part) || (part.starts_with("AS-") && part.len() > 3))
}

pub(crate) fn is_peering_set_name(token: &str) -> bool {
    let parts = token.split(':').collect::<Vec<&str>>();
    parts.iter().all(|part| !part.is_empty())
        && parts
            .iter()
            .any(|part| part.to_ascii_lowercase().starts_with("prng-"))
}

fn is_as_expression_token(token: &str) -> bool {
    token == "(" || token == ")" || is_one_of(token, &AS_OPERATORS) || is_as_name(token)
}

fn token(input: Span) -> IResult<Span, String> {
    alt((
        value("(".to_string(), preceded_by('(')),
        value(")".to_string(), preceded_by(')')),
        word,
    ))(input)
}

fn peering_set_name(input: Span) -> IResult<Span, LexedPeering> {
    map(
        terminated(
            verify(word, |w: &str| is_peering_set_name(w)),
            preceded(multispace0, eof),
        ),
        LexedPeering::PeeringSetName,
    )(input)
}

//
//  mp_peering      = as_expression [router_expression_1] ["at" router_expression_2]
//
// The as-expression is the longest run of leading tokens that can belong to
// one, whatever follows up to `at` is the local router expression
//
fn peering_expression(input: Span) -> IResult<Span, LexedPeering> {
    let start = input;
    let (input, mut before_at) =
        many1(verify(token, |t: &str| !t.eq_ignore_ascii_case("at")))(input)?;
    let (input, after_at) = opt(preceded(keyword("at"), many1(token)))(input)?;

    let split = before_at
        .iter()
        .position(|t| !is_as_expression_token(t))
        .unwrap_or_else(|| before_at.len());
    if split == 0 {
        return Err(nom::Err::Error(ParserError {
            context: "expecting an as-expression".to_string(),
            span: start,
            kind: ErrorKind::Verify,
        }));
    }
    let router_expression_1 = before_at.split_off(split);

    Ok((
        input,
        LexedPeering::Expression {
            as_expression: before_at,
            router_expression_1: if router_expression_1.is_empty() {
                None
            } else {
                Some(router_expression_1)
            },
            router_expression_2: after_at,
        },
    ))
}

pub(super) fn mp_peering(input: Span) -> IResult<Span, LexedPeering> {
    alt((peering_set_name, peering_expression))(input)
}
