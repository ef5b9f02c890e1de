use nom::branch::alt;
use nom::combinator::{map, verify};
use nom::multi::fold_many0;
use nom::sequence::{delimited, preceded};

use super::*;

const OPERATORS: [&str; 3] = ["and", "or", "except"];

fn field(input: Span) -> IResult<Span, LexedAsExpr> {
    map(
        verify(word, |w: &str| !is_one_of(w, &OPERATORS)),
        LexedAsExpr::Field,
    )(input)
}

fn group(input: Span) -> IResult<Span, LexedAsExpr> {
    map(
        delimited(preceded_by('('), as_expression, followed_by(')')),
        |expr| LexedAsExpr::Group(Box::new(expr)),
    )(input)
}

fn primary(input: Span) -> IResult<Span, LexedAsExpr> {
    alt((group, field))(input)
}

//
// Each precedence level folds left, so `AS1 AND AS2 AND AS3` is
// `(AS1 AND AS2) AND AS3`
//
fn conjunction(input: Span) -> IResult<Span, LexedAsExpr> {
    let (input, first) = primary(input)?;
    fold_many0(
        preceded(keyword("and"), primary),
        move || first.clone(),
        |left, right| LexedAsExpr::And(Box::new(left), Box::new(right)),
    )(input)
}

fn disjunction(input: Span) -> IResult<Span, LexedAsExpr> {
    let (input, first) = conjunction(input)?;
    fold_many0(
        preceded(keyword("or"), conjunction),
        move || first.clone(),
        |left, right| LexedAsExpr::Or(Box::new(left), Box::new(right)),
    )(input)
}

//
//  as_expression   = as_disjunction *("EXCEPT" as_disjunction)
//
// EXCEPT binds loosest, `AS1 AND AS2 EXCEPT AS3` removes AS3 from the
// intersection of AS1 and AS2
//
pub(super) fn as_expression(input: Span) -> IResult<Span, LexedAsExpr> {
    let (input, first) = disjunction(input)?;
    fold_many0(
        preceded(keyword("except"), disjunction),
        move || first.clone(),
        |left, right| LexedAsExpr::Except(Box::new(left), Box::new(right)),
    )(input)
}
