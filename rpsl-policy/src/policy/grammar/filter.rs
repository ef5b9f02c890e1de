use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_till};
use nom::character::complete::{char, multispace0};
use nom::combinator::{map, opt, recognize, verify};
use nom::multi::{fold_many0, many1};
use nom::sequence::{delimited, pair, preceded, tuple};

use super::*;
use crate::policy::exprs::{CommunityCall, FilterToken};

const OPERATORS: [&str; 3] = ["and", "or", "not"];

fn prefix_set(input: Span) -> IResult<Span, FilterToken> {
    map(set_items, FilterToken::Group)(input)
}

//
// AS path regular expressions are kept verbatim, white space included,
// e.g. `<^AS1 AS2* .$>`
//
fn path_regex(input: Span) -> IResult<Span, FilterToken> {
    map(
        preceded(
            multispace0,
            recognize(tuple((char('<'), take_till(|c: char| c == '>'), char('>')))),
        ),
        |s: Span| FilterToken::Word((*s.fragment()).to_string()),
    )(input)
}

fn filter_word(input: Span) -> IResult<Span, FilterToken> {
    map(
        verify(word, |w: &str| !is_one_of(w, &OPERATORS)),
        FilterToken::Word,
    )(input)
}

//
//  policy_filter   = 1*(prefix_set / path_regex / word)
//
// Juxtaposed tokens belong to the same policy filter, `AS1 AS2 {10.0.0.0/8}`
// is a single leaf
//
fn policy_filter(input: Span) -> IResult<Span, LexedFilter> {
    map(
        many1(alt((prefix_set, path_regex, filter_word))),
        LexedFilter::PolicyFilter,
    )(input)
}

//
//  community       = "community" ["." method] ( args / prefix_set )
//
fn community(input: Span) -> IResult<Span, LexedFilter> {
    map(
        preceded(
            pair(multispace0, tag_no_case("community")),
            pair(opt(preceded(char('.'), identifier)), alt((call_args, set_items))),
        ),
        |(method, args)| LexedFilter::Community(CommunityCall { method, args }),
    )(input)
}

fn group(input: Span) -> IResult<Span, LexedFilter> {
    map(
        delimited(preceded_by('('), mp_filter, followed_by(')')),
        |filter| LexedFilter::Group(Box::new(filter)),
    )(input)
}

fn primary(input: Span) -> IResult<Span, LexedFilter> {
    alt((group, community, policy_filter))(input)
}

fn negation(input: Span) -> IResult<Span, LexedFilter> {
    alt((
        map(preceded(keyword("not"), negation), |filter| {
            LexedFilter::Not(Box::new(filter))
        }),
        primary,
    ))(input)
}

fn conjunction(input: Span) -> IResult<Span, LexedFilter> {
    let (input, first) = negation(input)?;
    fold_many0(
        preceded(keyword("and"), negation),
        move || first.clone(),
        |left, right| LexedFilter::And(Box::new(left), Box::new(right)),
    )(input)
}

//
//  mp_filter       = filter_conjunction *("OR" filter_conjunction)
//
pub(super) fn mp_filter(input: Span) -> IResult<Span, LexedFilter> {
    let (input, first) = conjunction(input)?;
    fold_many0(
        preceded(keyword("or"), conjunction),
        move || first.clone(),
        |left, right| LexedFilter::Or(Box::new(left), Box::new(right)),
    )(input)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
