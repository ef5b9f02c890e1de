use std::fmt::Formatter;

use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{char, multispace0, satisfy};
use nom::combinator::{all_consuming, map, not, peek};
use nom::error::{ContextError, ErrorKind, ParseError};
use nom::multi::separated_list0;
use nom::sequence::{delimited, preceded, terminated};
use nom_locate::LocatedSpan;

use super::SyntaxError;

//
// The extra slot of the span carries the name of the grammar being run, it is
// only used to build readable error messages
//
pub(crate) type Span<'a> = LocatedSpan<&'a str, &'a str>;

pub(crate) fn from_str2<'a>(in_str: &'a str, grammar: &'a str) -> Span<'a> {
    Span::new_extra(in_str, grammar)
}

#[derive(Clone, PartialEq, Debug)]
pub(crate) struct ParserError<'a> {
    pub(crate) context: String,
    pub(crate) span: Span<'a>,
    pub(crate) kind: ErrorKind,
}

pub(crate) type IResult<'a, I, O> = nom::IResult<I, O, ParserError<'a>>;

impl<'a> ParseError<Span<'a>> for ParserError<'a> {
    fn from_error_kind(input: Span<'a>, kind: ErrorKind) -> Self {
        ParserError {
            context: "".to_string(),
            span: input,
            kind,
        }
    }

    fn append(_input: Span<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<Span<'a>> for ParserError<'a> {
    fn add_context(input: Span<'a>, ctx: &'static str, other: Self) -> Self {
        let context = if other.context.is_empty() {
            ctx.to_string()
        } else {
            format!("{}/{}", ctx, other.context)
        };

        ParserError {
            context,
            span: input,
            kind: other.kind,
        }
    }
}

impl<'a> std::fmt::Display for ParserError<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let handling = if self.context.is_empty() {
            self.kind.description()
        } else {
            self.context.as_str()
        };
        write!(
            f,
            "Error parsing {} at line {} at column {}, when handling {}, fragment `{}`",
            self.span.extra,
            self.span.location_line(),
            self.span.get_utf8_column(),
            handling,
            *self.span.fragment()
        )
    }
}

//
// Runs a grammar over the whole input. Trailing white space is allowed,
// anything else left over is a syntax error.
//
pub(crate) fn parse_all<'a, O, F>(
    grammar: &'static str,
    input: &'a str,
    parser: F,
) -> Result<O, SyntaxError>
where
    F: FnMut(Span<'a>) -> IResult<'a, Span<'a>, O>,
{
    let span = from_str2(input, grammar);
    match all_consuming(terminated(parser, multispace0))(span) {
        Ok((_remainder, parsed)) => Ok(parsed),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(SyntaxError {
            grammar,
            message: e.to_string(),
            fragment: (*e.span.fragment()).to_string(),
            input: input.to_string(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(SyntaxError {
            grammar,
            message: "More bytes required for parsing".to_string(),
            fragment: "".to_string(),
            input: input.to_string(),
        }),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                                                                                //
//                                                                                                //
//                         HELPER METHODS                                                         //
//                                                                                                //
////////////////////////////////////////////////////////////////////////////////////////////////////

//
// Characters that can appear inside a bare RPSL token. Brackets, braces,
// parentheses and separators always end a token.
//
pub(crate) fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !"(){}<>;,".contains(c)
}

pub(crate) fn is_one_of(word: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| word.eq_ignore_ascii_case(kw))
}

pub(crate) fn white_space<'a>(ch: char) -> impl FnMut(Span<'a>) -> IResult<'a, Span<'a>, char> {
    move |input: Span<'a>| preceded(multispace0, char(ch))(input)
}

pub(crate) fn preceded_by<'a>(ch: char) -> impl FnMut(Span<'a>) -> IResult<'a, Span<'a>, char> {
    white_space(ch)
}

pub(crate) fn followed_by<'a>(ch: char) -> impl FnMut(Span<'a>) -> IResult<'a, Span<'a>, char> {
    white_space(ch)
}

pub(crate) fn separated_by<'a>(ch: char) -> impl FnMut(Span<'a>) -> IResult<'a, Span<'a>, char> {
    white_space(ch)
}

//
// Case insensitive keyword, it must not run into the following token, so
// `AND` matches in `AS1 AND AS2` but not in `ANDES`
//
pub(crate) fn keyword<'a>(
    kw: &'static str,
) -> impl FnMut(Span<'a>) -> IResult<'a, Span<'a>, Span<'a>> {
    move |input: Span<'a>| {
        preceded(
            multispace0,
            terminated(tag_no_case(kw), not(peek(satisfy(is_word_char)))),
        )(input)
    }
}

pub(crate) fn word(input: Span) -> IResult<Span, String> {
    map(
        preceded(multispace0, take_while1(is_word_char)),
        |s: Span| (*s.fragment()).to_string(),
    )(input)
}

pub(crate) fn identifier(input: Span) -> IResult<Span, String> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_'),
        |s: Span| (*s.fragment()).to_string(),
    )(input)
}

fn list_item<'a>(terminator: char) -> impl FnMut(Span<'a>) -> IResult<'a, Span<'a>, String> {
    move |input: Span<'a>| {
        map(
            preceded(
                multispace0,
                take_while1(|c: char| !c.is_whitespace() && c != ',' && c != terminator),
            ),
            |s: Span| (*s.fragment()).to_string(),
        )(input)
    }
}

//
//  set     = "{" *(LWSP) [item *("," item)] *(LWSP) "}"
//
pub(crate) fn set_items(input: Span) -> IResult<Span, Vec<String>> {
    delimited(
        preceded_by('{'),
        separated_list0(separated_by(','), list_item('}')),
        followed_by('}'),
    )(input)
}

//
//  args    = "(" *(LWSP) [arg *("," arg)] *(LWSP) ")"
//
pub(crate) fn call_args(input: Span) -> IResult<Span, Vec<String>> {
    delimited(
        preceded_by('('),
        separated_list0(separated_by(','), list_item(')')),
        followed_by(')'),
    )(input)
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod common_tests;
