use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, multispace0};
use nom::combinator::{map, opt, value};
use nom::sequence::{pair, preceded};

use super::*;
use crate::policy::exprs::{Cast, Version};

fn version(input: Span) -> IResult<Span, Version> {
    alt((
        value(Version::Ipv4, tag_no_case("ipv4")),
        value(Version::Ipv6, tag_no_case("ipv6")),
        value(Version::Any, tag_no_case("any")),
    ))(input)
}

fn cast(input: Span) -> IResult<Span, Cast> {
    preceded(
        char('.'),
        alt((
            value(Cast::Unicast, tag_no_case("unicast")),
            value(Cast::Multicast, tag_no_case("multicast")),
        )),
    )(input)
}

//
//  afi     = ("ipv4" / "ipv6" / "any") ["." ("unicast" / "multicast")]
//
pub(super) fn afi(input: Span) -> IResult<Span, LexedAfi> {
    map(
        preceded(multispace0, pair(version, opt(cast))),
        |(version, cast)| LexedAfi { version, cast },
    )(input)
}
