use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{map, opt};
use nom::sequence::{pair, preceded, separated_pair, terminated, tuple};

use super::*;
use crate::policy::exprs::CommunityCall;

//
//  "community" *LWSP ".=" set
//
fn add_community(input: Span) -> IResult<Span, LexedAction> {
    map(
        preceded(
            tuple((multispace0, tag_no_case("community"), multispace0, tag(".="))),
            set_items,
        ),
        LexedAction::AddCommunity,
    )(input)
}

//
//  "community" ["." method] (args / set)
//
fn community_clause(input: Span) -> IResult<Span, LexedAction> {
    map(
        preceded(
            pair(multispace0, tag_no_case("community")),
            pair(opt(preceded(char('.'), identifier)), alt((call_args, set_items))),
        ),
        |(method, args)| LexedAction::Community(CommunityCall { method, args }),
    )(input)
}

//
//  rp_attribute "." method args, e.g. `aspath.prepend(AS1, AS1)`
//
fn method_call(input: Span) -> IResult<Span, LexedAction> {
    map(
        tuple((
            preceded(multispace0, identifier),
            preceded(char('.'), identifier),
            call_args,
        )),
        |(rp_attribute, method, args)| LexedAction::MethodCall {
            rp_attribute,
            method,
            args,
        },
    )(input)
}

fn assigned_value(input: Span) -> IResult<Span, Assigned> {
    map(
        preceded(
            multispace0,
            take_while1(|c: char| !c.is_whitespace() && c != ';'),
        ),
        |s: Span| Assigned::Value((*s.fragment()).to_string()),
    )(input)
}

//
//  rp_attribute "=" (set / value), e.g. `pref = 100`, `community = {65000:1}`
//
fn assignment(input: Span) -> IResult<Span, LexedAction> {
    map(
        separated_pair(
            preceded(multispace0, identifier),
            white_space('='),
            alt((map(set_items, Assigned::Set), assigned_value)),
        ),
        |(assignee, assigned)| LexedAction::Assignment { assignee, assigned },
    )(input)
}

pub(super) fn action(input: Span) -> IResult<Span, LexedAction> {
    terminated(
        alt((add_community, community_clause, method_call, assignment)),
        opt(white_space(';')),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("pref=100", "pref", Assigned::Value("100".to_string()))]
    #[case(" med = igp_cost;", "med", Assigned::Value("igp_cost".to_string()))]
    #[case("next-hop = 2001:db8::1", "next-hop", Assigned::Value("2001:db8::1".to_string()))]
    #[case(
        "community = {65000:1, no-export}",
        "community",
        Assigned::Set(vec!["65000:1".to_string(), "no-export".to_string()])
    )]
    fn test_assignments(
        #[case] input: &str,
        #[case] assignee: &str,
        #[case] assigned: Assigned,
    ) {
        let grammar = RpslGrammar::new();
        assert_eq!(
            grammar.action(input).unwrap(),
            LexedAction::Assignment {
                assignee: assignee.to_string(),
                assigned,
            }
        );
    }

    #[test]
    fn test_add_community() {
        let grammar = RpslGrammar::new();
        assert_eq!(
            grammar.action("community .= {65000:1}").unwrap(),
            LexedAction::AddCommunity(strings(&["65000:1"]))
        );
        assert_eq!(
            grammar.action("Community.={65000:1,65000:2};").unwrap(),
            LexedAction::AddCommunity(strings(&["65000:1", "65000:2"]))
        );
    }

    #[test]
    fn test_community_clause() {
        let grammar = RpslGrammar::new();
        assert_eq!(
            grammar.action("community.append(3356:123, 3356:2001)").unwrap(),
            LexedAction::Community(CommunityCall {
                method: Some("append".to_string()),
                args: strings(&["3356:123", "3356:2001"]),
            })
        );
        assert_eq!(
            grammar.action("community.delete {65000:1}").unwrap(),
            LexedAction::Community(CommunityCall {
                method: Some("delete".to_string()),
                args: strings(&["65000:1"]),
            })
        );
        assert_eq!(
            grammar.action("community(no-advertise)").unwrap(),
            LexedAction::Community(CommunityCall {
                method: None,
                args: strings(&["no-advertise"]),
            })
        );
    }

    #[test]
    fn test_method_call() {
        let grammar = RpslGrammar::new();
        assert_eq!(
            grammar.action("aspath.prepend(AS1, AS1);").unwrap(),
            LexedAction::MethodCall {
                rp_attribute: "aspath".to_string(),
                method: "prepend".to_string(),
                args: strings(&["AS1", "AS1"]),
            }
        );
    }

    #[test]
    fn test_action_errors() {
        let grammar = RpslGrammar::new();
        assert!(grammar.action("").is_err());
        assert!(grammar.action("pref").is_err());
        assert!(grammar.action("pref = 100 200").is_err());
        assert!(grammar.action("aspath.prepend(AS1").is_err());
        assert!(grammar.action("community .= 65000:1").is_err());

        let err = grammar.action("= 100").unwrap_err();
        assert_eq!(err.grammar, "action");
        assert_eq!(err.input, "= 100");
    }
}
