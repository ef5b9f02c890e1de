use nom::branch::alt;
use nom::combinator::{map, opt, value};
use nom::error::{context, ErrorKind};
use nom::multi::{many1, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::InputTake;
use serde_json::Value;

use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PolicyKind {
    Import,
    Export,
    Default,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ClauseSyntax {
    Classic,
    Multiprotocol,
}

///
/// The aut-num attribute a policy clause was read from. It decides the
/// keywords of the clause grammar and whether an `afi` list is allowed.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PolicyAttribute {
    pub kind: PolicyKind,
    pub syntax: ClauseSyntax,
}

impl PolicyAttribute {
    pub fn from_key(key: &str) -> Option<Self> {
        let (kind, syntax) = match key.to_ascii_lowercase().as_str() {
            "import" => (PolicyKind::Import, ClauseSyntax::Classic),
            "export" => (PolicyKind::Export, ClauseSyntax::Classic),
            "default" => (PolicyKind::Default, ClauseSyntax::Classic),
            "mp-import" => (PolicyKind::Import, ClauseSyntax::Multiprotocol),
            "mp-export" => (PolicyKind::Export, ClauseSyntax::Multiprotocol),
            "mp-default" => (PolicyKind::Default, ClauseSyntax::Multiprotocol),
            _ => return None,
        };
        Some(PolicyAttribute { kind, syntax })
    }

    pub fn name(&self) -> &'static str {
        match (self.kind, self.syntax) {
            (PolicyKind::Import, ClauseSyntax::Classic) => "import",
            (PolicyKind::Export, ClauseSyntax::Classic) => "export",
            (PolicyKind::Default, ClauseSyntax::Classic) => "default",
            (PolicyKind::Import, ClauseSyntax::Multiprotocol) => "mp-import",
            (PolicyKind::Export, ClauseSyntax::Multiprotocol) => "mp-export",
            (PolicyKind::Default, ClauseSyntax::Multiprotocol) => "mp-default",
        }
    }

    fn peer_keyword(&self) -> &'static str {
        match self.kind {
            PolicyKind::Import => "from",
            PolicyKind::Export | PolicyKind::Default => "to",
        }
    }

    fn filter_keyword(&self) -> &'static str {
        match self.kind {
            PolicyKind::Import => "accept",
            PolicyKind::Export => "announce",
            PolicyKind::Default => "networks",
        }
    }

    fn peering_stops(&self) -> &'static [&'static str] {
        match self.kind {
            PolicyKind::Import => &["action", "from", "accept"],
            PolicyKind::Export => &["action", "to", "announce"],
            PolicyKind::Default => &["action", "to", "networks"],
        }
    }

    fn action_stops(&self) -> &'static [&'static str] {
        match self.kind {
            PolicyKind::Import => &["from", "accept"],
            PolicyKind::Export => &["to", "announce"],
            PolicyKind::Default => &["to", "networks"],
        }
    }
}

const FILTER_STOPS: [&str; 2] = ["except", "refine"];

fn keyword_at(text: &str, kw: &str) -> bool {
    match text.get(..kw.len()) {
        Some(head) => {
            head.eq_ignore_ascii_case(kw)
                && text[kw.len()..]
                    .chars()
                    .next()
                    .map_or(true, |c| !is_word_char(c))
        }
        None => false,
    }
}

//
// Takes the text up to the next stop: one of `stop_chars` or a keyword from
// `stops` starting a word, both only outside of (), {} and <>. The text is
// returned trimmed and must not be empty.
//
fn phrase<'a>(
    expecting: &'static str,
    stops: &'static [&'static str],
    stop_chars: &'static str,
) -> impl FnMut(Span<'a>) -> IResult<'a, Span<'a>, String> {
    move |input: Span<'a>| {
        let text = *input.fragment();
        let mut depth = 0usize;
        let mut previous = None;
        let mut end = text.len();
        for (index, c) in text.char_indices() {
            match c {
                '(' | '{' | '<' => depth += 1,
                ')' | '}' | '>' if depth > 0 => depth -= 1,
                _ if depth == 0 && stop_chars.contains(c) => {
                    end = index;
                    break;
                }
                _ if depth == 0
                    && previous.map_or(true, |p: char| !is_word_char(p))
                    && stops.iter().any(|kw| keyword_at(&text[index..], kw)) =>
                {
                    end = index;
                    break;
                }
                _ => {}
            }
            previous = Some(c);
        }

        let (remainder, taken) = input.take_split(end);
        let trimmed = taken.fragment().trim();
        if trimmed.is_empty() {
            return Err(nom::Err::Error(ParserError {
                context: format!("expecting {}", expecting),
                span: input,
                kind: ErrorKind::TakeWhile1,
            }));
        }
        Ok((remainder, trimmed.to_string()))
    }
}

fn split_actions(text: &str) -> Vec<Value> {
    let mut actions = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, c) in text.char_indices() {
        match c {
            '(' | '{' => depth += 1,
            ')' | '}' if depth > 0 => depth -= 1,
            ';' if depth == 0 => {
                actions.push(&text[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    actions.push(&text[start..]);
    actions
        .into_iter()
        .map(str::trim)
        .filter(|action| !action.is_empty())
        .map(|action| Value::String(action.to_string()))
        .collect()
}

//
//  peer_kw mp_peering ["action" 1*(action ";")]
//
fn peering_entry(input: Span, attribute: PolicyAttribute) -> IResult<Span, Value> {
    let (input, peering) = preceded(
        keyword(attribute.peer_keyword()),
        phrase("an mp-peering", attribute.peering_stops(), ";}"),
    )(input)?;
    let (input, actions) = opt(preceded(
        keyword("action"),
        phrase("actions", attribute.action_stops(), "}"),
    ))(input)?;

    let mut entry = ClauseRecord::new();
    entry.insert(
        "mp-peering".to_string(),
        Value::Array(
            peering
                .split_whitespace()
                .map(|token| Value::String(token.to_string()))
                .collect(),
        ),
    );
    if let Some(actions) = actions {
        entry.insert("actions".to_string(), Value::Array(split_actions(&actions)));
    }
    Ok((input, Value::Object(entry)))
}

fn filter_phrase(input: Span) -> IResult<Span, String> {
    phrase("an mp-filter", &FILTER_STOPS, ";}")(input)
}

//
// `default` and `mp-default` may leave out `networks`, the filter is then ANY
//
fn filter_part(input: Span, attribute: PolicyAttribute) -> IResult<Span, String> {
    match attribute.kind {
        PolicyKind::Default => map(
            opt(preceded(keyword("networks"), filter_phrase)),
            |filter| filter.unwrap_or_else(|| "ANY".to_string()),
        )(input),
        PolicyKind::Import | PolicyKind::Export => {
            preceded(keyword(attribute.filter_keyword()), filter_phrase)(input)
        }
    }
}

//
//  import_factor   = 1*(peer_kw mp_peering ["action" 1*(action ";")]) filter_kw mp_filter
//
fn import_factor(input: Span, attribute: PolicyAttribute) -> IResult<Span, ClauseRecord> {
    let (input, peerings) = context(
        "expecting a peering",
        many1(|i| peering_entry(i, attribute)),
    )(input)?;
    let (input, filter) = context("expecting a filter", |i| filter_part(i, attribute))(input)?;

    let mut factor = ClauseRecord::new();
    factor.insert("mp-peerings".to_string(), Value::Array(peerings));
    factor.insert("mp-filter".to_string(), Value::String(filter));
    Ok((input, factor))
}

fn factor_item(input: Span, attribute: PolicyAttribute) -> IResult<Span, ClauseRecord> {
    terminated(|i| import_factor(i, attribute), opt(separated_by(';')))(input)
}

//
//  import_term     = import_factor [";"] / "{" 1*(import_factor [";"]) "}"
//
fn import_term(input: Span, attribute: PolicyAttribute) -> IResult<Span, ClauseRecord> {
    alt((
        map(
            delimited(
                preceded_by('{'),
                many1(|i| factor_item(i, attribute)),
                followed_by('}'),
            ),
            |factors| {
                let mut term = ClauseRecord::new();
                term.insert(
                    "import-factors".to_string(),
                    Value::Array(factors.into_iter().map(Value::Object).collect()),
                );
                term
            },
        ),
        |i| factor_item(i, attribute),
    ))(input)
}

fn afi_list(input: Span) -> IResult<Span, Vec<String>> {
    preceded(keyword("afi"), separated_list1(separated_by(','), word))(input)
}

//
//  afi_import_expression = ["afi" afi *("," afi)] import_expression
//  import_expression     = import_term [("EXCEPT" / "REFINE") afi_import_expression]
//
fn afi_import_expression(
    input: Span,
    attribute: PolicyAttribute,
) -> IResult<Span, ClauseRecord> {
    let (input, afis) = match attribute.syntax {
        ClauseSyntax::Multiprotocol => opt(afi_list)(input)?,
        ClauseSyntax::Classic => (input, None),
    };
    let (input, term) = import_term(input, attribute)?;
    let (input, combinator) = opt(pair(
        alt((
            value("except", keyword("except")),
            value("refine", keyword("refine")),
        )),
        |i| afi_import_expression(i, attribute),
    ))(input)?;

    let mut record = ClauseRecord::new();
    if let Some(afis) = afis {
        record.insert(
            "afi-list".to_string(),
            Value::Array(afis.into_iter().map(Value::String).collect()),
        );
    }
    match combinator {
        Some((operator, right)) => {
            let mut operands = ClauseRecord::new();
            operands.insert("left".to_string(), Value::Object(term));
            operands.insert("right".to_string(), Value::Object(right));
            record.insert(operator.to_string(), Value::Object(operands));
        }
        None => record.extend(term),
    }
    Ok((input, record))
}

//
//  policy          = ["protocol" word] ["into" word] afi_import_expression
//
pub(super) fn policy(input: Span, attribute: PolicyAttribute) -> IResult<Span, ClauseRecord> {
    let (input, protocol_1) = opt(preceded(keyword("protocol"), word))(input)?;
    let (input, protocol_2) = opt(preceded(keyword("into"), word))(input)?;
    let (input, expression) = afi_import_expression(input, attribute)?;

    let mut record = ClauseRecord::new();
    if let Some(protocol) = protocol_1 {
        record.insert("protocol-1".to_string(), Value::String(protocol));
    }
    if let Some(protocol) = protocol_2 {
        record.insert("protocol-2".to_string(), Value::String(protocol));
    }
    record.extend(expression);
    Ok((input, record))
}

#[cfg(test)]
#[path = "clause_tests.rs"]
mod clause_tests;
