///
/// Grammars for the pieces of an RPSL policy attribute. Any enhancements to the
/// grammar **MUST** be reflected in this doc section.
///
/// Sample `aut-num` policy attributes
///
/// ```pre
/// import:     from AS690 action pref=100; accept ANY
/// mp-import:  afi ipv6.unicast
///             from AS3356 at 2001:db8::1 action community.append(3356:123);
///             accept AS-FOO AND NOT {2001:db8::/32^+}
/// mp-export:  afi ipv4.unicast, ipv6.unicast
///             { to AS1 announce AS-SELF; to AS2 announce ANY; }
///             refine afi ipv4 from AS3 accept ANY
/// ```
///
///  The grammars in ABNF form, keywords are case insensitive
///
///  ```ABNF
///
///  afi                        = ("ipv4" / "ipv6" / "any") ["." ("unicast" / "multicast")]
///
///  as_field                   = 1*CHAR                    ; any token except the keywords
///  as_primary                 = as_field / "(" as_expression ")"
///  as_conjunction             = as_primary *("AND" as_primary)
///  as_disjunction             = as_conjunction *("OR" as_conjunction)
///  as_expression              = as_disjunction *("EXCEPT" as_disjunction)
///
///  prefix_set                 = "{" [prefix *("," prefix)] "}"
///  path_regex                 = "<" *CHAR ">"
///  policy_filter              = 1*(prefix_set / path_regex / word)
///  community                  = "community" ["." method] ( args / prefix_set )
///  filter_primary             = "(" mp_filter ")" / community / policy_filter
///  filter_negation            = "NOT" filter_negation / filter_primary
///  filter_conjunction         = filter_negation *("AND" filter_negation)
///  mp_filter                  = filter_conjunction *("OR" filter_conjunction)
///
///  mp_peering                 = peering_set_name /
///                               as_expression [router_expression_1] ["at" router_expression_2]
///
///  action                     = "community" *LWSP ".=" set /
///                               "community" ["." method] (args / set) /
///                               rp_attribute "." method args /
///                               rp_attribute "=" (set / value)
///
///  policy                     = ["protocol" word] ["into" word] afi_import_expression
///  afi_import_expression      = ["afi" afi *("," afi)] import_expression   ; afi only for mp-*
///  import_expression          = import_term [("EXCEPT" / "REFINE") afi_import_expression]
///  import_term                = import_factor [";"] / "{" 1*(import_factor [";"]) "}"
///  import_factor              = 1*(peer_kw mp_peering ["action" 1*(action ";")])
///                                   filter_kw mp_filter
///  ```
///
///  `peer_kw`/`filter_kw` are `from`/`accept` for imports, `to`/`announce` for
///  exports and `to`/`networks` for defaults, where `networks` is optional.
///
mod action;
mod afi;
mod as_expr;
mod clause;
mod common;
mod filter;
mod peering;
mod types;

pub use clause::{ClauseSyntax, PolicyAttribute, PolicyKind};
pub(crate) use common::*;
pub use types::*;

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message} parsing `{input}`.")]
pub struct SyntaxError {
    pub grammar: &'static str,
    pub message: String,
    pub fragment: String,
    pub input: String,
}

///
/// The parse operations the normalization layer depends on. Each one takes the
/// raw text of one clause fragment and either returns the typed parse record of
/// that grammar or a syntax error that callers report and skip.
///
pub trait Grammar {
    fn action(&self, input: &str) -> Result<LexedAction, SyntaxError>;
    fn afi(&self, input: &str) -> Result<LexedAfi, SyntaxError>;
    fn as_expression(&self, input: &str) -> Result<LexedAsExpr, SyntaxError>;
    fn mp_filter(&self, input: &str) -> Result<LexedFilter, SyntaxError>;
    fn mp_peering(&self, input: &str) -> Result<LexedPeering, SyntaxError>;
    fn policy(&self, input: &str, attribute: PolicyAttribute)
        -> Result<ClauseRecord, SyntaxError>;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RpslGrammar;

impl RpslGrammar {
    pub fn new() -> Self {
        RpslGrammar
    }
}

impl Grammar for RpslGrammar {
    fn action(&self, input: &str) -> Result<LexedAction, SyntaxError> {
        parse_all("action", input, action::action)
    }

    fn afi(&self, input: &str) -> Result<LexedAfi, SyntaxError> {
        parse_all("afi", input, afi::afi)
    }

    fn as_expression(&self, input: &str) -> Result<LexedAsExpr, SyntaxError> {
        parse_all("as-expression", input, as_expr::as_expression)
    }

    fn mp_filter(&self, input: &str) -> Result<LexedFilter, SyntaxError> {
        parse_all("mp-filter", input, filter::mp_filter)
    }

    fn mp_peering(&self, input: &str) -> Result<LexedPeering, SyntaxError> {
        parse_all("mp-peering", input, peering::mp_peering)
    }

    fn policy(
        &self,
        input: &str,
        attribute: PolicyAttribute,
    ) -> Result<ClauseRecord, SyntaxError> {
        parse_all(attribute.name(), input, |span| {
            clause::policy(span, attribute)
        })
    }
}
