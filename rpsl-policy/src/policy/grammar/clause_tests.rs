use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use super::*;

fn lex(key: &str, input: &str) -> Result<Value, SyntaxError> {
    let attribute = PolicyAttribute::from_key(key).unwrap();
    RpslGrammar::new()
        .policy(input, attribute)
        .map(Value::Object)
}

#[rstest]
#[case("import", PolicyKind::Import, ClauseSyntax::Classic)]
#[case("Export", PolicyKind::Export, ClauseSyntax::Classic)]
#[case("default", PolicyKind::Default, ClauseSyntax::Classic)]
#[case("MP-IMPORT", PolicyKind::Import, ClauseSyntax::Multiprotocol)]
#[case("mp-export", PolicyKind::Export, ClauseSyntax::Multiprotocol)]
#[case("mp-default", PolicyKind::Default, ClauseSyntax::Multiprotocol)]
fn test_policy_attribute_keys(
    #[case] key: &str,
    #[case] kind: PolicyKind,
    #[case] syntax: ClauseSyntax,
) {
    let attribute = PolicyAttribute::from_key(key).unwrap();
    assert_eq!(attribute, PolicyAttribute { kind, syntax });
    assert_eq!(attribute.name(), key.to_ascii_lowercase());
}

#[test]
fn test_non_policy_keys() {
    assert_eq!(PolicyAttribute::from_key("remarks"), None);
    assert_eq!(PolicyAttribute::from_key("mp-members"), None);
}

#[test]
fn test_single_import_factor() {
    assert_eq!(
        lex("import", "from AS690 action pref=100; accept ANY").unwrap(),
        json!({
            "mp-peerings": [{"mp-peering": ["AS690"], "actions": ["pref=100"]}],
            "mp-filter": "ANY"
        })
    );
}

#[test]
fn test_mp_import_with_afi_and_router() {
    assert_eq!(
        lex(
            "mp-import",
            "afi ipv6.unicast from AS3356 at 2001:db8::1 \
             action community.append(3356:123); accept AS-FOO AND NOT {2001:db8::/32^+}"
        )
        .unwrap(),
        json!({
            "afi-list": ["ipv6.unicast"],
            "mp-peerings": [{
                "mp-peering": ["AS3356", "at", "2001:db8::1"],
                "actions": ["community.append(3356:123)"]
            }],
            "mp-filter": "AS-FOO AND NOT {2001:db8::/32^+}"
        })
    );
}

#[test]
fn test_several_peerings_share_a_filter() {
    assert_eq!(
        lex(
            "import",
            "from AS1 action pref=1; from (AS2 OR AS3) at rtr-a action pref=2; med=0; accept ANY"
        )
        .unwrap(),
        json!({
            "mp-peerings": [
                {"mp-peering": ["AS1"], "actions": ["pref=1"]},
                {"mp-peering": ["(AS2", "OR", "AS3)", "at", "rtr-a"], "actions": ["pref=2", "med=0"]}
            ],
            "mp-filter": "ANY"
        })
    );
}

#[test]
fn test_braced_import_factors() {
    assert_eq!(
        lex(
            "mp-export",
            "afi ipv4.unicast, ipv6.unicast { to AS1 announce AS-SELF; to AS2 announce {0.0.0.0/0}; }"
        )
        .unwrap(),
        json!({
            "afi-list": ["ipv4.unicast", "ipv6.unicast"],
            "import-factors": [
                {"mp-peerings": [{"mp-peering": ["AS1"]}], "mp-filter": "AS-SELF"},
                {"mp-peerings": [{"mp-peering": ["AS2"]}], "mp-filter": "{0.0.0.0/0}"}
            ]
        })
    );
}

#[test]
fn test_refine_keeps_both_sides() {
    assert_eq!(
        lex(
            "mp-import",
            "afi ipv4 from AS1 accept ANY refine afi ipv4.unicast from AS3 action pref=3; accept AS3"
        )
        .unwrap(),
        json!({
            "afi-list": ["ipv4"],
            "refine": {
                "left": {"mp-peerings": [{"mp-peering": ["AS1"]}], "mp-filter": "ANY"},
                "right": {
                    "afi-list": ["ipv4.unicast"],
                    "mp-peerings": [{"mp-peering": ["AS3"], "actions": ["pref=3"]}],
                    "mp-filter": "AS3"
                }
            }
        })
    );
}

#[test]
fn test_except_in_classic_clause() {
    assert_eq!(
        lex("import", "{ from AS1 accept AS1; } except from AS2 accept AS2").unwrap(),
        json!({
            "except": {
                "left": {
                    "import-factors": [{"mp-peerings": [{"mp-peering": ["AS1"]}], "mp-filter": "AS1"}]
                },
                "right": {"mp-peerings": [{"mp-peering": ["AS2"]}], "mp-filter": "AS2"}
            }
        })
    );
}

#[test]
fn test_protocols() {
    assert_eq!(
        lex("import", "protocol BGP4 into OSPF from AS1 accept ANY").unwrap(),
        json!({
            "protocol-1": "BGP4",
            "protocol-2": "OSPF",
            "mp-peerings": [{"mp-peering": ["AS1"]}],
            "mp-filter": "ANY"
        })
    );
}

#[test]
fn test_default_without_networks() {
    assert_eq!(
        lex("default", "to AS1 action pref=10;").unwrap(),
        json!({
            "mp-peerings": [{"mp-peering": ["AS1"], "actions": ["pref=10"]}],
            "mp-filter": "ANY"
        })
    );
    assert_eq!(
        lex("mp-default", "afi ipv6 to AS2 networks AS2:RS-ROUTES").unwrap(),
        json!({
            "afi-list": ["ipv6"],
            "mp-peerings": [{"mp-peering": ["AS2"]}],
            "mp-filter": "AS2:RS-ROUTES"
        })
    );
}

#[rstest]
#[case("import", "afi ipv4 from AS1 accept ANY")]
#[case("import", "from accept ANY")]
#[case("import", "from AS1")]
#[case("import", "from AS1 action accept ANY")]
#[case("import", "from AS1 accept ANY; from AS2 accept ANY")]
#[case("export", "from AS1 accept ANY")]
#[case("mp-export", "{ to AS1 announce ANY;")]
#[case("mp-import", "")]
fn test_malformed_clauses(#[case] key: &str, #[case] input: &str) {
    let err = lex(key, input).unwrap_err();
    assert_eq!(err.grammar, key);
    assert_eq!(err.input, input);
}

#[test]
fn test_split_actions_respects_sets() {
    assert_eq!(
        split_actions("community .= {65000:1; 65000:2}; pref = 10;;"),
        vec![
            Value::String("community .= {65000:1; 65000:2}".to_string()),
            Value::String("pref = 10".to_string()),
        ]
    );
}
