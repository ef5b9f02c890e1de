use std::fmt::Formatter;

use indexmap::map::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    Ipv4,
    Ipv6,
    Any,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Version::Ipv4 => f.write_str("ipv4")?,
            Version::Ipv6 => f.write_str("ipv6")?,
            Version::Any => f.write_str("any")?,
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cast {
    Unicast,
    Multicast,
    Any,
}

impl std::fmt::Display for Cast {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cast::Unicast => f.write_str("unicast")?,
            Cast::Multicast => f.write_str("multicast")?,
            Cast::Any => f.write_str("any")?,
        }
        Ok(())
    }
}

///
/// The address families a rule applies to, as (version, cast) pairs in the
/// order they were declared. `[(Any, Any)]` is the scope of a clause without
/// an explicit `afi` list.
///
pub type AfiScope = Vec<(Version, Cast)>;

pub fn default_scope() -> AfiScope {
    vec![(Version::Any, Cast::Any)]
}

///
/// `community[.method](args)` as used both by filters (a community match) and
/// by actions (a community manipulation). A bare `community(...)` carries no
/// method.
///
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CommunityCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub args: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

//
// A single token of a policy filter. Prefix sets `{ ... }` keep their members
// together, everything else (AS numbers, set names, AS path regular expressions,
// range operators) is a plain word.
//
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterToken {
    Word(String),
    Group(Vec<String>),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLeaf {
    Community(CommunityCall),
    #[serde(untagged)]
    PolicyFilter(Vec<FilterToken>),
}

///
/// Normalized `<mp-filter>` tree. Serializes to the compact record form, e.g.
/// `{"and": {"left": ["AS1"], "right": {"not": ["AS2"]}}}`.
///
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    And { left: Box<Filter>, right: Box<Filter> },
    Or { left: Box<Filter>, right: Box<Filter> },
    Not(Box<Filter>),
    #[serde(untagged)]
    Leaf(FilterLeaf),
}

///
/// Normalized `<as-expression>` tree. AS expressions have no negation, the
/// set difference is expressed with `Except` instead.
///
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsExpr {
    And { left: Box<AsExpr>, right: Box<AsExpr> },
    Or { left: Box<AsExpr>, right: Box<AsExpr> },
    Except { left: Box<AsExpr>, right: Box<AsExpr> },
    #[serde(untagged)]
    Field(String),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionValue {
    Assigned(String),
    AssignedSet(Vec<String>),
    Community(Vec<CommunityCall>),
    MethodCalls(Vec<MethodCall>),
}

pub type ActionMap = IndexMap<String, ActionValue>;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeeringRef {
    PeeringSetName(String),
    Expression {
        as_expr: AsExpr,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        router_expr1: Option<AsExpr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        router_expr2: Option<AsExpr>,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Peering {
    pub mp_peering: PeeringRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<ActionMap>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImportFactor {
    pub mp_peerings: Vec<Peering>,
    pub mp_filter: Filter,
}

///
/// version -> cast -> rules. Buckets only ever grow, rules from later clauses
/// are appended after the rules already present.
///
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTable(IndexMap<Version, IndexMap<Cast, Vec<ImportFactor>>>);

impl PolicyTable {
    pub fn new() -> Self {
        PolicyTable::default()
    }

    pub fn extend<I>(&mut self, version: Version, cast: Cast, rules: I)
    where
        I: IntoIterator<Item = ImportFactor>,
    {
        self.0
            .entry(version)
            .or_default()
            .entry(cast)
            .or_default()
            .extend(rules);
    }

    pub fn get(&self, version: Version, cast: Cast) -> Option<&[ImportFactor]> {
        self.0
            .get(&version)
            .and_then(|casts| casts.get(&cast))
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.values().flat_map(IndexMap::values).map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Version, Cast, &[ImportFactor])> {
        self.0.iter().flat_map(|(version, casts)| {
            casts
                .iter()
                .map(move |(cast, rules)| (*version, *cast, rules.as_slice()))
        })
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AutNum {
    pub imports: PolicyTable,
    pub exports: PolicyTable,
}
