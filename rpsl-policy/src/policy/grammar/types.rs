use crate::policy::exprs::{Cast, CommunityCall, FilterToken, Version};

///
/// Record handed to the policy dispatcher for one import/export/default
/// attribute. It stays loosely typed on purpose of matching the shape of the
/// RPSL clause: `protocol-1`, `protocol-2`, `afi-list`, `import-factors`,
/// `mp-peerings`, `mp-filter`, `except`, `refine`.
///
pub type ClauseRecord = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexedAfi {
    pub version: Version,
    pub cast: Option<Cast>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexedAsExpr {
    Field(String),
    And(Box<LexedAsExpr>, Box<LexedAsExpr>),
    Or(Box<LexedAsExpr>, Box<LexedAsExpr>),
    Except(Box<LexedAsExpr>, Box<LexedAsExpr>),
    Group(Box<LexedAsExpr>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexedFilter {
    And(Box<LexedFilter>, Box<LexedFilter>),
    Or(Box<LexedFilter>, Box<LexedFilter>),
    Not(Box<LexedFilter>),
    Group(Box<LexedFilter>),
    Community(CommunityCall),
    PolicyFilter(Vec<FilterToken>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexedPeering {
    PeeringSetName(String),
    Expression {
        as_expression: Vec<String>,
        router_expression_1: Option<Vec<String>>,
        router_expression_2: Option<Vec<String>>,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Assigned {
    Value(String),
    Set(Vec<String>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexedAction {
    Assignment {
        assignee: String,
        assigned: Assigned,
    },
    Community(CommunityCall),
    AddCommunity(Vec<String>),
    MethodCall {
        rp_attribute: String,
        method: String,
        args: Vec<String>,
    },
}
