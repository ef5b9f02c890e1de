use serde::{Deserialize, Serialize};

use crate::policy::action::clean_actions;
use crate::policy::exprs::{ImportFactor, Peering};
use crate::policy::filter::clean_filter;
use crate::policy::grammar::LexedAction;
use crate::policy::peering::parse_mp_peering;
use crate::policy::PolicyContext;

///
/// One `from|to <peering> [action ...]` part of an import factor as the
/// clause grammar hands it over: the peering tokens and the raw action texts.
///
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawPeering {
    pub mp_peering: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawImportFactor {
    pub mp_peerings: Vec<RawPeering>,
    pub mp_filter: String,
}

fn parse_peering(raw: RawPeering, ctx: &mut PolicyContext) -> Option<Peering> {
    let mp_peering = parse_mp_peering(&raw.mp_peering, ctx)?;
    let actions = if raw.actions.is_empty() {
        None
    } else {
        let lexed = raw
            .actions
            .iter()
            .filter_map(|action| ctx.lex_with(|grammar| grammar.action(action)))
            .collect::<Vec<LexedAction>>();
        Some(clean_actions(lexed))
    };
    Some(Peering {
        mp_peering,
        actions,
    })
}

///
/// Normalizes one import factor. A filter that does not parse drops the whole
/// factor, a peering that does not resolve only drops that peering.
///
pub fn parse_import_factor(raw: RawImportFactor, ctx: &mut PolicyContext) -> Option<ImportFactor> {
    let mp_filter = ctx
        .lex_with(|grammar| grammar.mp_filter(&raw.mp_filter))
        .map(clean_filter)?;
    let mp_peerings = raw
        .mp_peerings
        .into_iter()
        .filter_map(|peering| parse_peering(peering, ctx))
        .collect();
    Some(ImportFactor {
        mp_peerings,
        mp_filter,
    })
}

#[cfg(test)]
#[path = "import_factor_tests.rs"]
mod import_factor_tests;
