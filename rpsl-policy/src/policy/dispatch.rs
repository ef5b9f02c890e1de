use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::policy::afi::merge_afi;
use crate::policy::diagnostics::Diagnostic;
use crate::policy::errors::Error;
use crate::policy::exprs::{AfiScope, ImportFactor};
use crate::policy::grammar::{ClauseRecord, LexedAfi};
use crate::policy::import_factor::{parse_import_factor, RawImportFactor, RawPeering};
use crate::policy::{PolicyContext, Result};

pub(crate) const AFI_LIST: &str = "afi-list";
pub(crate) const IMPORT_FACTORS: &str = "import-factors";
pub(crate) const MP_PEERINGS: &str = "mp-peerings";
pub(crate) const MP_FILTER: &str = "mp-filter";
pub(crate) const EXCEPT: &str = "except";
pub(crate) const REFINE: &str = "refine";

pub(crate) fn render(record: &ClauseRecord) -> String {
    Value::Object(record.clone()).to_string()
}

fn field<T>(record: &ClauseRecord, name: &str, value: &Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value).map_err(|err| Error::MalformedClause {
        field: name.to_string(),
        clause: render(record),
        reason: err.to_string(),
    })
}

///
/// Parses one clause record into the rules it contributes, each list paired
/// with the address families it applies to.
///
/// An `afi-list` replaces `scope` for the rest of the clause. Then, in order,
/// a braced list of import factors, a single bare import factor, or an
/// EXCEPT/REFINE combinator. Combinators are reported and contribute nothing.
/// A record of any other shape is an error naming its keys.
///
pub fn parse_afi_import_expression(
    record: &ClauseRecord,
    scope: AfiScope,
    ctx: &mut PolicyContext,
) -> Result<Vec<(AfiScope, Vec<ImportFactor>)>> {
    let scope = match record.get(AFI_LIST) {
        Some(value) => {
            let items: Vec<String> = field(record, AFI_LIST, value)?;
            if items.is_empty() {
                scope
            } else {
                let afis = items
                    .iter()
                    .filter_map(|item| ctx.lex_with(|grammar| grammar.afi(item)))
                    .collect::<Vec<LexedAfi>>();
                merge_afi(afis)
            }
        }
        None => scope,
    };

    if let Some(value) = record.get(IMPORT_FACTORS) {
        let factors: Vec<RawImportFactor> = field(record, IMPORT_FACTORS, value)?;
        let parsed = factors
            .into_iter()
            .filter_map(|factor| parse_import_factor(factor, ctx))
            .collect();
        return Ok(vec![(scope, parsed)]);
    }

    if let (Some(peerings), Some(filter)) = (record.get(MP_PEERINGS), record.get(MP_FILTER)) {
        let factor = RawImportFactor {
            mp_peerings: field::<Vec<RawPeering>>(record, MP_PEERINGS, peerings)?,
            mp_filter: field::<String>(record, MP_FILTER, filter)?,
        };
        let parsed = parse_import_factor(factor, ctx).into_iter().collect();
        return Ok(vec![(scope, parsed)]);
    }

    if record.contains_key(EXCEPT) || record.contains_key(REFINE) {
        ctx.report(Diagnostic::UnsupportedCombinator {
            clause: render(record),
        });
        return Ok(vec![]);
    }

    Err(Error::UnrecognizedClause {
        keys: record.keys().cloned().collect(),
        clause: render(record),
    })
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
