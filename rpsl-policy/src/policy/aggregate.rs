use serde_json::Value;

use crate::policy::diagnostics::Diagnostic;
use crate::policy::dispatch::parse_afi_import_expression;
use crate::policy::exprs::{default_scope, PolicyTable};
use crate::policy::grammar::ClauseRecord;
use crate::policy::{PolicyContext, Result};

pub(crate) const PROTOCOL_1: &str = "protocol-1";
pub(crate) const PROTOCOL_2: &str = "protocol-2";

///
/// Adds the rules of one import/export/default clause to `table`. Every rule
/// goes into the bucket of each address family of its scope, after whatever
/// earlier clauses put there. A family whose factors were all dropped still
/// gets its bucket, left empty.
///
pub fn import_export(
    record: &ClauseRecord,
    table: &mut PolicyTable,
    ctx: &mut PolicyContext,
) -> Result<()> {
    for field in [PROTOCOL_1, PROTOCOL_2] {
        if let Some(protocol) = record.get(field) {
            let protocol = match protocol {
                Value::String(name) => name.clone(),
                other => other.to_string(),
            };
            ctx.report(Diagnostic::IgnoredProtocol { field, protocol });
        }
    }

    for (scope, rules) in parse_afi_import_expression(record, default_scope(), ctx)? {
        for (version, cast) in scope {
            table.extend(version, cast, rules.iter().cloned());
        }
    }
    Ok(())
}
