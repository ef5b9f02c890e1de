use log::{debug, info};

use crate::policy::aggregate::import_export;
use crate::policy::diagnostics::Diagnostics;
use crate::policy::exprs::{AutNum, PolicyTable};
use crate::policy::grammar::{Grammar, PolicyAttribute, PolicyKind, RpslGrammar};
use crate::policy::{PolicyContext, Result};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttributeRecord {
    pub key: String,
    pub value: String,
}

impl AttributeRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        AttributeRecord {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeEvent {
    Attribute(AttributeRecord),
    EndOfRecord,
}

///
/// Turns a stream of aut-num attributes into one [`AutNum`] per record.
///
/// `import` and `default` (and their `mp-` forms) feed the imports table,
/// `export` and `mp-export` the exports table; every other attribute is
/// ignored. A record is yielded when its end marker arrives, so input that
/// stops in the middle of a record yields nothing for it. A clause that
/// cannot be dispatched yields an `Err` for its record, the rest of that
/// record is skipped and parsing resumes with the next one.
///
pub struct AutNumParser<I, D, G = RpslGrammar> {
    events: I,
    diagnostics: D,
    grammar: G,
    imports: PolicyTable,
    exports: PolicyTable,
    records: usize,
}

impl<I, D> AutNumParser<I, D, RpslGrammar>
where
    I: Iterator<Item = AttributeEvent>,
    D: Diagnostics,
{
    pub fn new(events: I, diagnostics: D) -> Self {
        Self::with_grammar(events, diagnostics, RpslGrammar::new())
    }
}

impl<I, D, G> AutNumParser<I, D, G>
where
    I: Iterator<Item = AttributeEvent>,
    D: Diagnostics,
    G: Grammar,
{
    pub fn with_grammar(events: I, diagnostics: D, grammar: G) -> Self {
        info!("Launching aut-num policy parser");
        AutNumParser {
            events,
            diagnostics,
            grammar,
            imports: PolicyTable::new(),
            exports: PolicyTable::new(),
            records: 0,
        }
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut D {
        &mut self.diagnostics
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    fn consume(&mut self, attribute: &AttributeRecord) -> Result<()> {
        let policy = match PolicyAttribute::from_key(&attribute.key) {
            Some(policy) => policy,
            None => return Ok(()),
        };

        let mut ctx = PolicyContext::new(&self.grammar, &mut self.diagnostics);
        let record = match ctx.lex_with(|grammar| grammar.policy(&attribute.value, policy)) {
            Some(record) => record,
            None => return Ok(()),
        };
        let table = match policy.kind {
            PolicyKind::Import | PolicyKind::Default => &mut self.imports,
            PolicyKind::Export => &mut self.exports,
        };
        import_export(&record, table, &mut ctx)
    }

    fn skip_record(&mut self) {
        for event in self.events.by_ref() {
            if event == AttributeEvent::EndOfRecord {
                break;
            }
        }
    }

    fn reset(&mut self) {
        self.imports = PolicyTable::new();
        self.exports = PolicyTable::new();
    }

    fn finish_record(&mut self) -> AutNum {
        self.records += 1;
        if self.records % 0xFF == 0 {
            debug!("Parsed {} aut-num records", self.records);
        }
        AutNum {
            imports: std::mem::take(&mut self.imports),
            exports: std::mem::take(&mut self.exports),
        }
    }
}

impl<I, D, G> Iterator for AutNumParser<I, D, G>
where
    I: Iterator<Item = AttributeEvent>,
    D: Diagnostics,
    G: Grammar,
{
    type Item = Result<AutNum>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.events.next()? {
                AttributeEvent::Attribute(attribute) => {
                    if let Err(err) = self.consume(&attribute) {
                        debug!("Skipping rest of record after `{}`", attribute.key);
                        self.skip_record();
                        self.reset();
                        return Some(Err(err));
                    }
                }
                AttributeEvent::EndOfRecord => return Some(Ok(self.finish_record())),
            }
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
