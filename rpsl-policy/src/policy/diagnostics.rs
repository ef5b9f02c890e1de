use std::fmt::Formatter;

use crate::policy::grammar::SyntaxError;

///
/// A recoverable problem found while normalizing a policy clause. The part of
/// the clause it refers to was skipped, everything else was kept.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    Syntax(SyntaxError),
    UnsupportedCombinator { clause: String },
    IgnoredProtocol { field: &'static str, protocol: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::Syntax(err) => write!(f, "{}", err)?,
            Diagnostic::UnsupportedCombinator { clause } => {
                write!(f, "Skipping complex logic in {}", clause)?
            }
            Diagnostic::IgnoredProtocol { field, protocol } => {
                write!(f, "Ignoring {}: {}.", field, protocol)?
            }
        }
        Ok(())
    }
}

///
/// Sink for [`Diagnostic`]s. Normalizers never print, they report here and
/// the owner of the sink decides where the lines end up.
///
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}
