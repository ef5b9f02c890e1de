pub mod action;
pub mod afi;
pub mod aggregate;
pub mod as_expr;
pub mod diagnostics;
pub mod dispatch;
pub mod driver;
pub mod errors;
pub mod exprs;
pub mod filter;
pub mod grammar;
pub mod import_factor;
pub mod peering;

use diagnostics::{Diagnostic, Diagnostics};
use errors::Error;
use grammar::{Grammar, SyntaxError};

pub type Result<R> = std::result::Result<R, Error>;

///
/// What every normalizer needs besides its input: the grammar to lex
/// sub-clauses with and the sink recoverable problems are reported to.
///
pub struct PolicyContext<'a> {
    grammar: &'a dyn Grammar,
    diagnostics: &'a mut dyn Diagnostics,
}

impl<'a> PolicyContext<'a> {
    pub fn new(grammar: &'a dyn Grammar, diagnostics: &'a mut dyn Diagnostics) -> Self {
        PolicyContext {
            grammar,
            diagnostics,
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.report(diagnostic);
    }

    //
    // Runs one of the grammars, a syntax error is reported and turned into None
    //
    pub fn lex_with<T, F>(&mut self, lexer: F) -> Option<T>
    where
        F: FnOnce(&dyn Grammar) -> std::result::Result<T, SyntaxError>,
    {
        match lexer(self.grammar) {
            Ok(lexed) => Some(lexed),
            Err(err) => {
                self.diagnostics.report(Diagnostic::Syntax(err));
                None
            }
        }
    }
}
