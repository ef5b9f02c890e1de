use crate::{command::Command, commands};

pub mod reader;
pub mod records;
pub mod writer;

pub fn get_rpsl_policy_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(commands::parse_aut_num::ParseAutNum::new()),
        Box::new(commands::lex_clause::LexClause::new()),
    ]
}
