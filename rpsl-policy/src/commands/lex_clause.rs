use std::io::Write;

use clap::{Arg, ArgAction, ArgMatches};

use crate::command::Command;
use crate::commands::{
    ATTRIBUTE, CLAUSE, ERROR_STATUS_CODE, LEX_CLAUSE, PRINT_YAML, SUCCESS_STATUS_CODE,
};
use crate::policy::errors::Error;
use crate::policy::grammar::{Grammar, PolicyAttribute, RpslGrammar};
use crate::policy::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct LexClause {}

#[allow(clippy::new_without_default)]
impl LexClause {
    pub fn new() -> Self {
        LexClause {}
    }
}

impl Command for LexClause {
    fn name(&self) -> &'static str {
        LEX_CLAUSE
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(LEX_CLAUSE)
            .about("Prints the clause record the policy grammar produces for one attribute value.")
            .arg(
                Arg::new(ATTRIBUTE.0)
                    .long(ATTRIBUTE.0)
                    .short(ATTRIBUTE.1)
                    .help("The policy attribute the clause belongs to, one of import, export, default, mp-import, mp-export, mp-default")
                    .action(ArgAction::Set)
                    .required(true),
            )
            .arg(
                Arg::new(PRINT_YAML.0)
                    .long(PRINT_YAML.0)
                    .short(PRINT_YAML.1)
                    .action(ArgAction::SetTrue)
                    .required(false)
                    .help("Print output in YAML format"),
            )
            .arg(
                Arg::new(CLAUSE)
                    .help("The attribute value, e.g. \"from AS1 accept ANY\"")
                    .action(ArgAction::Set)
                    .required(true),
            )
            .arg_required_else_help(true)
    }

    fn execute(&self, app: &ArgMatches, writer: &mut Writer, _reader: &mut Reader) -> Result<i32> {
        let key = match app.get_one::<String>(ATTRIBUTE.0) {
            Some(key) => key,
            None => return Err(Error::IllegalArguments("missing --attribute".to_string())),
        };
        let attribute = match PolicyAttribute::from_key(key) {
            Some(attribute) => attribute,
            None => {
                return Err(Error::IllegalArguments(format!(
                    "`{}` is not a policy attribute, expected one of import, export, default, mp-import, mp-export, mp-default",
                    key
                )))
            }
        };
        let clause = match app.get_one::<String>(CLAUSE) {
            Some(clause) => clause,
            None => return Err(Error::IllegalArguments("missing clause".to_string())),
        };

        match RpslGrammar::new().policy(clause, attribute) {
            Ok(record) => {
                if app.get_flag(PRINT_YAML.0) {
                    serde_yaml::to_writer(&mut *writer, &record)?;
                } else {
                    serde_json::to_writer_pretty(&mut *writer, &record)?;
                    writeln!(writer)?;
                }
                Ok(SUCCESS_STATUS_CODE)
            }
            Err(err) => {
                writer.write_err(err.to_string())?;
                Ok(ERROR_STATUS_CODE)
            }
        }
    }
}
