use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use clap::{Arg, ArgAction, ArgMatches};
use log::debug;

use crate::command::Command;
use crate::commands::{
    ERROR_STATUS_CODE, INPUT, OUTPUT, PARSE_AUT_NUM, SUCCESS_STATUS_CODE, VERBOSE,
};
use crate::policy::diagnostics::{Diagnostic, Diagnostics};
use crate::policy::driver::AutNumParser;
use crate::policy::Result;
use crate::utils::reader::Reader;
use crate::utils::records::aut_num_events;
use crate::utils::writer::Writer;

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct ParseAutNum {}

#[allow(clippy::new_without_default)]
impl ParseAutNum {
    pub fn new() -> Self {
        ParseAutNum {}
    }
}

fn drain_to(writer: &mut Writer, diagnostics: &mut Vec<Diagnostic>) {
    for diagnostic in diagnostics.drain(..) {
        writer.report(diagnostic);
    }
}

impl Command for ParseAutNum {
    fn name(&self) -> &'static str {
        PARSE_AUT_NUM
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(PARSE_AUT_NUM)
            .about(
                r#"Reads RPSL objects and prints the normalized import and export policies
of every aut-num object, one JSON object per line. Clauses that cannot be
parsed are reported on stderr and skipped."#,
            )
            .arg(
                Arg::new(INPUT.0)
                    .long(INPUT.0)
                    .short(INPUT.1)
                    .help("Read RPSL objects from this file instead of stdin")
                    .action(ArgAction::Set)
                    .required(false),
            )
            .arg(
                Arg::new(OUTPUT.0)
                    .long(OUTPUT.0)
                    .short(OUTPUT.1)
                    .help("Write to output file")
                    .action(ArgAction::Set)
                    .required(false),
            )
            .arg(
                Arg::new(VERBOSE.0)
                    .long(VERBOSE.0)
                    .short(VERBOSE.1)
                    .action(ArgAction::SetTrue)
                    .help("Log progress at debug level"),
            )
    }

    fn execute(&self, app: &ArgMatches, writer: &mut Writer, reader: &mut Reader) -> Result<i32> {
        let input: Box<dyn BufRead + '_> = match app.get_one::<String>(INPUT.0) {
            Some(file) => Box::new(BufReader::new(File::open(file)?)),
            None => Box::new(BufReader::new(reader)),
        };

        let mut status = SUCCESS_STATUS_CODE;
        let mut parser = AutNumParser::new(aut_num_events(input), Vec::<Diagnostic>::new());
        while let Some(aut_num) = parser.next() {
            drain_to(writer, parser.diagnostics_mut());
            match aut_num {
                Ok(aut_num) => {
                    serde_json::to_writer(&mut *writer, &aut_num)?;
                    writeln!(writer)?;
                }
                Err(err) => {
                    debug!("Dropping aut-num record, {}", err);
                    writer.write_err(format!("Error parsing aut-num record: {}", err))?;
                    status = ERROR_STATUS_CODE;
                }
            }
        }
        drain_to(writer, parser.diagnostics_mut());

        Ok(status)
    }
}
