// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fs::File;
use std::process::exit;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use rpsl_policy::commands::{APP_NAME, APP_VERSION, ERROR_STATUS_CODE, OUTPUT, VERBOSE};
use rpsl_policy::utils::get_rpsl_policy_commands;
use rpsl_policy::utils::reader::{ReadBuffer, Reader};
use rpsl_policy::utils::writer::WriteBuffer::{File as WBFile, Stderr, Stdout};
use rpsl_policy::utils::writer::Writer;
use rpsl_policy::Error;

fn main() -> Result<(), Error> {
    let mut app = clap::Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(
            r#"
  Normalizes the import and export policies of RPSL aut-num objects, as found
  in Internet Routing Registry dumps, into per address family policy tables
  of filter trees, peerings and actions."#,
        )
        .arg_required_else_help(true);

    let commands = get_rpsl_policy_commands();
    let mappings = commands.iter().map(|s| (s.name(), s)).fold(
        HashMap::with_capacity(commands.len()),
        |mut map, entry| {
            map.insert(entry.0, entry.1.as_ref());
            map
        },
    );

    for each in &commands {
        app = app.subcommand(each.command());
    }

    let help = app.render_usage();
    let app = app.get_matches();

    match app.subcommand() {
        Some((name, value)) => {
            if let Some(command) = mappings.get(name) {
                let level = match value.try_get_one::<bool>(VERBOSE.0) {
                    Ok(Some(true)) => LevelFilter::Debug,
                    _ => LevelFilter::Warn,
                };
                if let Err(err) = SimpleLogger::new().with_level(level).init() {
                    eprintln!("Unable to initialize logging, {}", err);
                }

                let mut output_writer = match value.try_get_one::<String>(OUTPUT.0) {
                    Ok(Some(file)) => Writer::new(WBFile(File::create(file)?), Stderr(std::io::stderr())),
                    _ => Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr())),
                };

                match (*command).execute(
                    value,
                    &mut output_writer,
                    &mut Reader::new(ReadBuffer::Stdin(std::io::stdin())),
                ) {
                    Err(e) => {
                        output_writer.write_err(format!("Error occurred {}", e))?;
                        exit(ERROR_STATUS_CODE);
                    }
                    Ok(code) => exit(code),
                }
            } else {
                println!("{}", help);
            }
        }
        None => {
            println!("{}", help);
        }
    }

    Ok(())
}
