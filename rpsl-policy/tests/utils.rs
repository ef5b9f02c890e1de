// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::io::Cursor;
use std::path::PathBuf;

use rpsl_policy::utils;
use rpsl_policy::utils::reader::ReadBuffer::Cursor as ReadCursor;
use rpsl_policy::utils::reader::Reader;
use rpsl_policy::utils::writer::Writer;

#[non_exhaustive]
pub struct StatusCode;

const RPSL_POLICY_TEST_APP_NAME: &str = "rpsl-policy-test";

#[allow(dead_code)]
impl StatusCode {
    pub const SUCCESS: i32 = 0;
    pub const INTERNAL_FAILURE: i32 = -1;
    pub const PREPROCESSOR_ERROR: i32 = -3;
    pub const PARSING_ERROR: i32 = 5;
}

#[allow(dead_code)]
pub fn get_full_path_for_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push(path);
    resource.display().to_string()
}

#[allow(dead_code)]
pub fn get_reader_for_str(content: &str) -> Reader {
    Reader::new(ReadCursor(Cursor::new(content.as_bytes().to_vec())))
}

//
// Every output line is one JSON document
//
#[allow(dead_code)]
pub fn output_lines(writer: Writer) -> Vec<serde_json::Value> {
    writer
        .into_string()
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

pub trait CommandTestRunner {
    fn build_args(&self) -> Vec<String>;

    fn run(&self, writer: &mut Writer, reader: &mut Reader) -> i32 {
        let mut app = clap::Command::new(RPSL_POLICY_TEST_APP_NAME);

        let args = self.build_args();

        let command_options = args.iter().fold(
            vec![String::from(RPSL_POLICY_TEST_APP_NAME)],
            |mut res, arg| {
                res.push(arg.to_string());
                res
            },
        );

        let commands = utils::get_rpsl_policy_commands();

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

        let app = app.get_matches_from(command_options);

        match app.subcommand() {
            Some((name, value)) => {
                if let Some(command) = mappings.get(name) {
                    match (*command).execute(value, writer, reader) {
                        Err(e) => {
                            writer
                                .write_err(format!("Error occurred {e}"))
                                .expect("failed to write to stderr");

                            StatusCode::INTERNAL_FAILURE
                        }
                        Ok(code) => code,
                    }
                } else {
                    StatusCode::PREPROCESSOR_ERROR
                }
            }

            None => StatusCode::PREPROCESSOR_ERROR,
        }
    }
}
