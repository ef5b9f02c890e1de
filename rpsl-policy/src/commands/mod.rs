pub mod lex_clause;
pub mod parse_aut_num;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "rpsl-policy";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Commands
pub const PARSE_AUT_NUM: &str = "parse-aut-num";
pub const LEX_CLAUSE: &str = "lex-clause";
// Arguments for parse-aut-num
pub const INPUT: (&str, char) = ("input", 'i');
pub const OUTPUT: (&str, char) = ("output", 'o');
pub const VERBOSE: (&str, char) = ("verbose", 'v');
// Arguments for lex-clause
pub const ATTRIBUTE: (&str, char) = ("attribute", 'a');
pub const PRINT_YAML: (&str, char) = ("print-yaml", 'y');
pub const CLAUSE: &str = "clause";

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = 5;
