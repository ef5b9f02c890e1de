use std::io::BufRead;

use log::{error, warn};

use crate::policy::driver::{AttributeEvent, AttributeRecord};
use crate::policy::Result;

pub const AUT_NUM: &str = "aut-num";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RpslObject {
    pub class: String,
    pub name: String,
    pub attributes: Vec<AttributeRecord>,
}

impl RpslObject {
    fn from_attributes(attributes: Vec<AttributeRecord>) -> Option<Self> {
        let first = attributes.first()?;
        Some(RpslObject {
            class: first.key.clone(),
            name: first.value.clone(),
            attributes,
        })
    }

    pub fn into_events(self) -> impl Iterator<Item = AttributeEvent> {
        self.attributes
            .into_iter()
            .map(AttributeEvent::Attribute)
            .chain(std::iter::once(AttributeEvent::EndOfRecord))
    }
}

///
/// Reads RPSL objects, as found in IRR database dumps, one at a time.
///
/// An attribute is a `key: value` line, lines starting with a space, a tab
/// or `+` continue the value of the previous attribute. `#` starts a comment,
/// lines starting with `%` are server remarks. Objects are separated by blank
/// lines. Invalid UTF-8 is replaced rather than rejected, dumps are not always
/// clean.
///
pub struct RpslObjects<R> {
    reader: R,
    line_num: usize,
    done: bool,
}

impl<R: BufRead> RpslObjects<R> {
    pub fn new(reader: R) -> Self {
        RpslObjects {
            reader,
            line_num: 0,
            done: false,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buffer = Vec::new();
        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }
        self.line_num += 1;
        let line = String::from_utf8_lossy(&buffer);
        Ok(Some(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()))
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    }
}

impl<R: BufRead> Iterator for RpslObjects<R> {
    type Item = Result<RpslObject>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut attributes: Vec<AttributeRecord> = Vec::new();
        loop {
            let line = match self.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.done = true;
                    break;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };

            if line.trim().is_empty() {
                if attributes.is_empty() {
                    continue;
                }
                break;
            }
            if line.starts_with('%') || line.starts_with('#') {
                continue;
            }

            let content = strip_comment(&line);
            if content.starts_with(|c: char| c == ' ' || c == '\t' || c == '+') {
                match attributes.last_mut() {
                    Some(last) => {
                        let continued = content[1..].trim();
                        if !continued.is_empty() {
                            if !last.value.is_empty() {
                                last.value.push(' ');
                            }
                            last.value.push_str(continued);
                        }
                    }
                    None => warn!("Skipping continuation line {} without an attribute", self.line_num),
                }
                continue;
            }

            match content.split_once(':') {
                Some((key, value)) => attributes.push(AttributeRecord::new(
                    key.trim().to_ascii_lowercase(),
                    value.trim(),
                )),
                None => warn!("Skipping line {}, not an attribute: `{}`", self.line_num, line),
            }
        }

        RpslObject::from_attributes(attributes).map(Ok)
    }
}

///
/// The attribute events of every aut-num object read from `reader`, each
/// object closed by an end of record marker. Reading stops at the first I/O
/// error.
///
pub fn aut_num_events<R: BufRead>(reader: R) -> impl Iterator<Item = AttributeEvent> {
    RpslObjects::new(reader)
        .filter_map(|object| match object {
            Ok(object) => Some(object),
            Err(err) => {
                error!("Stopped reading RPSL objects, {}", err);
                None
            }
        })
        .filter(|object| object.class == AUT_NUM)
        .flat_map(RpslObject::into_events)
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod records_tests;
