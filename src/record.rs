//! Pipe-delimited student record.
//!
//! A `.dat` file carries one record on its first line:
//!
//! ```text
//! rollno | name | program | department | hostel | username | gender
//! ```
//!
//! Fields are separated by the exact three-character delimiter `" | "`.
//! Only the name and username are required; the other fields are kept
//! verbatim and never validated.

use crate::error::SkipReason;

/// Field separator between record columns.
pub const DELIMITER: &str = " | ";

/// Minimum number of fields a line must split into to be a record.
pub const MIN_FIELDS: usize = 6;

pub const ROLL_NUMBER: usize = 0;
pub const NAME: usize = 1;
pub const PROGRAM: usize = 2;
pub const DEPARTMENT: usize = 3;
pub const HOSTEL: usize = 4;
pub const USERNAME: usize = 5;
pub const GENDER: usize = 6;

/// One student record split into its raw fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Parse a record line.
    ///
    /// Surrounding whitespace is stripped before splitting. Lines that are
    /// empty or split into fewer than [`MIN_FIELDS`] fields are rejected.
    pub fn parse(line: &str) -> Result<Self, SkipReason> {
        let line = line.trim();
        if line.is_empty() {
            return Err(SkipReason::EmptyLine);
        }

        let fields: Vec<String> = line.split(DELIMITER).map(str::to_string).collect();
        if fields.len() < MIN_FIELDS {
            return Err(SkipReason::TooFewFields {
                found: fields.len(),
            });
        }

        Ok(Self { fields })
    }

    /// Raw field at `index`, untrimmed.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    fn trimmed(&self, index: usize) -> Option<&str> {
        self.field(index).map(str::trim)
    }

    pub fn roll_number(&self) -> Option<&str> {
        self.trimmed(ROLL_NUMBER)
    }

    /// Full name, trimmed. Always present on a parsed record but may be empty.
    pub fn name(&self) -> &str {
        self.trimmed(NAME).unwrap_or_default()
    }

    pub fn program(&self) -> Option<&str> {
        self.trimmed(PROGRAM)
    }

    pub fn department(&self) -> Option<&str> {
        self.trimmed(DEPARTMENT)
    }

    pub fn hostel(&self) -> Option<&str> {
        self.trimmed(HOSTEL)
    }

    /// Username, trimmed, original case. Always present on a parsed record
    /// but may be empty.
    pub fn username(&self) -> &str {
        self.trimmed(USERNAME).unwrap_or_default()
    }

    /// Gender, if the line carries a seventh field.
    pub fn gender(&self) -> Option<&str> {
        self.trimmed(GENDER)
    }
}
