use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};

/// One data row as read from the input file: the combined "Last, First"
/// name column and the email column, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub full_name: String,
    pub email: String,
}

/// A cleaned contact. Field order matches the batch file column layout,
/// and the serde renames produce the batch file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "Apellido")]
    pub last_name: String,
    #[serde(rename = "Nombre")]
    pub first_name: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl Contact {
    /// Builds a normalized contact from a raw row.
    ///
    /// The combined name must contain exactly one comma separating last
    /// and first name; anything else is a `MalformedNameError`. Names are
    /// trimmed and title-cased, the email is trimmed and lower-cased.
    pub fn from_raw(row: &RawRow) -> Result<Self> {
        let parts: Vec<&str> = row.full_name.split(',').collect();
        if parts.len() != 2 {
            return Err(EtlError::MalformedNameError {
                value: row.full_name.clone(),
            });
        }

        Ok(Self {
            last_name: title_case(parts[0].trim()),
            first_name: title_case(parts[1].trim()),
            email: row.email.trim().to_lowercase(),
        })
    }
}

/// Title-cases a name: each alphabetic run starts uppercase with the rest
/// lowercase. Non-alphabetic characters start a new run, so multi-word and
/// hyphenated names come out capitalized per part.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if run_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            run_start = false;
        } else {
            out.push(c);
            run_start = true;
        }
    }
    out
}

/// Outcome of the transform stage. `contacts` holds the cleaned,
/// deduplicated records in first-seen order; `invalid` and `duplicates`
/// hold the filtered-out records for operator reporting.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub original_count: usize,
    pub contacts: Vec<Contact>,
    pub invalid: Vec<Contact>,
    pub duplicates: Vec<Contact>,
}

/// Outcome of the load stage: the batch files written, in order.
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub output_path: String,
    pub batch_files: Vec<String>,
    pub total_contacts: usize,
}
