//! The expected customer record schema.
//!
//! Every input table must carry these seven columns, although header cells
//! may have incidental surrounding whitespace. Columns beyond the schema are
//! tolerated and passed through the pipeline untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The seven columns of a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaColumn {
    Name,
    Email,
    Age,
    Country,
    SignUpDate,
    Income,
    Status,
}

impl SchemaColumn {
    /// All schema columns in canonical order.
    pub const ALL: [SchemaColumn; 7] = [
        SchemaColumn::Name,
        SchemaColumn::Email,
        SchemaColumn::Age,
        SchemaColumn::Country,
        SchemaColumn::SignUpDate,
        SchemaColumn::Income,
        SchemaColumn::Status,
    ];

    /// The header cell text this column is matched against.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaColumn::Name => "Name",
            SchemaColumn::Email => "Email",
            SchemaColumn::Age => "Age",
            SchemaColumn::Country => "Country",
            SchemaColumn::SignUpDate => "SignUpDate",
            SchemaColumn::Income => "Income",
            SchemaColumn::Status => "Status",
        }
    }

    /// Short description used by the CLI `columns` listing.
    pub fn description(self) -> &'static str {
        match self {
            SchemaColumn::Name => "Customer name; rows with a blank name are dropped",
            SchemaColumn::Email => "Contact email; invalid addresses are cleared",
            SchemaColumn::Age => "Age in years; missing values imputed with the median",
            SchemaColumn::Country => "Country; known aliases mapped to canonical names",
            SchemaColumn::SignUpDate => "Sign-up date; unparsable values are cleared",
            SchemaColumn::Income => "Annual income; rows without a non-negative value are dropped",
            SchemaColumn::Status => "Account status; blank values become Unknown",
        }
    }
}

impl fmt::Display for SchemaColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header names of the expected columns, in canonical order.
pub fn expected_columns() -> Vec<&'static str> {
    SchemaColumn::ALL.iter().map(|c| c.as_str()).collect()
}

/// Check that every schema column is present among `headers` (compared after
/// trimming), returning the first missing column as an error.
pub fn resolve_columns(headers: &[String]) -> Result<(), SchemaError> {
    for column in SchemaColumn::ALL {
        let found = headers
            .iter()
            .any(|header| header.trim() == column.as_str());
        if !found {
            return Err(SchemaError::MissingColumn(column.as_str()));
        }
    }
    Ok(())
}
