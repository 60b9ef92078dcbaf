// ============================================================
// Bulk Record Source
// ============================================================
// Reads the training dataset: a CSV file whose
// `api_response_json` column holds one structured résumé export
// per row. Each row is reduced to the handful of string lists
// the classifiers are trained on.
//
// Paths read from each export (`?` = optional):
//
//   Resume.StructuredXMLResume
//     .EmploymentHistory?.EmployerOrg[]
//         .EmployerOrgName                → employers
//         .PositionHistory[0].Title?      → titles
//         .PositionHistory[0].Description → descriptions
//     .EducationHistory?.SchoolOrInstitution[]
//         .School?.SchoolName             → education
//         .Degree.DegreeName?             → education
//         .Degree.DegreeMajor?.Name[]     → education
//   Resume.UserArea["sov:ResumeUserArea"]["sov:Sections"]["sov:Section"][]
//         objects with "#text"            → headers (text, @sectionType)
//
// Anything else missing makes the row malformed. A JSON `null`
// where a string belongs is accepted and contributes nothing.
// Reading is fail-fast; callers wanting to skip bad rows use
// `parse_record` per row and match on RecordError themselves.

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the CSV column holding the JSON export
pub const JSON_COLUMN: &str = "api_response_json";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("cannot read records from '{path}': {source}")]
    Csv {
        path:   PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column '{0}' not found in the records file")]
    MissingColumn(String),

    #[error("row {row}: malformed résumé JSON: {source}")]
    Json {
        row:    usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("row {row}: {reason}")]
    Malformed { row: usize, reason: String },
}

/// The training strings pulled out of one résumé export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRecord {
    pub employers:    Vec<String>,
    pub titles:       Vec<String>,
    pub descriptions: Vec<String>,
    pub education:    Vec<String>,
    /// (header text, section type) pairs
    pub headers:      Vec<(String, String)>,
}

// ─── Export schema ────────────────────────────────────────────────────────────
// Only the fields we read; serde ignores the rest.

#[derive(Debug, Deserialize)]
struct Export {
    #[serde(rename = "Resume")]
    resume: ResumeBody,
}

#[derive(Debug, Deserialize)]
struct ResumeBody {
    #[serde(rename = "StructuredXMLResume")]
    structured: StructuredResume,
    #[serde(rename = "UserArea")]
    user_area:  UserArea,
}

#[derive(Debug, Deserialize)]
struct StructuredResume {
    #[serde(rename = "EmploymentHistory", default)]
    employment: Option<EmploymentHistory>,
    #[serde(rename = "EducationHistory", default)]
    education:  Option<EducationHistory>,
}

#[derive(Debug, Deserialize)]
struct EmploymentHistory {
    #[serde(rename = "EmployerOrg")]
    employers: Vec<EmployerOrg>,
}

#[derive(Debug, Deserialize)]
struct EmployerOrg {
    #[serde(rename = "EmployerOrgName", deserialize_with = "nullable")]
    name:      Option<String>,
    #[serde(rename = "PositionHistory")]
    positions: Vec<Position>,
}

#[derive(Debug, Deserialize)]
struct Position {
    #[serde(rename = "Title", default)]
    title:       Option<String>,
    #[serde(rename = "Description", deserialize_with = "nullable")]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EducationHistory {
    #[serde(rename = "SchoolOrInstitution")]
    schools: Vec<SchoolOrInstitution>,
}

#[derive(Debug, Deserialize)]
struct SchoolOrInstitution {
    #[serde(rename = "School", default)]
    school: Option<School>,
    #[serde(rename = "Degree")]
    degree: Degree,
}

#[derive(Debug, Deserialize)]
struct School {
    #[serde(rename = "SchoolName", deserialize_with = "nullable")]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Degree {
    #[serde(rename = "DegreeName", default)]
    name:  Option<String>,
    #[serde(rename = "DegreeMajor", default)]
    major: Option<DegreeMajor>,
}

#[derive(Debug, Deserialize)]
struct DegreeMajor {
    #[serde(rename = "Name")]
    names: Vec<Option<String>>,
}

/// A required key whose value may be `null`
fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<String>::deserialize(deserializer)
}

#[derive(Debug, Deserialize)]
struct UserArea {
    #[serde(rename = "sov:ResumeUserArea")]
    area: SovResumeArea,
}

#[derive(Debug, Deserialize)]
struct SovResumeArea {
    #[serde(rename = "sov:Sections")]
    sections: SovSections,
}

#[derive(Debug, Deserialize)]
struct SovSections {
    // Entries are a mix of objects and bare strings
    #[serde(rename = "sov:Section")]
    section: Vec<serde_json::Value>,
}

// ─── Parsing ──────────────────────────────────────────────────────────────────

/// Parse one JSON export. `row` is only used in error messages.
pub fn parse_record(row: usize, json: &str) -> Result<ExtractedRecord, RecordError> {
    let export: Export =
        serde_json::from_str(json).map_err(|source| RecordError::Json { row, source })?;

    let structured = export.resume.structured;
    let mut record = ExtractedRecord::default();

    if let Some(history) = structured.employment {
        for employer in history.employers {
            let Some(position) = employer.positions.into_iter().next() else {
                return Err(RecordError::Malformed {
                    row,
                    reason: format!(
                        "employer '{}' has an empty PositionHistory",
                        employer.name.as_deref().unwrap_or_default()
                    ),
                });
            };
            record.employers.extend(employer.name);
            record.titles.extend(position.title);
            record.descriptions.extend(position.description);
        }
    }

    if let Some(history) = structured.education {
        for school in history.schools {
            record.education.extend(school.school.and_then(|s| s.name));
            record.education.extend(school.degree.name);
            if let Some(major) = school.degree.major {
                record.education.extend(major.names.into_iter().flatten());
            }
        }
    }

    for section in export.resume.user_area.area.sections.section {
        let Some(text) = section.get("#text").and_then(|t| t.as_str()) else {
            continue;
        };
        let section_type = section
            .get("@sectionType")
            .and_then(|t| t.as_str())
            .ok_or_else(|| RecordError::Malformed {
                row,
                reason: format!("section '{}' has no @sectionType", text),
            })?;
        record.headers.push((text.to_string(), section_type.to_string()));
    }

    Ok(record)
}

/// Read every row of the records CSV, stopping at the first bad row.
pub fn read_records(path: &Path) -> Result<Vec<ExtractedRecord>, RecordError> {
    let csv_error = |source| RecordError::Csv { path: path.to_path_buf(), source };

    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    let column = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .position(|h| h == JSON_COLUMN)
        .ok_or_else(|| RecordError::MissingColumn(JSON_COLUMN.to_string()))?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let row_data = result.map_err(csv_error)?;
        let json = row_data.get(column).unwrap_or_default();
        records.push(parse_record(row, json)?);
    }

    tracing::info!("Read {} résumé records from '{}'", records.len(), path.display());
    Ok(records)
}
