use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, StudentRecord};
use super::normalize::{clean_text, normalize_semester, parse_cgpa};

/// Header names the source table must carry.
pub const NAME_COLUMN: &str = "Student Name";
pub const COURSE_COLUMN: &str = "Course Name";
pub const SECTION_COLUMN: &str = "Section";
pub const SEMESTER_COLUMN: &str = "Semester";
pub const CGPA_COLUMN: &str = "CGPA";

const REQUIRED_COLUMNS: [&str; 5] = [
    NAME_COLUMN,
    COURSE_COLUMN,
    SECTION_COLUMN,
    SEMESTER_COLUMN,
    CGPA_COLUMN,
];

/// Load failures the viewer reports to the user as-is.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("expected a top-level JSON array of records")]
    NotAnArray,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a student dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the five leaderboard columns
/// * `.json` – `[{ "Student Name": "...", "CGPA": 8.1, ... }, ...]`
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_csv(file)?
        }
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            read_json(&text)?
        }
        other => return Err(LoadError::UnsupportedFormat(other.to_string()).into()),
    };

    log::info!(
        "Loaded {} records from {} ({} with unrecognised semester)",
        dataset.len(),
        path.display(),
        dataset.excluded_count()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row as it appears in the file. Every cell is optional so a short
/// or blank row still yields a record.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Student Name", default)]
    name: Option<String>,
    #[serde(rename = "Course Name", default)]
    course: Option<String>,
    #[serde(rename = "Section", default)]
    section: Option<String>,
    #[serde(rename = "Semester", default)]
    semester: Option<String>,
    #[serde(rename = "CGPA", default)]
    cgpa: Option<String>,
}

impl RawRow {
    fn into_record(self, row_no: usize) -> StudentRecord {
        let record = normalize_row(
            self.name.as_deref(),
            self.course.as_deref(),
            self.section.as_deref(),
            self.semester.as_deref(),
            self.cgpa.as_deref(),
        );
        if !record.has_valid_semester() {
            log::debug!("Row {row_no}: unrecognised semester {:?}", self.semester);
        }
        record
    }
}

/// Parse CSV text with a header row. Empty lines are skipped; the whole
/// input is buffered into memory.
///
/// Cells that are not valid UTF-8 are decoded lossily so the row is kept.
pub fn read_csv<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .byte_headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| String::from_utf8_lossy(h).trim().to_string())
        .collect();
    check_columns(headers.as_slice())?;
    let headers = csv::StringRecord::from(headers);

    let mut records = Vec::new();
    for (i, result) in reader.byte_records().enumerate() {
        let row_no = i + 1;
        let bytes = result.with_context(|| format!("CSV row {row_no}"))?;
        let raw: RawRow = lossy_record(bytes, row_no)
            .deserialize(Some(&headers))
            .with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(row_no));
    }

    Ok(Dataset::from_records(records))
}

fn lossy_record(bytes: csv::ByteRecord, row_no: usize) -> csv::StringRecord {
    match csv::StringRecord::from_byte_record(bytes) {
        Ok(record) => record,
        Err(err) => {
            log::debug!("Row {row_no}: invalid UTF-8, decoding lossily");
            err.into_byte_record()
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect()
        }
    }
}

fn check_columns<S: AsRef<str>>(present: &[S]) -> Result<(), LoadError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.iter().any(|h| h.as_ref() == **col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns(missing))
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON using the CSV header names as keys:
///
/// ```json
/// [
///   { "Student Name": "Ann", "Course Name": "CS", "Section": "A",
///     "Semester": "IV", "CGPA": 8.1 },
///   ...
/// ]
/// ```
///
/// Numeric cells are accepted alongside strings.
pub fn read_json(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().ok_or(LoadError::NotAnArray)?;

    if let Some(first) = rows.first().and_then(|r| r.as_object()) {
        let keys: Vec<&str> = first.keys().map(String::as_str).collect();
        check_columns(keys.as_slice())?;
    }

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        let cell = |key: &str| obj.get(key).and_then(json_to_text);

        records.push(normalize_row(
            cell(NAME_COLUMN).as_deref(),
            cell(COURSE_COLUMN).as_deref(),
            cell(SECTION_COLUMN).as_deref(),
            cell(SEMESTER_COLUMN).as_deref(),
            cell(CGPA_COLUMN).as_deref(),
        ));
    }

    Ok(Dataset::from_records(records))
}

fn json_to_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Shared row normalisation
// ---------------------------------------------------------------------------

fn normalize_row(
    name: Option<&str>,
    course: Option<&str>,
    section: Option<&str>,
    semester: Option<&str>,
    cgpa: Option<&str>,
) -> StudentRecord {
    StudentRecord {
        name: clean_text(name),
        course: clean_text(course),
        section: clean_text(section),
        semester: normalize_semester(semester),
        cgpa: parse_cgpa(cgpa),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::normalize::MISSING_TEXT;
    use std::io::Write;

    const HEADER: &str = "Student Name,Course Name,Section,Semester,CGPA\n";

    #[test]
    fn test_read_csv_normalises_rows() {
        let text = format!("{HEADER}  Ann ,CS,A,I,8.0\nBob,CS,B,2,9.5\n");
        let ds = read_csv(text.as_bytes()).unwrap();

        assert_eq!(ds.len(), 2);
        let ann = &ds.records[0];
        assert_eq!(ann.name, "Ann");
        assert_eq!(ann.semester, 1);
        assert_eq!(ann.cgpa, 8.0);
        assert_eq!(ds.records[1].semester, 2);
    }

    #[test]
    fn test_read_csv_defaults_bad_cells() {
        let text = format!("{HEADER},,  ,xyz,abc\nCid,ME,C\n");
        let ds = read_csv(text.as_bytes()).unwrap();

        assert_eq!(ds.len(), 2);
        let blank = &ds.records[0];
        assert_eq!(blank.name, MISSING_TEXT);
        assert_eq!(blank.course, MISSING_TEXT);
        assert_eq!(blank.section, MISSING_TEXT);
        assert_eq!(blank.semester, 0);
        assert_eq!(blank.cgpa, 0.0);

        let short = &ds.records[1];
        assert_eq!(short.name, "Cid");
        assert_eq!(short.semester, 0);
        assert_eq!(ds.excluded_count(), 2);
    }

    #[test]
    fn test_read_csv_skips_empty_lines_and_extra_columns() {
        let text = "Roll,Student Name,Course Name,Section,Semester,CGPA\n\n1,Ann,CS,A,III,7.5\n\n";
        let ds = read_csv(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].semester, 3);
    }

    #[test]
    fn test_read_csv_keeps_row_with_invalid_utf8() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"Ann,CS,A,I,8.0\nB\xffb,CS,B,2,7.5\nCid,ME,A,III,9.0\n");
        let ds = read_csv(bytes.as_slice()).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[1].name, "B\u{FFFD}b");
        assert_eq!(ds.records[1].semester, 2);
        assert_eq!(ds.records[1].cgpa, 7.5);
        assert_eq!(ds.records[2].name, "Cid");
    }

    #[test]
    fn test_read_csv_missing_column() {
        let err = read_csv("Student Name,Course Name,Section\nAnn,CS,A\n".as_bytes()).unwrap_err();
        let load_err = err.downcast_ref::<LoadError>().unwrap();
        match load_err {
            LoadError::MissingColumns(cols) => assert_eq!(cols, &["Semester", "CGPA"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_json_accepts_numbers() {
        let text = r#"[
            {"Student Name": "Ann", "Course Name": "CS", "Section": "A", "Semester": "iv", "CGPA": 8.25},
            {"Student Name": null, "Course Name": "CS", "Section": "B", "Semester": 3, "CGPA": "7"}
        ]"#;
        let ds = read_json(text).unwrap();
        assert_eq!(ds.records[0].semester, 4);
        assert_eq!(ds.records[0].cgpa, 8.25);
        assert_eq!(ds.records[1].name, MISSING_TEXT);
        assert_eq!(ds.records[1].semester, 3);
        assert_eq!(ds.records[1].cgpa, 7.0);
    }

    #[test]
    fn test_read_json_rejects_non_array() {
        let err = read_json(r#"{"Student Name": "Ann"}"#).unwrap_err();
        assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::NotAnArray)));
    }

    #[test]
    fn test_load_file_dispatch() {
        let mut csv_file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(csv_file, "{HEADER}Ann,CS,A,V,9.1\n").unwrap();
        let ds = load_file(csv_file.path()).unwrap();
        assert_eq!(ds.records[0].semester, 5);

        let other = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = load_file(other.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn test_load_file_missing_path() {
        assert!(load_file(Path::new("does/not/exist.csv")).is_err());
    }
}
