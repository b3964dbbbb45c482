use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::matcher::match_score;
use super::model::{Dataset, StudentRecord};

/// Lowest CGPA bound applied when the minimum is left blank.
pub const DEFAULT_CGPA_MIN: f64 = 0.0;
/// Highest CGPA bound applied when the maximum is left blank.
pub const DEFAULT_CGPA_MAX: f64 = 10.0;

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// A single-select filter: everything, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

/// Leaderboard ordering. Ties keep source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CgpaDesc,
    CgpaAsc,
    SemesterDesc,
    SemesterAsc,
    NameAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::CgpaDesc,
        SortKey::CgpaAsc,
        SortKey::SemesterDesc,
        SortKey::SemesterAsc,
        SortKey::NameAsc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::CgpaDesc => "CGPA (High to Low)",
            SortKey::CgpaAsc => "CGPA (Low to High)",
            SortKey::SemesterDesc => "Semester (High to Low)",
            SortKey::SemesterAsc => "Semester (Low to High)",
            SortKey::NameAsc => "Name (A to Z)",
        }
    }

    fn compare(self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self {
            SortKey::CgpaDesc => b.cgpa.total_cmp(&a.cgpa),
            SortKey::CgpaAsc => a.cgpa.total_cmp(&b.cgpa),
            SortKey::SemesterDesc => b.semester.cmp(&a.semester),
            SortKey::SemesterAsc => a.semester.cmp(&b.semester),
            SortKey::NameAsc => compare_text(&a.name, &b.name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything that decides which rows are shown and in what order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub course: Selection<String>,
    pub section: Selection<String>,
    pub semester: Selection<u8>,
    /// `None` means [`DEFAULT_CGPA_MIN`].
    pub cgpa_min: Option<f64>,
    /// `None` means [`DEFAULT_CGPA_MAX`].
    pub cgpa_max: Option<f64>,
    /// Raw search box text; normalised when the pipeline runs.
    pub search: String,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Inclusive CGPA bounds with defaults applied.
    pub fn cgpa_range(&self) -> (f64, f64) {
        (
            self.cgpa_min.unwrap_or(DEFAULT_CGPA_MIN),
            self.cgpa_max.unwrap_or(DEFAULT_CGPA_MAX),
        )
    }

    /// Lowercased, trimmed search term.
    pub fn search_term(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// Ranked output
// ---------------------------------------------------------------------------

/// A record that passed the filters, with its place on the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecord {
    pub record: Arc<StudentRecord>,
    /// 1-based position in the sorted sequence.
    pub rank: usize,
    /// Fuzzy name score; 0 when no search term is active.
    pub match_score: u32,
}

/// Filter, sort and rank the dataset.
///
/// Always recomputed from the full dataset; the source records are never
/// touched.
pub fn rank_students(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<RankedRecord> {
    let term = criteria.search_term();
    let tokens: Vec<&str> = term.split_whitespace().collect();
    let (min, max) = criteria.cgpa_range();

    let mut passing: Vec<(Arc<StudentRecord>, u32)> = dataset
        .records
        .iter()
        .filter_map(|rec| {
            if !rec.has_valid_semester() {
                return None;
            }
            let name = rec.name.to_lowercase();
            let keep = tokens.iter().all(|t| name.contains(t))
                && criteria.course.accepts(&rec.course)
                && criteria.section.accepts(&rec.section)
                && criteria.semester.accepts(&rec.semester)
                && rec.cgpa >= min
                && rec.cgpa <= max;
            keep.then(|| (Arc::clone(rec), match_score(&name, &term)))
        })
        .collect();

    // `sort_by` is stable, so equal keys stay in source order.
    passing.sort_by(|(a, _), (b, _)| criteria.sort.compare(a, b));

    passing
        .into_iter()
        .enumerate()
        .map(|(i, (record, match_score))| RankedRecord {
            record,
            rank: i + 1,
            match_score,
        })
        .collect()
}

/// Collation-style text ordering.
///
/// Base letters decide first (accents and case ignored), then accents
/// (unaccented first), then case (lowercase first), then raw code points.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

/// NFD with combining marks dropped, lowercased.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}
