use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// StudentRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A normalised leaderboard row. Never modified once built.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    pub course: String,
    pub section: String,
    /// `1..=10`, or `0` when the source label was not recognised.
    pub semester: u8,
    pub cgpa: f64,
}

impl StudentRecord {
    /// Records with an unrecognised semester are excluded from every view.
    pub fn has_valid_semester(&self) -> bool {
        self.semester != 0
    }
}

// ---------------------------------------------------------------------------
// GpaTier – row tint band
// ---------------------------------------------------------------------------

/// Grade band used to tint leaderboard rows below the podium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpaTier {
    High,
    Good,
    Mid,
    Low,
    Fail,
}

impl GpaTier {
    pub fn for_cgpa(cgpa: f64) -> Self {
        if cgpa >= 8.5 {
            GpaTier::High
        } else if cgpa >= 7.5 {
            GpaTier::Good
        } else if cgpa >= 6.0 {
            GpaTier::Mid
        } else if cgpa >= 4.0 {
            GpaTier::Low
        } else {
            GpaTier::Fail
        }
    }
}

impl fmt::Display for GpaTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GpaTier::High => "high",
            GpaTier::Good => "good",
            GpaTier::Mid => "mid",
            GpaTier::Low => "low",
            GpaTier::Fail => "fail",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full loaded dataset plus the option lists for the filter selectors.
///
/// Records are shared behind `Arc` so ranked views can hold them without
/// copying or touching the source.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records in source order.
    pub records: Vec<Arc<StudentRecord>>,
    /// Distinct course names, sorted.
    pub courses: BTreeSet<String>,
    /// Distinct sections, sorted.
    pub sections: BTreeSet<String>,
    /// Distinct valid semesters, ascending (0 never appears).
    pub semesters: BTreeSet<u8>,
}

impl Dataset {
    /// Build the option indices from the loaded records.
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        let mut courses = BTreeSet::new();
        let mut sections = BTreeSet::new();
        let mut semesters = BTreeSet::new();

        for rec in &records {
            courses.insert(rec.course.clone());
            sections.insert(rec.section.clone());
            if rec.has_valid_semester() {
                semesters.insert(rec.semester);
            }
        }

        Dataset {
            records: records.into_iter().map(Arc::new).collect(),
            courses,
            sections,
            semesters,
        }
    }

    /// Number of records, including ones with an invalid semester.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How many records will never be shown because of their semester.
    pub fn excluded_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| !r.has_valid_semester())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, course: &str, section: &str, semester: u8, cgpa: f64) -> StudentRecord {
        StudentRecord {
            name: name.to_string(),
            course: course.to_string(),
            section: section.to_string(),
            semester,
            cgpa,
        }
    }

    #[test]
    fn test_option_lists_skip_invalid_semester() {
        let ds = Dataset::from_records(vec![
            record("Ann", "MECH", "B", 3, 7.0),
            record("Bob", "CS", "A", 0, 9.0),
            record("Cid", "CS", "A", 1, 8.0),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.excluded_count(), 1);
        assert_eq!(ds.courses.iter().collect::<Vec<_>>(), vec!["CS", "MECH"]);
        assert_eq!(ds.sections.iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(ds.semesters.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_gpa_tier_boundaries() {
        assert_eq!(GpaTier::for_cgpa(8.5), GpaTier::High);
        assert_eq!(GpaTier::for_cgpa(8.49), GpaTier::Good);
        assert_eq!(GpaTier::for_cgpa(7.5), GpaTier::Good);
        assert_eq!(GpaTier::for_cgpa(6.0), GpaTier::Mid);
        assert_eq!(GpaTier::for_cgpa(4.0), GpaTier::Low);
        assert_eq!(GpaTier::for_cgpa(3.99), GpaTier::Fail);
    }
}
