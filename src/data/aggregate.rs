use std::collections::HashMap;
use std::fmt;

use super::filter::{compare_text, RankedRecord};

/// Number of fixed CGPA buckets: `0-1` .. `9-10`.
pub const CGPA_BUCKETS: usize = 10;

/// Dimension the chart groups the filtered rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMode {
    #[default]
    Cgpa,
    Course,
    Section,
    Semester,
}

impl ChartMode {
    pub const ALL: [ChartMode; 4] = [
        ChartMode::Cgpa,
        ChartMode::Course,
        ChartMode::Section,
        ChartMode::Semester,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartMode::Cgpa => "CGPA",
            ChartMode::Course => "Course",
            ChartMode::Section => "Section",
            ChartMode::Semester => "Semester",
        }
    }

    pub fn title(self) -> String {
        match self {
            ChartMode::Cgpa => "CGPA Distribution".to_string(),
            other => format!("Students by {}", other.label()),
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bar chart input: one entry per label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub mode: ChartMode,
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    /// Average CGPA per label. `None` in CGPA-bucket mode.
    pub averages: Option<Vec<f64>>,
}

impl ChartSeries {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Group the filtered rows for charting. Always computed from scratch.
pub fn aggregate(rows: &[RankedRecord], mode: ChartMode) -> ChartSeries {
    match mode {
        ChartMode::Cgpa => cgpa_histogram(rows),
        ChartMode::Course => grouped(rows, mode, |r| r.record.course.clone(), compare_text),
        ChartMode::Section => grouped(rows, mode, |r| r.record.section.clone(), compare_text),
        ChartMode::Semester => grouped(
            rows,
            mode,
            |r| r.record.semester.to_string(),
            |a, b| semester_order(a).cmp(&semester_order(b)),
        ),
    }
}

/// Bucket index for a CGPA: `floor(cgpa)` clamped into `0..=9`.
pub fn cgpa_bucket(cgpa: f64) -> usize {
    if cgpa >= 9.0 {
        CGPA_BUCKETS - 1
    } else if cgpa >= 1.0 {
        cgpa.floor() as usize
    } else {
        0
    }
}

fn cgpa_histogram(rows: &[RankedRecord]) -> ChartSeries {
    let mut counts = vec![0usize; CGPA_BUCKETS];
    for row in rows {
        counts[cgpa_bucket(row.record.cgpa)] += 1;
    }
    ChartSeries {
        mode: ChartMode::Cgpa,
        labels: (0..CGPA_BUCKETS).map(|i| format!("{}-{}", i, i + 1)).collect(),
        counts,
        averages: None,
    }
}

fn grouped<K, C>(rows: &[RankedRecord], mode: ChartMode, key: K, order: C) -> ChartSeries
where
    K: Fn(&RankedRecord) -> String,
    C: Fn(&str, &str) -> std::cmp::Ordering,
{
    // label -> (count, total cgpa)
    let mut groups: HashMap<String, (usize, f64)> = HashMap::new();
    for row in rows {
        let entry = groups.entry(key(row)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += row.record.cgpa;
    }

    let mut entries: Vec<(String, (usize, f64))> = groups.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| order(a, b));

    let mut labels = Vec::with_capacity(entries.len());
    let mut counts = Vec::with_capacity(entries.len());
    let mut averages = Vec::with_capacity(entries.len());
    for (label, (count, total)) in entries {
        labels.push(label);
        counts.push(count);
        averages.push(total / count as f64);
    }

    ChartSeries {
        mode,
        labels,
        counts,
        averages: Some(averages),
    }
}

fn semester_order(label: &str) -> u8 {
    label.parse().unwrap_or(u8::MAX)
}
