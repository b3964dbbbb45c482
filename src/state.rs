use std::path::PathBuf;

use crate::data::aggregate::{aggregate, ChartMode, ChartSeries};
use crate::data::filter::{rank_students, FilterCriteria, RankedRecord};
use crate::data::model::Dataset;
use crate::data::normalize::leading_float;
use crate::data::paginate::{Pagination, ROWS_PER_PAGE};

// ---------------------------------------------------------------------------
// Load status
// ---------------------------------------------------------------------------

/// Where the dataset stands. Nothing is interactive until `Loaded`.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded(Dataset),
    /// Static, non-recoverable message shown in place of the table.
    Failed(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Derived values (`ranked`, `pagination`, `chart`) are only ever replaced
/// wholesale by the handlers below.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub load: LoadState,

    /// File the current dataset came from.
    pub source: Option<PathBuf>,

    /// Active filters and sort order.
    pub criteria: FilterCriteria,

    /// Raw text of the min/max CGPA boxes.
    pub min_input: String,
    pub max_input: String,

    /// Filtered, sorted leaderboard (cached).
    pub ranked: Vec<RankedRecord>,

    pub pagination: Pagination,

    pub chart_mode: ChartMode,
    pub chart: ChartSeries,
}

impl AppState {
    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.load {
            LoadState::Loaded(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Ingest a newly loaded dataset with default filters.
    pub fn set_dataset(&mut self, dataset: Dataset, source: Option<PathBuf>) {
        self.load = LoadState::Loaded(dataset);
        self.source = source;
        self.reset_filters();
    }

    /// Replace any dataset with a load failure; every view becomes empty.
    pub fn set_load_error(&mut self, message: String) {
        self.load = LoadState::Failed(message);
        self.refilter();
    }

    /// Recompute the leaderboard and chart from the full dataset.
    /// Always returns to page 1.
    pub fn refilter(&mut self) {
        self.ranked = match self.dataset() {
            Some(ds) => rank_students(ds, &self.criteria),
            None => Vec::new(),
        };
        self.pagination = Pagination::new(self.ranked.len(), ROWS_PER_PAGE);
        self.chart = aggregate(&self.ranked, self.chart_mode);
    }

    /// Swap in new criteria and recompute.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refilter();
    }

    /// Store the CGPA box text and apply whatever bounds it parses to.
    /// Unparseable text falls back to the default bound.
    pub fn set_cgpa_inputs(&mut self, min_text: String, max_text: String) {
        let criteria = FilterCriteria {
            cgpa_min: leading_float(&min_text),
            cgpa_max: leading_float(&max_text),
            ..self.criteria.clone()
        };
        self.min_input = min_text;
        self.max_input = max_text;
        self.set_criteria(criteria);
    }

    /// Restore every filter to its default and recompute.
    pub fn reset_filters(&mut self) {
        self.min_input.clear();
        self.max_input.clear();
        self.set_criteria(FilterCriteria::default());
    }

    /// Regroup the chart. Like any other control change this reruns the
    /// pipeline, so the leaderboard returns to page 1.
    pub fn set_chart_mode(&mut self, mode: ChartMode) {
        self.chart_mode = mode;
        self.refilter();
    }

    pub fn next_page(&mut self) {
        self.pagination = self.pagination.next();
    }

    pub fn prev_page(&mut self) {
        self.pagination = self.pagination.prev();
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[RankedRecord] {
        self.pagination.slice(&self.ranked)
    }
}
