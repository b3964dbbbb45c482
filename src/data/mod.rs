/// Data layer: records, loading, and the leaderboard pipeline.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, normalise cells → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  criteria → sorted, ranked Vec<RankedRecord>
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌───────────┐
///   │ paginate  │   │ aggregate  │  chart series by CGPA/course/...
///   └──────────┘   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod paginate;
