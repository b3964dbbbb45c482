//! Core of the CGPA leaderboard viewer: loading, filtering, ranking,
//! pagination and chart aggregation, independent of any UI runtime.

pub mod config;
pub mod data;
pub mod state;
