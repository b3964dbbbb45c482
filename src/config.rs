use std::path::PathBuf;

/// Dataset opened at startup when no path is given.
pub const DEFAULT_DATASET_PATH: &str = "mit_cgpa.csv";

/// Startup settings for the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub dataset_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

impl ViewerConfig {
    /// The first argument after the program name overrides the dataset path.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        match args.into_iter().nth(1) {
            Some(path) => Self {
                dataset_path: path.into(),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_without_args() {
        let config = ViewerConfig::from_args(["cgpa-leaderboard"]);
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET_PATH));
    }

    #[test]
    fn test_first_arg_overrides_path() {
        let config = ViewerConfig::from_args(["cgpa-leaderboard", "data/students.json", "extra"]);
        assert_eq!(config.dataset_path, PathBuf::from("data/students.json"));
    }
}
