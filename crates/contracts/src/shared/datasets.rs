use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Datasets that can be fetched from the fixture source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    Dashboard,
    Pages,
    FormReference,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Dashboard,
        DatasetKind::Pages,
        DatasetKind::FormReference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Dashboard => "dashboard",
            DatasetKind::Pages => "pages",
            DatasetKind::FormReference => "form-reference",
        }
    }

    /// Name of the JSON fixture file backing this dataset
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = String;

    /// Accepts both the bare kind ("pages") and the file name ("pages.json")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix(".json").unwrap_or(s);
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| format!("unknown dataset: {}", s))
    }
}
