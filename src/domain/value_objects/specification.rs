//! Specification value object - what kind of artefact is being licensed

use serde::{Deserialize, Serialize};

/// Kind of artefact covered by the license.
///
/// The declaration order is the canonical RAIL naming order (D, A, M, S),
/// used when building license labels such as `OpenRAIL-AMS`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Specification {
    /// Datasets
    Data,
    /// Applications and services
    Application,
    /// Model weights
    Model,
    /// Source code
    #[serde(rename = "sourcecode")]
    #[value(name = "sourcecode", alias = "source-code")]
    SourceCode,
}

impl Specification {
    pub const ALL: [Specification; 4] = [
        Specification::Data,
        Specification::Application,
        Specification::Model,
        Specification::SourceCode,
    ];

    /// Single-letter suffix used in license labels
    pub fn code(&self) -> char {
        match self {
            Specification::Data => 'D',
            Specification::Application => 'A',
            Specification::Model => 'M',
            Specification::SourceCode => 'S',
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Specification::Data => "Data",
            Specification::Application => "Application",
            Specification::Model => "Model",
            Specification::SourceCode => "Source Code",
        }
    }
}

impl std::fmt::Display for Specification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Concatenates specification codes in canonical order (`"AM"` for
/// application + model), independent of the order they were given in.
pub fn artifact_code(specs: &[Specification]) -> String {
    let mut sorted = specs.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted.iter().map(Specification::code).collect()
}
