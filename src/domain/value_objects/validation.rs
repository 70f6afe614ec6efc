//! Validation failures surfaced to the user as blocking notices

use thiserror::Error;

/// A user input that blocks the wizard from advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("provide a name to proceed")]
    EmptyArtefactName,

    #[error("specify a type of artefact to license before proceeding")]
    NoSpecification,
}
