//! Error types for normal-form transformations.

use thiserror::Error;

use crate::{Formula, Kind, NormalForm};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot normalize a {kind} node: `{formula}`")]
    Unsupported { kind: Kind, formula: String },
    #[error("variable `{name}` is not in the variable map")]
    UnknownVariable { name: String },
    #[error("variable `{name}` is already in the variable map")]
    DuplicateVariable { name: String },
    #[error("variable index {index} out of range (max: {max})")]
    IndexOutOfRange { index: u32, max: u32 },
    #[error("formula is not in {form}: `{formula}`")]
    NotClausal { form: NormalForm, formula: String },
}

impl Error {
    pub(crate) fn unsupported(form: &Formula) -> Self {
        Error::Unsupported {
            kind: form.kind(),
            formula: form.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
