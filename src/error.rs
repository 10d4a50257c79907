use std::io;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("{}", crate::multiply::NOT_AN_INTEGER)]
    NotAnInteger {
        arg: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LessonError>;
