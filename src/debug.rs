//! Error types and debug facilities.
use itertools::Itertools;
use nom::error::{VerboseError, VerboseErrorKind};
use std::{fmt::Debug, io, path::PathBuf};

use crate::{
    certificate::Certificate,
    coloring::Coloring,
    graph::{vertex_id, Colour, GraphError},
};

// Error types and From<...> implementations

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input file {0:?} not found")]
    FileNotFound(PathBuf),
    #[error("Error while reading or writing a file")]
    IoError(io::Error),
    #[error("Error while parsing line {line} of the input file")]
    ParseError {
        line: usize,
        kinds: Vec<VerboseErrorKind>,
    },
    #[error("Invalid graph description: {0}")]
    GraphError(GraphError),
    #[error("Colours are drawn from [1, k], but k is {0}")]
    ColourBound(Colour),
    #[error("Unable to install the logger")]
    LoggingError(tracing::subscriber::SetGlobalDefaultError),
}

impl Error {
    /// Attach the line number to a parse error
    /// produced for a single line of input.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::ParseError { kinds, .. } => Self::ParseError { line, kinds },
            other => other,
        }
    }

    /// Wrap an io error from opening `path` so that
    /// missing files are reported as such.
    pub(crate) fn opening(path: impl Into<PathBuf>, ie: io::Error) -> Self {
        if ie.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound(path.into())
        } else {
            Self::IoError(ie)
        }
    }
}

impl From<GraphError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ge: GraphError) -> Self {
        Self::GraphError(ge)
    }
}

#[cfg(not(tarpaulin_include))]
fn handle_nom_verbose_error<E: Debug>(verbose: VerboseError<E>) -> Vec<VerboseErrorKind> {
    verbose
        .errors
        .into_iter()
        .map(|(msg, kind)| {
            tracing::debug!("parse error at {:?}: {:?}", msg, kind);
            kind
        })
        .collect()
}

impl<'a> From<nom::Err<VerboseError<&'a str>>> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(pe: nom::Err<VerboseError<&'a str>>) -> Self {
        match pe {
            nom::Err::Error(verbose) | nom::Err::Failure(verbose) => Self::ParseError {
                line: 0,
                kinds: handle_nom_verbose_error(verbose),
            },
            nom::Err::Incomplete(_) => unreachable!(),
        }
    }
}

impl From<io::Error> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ie: io::Error) -> Self {
        Self::IoError(ie)
    }
}

impl From<tracing::subscriber::SetGlobalDefaultError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(le: tracing::subscriber::SetGlobalDefaultError) -> Self {
        Self::LoggingError(le)
    }
}

// Pretty printing of results

/// Two column table with the vertex ids
/// and the colour assigned to each vertex.
pub fn coloring_pretty(coloring: &Coloring) -> String {
    let rows = coloring
        .iter()
        .map(|(index, colour)| format!("{} {}\n", vertex_id(index), colour))
        .join("");
    format!("Vértice Color\n{}", rows)
}

/// One colour per line, in vertex order.
pub fn certificate_pretty(certificate: &Certificate) -> String {
    certificate
        .colours()
        .iter()
        .map(|colour| format!("{}\n", colour))
        .join("")
}

pub fn verdict(answer: bool) -> &'static str {
    if answer {
        "SI"
    } else {
        "NO"
    }
}

// Debug macros that allow to time single expressions

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}

#[macro_export]
macro_rules! log_time {
    ($name:expr, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        tracing::debug!("{} took {:?}", $name, before.elapsed());
    };
}

/// Run a line parser and make sure that it consumed the whole line.
/// Expects `nom::combinator::eof` to be in scope.
#[macro_export]
macro_rules! parse_single_line {
    ($ret:ident, $exp:expr) => {
        let (res, $ret) = $exp?;
        eof::<$crate::parser::Input<'_>, $crate::parser::ParseError<'_>>(res)?;
    };
}
