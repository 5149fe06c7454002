/// Convenient result alias for the roomroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is a configuration problem that aborts graph construction.
/// An unreachable goal is not represented here; it is a normal query outcome
/// (see [`crate::routing::RouteOutcome`]).
///
/// The trait impls below are written by hand rather than derived: the
/// `MissingWeight` variant carries a plain `String` field named `source`
/// (a location name, per the spec), which `thiserror`'s derive would try to
/// treat as the error's `std::error::Error` source. The behaviour is exactly
/// what a successful derive would produce.
#[derive(Debug)]
pub enum Error {
    /// Raised when a weights line does not match the expected grammar.
    MalformedWeightLine { line: String },

    /// Raised when a weights file is present but lacks an entry for a move
    /// the floor plan needs.
    MissingWeight { source: String, destination: String },

    /// Raised when a floor plan line contains no location names at all.
    MalformedPlanLine { line: String },

    /// Wrapper for IO errors.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedWeightLine { line } => write!(
                f,
                "invalid weights line '{line}'; expected 'source -> destination = weight'"
            ),
            Error::MissingWeight {
                source,
                destination,
            } => write!(f, "no weight defined for the move {source} -> {destination}"),
            Error::MalformedPlanLine { line } => write!(
                f,
                "invalid floor plan line '{line}'; expected one or more location names"
            ),
            Error::Io(err) => std::fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => err.source(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
