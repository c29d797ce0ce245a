//! Error taxonomy shared by the parser, encoder and transport.

use thiserror::Error;

/// Fatal command processing errors.
///
/// All variants abort the run: the first error encountered (in token order)
/// is reported on stderr and the process exits with status 1. Frames of
/// earlier, fully processed tokens stay applied.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum Error {
    /// A parameter matched no table entry and was not a valid integer.
    #[error("invalid {axis} name: '{token}'")]
    InvalidName { axis: &'static str, token: String },

    /// A token without the `<char>:` shape, or with the wrong parameter
    /// count for its command.
    #[error("invalid argument: '{0}'")]
    MalformedCommand(String),

    /// A well-formed token whose command character is not `m`, `p` or `c`.
    #[error("unknown command: '{0}'")]
    UnknownCommand(char),

    /// HID open or feature report failure.
    #[error("{0}")]
    Transport(String),
}
