//! REPL input errors.

/// Errors that can occur while reading and parsing session input.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    /// The input is not a known command and not of the form `e2-e4`.
    #[error("expected a move like e2-e4, got \"{input}\"")]
    MalformedMove {
        /// The rejected input line.
        input: String,
    },

    /// A coordinate text did not name a square.
    #[error("invalid square: \"{text}\"")]
    InvalidSquare {
        /// The rejected coordinate text.
        text: String,
    },

    /// A command was given without its required argument.
    #[error("`{command}` needs an argument")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// A command was followed by a word it does not take.
    #[error("unexpected argument \"{value}\"")]
    UnexpectedArgument {
        /// The first word that was not expected.
        value: String,
    },

    /// A command argument was not one of the accepted values.
    #[error("invalid argument for `{command}`: \"{value}\"")]
    InvalidArgument {
        /// The command name.
        command: &'static str,
        /// The rejected argument.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
