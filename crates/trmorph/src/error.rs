// Error types for graph construction and parsing

/// Errors raised while building a suffix graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("state {0} is already defined")]
    DuplicateState(String),

    #[error("suffix {0} is already defined")]
    DuplicateSuffix(String),

    #[error("unknown state {0}")]
    UnknownState(String),

    #[error("unknown suffix {0}")]
    UnknownSuffix(String),

    #[error("state {state} has no outgoing edge for suffix {suffix}")]
    MissingEdge { state: String, suffix: String },

    #[error("invalid suffix form template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: &'static str },

    #[error("suffix {0} has no forms")]
    SuffixWithoutForms(String),

    #[error("derivational suffix {suffix} has a form that may consume nothing: {template:?}")]
    NonConsumingDerivation { suffix: String, template: String },

    #[error("terminal state {0} has outgoing edges")]
    TerminalWithEdges(String),
}

/// Errors raised while parsing a word.
///
/// An empty analysis list is not an error; these signal a broken invariant
/// in the configured graph or root finders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no default state for root {root} ({pos})")]
    NoDefaultState { root: String, pos: String },

    #[error("invalid root {root:?} for input prefix {partial:?}: {reason}")]
    InvalidRoot { root: String, partial: String, reason: &'static str },

    #[error("traversal of {input:?} stopped with {pending} unfinished candidates")]
    UnfinishedTraversal { input: String, pending: usize },
}

/// Errors raised while assembling a parser.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("inconsistent suffix graph: {0}")]
    Graph(#[from] GraphError),

    #[error("invalid root finder pattern: {0}")]
    Pattern(#[from] regex::Error),
}
