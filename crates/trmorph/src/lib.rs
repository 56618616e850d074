//! Contextless morphological parser for Turkish.
//!
//! Roots found for every prefix of a token are extended over a suffix
//! graph until each candidate either ends in a terminal state having
//! consumed the whole token or runs out of applicable suffixes.
//!
//! ```no_run
//! use std::sync::Arc;
//! use trmorph::{MorphologicParser, full_parser};
//! use trmorph_core::{RootMap, lexicon::load_lexicon};
//!
//! let lexemes = load_lexicon("kitap [P:Noun; A:Voicing]\n").unwrap();
//! let parser = full_parser(Arc::new(RootMap::from_lexemes(&lexemes))).unwrap();
//! for analysis in parser.parse("kitabı").unwrap() {
//!     println!("{analysis}");
//! }
//! ```

pub mod error;
pub mod morpheme;
pub mod morphotactics;
pub mod parser;
pub mod phonetics;
pub mod rootfinder;

pub use error::{BuildError, GraphError, ParseError};
pub use morpheme::{MorphemeContainer, Transition};
pub use morphotactics::{GraphExtension, SuffixGraph};
pub use parser::{
    ContextlessMorphologicParser, MorphologicParser, MorphologicParserBuilder, NoopObserver, ParseObserver,
    Rejection, full_parser, simple_parser,
};
pub use rootfinder::{FinderPolicy, RootFinder, RootFinderChain};
