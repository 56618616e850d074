//! Building blocks shared by the Turkish morphological parser: the alphabet,
//! character sequences, phonetic attributes, parts of speech, lexemes and
//! the root map.

pub mod case;
pub mod error;
pub mod letter;
pub mod lexicon;
pub mod numeral;
pub mod phonetics;
pub mod pos;
pub mod sequence;

pub use error::LexiconError;
pub use lexicon::{Lexeme, LexemeAttribute, Root, RootGenerator, RootKind, RootMap};
pub use phonetics::{PhoneticAttribute, PhoneticAttributes, PhoneticExpectation};
pub use pos::{PrimaryPos, SecondaryPos};
pub use sequence::Sequence;
