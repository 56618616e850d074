// Standalone punctuation tokens

use std::sync::Arc;

use trmorph_core::letter::is_punctuation;
use trmorph_core::phonetics::PhoneticAttributes;
use trmorph_core::{Lexeme, PrimaryPos, Root, Sequence};

use super::RootFinder;

/// A token made only of punctuation characters: ".", "...", "?!".
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationRootFinder;

impl RootFinder for PunctuationRootFinder {
    fn handles(&self, partial: &Sequence, _whole: &Sequence) -> bool {
        !partial.is_empty() && partial.chars().iter().all(|c| is_punctuation(c.value()))
    }

    fn find_roots(&self, partial: &Sequence, whole: &Sequence) -> Vec<Arc<Root>> {
        if partial.len() != whole.len() {
            return Vec::new();
        }
        let lexeme = Lexeme::new(partial.as_str(), PrimaryPos::Punctuation, None);
        vec![Arc::new(Root::dynamic(partial.clone(), lexeme, PhoneticAttributes::EMPTY))]
    }
}
