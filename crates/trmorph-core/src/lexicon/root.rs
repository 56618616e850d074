// Roots and the surface-keyed root map

use std::sync::Arc;

use hashbrown::HashMap;

use super::{Lexeme, RootGenerator};
use crate::phonetics::{PhoneticAttributes, PhoneticExpectation};
use crate::sequence::Sequence;

/// How a root came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    /// Generated from a dictionary lexeme.
    Dictionary,
    /// Synthesized from a digit string.
    Numeral,
    /// Synthesized during root finding (proper nouns, compounds, punctuation).
    Dynamic,
}

/// A concrete surface form a lexeme's suffixes attach to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    sequence: Sequence,
    lexeme: Lexeme,
    phonetic_attributes: PhoneticAttributes,
    expectation: Option<PhoneticExpectation>,
    kind: RootKind,
}

impl Root {
    pub fn new(
        sequence: Sequence,
        lexeme: Lexeme,
        phonetic_attributes: PhoneticAttributes,
        expectation: Option<PhoneticExpectation>,
        kind: RootKind,
    ) -> Self {
        Self { sequence, lexeme, phonetic_attributes, expectation, kind }
    }

    pub fn numeral(sequence: Sequence, lexeme: Lexeme, phonetic_attributes: PhoneticAttributes) -> Self {
        Self::new(sequence, lexeme, phonetic_attributes, None, RootKind::Numeral)
    }

    pub fn dynamic(sequence: Sequence, lexeme: Lexeme, phonetic_attributes: PhoneticAttributes) -> Self {
        Self::new(sequence, lexeme, phonetic_attributes, None, RootKind::Dynamic)
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn lexeme(&self) -> &Lexeme {
        &self.lexeme
    }

    pub fn phonetic_attributes(&self) -> PhoneticAttributes {
        self.phonetic_attributes
    }

    pub fn expectation(&self) -> Option<PhoneticExpectation> {
        self.expectation
    }

    pub fn kind(&self) -> RootKind {
        self.kind
    }

    /// Copy of this root with a replaced lexeme and kind.
    pub fn with_lexeme(&self, lexeme: Lexeme, kind: RootKind) -> Self {
        Self { lexeme, kind, ..self.clone() }
    }
}

// ---------------------------------------------------------------------------
// Root map
// ---------------------------------------------------------------------------

/// Roots keyed by their surface string. Roots sharing a surface keep their
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct RootMap {
    roots: HashMap<String, Vec<Arc<Root>>>,
    len: usize,
}

impl RootMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the roots of every lexeme and index them by surface.
    pub fn from_lexemes<'a>(lexemes: impl IntoIterator<Item = &'a Lexeme>) -> Self {
        let generator = RootGenerator::new();
        let mut map = Self::new();
        for lexeme in lexemes {
            for root in generator.generate(lexeme) {
                map.insert(root);
            }
        }
        map
    }

    pub fn insert(&mut self, root: Root) {
        let entry = self.roots.entry(root.sequence().as_str().to_string()).or_default();
        if !entry.iter().any(|r| **r == root) {
            entry.push(Arc::new(root));
            self.len += 1;
        }
    }

    pub fn get(&self, surface: &str) -> &[Arc<Root>] {
        self.roots.get(surface).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, surface: &str) -> bool {
        self.roots.contains_key(surface)
    }

    /// Number of roots (not surfaces).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Root>> {
        self.roots.values().flatten()
    }
}
