// Capitalized words not found in the dictionary

use std::sync::Arc;

use trmorph_core::case::{CaseType, detect_case};
use trmorph_core::phonetics::{calculate_abbreviation_attributes, calculate_phonetic_attributes};
use trmorph_core::{Lexeme, PrimaryPos, Root, SecondaryPos, Sequence};

fn starts_upper(partial: &Sequence) -> bool {
    partial.first_char().is_some_and(|c| c.is_upper())
}

fn proper_noun_root(partial: &Sequence) -> Arc<Root> {
    let (secondary, attributes) = match detect_case(partial.as_str()) {
        CaseType::AllUpper => (SecondaryPos::Abbreviation, calculate_abbreviation_attributes(partial)),
        _ => (SecondaryPos::ProperNoun, calculate_phonetic_attributes(partial, None)),
    };
    let lexeme = Lexeme::new(partial.as_str(), PrimaryPos::Noun, Some(secondary));
    Arc::new(Root::dynamic(partial.clone(), lexeme, attributes))
}

/// A capitalized prefix directly followed by an apostrophe: "Ankara'da",
/// "TBMM'ye".
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounFromApostropheRootFinder;

impl super::RootFinder for ProperNounFromApostropheRootFinder {
    fn handles(&self, partial: &Sequence, whole: &Sequence) -> bool {
        starts_upper(partial) && whole.char_at(partial.len()).is_some_and(|c| c.value() == '\'')
    }

    fn find_roots(&self, partial: &Sequence, _whole: &Sequence) -> Vec<Arc<Root>> {
        if partial.as_str().contains('\'') {
            return Vec::new();
        }
        vec![proper_noun_root(partial)]
    }
}

/// A whole capitalized word without an apostrophe: "Ankara".
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounWithoutApostropheRootFinder;

impl super::RootFinder for ProperNounWithoutApostropheRootFinder {
    fn handles(&self, partial: &Sequence, whole: &Sequence) -> bool {
        partial.len() == whole.len() && starts_upper(partial) && !whole.as_str().contains('\'')
    }

    fn find_roots(&self, partial: &Sequence, _whole: &Sequence) -> Vec<Arc<Root>> {
        vec![proper_noun_root(partial)]
    }
}

#[cfg(test)]
mod tests {
    use super::super::RootFinder;
    use super::*;
    use trmorph_core::PhoneticAttribute;

    fn found(finder: &dyn RootFinder, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        let (partial, whole) = (Sequence::new(partial), Sequence::new(whole));
        if finder.handles(&partial, &whole) { finder.find_roots(&partial, &whole) } else { Vec::new() }
    }

    #[test]
    fn apostrophe_marks_the_boundary() {
        let f = ProperNounFromApostropheRootFinder;
        let roots = found(&f, "Ankara", "Ankara'da");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].lexeme().secondary_pos, Some(SecondaryPos::ProperNoun));
        assert!(found(&f, "Ankar", "Ankara'da").is_empty());
        assert!(found(&f, "ankara", "ankara'da").is_empty());
    }

    #[test]
    fn all_caps_are_abbreviations() {
        let roots = found(&ProperNounFromApostropheRootFinder, "TBMM", "TBMM'ye");
        assert_eq!(roots[0].lexeme().secondary_pos, Some(SecondaryPos::Abbreviation));
        let attrs = roots[0].phonetic_attributes();
        assert!(attrs.contains(PhoneticAttribute::LastLetterVowel));
        assert!(attrs.contains(PhoneticAttribute::LastVowelFrontal));
    }

    #[test]
    fn without_apostrophe_takes_the_whole_word() {
        let f = ProperNounWithoutApostropheRootFinder;
        assert_eq!(found(&f, "Ankara", "Ankara").len(), 1);
        assert!(found(&f, "Ankar", "Ankara").is_empty());
        assert!(found(&f, "Ankara'", "Ankara'").is_empty());
        assert!(found(&f, "İstanbul", "İstanbul").iter().all(|r| r.lexeme().lemma == "İstanbul"));
    }
}
