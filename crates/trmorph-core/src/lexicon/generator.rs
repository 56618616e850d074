// Root generation from lexemes

use super::{Lexeme, LexemeAttribute, Root, RootKind};
use crate::letter::{voiced_stop, without_circumflex};
use crate::phonetics::{PhoneticExpectation, calculate_with_lexeme_attributes};
use crate::pos::{PrimaryPos, SecondaryPos};
use crate::sequence::Sequence;

/// Pronouns whose oblique cases use a different stem.
const PRONOUN_STEMS: &[(&str, &str)] =
    &[("ben", "ban"), ("sen", "san"), ("o", "on"), ("bu", "bun"), ("şu", "şun")];

/// Surface variants of the question particle.
const QUESTION_PARTICLE_VARIANTS: &[&str] = &["mi", "mı", "mu", "mü"];

/// Turns a lexeme into the roots its suffixes can attach to.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootGenerator;

impl RootGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, lexeme: &Lexeme) -> Vec<Root> {
        if lexeme.lemma_root.is_empty() {
            return Vec::new();
        }
        let base = Sequence::new(&lexeme.lemma_root);

        let mut variants: Vec<(Sequence, Option<PhoneticExpectation>)> = Vec::new();
        if lexeme.primary_pos == PrimaryPos::Question && lexeme.lemma_root == "mi" {
            variants.extend(QUESTION_PARTICLE_VARIANTS.iter().map(|v| (Sequence::new(v), None)));
        } else if let Some(modified) = self.modified_root(lexeme, &base) {
            variants.push((base.clone(), Some(PhoneticExpectation::ConsonantStart)));
            variants.push((modified, Some(PhoneticExpectation::VowelStart)));
        } else {
            variants.push((base.clone(), None));
        }

        if lexeme.primary_pos == PrimaryPos::Pronoun {
            if let Some((_, stem)) = PRONOUN_STEMS.iter().find(|(l, _)| *l == lexeme.lemma_root) {
                variants.push((Sequence::new(stem), None));
            }
        }

        if base.as_str().chars().any(|c| without_circumflex(c) != c) {
            let plain: String = base.as_str().chars().map(without_circumflex).collect();
            let extra: Vec<_> = variants
                .iter()
                .filter(|(s, _)| s.as_str() == base.as_str())
                .map(|(_, e)| (Sequence::new(&plain), *e))
                .collect();
            variants.extend(extra);
        }

        variants
            .into_iter()
            .map(|(sequence, expectation)| {
                let attrs = calculate_with_lexeme_attributes(&sequence, &lexeme.attributes);
                Root::new(sequence, lexeme.clone(), attrs, expectation, RootKind::Dictionary)
            })
            .collect()
    }

    /// The stem used before vowel-initial suffixes, if it differs from the
    /// lemma root.
    fn modified_root(&self, lexeme: &Lexeme, base: &Sequence) -> Option<Sequence> {
        if voicing_applies(lexeme, base) {
            let last = base.last_char()?.value();
            let before = base.len().checked_sub(2).and_then(|i| base.char_at(i)).map(|c| c.value());
            return voiced_stop(last, before).map(|c| base.with_last_char(c));
        }
        if lexeme.has_attribute(LexemeAttribute::Doubling) {
            let last = base.last_char()?;
            if last.is_consonant() {
                let mut doubled = base.as_str().to_string();
                doubled.push(last.value());
                return Some(Sequence::new(&doubled));
            }
        }
        if lexeme.has_attribute(LexemeAttribute::LastVowelDrop) && base.len() >= 3 {
            let vowel_index = base.len() - 2;
            if base.char_at(vowel_index).is_some_and(|c| c.is_vowel()) {
                let mut dropped = base.prefix(vowel_index).as_str().to_string();
                dropped.push_str(base.subsequence(vowel_index + 1, base.len()).as_str());
                return Some(Sequence::new(&dropped));
            }
        }
        None
    }
}

/// Polysyllabic nouns and adjectives ending in a voiceless stop voice
/// unless marked otherwise; anything explicitly marked voices too.
fn voicing_applies(lexeme: &Lexeme, base: &Sequence) -> bool {
    if lexeme.has_attribute(LexemeAttribute::NoVoicing) {
        return false;
    }
    let ends_in_stop = base.last_char().and_then(|c| c.letter()).is_some_and(|l| l.is_stop());
    if lexeme.has_attribute(LexemeAttribute::Voicing) {
        return ends_in_stop;
    }
    matches!(lexeme.primary_pos, PrimaryPos::Noun | PrimaryPos::Adjective)
        && !matches!(
            lexeme.secondary_pos,
            Some(SecondaryPos::ProperNoun | SecondaryPos::Abbreviation)
        )
        && ends_in_stop
        && base.vowel_count() >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(lexeme: &Lexeme) -> Vec<(String, Option<PhoneticExpectation>)> {
        RootGenerator::new()
            .generate(lexeme)
            .iter()
            .map(|r| (r.sequence().as_str().to_string(), r.expectation()))
            .collect()
    }

    #[test]
    fn voicing_produces_two_roots_with_expectations() {
        let roots = surfaces(&Lexeme::new("kitap", PrimaryPos::Noun, None));
        assert_eq!(
            roots,
            vec![
                ("kitap".to_string(), Some(PhoneticExpectation::ConsonantStart)),
                ("kitab".to_string(), Some(PhoneticExpectation::VowelStart)),
            ]
        );
    }

    #[test]
    fn voicing_after_n_gives_g() {
        let roots = surfaces(&Lexeme::new("renk", PrimaryPos::Noun, None).with_attribute(LexemeAttribute::Voicing));
        assert_eq!(roots[1].0, "reng");
    }

    #[test]
    fn monosyllables_and_no_voicing_keep_a_single_root() {
        assert_eq!(surfaces(&Lexeme::new("top", PrimaryPos::Noun, None)).len(), 1);
        let saat = Lexeme::new("saat", PrimaryPos::Noun, None)
            .with_attribute(LexemeAttribute::NoVoicing)
            .with_attribute(LexemeAttribute::InverseHarmony);
        assert_eq!(surfaces(&saat), vec![("saat".to_string(), None)]);
    }

    #[test]
    fn doubling_and_last_vowel_drop() {
        let hak = Lexeme::new("hak", PrimaryPos::Noun, None).with_attribute(LexemeAttribute::Doubling);
        assert_eq!(surfaces(&hak)[1].0, "hakk");
        let burun =
            Lexeme::new("burun", PrimaryPos::Noun, None).with_attribute(LexemeAttribute::LastVowelDrop);
        assert_eq!(surfaces(&burun)[1].0, "burn");
    }

    #[test]
    fn verbs_use_the_lemma_root() {
        let roots = surfaces(&Lexeme::new("gelmek", PrimaryPos::Verb, None));
        assert_eq!(roots, vec![("gel".to_string(), None)]);
    }

    #[test]
    fn pronoun_stems() {
        let ben = Lexeme::new("ben", PrimaryPos::Pronoun, Some(SecondaryPos::Personal));
        let roots: Vec<_> = surfaces(&ben).into_iter().map(|(s, _)| s).collect();
        assert_eq!(roots, vec!["ben", "ban"]);
    }

    #[test]
    fn question_particle_variants() {
        let mi = Lexeme::new("mi", PrimaryPos::Question, None);
        assert_eq!(surfaces(&mi).len(), 4);
    }

    #[test]
    fn circumflex_gets_a_plain_variant() {
        let roots = surfaces(&Lexeme::new("kâr", PrimaryPos::Noun, None));
        let names: Vec<_> = roots.into_iter().map(|(s, _)| s).collect();
        assert_eq!(names, vec!["kâr", "kar"]);
    }
}
