// Suffix form realization against phonetic attributes

mod cache;

pub use cache::PrecachingSuffixFormApplier;

use trmorph_core::letter::{letter_of, voiced_stop};
use trmorph_core::phonetics::{adjust_for_lexeme, append_letter, calculate_phonetic_attributes};
use trmorph_core::{LexemeAttribute, PhoneticAttribute, PhoneticAttributes, Sequence};

use crate::morphotactics::{FormLetter, SuffixFormTemplate};

use PhoneticAttribute::*;

/// Turns a suffix form template into a concrete surface for a predecessor
/// with the given phonetic attributes.
pub trait SuffixFormApplier: Send + Sync {
    /// Returns `None` when the template cannot be realized (for example a
    /// harmonizing vowel after a surface with no vowel information).
    fn apply(&self, template: &SuffixFormTemplate, attributes: PhoneticAttributes) -> Option<String>;
}

/// Computes every realization on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainSuffixFormApplier;

impl SuffixFormApplier for PlainSuffixFormApplier {
    fn apply(&self, template: &SuffixFormTemplate, attributes: PhoneticAttributes) -> Option<String> {
        realize(template, attributes)
    }
}

/// Attributes that influence realization. Everything else is irrelevant to
/// the result and can be masked off.
pub(crate) const RELEVANT_ATTRIBUTES: [PhoneticAttribute; 7] = [
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
];

pub(crate) fn relevant(attributes: PhoneticAttributes) -> PhoneticAttributes {
    attributes.intersection(RELEVANT_ATTRIBUTES.into_iter().collect())
}

/// Realize `template` after a surface with `attributes`.
///
/// Each emitted letter updates the running attributes, so later
/// archiphonemes harmonize with earlier letters of the same suffix.
pub fn realize(template: &SuffixFormTemplate, attributes: PhoneticAttributes) -> Option<String> {
    let mut attrs = attributes;
    let mut out = String::new();
    for token in template.tokens() {
        if token.optional {
            let keep = if token.letter.is_vowel() {
                attrs.contains(LastLetterConsonant)
            } else {
                attrs.contains(LastLetterVowel)
            };
            if !keep {
                continue;
            }
        }
        let c = match token.letter {
            FormLetter::Literal(c) => c,
            FormLetter::HarmonyA => {
                if attrs.contains(LastVowelFrontal) {
                    'e'
                } else if attrs.contains(LastVowelBack) {
                    'a'
                } else {
                    return None;
                }
            }
            FormLetter::HarmonyI => {
                let rounded = attrs.contains(LastVowelRounded);
                if attrs.contains(LastVowelFrontal) {
                    if rounded { 'ü' } else { 'i' }
                } else if attrs.contains(LastVowelBack) {
                    if rounded { 'u' } else { 'ı' }
                } else {
                    return None;
                }
            }
            FormLetter::DevoicedD => {
                if attrs.contains(LastLetterVoiceless) { 't' } else { 'd' }
            }
            FormLetter::DevoicedC => {
                if attrs.contains(LastLetterVoiceless) { 'ç' } else { 'c' }
            }
        };
        out.push(c);
        attrs = append_letter(attrs, c);
    }
    Some(out)
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Applies suffix forms to surfaces through a pluggable form applier.
pub struct PhoneticsEngine {
    applier: Box<dyn SuffixFormApplier>,
}

impl Default for PhoneticsEngine {
    fn default() -> Self {
        Self::new(Box::new(PlainSuffixFormApplier))
    }
}

impl PhoneticsEngine {
    pub fn new(applier: Box<dyn SuffixFormApplier>) -> Self {
        Self { applier }
    }

    /// Realize a template after a predecessor with `attributes`.
    pub fn realize(&self, template: &SuffixFormTemplate, attributes: PhoneticAttributes) -> Option<String> {
        self.applier.apply(template, attributes)
    }

    /// Apply `template` to `surface` as a word-forming step.
    ///
    /// Returns the possibly adjusted surface and the realized suffix: a
    /// final voiceless stop voices before a vowel-initial suffix unless the
    /// lexeme is marked `NoVoicing` (`kitap` + `+I` gives `kitab`, `ı`).
    pub fn apply(
        &self,
        surface: &Sequence,
        template: &SuffixFormTemplate,
        lexeme_attributes: &[LexemeAttribute],
    ) -> Option<(String, String)> {
        let attrs = adjust_for_lexeme(calculate_phonetic_attributes(surface, None), lexeme_attributes);
        let suffix = self.realize(template, attrs)?;

        let starts_with_vowel = suffix.chars().next().and_then(letter_of).is_some_and(|l| l.vowel);
        let mut adjusted = surface.as_str().to_string();
        if starts_with_vowel && attrs.contains(LastLetterVoicelessStop) {
            let before = surface.len().checked_sub(2).and_then(|i| surface.char_at(i)).map(|c| c.value());
            if let Some(voiced) = surface.last_char().and_then(|c| voiced_stop(c.value(), before)) {
                adjusted = surface.with_last_char(voiced).as_str().to_string();
            }
        }
        Some((adjusted, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(s: &str) -> PhoneticAttributes {
        calculate_phonetic_attributes(&Sequence::new(s), None)
    }

    fn t(template: &str) -> SuffixFormTemplate {
        SuffixFormTemplate::parse(template).unwrap()
    }

    fn realized(template: &str, after: &str) -> Option<String> {
        realize(&t(template), attrs(after))
    }

    #[test]
    fn vowel_harmony() {
        assert_eq!(realized("lAr", "kitap").as_deref(), Some("lar"));
        assert_eq!(realized("lAr", "ev").as_deref(), Some("ler"));
        assert_eq!(realized("+nIn", "kuzu").as_deref(), Some("nun"));
        assert_eq!(realized("+nIn", "göz").as_deref(), Some("ün"));
        assert_eq!(realized("lArI", "ev").as_deref(), Some("leri"));
    }

    #[test]
    fn optional_letters_follow_the_last_letter() {
        assert_eq!(realized("+yI", "araba").as_deref(), Some("yı"));
        assert_eq!(realized("+yI", "kitab").as_deref(), Some("ı"));
        assert_eq!(realized("+sI", "kapı").as_deref(), Some("sı"));
        assert_eq!(realized("+Iyor", "gel").as_deref(), Some("iyor"));
        assert_eq!(realized("+Iyor", "oku").as_deref(), Some("yor"));
    }

    #[test]
    fn devoicing() {
        assert_eq!(realized("DA", "kitap").as_deref(), Some("ta"));
        assert_eq!(realized("DA", "ev").as_deref(), Some("de"));
        assert_eq!(realized("CI", "kitap").as_deref(), Some("çı"));
        assert_eq!(realized("CI", "süt").as_deref(), Some("çü"));
        assert_eq!(realized("CI", "göz").as_deref(), Some("cü"));
    }

    #[test]
    fn harmony_needs_vowel_information() {
        assert_eq!(realize(&t("lAr"), PhoneticAttributes::EMPTY), None);
        assert_eq!(realize(&t("'"), PhoneticAttributes::EMPTY).as_deref(), Some("'"));
        assert_eq!(realize(&t(""), PhoneticAttributes::EMPTY).as_deref(), Some(""));
    }

    #[test]
    fn engine_voices_the_root_tail() {
        let engine = PhoneticsEngine::default();
        let (root, suffix) = engine.apply(&Sequence::new("kitap"), &t("+yI"), &[]).unwrap();
        assert_eq!((root.as_str(), suffix.as_str()), ("kitab", "ı"));

        let (root, suffix) = engine.apply(&Sequence::new("renk"), &t("+I"), &[]).unwrap();
        assert_eq!((root.as_str(), suffix.as_str()), ("reng", "i"));

        let (root, _) = engine.apply(&Sequence::new("kitap"), &t("lAr"), &[]).unwrap();
        assert_eq!(root, "kitap");
    }

    #[test]
    fn engine_honors_lexeme_markers() {
        let engine = PhoneticsEngine::default();
        let (root, suffix) = engine
            .apply(&Sequence::new("üç"), &t("+IncI"), &[LexemeAttribute::NoVoicing])
            .unwrap();
        assert_eq!(format!("{root}{suffix}"), "üçüncü");

        let (root, suffix) = engine.apply(&Sequence::new("dört"), &t("+IncI"), &[]).unwrap();
        assert_eq!(format!("{root}{suffix}"), "dördüncü");

        let (_, suffix) = engine
            .apply(&Sequence::new("saat"), &t("lAr"), &[LexemeAttribute::InverseHarmony])
            .unwrap();
        assert_eq!(suffix, "ler");
    }
}
