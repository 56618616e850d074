// Text lexicon reader for small hand-written word lists
//
// Used for test fixtures, benchmarks and examples. Real dictionaries are
// turned into `Lexeme` values by the caller.
//
// One entry per line: `lemma [P:Primary, Secondary; A:Attr, Attr; R:root]`.
// The bracket part is optional. Without `P:` a lemma ending in -mak/-mek is
// a verb and anything else a noun. Blank lines and `#` comments are skipped.

use super::{Lexeme, LexemeAttribute};
use crate::error::LexiconError;
use crate::pos::{PrimaryPos, SecondaryPos};

/// Parse a single lexicon line. Returns `Ok(None)` for blanks and comments.
pub fn parse_lexicon_line(line: &str, line_number: usize) -> Result<Option<Lexeme>, LexiconError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (lemma, meta) = match line.find('[') {
        Some(open) => {
            let close = line.rfind(']').ok_or(LexiconError::Malformed {
                line: line_number,
                reason: "missing closing bracket",
            })?;
            if close < open {
                return Err(LexiconError::Malformed { line: line_number, reason: "bracket order" });
            }
            (line[..open].trim(), Some(&line[open + 1..close]))
        }
        None => (line, None),
    };
    if lemma.is_empty() {
        return Err(LexiconError::EmptyLemma);
    }

    let mut primary = None;
    let mut secondary = None;
    let mut attributes = Vec::new();
    let mut root = None;
    for part in meta.into_iter().flat_map(|m| m.split(';')) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (key, value) = part.split_once(':').ok_or(LexiconError::Malformed {
            line: line_number,
            reason: "metadata without key",
        })?;
        let mut values = value.split(',').map(str::trim).filter(|v| !v.is_empty());
        match key.trim() {
            "P" => {
                primary = values.next().map(str::parse::<PrimaryPos>).transpose()?;
                secondary = values.next().map(str::parse::<SecondaryPos>).transpose()?;
            }
            "A" => {
                for v in values {
                    attributes.push(v.parse::<LexemeAttribute>()?);
                }
            }
            "R" => root = values.next().map(str::to_string),
            _ => {
                return Err(LexiconError::Malformed { line: line_number, reason: "unknown metadata key" });
            }
        }
    }

    let primary = primary.unwrap_or_else(|| {
        if lemma.ends_with("mak") || lemma.ends_with("mek") {
            PrimaryPos::Verb
        } else {
            PrimaryPos::Noun
        }
    });
    let mut lexeme = match root {
        Some(root) => Lexeme::with_root(lemma, &root, primary, secondary),
        None => Lexeme::new(lemma, primary, secondary),
    };
    lexeme.attributes.extend(attributes);
    Ok(Some(lexeme))
}

/// Parse a whole lexicon text.
pub fn load_lexicon(text: &str) -> Result<Vec<Lexeme>, LexiconError> {
    let mut lexemes = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(lexeme) = parse_lexicon_line(line, i + 1)? {
            lexemes.push(lexeme);
        }
    }
    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lemmas_default_to_noun_or_verb() {
        let lexemes = load_lexicon("kitap\n# comment\n\ngelmek\n").unwrap();
        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[0].primary_pos, PrimaryPos::Noun);
        assert_eq!(lexemes[1].primary_pos, PrimaryPos::Verb);
        assert_eq!(lexemes[1].lemma_root, "gel");
    }

    #[test]
    fn metadata_is_parsed() {
        let l = parse_lexicon_line("saat [A:NoVoicing, InverseHarmony]", 1).unwrap().unwrap();
        assert!(l.has_attribute(LexemeAttribute::InverseHarmony));
        assert!(l.has_attribute(LexemeAttribute::NoVoicing));

        let l = parse_lexicon_line("ben [P:Pron, Pers]", 1).unwrap().unwrap();
        assert_eq!(l.primary_pos, PrimaryPos::Pronoun);
        assert_eq!(l.secondary_pos, Some(SecondaryPos::Personal));

        let l = parse_lexicon_line("zeytinyağı [A:CompoundP3sg; R:zeytinyağ]", 1).unwrap().unwrap();
        assert_eq!(l.lemma_root, "zeytinyağ");
    }

    #[test]
    fn errors_are_reported() {
        assert!(matches!(
            parse_lexicon_line("x [P:Thing]", 3),
            Err(LexiconError::UnknownPrimaryPos(_))
        ));
        assert!(matches!(
            parse_lexicon_line("x [A:Voicing", 4),
            Err(LexiconError::Malformed { line: 4, .. })
        ));
        assert!(matches!(parse_lexicon_line("x [Q:1]", 5), Err(LexiconError::Malformed { .. })));
    }
}
