// Core morphotactics: nouns, adjectives, adverbs, verbs, pronouns and the
// closed word classes

use trmorph_core::PhoneticAttribute::{LastLetterConsonant, LastLetterVowel};
use trmorph_core::PhoneticExpectation::{ConsonantStart, VowelStart};
use trmorph_core::{LexemeAttribute, PrimaryPos, SecondaryPos};

use super::names::*;
use super::{Condition, FormSpec, StateType, SuffixGraphBuilder};
use crate::error::GraphError;

const NOUN_AGREEMENTS: &str = "Noun_Agreements";
const NOUN_POSSESSIONS: &str = "Noun_Possessions";
const NOUN_CASE_GROUP: &str = "Noun_Cases";
const VERB_POLARITIES: &str = "Verb_Polarities";
const VERB_TENSES: &str = "Verb_Tenses";
const VERB_AGREEMENTS: &str = "Verb_Agreements";
const PRONOUN_AGREEMENTS: &str = "Pronoun_Agreements";
const PRONOUN_POSSESSIONS: &str = "Pronoun_Possessions";
const PRONOUN_CASES: &str = "Pronoun_Cases";
const QUESTION_TENSES: &str = "Question_Tenses";

pub(super) fn register(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    add_states(b)?;
    b.add_suffix_with_forms(APOSTROPHE, None, [FormSpec::new("'")])?;
    nouns(b)?;
    adjectives(b)?;
    verbs(b)?;
    pronouns(b)?;
    closed_classes(b)?;
    Ok(())
}

fn add_states(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    use PrimaryPos::*;
    use StateType::*;

    let states: &[(&str, StateType, PrimaryPos)] = &[
        (NOUN_ROOT, Transfer, Noun),
        (NOUN_WITH_AGREEMENT, Transfer, Noun),
        (NOUN_WITH_POSSESSION, Transfer, Noun),
        (NOUN_WITH_CASE, Transfer, Noun),
        (NOUN_TERMINAL, Terminal, Noun),
        (NOUN_DERIV, Derivational, Noun),
        (ADJECTIVE_ROOT, Transfer, Adjective),
        (ADJECTIVE_TERMINAL, Terminal, Adjective),
        (ADJECTIVE_DERIV, Derivational, Adjective),
        (ADVERB_ROOT, Transfer, Adverb),
        (ADVERB_TERMINAL, Terminal, Adverb),
        (VERB_ROOT, Transfer, Verb),
        (VERB_PLAIN_DERIV, Derivational, Verb),
        (VERB_WITH_POLARITY, Transfer, Verb),
        (VERB_POLARITY_DERIV, Derivational, Verb),
        (VERB_WITH_TENSE, Transfer, Verb),
        (VERB_TERMINAL, Terminal, Verb),
        (PRONOUN_ROOT, Transfer, Pronoun),
        (PRONOUN_WITH_AGREEMENT, Transfer, Pronoun),
        (PRONOUN_WITH_POSSESSION, Transfer, Pronoun),
        (PRONOUN_WITH_CASE, Transfer, Pronoun),
        (PRONOUN_TERMINAL, Terminal, Pronoun),
        (DETERMINER_ROOT, Transfer, Determiner),
        ("DETERMINER_TERMINAL", Terminal, Determiner),
        (CONJUNCTION_ROOT, Transfer, Conjunction),
        ("CONJUNCTION_TERMINAL", Terminal, Conjunction),
        (INTERJECTION_ROOT, Transfer, Interjection),
        ("INTERJECTION_TERMINAL", Terminal, Interjection),
        (QUESTION_ROOT, Transfer, Question),
        ("QUESTION_TERMINAL", Terminal, Question),
        (PUNCTUATION_ROOT, Transfer, Punctuation),
        (PUNCTUATION_TERMINAL, Terminal, Punctuation),
    ];
    for &(name, kind, category) in states {
        b.add_state(name, kind, category)?;
    }

    let defaults: &[(PrimaryPos, &str)] = &[
        (Noun, NOUN_ROOT),
        (Adjective, ADJECTIVE_ROOT),
        (Adverb, ADVERB_ROOT),
        (Verb, VERB_ROOT),
        (Pronoun, PRONOUN_ROOT),
        (Numeral, ADJECTIVE_ROOT),
        (Determiner, DETERMINER_ROOT),
        (Conjunction, CONJUNCTION_ROOT),
        (Interjection, INTERJECTION_ROOT),
        (Question, QUESTION_ROOT),
        (Punctuation, PUNCTUATION_ROOT),
    ];
    for &(pos, name) in defaults {
        let state = b.state_id(name)?;
        b.set_default_state(pos, None, state);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Nouns
// ---------------------------------------------------------------------------

fn nouns(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let root = b.state_id(NOUN_ROOT)?;
    let with_agreement = b.state_id(NOUN_WITH_AGREEMENT)?;
    let with_possession = b.state_id(NOUN_WITH_POSSESSION)?;
    let with_case = b.state_id(NOUN_WITH_CASE)?;
    let terminal = b.state_id(NOUN_TERMINAL)?;
    let deriv = b.state_id(NOUN_DERIV)?;

    let a3sg = b.add_suffix_with_forms(A3SG_NOUN, Some(NOUN_AGREEMENTS), [FormSpec::new("")])?;
    let a3pl = b.add_suffix_with_forms(A3PL_NOUN, Some(NOUN_AGREEMENTS), [FormSpec::new("lAr")])?;
    b.add_edge(root, a3sg, with_agreement);
    b.add_edge(root, a3pl, with_agreement);

    let g = Some(NOUN_POSSESSIONS);
    let pnon = b.add_suffix_with_forms(PNON_NOUN, g, [FormSpec::new("")])?;
    let p1sg = b.add_suffix_with_forms("P1sg_Noun", g, [FormSpec::new("+Im")])?;
    let p2sg = b.add_suffix_with_forms("P2sg_Noun", g, [FormSpec::new("+In")])?;
    let p3sg = b.add_suffix_with_forms(P3SG_NOUN, g, [FormSpec::new("+sI")])?;
    let p1pl = b.add_suffix_with_forms("P1pl_Noun", g, [FormSpec::new("+ImIz")])?;
    let p2pl = b.add_suffix_with_forms("P2pl_Noun", g, [FormSpec::new("+InIz")])?;
    let p3pl = b.add_suffix(P3PL_NOUN, g)?;
    b.add_forms(
        p3pl,
        [
            FormSpec::new("lArI").when(Condition::ComesAfter(a3pl).negate()),
            FormSpec::new("I").when(Condition::ComesAfter(a3pl)),
        ],
    )?;
    for p in [pnon, p1sg, p2sg, p3sg, p1pl, p2pl, p3pl] {
        b.add_edge(with_agreement, p, with_possession);
    }

    // Case endings take a pronominal n after third person possessives.
    let after_p3 = Condition::comes_after_any(&[p3sg, p3pl]);
    let plain = after_p3.clone().negate();
    let g = Some(NOUN_CASE_GROUP);
    let nom = b.add_suffix_with_forms(NOM_NOUN, g, [FormSpec::new("")])?;
    let cases = [
        nom,
        b.add_suffix_with_forms(
            ACC_NOUN,
            g,
            [FormSpec::new("+yI").when(plain.clone()), FormSpec::new("nI").when(after_p3.clone())],
        )?,
        b.add_suffix_with_forms(
            "Dat_Noun",
            g,
            [FormSpec::new("+yA").when(plain.clone()), FormSpec::new("nA").when(after_p3.clone())],
        )?,
        b.add_suffix_with_forms(
            "Loc_Noun",
            g,
            [FormSpec::new("DA").when(plain.clone()), FormSpec::new("ndA").when(after_p3.clone())],
        )?,
        b.add_suffix_with_forms(
            "Abl_Noun",
            g,
            [FormSpec::new("DAn").when(plain), FormSpec::new("ndAn").when(after_p3)],
        )?,
        b.add_suffix_with_forms("Gen_Noun", g, [FormSpec::new("+nIn")])?,
        b.add_suffix_with_forms("Ins_Noun", g, [FormSpec::new("+ylA")])?,
    ];
    for case in cases {
        b.add_edge(with_possession, case, with_case);
    }

    let not_after_apostrophe = Condition::LastConsumedCharIs('\'').negate();
    b.add_free_transition("Noun_Free_Transition_1", with_case, terminal, Some(not_after_apostrophe))?;
    b.add_free_transition(
        "Noun_Free_Transition_2",
        with_case,
        deriv,
        Some(Condition::ComesAfter(pnon).and(Condition::ComesAfter(nom))),
    )?;

    // Final k of -CIk and -lIk voices before vowels.
    let dim = b.add_suffix("Dim", None)?;
    let no_repeat = Condition::ComesAfter(dim).negate();
    b.add_forms(
        dim,
        [
            FormSpec::new("CIk").expecting(ConsonantStart).post_derivative(no_repeat.clone()),
            FormSpec::new("CIğ").expecting(VowelStart).post_derivative(no_repeat),
        ],
    )?;
    let ness = b.add_suffix("Ness", None)?;
    let no_repeat = Condition::ComesAfter(ness).negate();
    b.add_forms(
        ness,
        [
            FormSpec::new("lIk").expecting(ConsonantStart).post_derivative(no_repeat.clone()),
            FormSpec::new("lIğ").expecting(VowelStart).post_derivative(no_repeat),
        ],
    )?;
    let agt = b.add_suffix_with_forms("Agt", None, [FormSpec::new("CI")])?;
    let with = b.add_suffix_with_forms("With", None, [FormSpec::new("lI")])?;
    let without = b.add_suffix_with_forms("Without", None, [FormSpec::new("sIz")])?;
    let become_ = b.add_suffix_with_forms("Become", None, [FormSpec::new("lAş")])?;

    let adjective_root = b.state_id(ADJECTIVE_ROOT)?;
    let verb_root = b.state_id(VERB_ROOT)?;
    b.add_edge(deriv, dim, root);
    b.add_edge(deriv, ness, root);
    b.add_edge(deriv, agt, root);
    b.add_edge(deriv, with, adjective_root);
    b.add_edge(deriv, without, adjective_root);
    b.add_edge(deriv, become_, verb_root);

    // Lexicalized compounds ending in a third person possessive carry it
    // from the start, singular or plural.
    let compound = Condition::RootHasAttribute(LexemeAttribute::CompoundP3sg).and(Condition::Underived);
    b.add_mandatory_transition(root, compound.clone(), a3sg);
    b.add_mandatory_transition(root, compound.clone(), a3pl);
    b.add_mandatory_transition(with_agreement, compound, p3sg);
    Ok(())
}

// ---------------------------------------------------------------------------
// Adjectives and adverbs
// ---------------------------------------------------------------------------

fn adjectives(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let root = b.state_id(ADJECTIVE_ROOT)?;
    let terminal = b.state_id(ADJECTIVE_TERMINAL)?;
    let deriv = b.state_id(ADJECTIVE_DERIV)?;
    let noun_root = b.state_id(NOUN_ROOT)?;
    let adverb_root = b.state_id(ADVERB_ROOT)?;
    let verb_root = b.state_id(VERB_ROOT)?;

    b.add_free_transition("Adj_Free_Transition_1", root, terminal, None)?;
    b.add_free_transition("Adj_Free_Transition_2", root, deriv, None)?;
    b.add_free_transition("Adj_To_Noun_Zero_Transition", root, noun_root, None)?;

    let ly = b.add_suffix_with_forms("Ly", None, [FormSpec::new("CA")])?;
    b.add_edge(deriv, ly, adverb_root);
    let become_ = b.suffix_id("Become")?;
    b.add_edge(deriv, become_, verb_root);

    let adverb_terminal = b.state_id(ADVERB_TERMINAL)?;
    b.add_free_transition("Adv_Free_Transition", adverb_root, adverb_terminal, None)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

fn verbs(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let root = b.state_id(VERB_ROOT)?;
    let plain_deriv = b.state_id(VERB_PLAIN_DERIV)?;
    let with_polarity = b.state_id(VERB_WITH_POLARITY)?;
    let polarity_deriv = b.state_id(VERB_POLARITY_DERIV)?;
    let with_tense = b.state_id(VERB_WITH_TENSE)?;
    let terminal = b.state_id(VERB_TERMINAL)?;
    let noun_root = b.state_id(NOUN_ROOT)?;
    let adjective_root = b.state_id(ADJECTIVE_ROOT)?;

    let vowel_final = Condition::phonetic(LastLetterVowel);
    let consonant_final = Condition::phonetic(LastLetterConsonant);
    let root_has = |a| Condition::Underived.and(Condition::RootHasAttribute(a));

    b.add_free_transition("Verb_Free_Transition_1", root, plain_deriv, None)?;

    let caus_t = root_has(LexemeAttribute::CausativeT);
    let caus_ir = root_has(LexemeAttribute::CausativeIr);
    let caus_dir = root_has(LexemeAttribute::CausativeDIr);
    let marked = Condition::Any(vec![caus_t.clone(), caus_ir.clone(), caus_dir.clone()]);
    let caus = b.add_suffix_with_forms(
        "Caus",
        None,
        [
            FormSpec::new("t").when(caus_t.or(vowel_final.clone().and(marked.clone().negate()))),
            FormSpec::new("Ir").when(caus_ir),
            FormSpec::new("DIr").when(caus_dir.or(consonant_final.clone().and(marked.negate()))),
        ],
    )?;
    let l_final = Condition::LastLetterIs('l').or(root_has(LexemeAttribute::PassiveIn));
    let pass = b.add_suffix_with_forms(
        "Pass",
        None,
        [
            FormSpec::new("n").when(vowel_final.clone()),
            FormSpec::new("In").when(consonant_final.clone().and(l_final.clone())),
            FormSpec::new("Il").when(consonant_final.clone().and(l_final.negate())),
        ],
    )?;
    let able = b.add_suffix("Able", None)?;
    b.add_forms(able, [FormSpec::new("+yAbil").post_derivative(Condition::ComesAfter(able).negate())])?;
    for s in [caus, pass, able] {
        b.add_edge(plain_deriv, s, root);
    }

    let pos = b.add_suffix_with_forms("Pos", Some(VERB_POLARITIES), [FormSpec::new("")])?;
    let neg = b.add_suffix_with_forms("Neg", Some(VERB_POLARITIES), [FormSpec::new("mA"), FormSpec::new("m")])?;
    b.add_edge(root, pos, with_polarity);
    b.add_edge(root, neg, with_polarity);

    // The short negative `m` only appears before the progressive.
    let negative = Condition::ComesAfter(neg);
    let short_negative = Condition::ComesAfterForm(neg, "m".to_string());
    let full_negative = Condition::ComesAfterForm(neg, "mA".to_string());
    let not_short = short_negative.clone().negate();
    let root_aorist_a = root_has(LexemeAttribute::AoristA);

    let g = Some(VERB_TENSES);
    let aor = b.add_suffix_with_forms(
        "Aor",
        g,
        [
            FormSpec::new("r").when(vowel_final.clone().and(negative.clone().negate())),
            FormSpec::new("Ar").when(Condition::All(vec![
                consonant_final.clone(),
                negative.clone().negate(),
                root_aorist_a.clone(),
            ])),
            FormSpec::new("Ir").when(Condition::All(vec![
                consonant_final.clone(),
                negative.clone().negate(),
                root_aorist_a.negate(),
            ])),
            FormSpec::new("z").when(full_negative),
        ],
    )?;
    let prog = b.add_suffix_with_forms(
        "Prog",
        g,
        [FormSpec::new("+Iyor").when(Condition::All(vec![
            negative.negate().or(short_negative),
            Condition::LastLetterIs('a').negate(),
            Condition::LastLetterIs('e').negate(),
        ]))],
    )?;
    let past = b.add_suffix_with_forms("Past", g, [FormSpec::new("DI").when(not_short.clone())])?;
    let narr = b.add_suffix_with_forms("Narr", g, [FormSpec::new("mIş").when(not_short.clone())])?;
    let fut = b.add_suffix_with_forms(
        "Fut",
        g,
        [
            FormSpec::new("+yAcAk").when(not_short.clone()).expecting(ConsonantStart),
            FormSpec::new("+yAcAğ").when(not_short.clone()).expecting(VowelStart),
        ],
    )?;
    for t in [aor, prog, past, narr, fut] {
        b.add_edge(with_polarity, t, with_tense);
    }
    let imp = b.add_suffix_with_forms("Imp", g, [FormSpec::new("").when(not_short.clone())])?;
    b.add_edge(with_polarity, imp, terminal);

    let after_past = Condition::ComesAfter(past);
    let other = after_past.clone().negate();
    let g = Some(VERB_AGREEMENTS);
    let agreements = [
        b.add_suffix_with_forms(
            "A1sg_Verb",
            g,
            [FormSpec::new("m").when(after_past.clone()), FormSpec::new("+yIm").when(other.clone())],
        )?,
        b.add_suffix_with_forms(
            "A2sg_Verb",
            g,
            [FormSpec::new("n").when(after_past.clone()), FormSpec::new("sIn").when(other.clone())],
        )?,
        b.add_suffix_with_forms("A3sg_Verb", g, [FormSpec::new("")])?,
        b.add_suffix_with_forms(
            "A1pl_Verb",
            g,
            [FormSpec::new("k").when(after_past.clone()), FormSpec::new("+yIz").when(other.clone())],
        )?,
        b.add_suffix_with_forms(
            "A2pl_Verb",
            g,
            [FormSpec::new("nIz").when(after_past), FormSpec::new("sInIz").when(other)],
        )?,
        b.add_suffix_with_forms("A3pl_Verb", g, [FormSpec::new("lAr")])?,
    ];
    for a in agreements {
        b.add_edge(with_tense, a, terminal);
    }

    b.add_free_transition("Verb_Free_Transition_2", with_polarity, polarity_deriv, Some(not_short))?;
    let inf = b.add_suffix_with_forms("Inf", None, [FormSpec::new("mAk").expecting(ConsonantStart)])?;
    let inf2 = b.add_suffix_with_forms("Inf2", None, [FormSpec::new("mA")])?;
    let past_part = b.add_suffix_with_forms(
        "PastPart",
        None,
        [FormSpec::new("DIk").expecting(ConsonantStart), FormSpec::new("DIğ").expecting(VowelStart)],
    )?;
    let pres_part = b.add_suffix_with_forms("PresPart", None, [FormSpec::new("+yAn")])?;
    b.add_edge(polarity_deriv, inf, noun_root);
    b.add_edge(polarity_deriv, inf2, noun_root);
    b.add_edge(polarity_deriv, past_part, noun_root);
    b.add_edge(polarity_deriv, pres_part, adjective_root);
    Ok(())
}

// ---------------------------------------------------------------------------
// Pronouns
// ---------------------------------------------------------------------------

fn pronouns(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let root = b.state_id(PRONOUN_ROOT)?;
    let with_agreement = b.state_id(PRONOUN_WITH_AGREEMENT)?;
    let with_possession = b.state_id(PRONOUN_WITH_POSSESSION)?;
    let with_case = b.state_id(PRONOUN_WITH_CASE)?;
    let terminal = b.state_id(PRONOUN_TERMINAL)?;

    let personal = Condition::RootHasSecondaryPos(SecondaryPos::Personal);
    let g = Some(PRONOUN_AGREEMENTS);
    let zero_personal = || [FormSpec::new("").when(personal.clone())];
    let a1sg = b.add_suffix_with_forms(A1SG_PRON, g, zero_personal())?;
    let a2sg = b.add_suffix_with_forms(A2SG_PRON, g, zero_personal())?;
    let a3sg = b.add_suffix_with_forms(A3SG_PRON, g, [FormSpec::new("")])?;
    let a1pl = b.add_suffix_with_forms(A1PL_PRON, g, zero_personal())?;
    let a2pl = b.add_suffix_with_forms(A2PL_PRON, g, zero_personal())?;
    let a3pl = b.add_suffix_with_forms(A3PL_PRON, g, [FormSpec::new("lAr")])?;
    for a in [a1sg, a2sg, a3sg, a1pl, a2pl, a3pl] {
        b.add_edge(root, a, with_agreement);
    }

    let pnon = b.add_suffix_with_forms(PNON_PRON, Some(PRONOUN_POSSESSIONS), [FormSpec::new("")])?;
    b.add_edge(with_agreement, pnon, with_possession);

    let first_person = Condition::comes_after_any(&[a1sg, a1pl]);
    let g = Some(PRONOUN_CASES);
    let cases = [
        b.add_suffix_with_forms(NOM_PRON, g, [FormSpec::new("")])?,
        b.add_suffix_with_forms(ACC_PRON, g, [FormSpec::new("+yI")])?,
        b.add_suffix_with_forms(DAT_PRON, g, [FormSpec::new("+yA")])?,
        b.add_suffix_with_forms(LOC_PRON, g, [FormSpec::new("DA")])?,
        b.add_suffix_with_forms(ABL_PRON, g, [FormSpec::new("DAn")])?,
        b.add_suffix_with_forms(
            GEN_PRON,
            g,
            [
                FormSpec::new("Im").when(first_person.clone()),
                FormSpec::new("+nIn").when(first_person.negate()),
            ],
        )?,
        b.add_suffix_with_forms(INS_PRON, g, [FormSpec::new("+ylA")])?,
    ];
    for case in cases {
        b.add_edge(with_possession, case, with_case);
    }
    b.add_free_transition("Pron_Free_Transition", with_case, terminal, None)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Closed classes
// ---------------------------------------------------------------------------

fn closed_classes(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let plain: &[(&str, &str, &str)] = &[
        (DETERMINER_ROOT, "DETERMINER_TERMINAL", "Det_Free_Transition"),
        (CONJUNCTION_ROOT, "CONJUNCTION_TERMINAL", "Conj_Free_Transition"),
        (INTERJECTION_ROOT, "INTERJECTION_TERMINAL", "Interj_Free_Transition"),
        (PUNCTUATION_ROOT, PUNCTUATION_TERMINAL, "Punc_Free_Transition"),
    ];
    for &(from, to, name) in plain {
        let (from, to) = (b.state_id(from)?, b.state_id(to)?);
        b.add_free_transition(name, from, to, None)?;
    }

    let question = b.state_id(QUESTION_ROOT)?;
    let question_terminal = b.state_id("QUESTION_TERMINAL")?;
    let pres = b.add_suffix_with_forms("Ques_Pres", Some(QUESTION_TENSES), [FormSpec::new("")])?;
    let past = b.add_suffix_with_forms("Ques_Past", Some(QUESTION_TENSES), [FormSpec::new("ydI")])?;
    b.add_edge(question, pres, question_terminal);
    b.add_edge(question, past, question_terminal);
    Ok(())
}
