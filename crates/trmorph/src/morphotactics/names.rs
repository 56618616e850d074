// State and suffix names referenced outside their defining extension

// -- Noun --------------------------------------------------------------------

pub const NOUN_ROOT: &str = "NOUN_ROOT";
pub const NOUN_WITH_AGREEMENT: &str = "NOUN_WITH_AGREEMENT";
pub const NOUN_WITH_POSSESSION: &str = "NOUN_WITH_POSSESSION";
pub const NOUN_WITH_CASE: &str = "NOUN_WITH_CASE";
pub const NOUN_TERMINAL: &str = "NOUN_TERMINAL";
pub const NOUN_DERIV: &str = "NOUN_DERIV";

pub const A3SG_NOUN: &str = "A3sg_Noun";
pub const A3PL_NOUN: &str = "A3pl_Noun";
pub const PNON_NOUN: &str = "Pnon_Noun";
pub const P3SG_NOUN: &str = "P3sg_Noun";
pub const P3PL_NOUN: &str = "P3pl_Noun";
pub const NOM_NOUN: &str = "Nom_Noun";
pub const ACC_NOUN: &str = "Acc_Noun";
pub const NOUN_CASES: &[&str] =
    &["Nom_Noun", "Acc_Noun", "Dat_Noun", "Loc_Noun", "Abl_Noun", "Gen_Noun", "Ins_Noun"];

// -- Adjective, adverb, verb -------------------------------------------------

pub const ADJECTIVE_ROOT: &str = "ADJECTIVE_ROOT";
pub const ADJECTIVE_TERMINAL: &str = "ADJECTIVE_TERMINAL";
pub const ADJECTIVE_DERIV: &str = "ADJECTIVE_DERIV";
pub const ADVERB_ROOT: &str = "ADVERB_ROOT";
pub const ADVERB_TERMINAL: &str = "ADVERB_TERMINAL";
pub const VERB_ROOT: &str = "VERB_ROOT";
pub const VERB_PLAIN_DERIV: &str = "VERB_PLAIN_DERIV";
pub const VERB_WITH_POLARITY: &str = "VERB_WITH_POLARITY";
pub const VERB_POLARITY_DERIV: &str = "VERB_POLARITY_DERIV";
pub const VERB_WITH_TENSE: &str = "VERB_WITH_TENSE";
pub const VERB_TERMINAL: &str = "VERB_TERMINAL";

// -- Pronoun -----------------------------------------------------------------

pub const PRONOUN_ROOT: &str = "PRONOUN_ROOT";
pub const PRONOUN_WITH_AGREEMENT: &str = "PRONOUN_WITH_AGREEMENT";
pub const PRONOUN_WITH_POSSESSION: &str = "PRONOUN_WITH_POSSESSION";
pub const PRONOUN_WITH_CASE: &str = "PRONOUN_WITH_CASE";
pub const PRONOUN_TERMINAL: &str = "PRONOUN_TERMINAL";

pub const A1SG_PRON: &str = "A1sg_Pron";
pub const A2SG_PRON: &str = "A2sg_Pron";
pub const A3SG_PRON: &str = "A3sg_Pron";
pub const A1PL_PRON: &str = "A1pl_Pron";
pub const A2PL_PRON: &str = "A2pl_Pron";
pub const A3PL_PRON: &str = "A3pl_Pron";
pub const PNON_PRON: &str = "Pnon_Pron";
pub const NOM_PRON: &str = "Nom_Pron";
pub const ACC_PRON: &str = "Acc_Pron";
pub const DAT_PRON: &str = "Dat_Pron";
pub const LOC_PRON: &str = "Loc_Pron";
pub const ABL_PRON: &str = "Abl_Pron";
pub const GEN_PRON: &str = "Gen_Pron";
pub const INS_PRON: &str = "Ins_Pron";

// -- Closed classes ----------------------------------------------------------

pub const DETERMINER_ROOT: &str = "DETERMINER_ROOT";
pub const CONJUNCTION_ROOT: &str = "CONJUNCTION_ROOT";
pub const INTERJECTION_ROOT: &str = "INTERJECTION_ROOT";
pub const QUESTION_ROOT: &str = "QUESTION_ROOT";
pub const PUNCTUATION_ROOT: &str = "PUNCTUATION_ROOT";
pub const PUNCTUATION_TERMINAL: &str = "PUNCTUATION_TERMINAL";

/// Literal apostrophe separating a proper noun or digits from its suffixes.
pub const APOSTROPHE: &str = "Apostrophe";

// -- Numeral -----------------------------------------------------------------

pub const NUMERAL_CARDINAL_ROOT: &str = "NUMERAL_CARDINAL_ROOT";
pub const NUMERAL_ORDINAL_ROOT: &str = "NUMERAL_ORDINAL_ROOT";
pub const NUMERAL_DIGITS_CARDINAL_ROOT: &str = "NUMERAL_DIGITS_CARDINAL_ROOT";
pub const NUMERAL_DIGITS_ORDINAL_ROOT: &str = "NUMERAL_DIGITS_ORDINAL_ROOT";
pub const NUMERAL_CARDINAL_DERIV: &str = "NUMERAL_CARDINAL_DERIV";
pub const NUMERAL_TERMINAL: &str = "NUMERAL_TERMINAL";

// -- Proper noun -------------------------------------------------------------

pub const PROPER_NOUN_ROOT: &str = "PROPER_NOUN_ROOT";
pub const PROPER_NOUN_WITH_APOSTROPHE: &str = "PROPER_NOUN_WITH_APOSTROPHE";
pub const PROPER_NOUN_WITH_AGREEMENT: &str = "PROPER_NOUN_WITH_AGREEMENT";
pub const PROPER_NOUN_WITH_POSSESSION: &str = "PROPER_NOUN_WITH_POSSESSION";
pub const PROPER_NOUN_WITH_CASE: &str = "PROPER_NOUN_WITH_CASE";
pub const PROPER_NOUN_TERMINAL: &str = "PROPER_NOUN_TERMINAL";

// -- Copula ------------------------------------------------------------------

pub const VERB_COPULA_WITHOUT_TENSE: &str = "VERB_COPULA_WITHOUT_TENSE";
pub const VERB_COPULA_WITH_TENSE: &str = "VERB_COPULA_WITH_TENSE";
pub const VERB_COPULA_WITH_AGREEMENT: &str = "VERB_COPULA_WITH_AGREEMENT";
