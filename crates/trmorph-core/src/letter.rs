// Turkish alphabet and letter classification

// ---------------------------------------------------------------------------
// Letter table
// ---------------------------------------------------------------------------

/// A letter of the Turkish alphabet with the phonological features used by
/// vowel harmony and consonant alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    pub lower: char,
    pub upper: char,
    pub vowel: bool,
    pub frontal: bool,
    pub rounded: bool,
    pub voiceless: bool,
    pub continuant: bool,
}

impl Letter {
    const fn vowel(lower: char, upper: char, frontal: bool, rounded: bool) -> Self {
        Self { lower, upper, vowel: true, frontal, rounded, voiceless: false, continuant: true }
    }

    const fn consonant(lower: char, upper: char, voiceless: bool, continuant: bool) -> Self {
        Self { lower, upper, vowel: false, frontal: false, rounded: false, voiceless, continuant }
    }

    /// Voiceless stop consonants (p, ç, t, k) are the candidates for voicing.
    pub fn is_stop(&self) -> bool {
        self.voiceless && !self.continuant
    }
}

static ALPHABET: [Letter; 35] = [
    Letter::vowel('a', 'A', false, false),
    Letter::vowel('â', 'Â', false, false),
    Letter::consonant('b', 'B', false, false),
    Letter::consonant('c', 'C', false, false),
    Letter::consonant('ç', 'Ç', true, false),
    Letter::consonant('d', 'D', false, false),
    Letter::vowel('e', 'E', true, false),
    Letter::consonant('f', 'F', true, true),
    Letter::consonant('g', 'G', false, false),
    Letter::consonant('ğ', 'Ğ', false, true),
    Letter::consonant('h', 'H', true, true),
    Letter::vowel('ı', 'I', false, false),
    Letter::vowel('i', 'İ', true, false),
    Letter::vowel('î', 'Î', true, false),
    Letter::consonant('j', 'J', false, true),
    Letter::consonant('k', 'K', true, false),
    Letter::consonant('l', 'L', false, true),
    Letter::consonant('m', 'M', false, true),
    Letter::consonant('n', 'N', false, true),
    Letter::vowel('o', 'O', false, true),
    Letter::vowel('ö', 'Ö', true, true),
    Letter::consonant('p', 'P', true, false),
    Letter::consonant('r', 'R', false, true),
    Letter::consonant('s', 'S', true, true),
    Letter::consonant('ş', 'Ş', true, true),
    Letter::consonant('t', 'T', true, false),
    Letter::vowel('u', 'U', false, true),
    Letter::vowel('û', 'Û', false, true),
    Letter::vowel('ü', 'Ü', true, true),
    Letter::consonant('v', 'V', false, true),
    Letter::consonant('y', 'Y', false, true),
    Letter::consonant('z', 'Z', false, true),
    Letter::consonant('q', 'Q', false, false),
    Letter::consonant('w', 'W', false, true),
    Letter::consonant('x', 'X', true, true),
];

/// Look up the alphabet letter for a character in either case.
pub fn letter_of(c: char) -> Option<&'static Letter> {
    ALPHABET.iter().find(|l| l.lower == c || l.upper == c)
}

// ---------------------------------------------------------------------------
// Case mapping
// ---------------------------------------------------------------------------

/// Lowercase a character with the Turkish dotted/dotless i rules
/// (`I` -> `ı`, `İ` -> `i`).
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => match letter_of(c) {
            Some(l) => l.lower,
            None => c.to_lowercase().next().unwrap_or(c),
        },
    }
}

/// Uppercase a character with the Turkish dotted/dotless i rules
/// (`i` -> `İ`, `ı` -> `I`).
pub fn turkish_upper(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        _ => match letter_of(c) {
            Some(l) => l.upper,
            None => c.to_uppercase().next().unwrap_or(c),
        },
    }
}

pub fn is_upper(c: char) -> bool {
    c.is_alphabetic() && turkish_lower(c) != c
}

pub fn is_lower(c: char) -> bool {
    c.is_alphabetic() && turkish_upper(c) != c
}

/// Lowercase a whole string with the Turkish rules.
pub fn turkish_lowercase(s: &str) -> String {
    s.chars().map(turkish_lower).collect()
}

/// Punctuation characters accepted as standalone tokens.
pub fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '-'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '"'
            | '\''
            | '/'
            | '…'
            | '«'
            | '»'
            | '“'
            | '”'
            | '‘'
            | '’'
    )
}

/// Turkish circumflexed vowels and their plain counterparts.
pub fn without_circumflex(c: char) -> char {
    match c {
        'â' => 'a',
        'î' => 'i',
        'û' => 'u',
        'Â' => 'A',
        'Î' => 'İ',
        'Û' => 'U',
        _ => c,
    }
}

/// The voiced counterpart of a final voiceless stop. `k` after `n` becomes
/// `g` ("renk" → "reng"), otherwise `ğ`.
pub fn voiced_stop(last: char, before: Option<char>) -> Option<char> {
    match last {
        'p' => Some('b'),
        'ç' => Some('c'),
        't' => Some('d'),
        'k' if before == Some('n') => Some('g'),
        'k' => Some('ğ'),
        _ => None,
    }
}

/// How a letter is read aloud when an abbreviation is spelled out.
pub fn letter_name(c: char) -> Option<&'static str> {
    let name = match turkish_lower(without_circumflex(c)) {
        'a' => "a",
        'b' => "be",
        'c' => "ce",
        'ç' => "çe",
        'd' => "de",
        'e' => "e",
        'f' => "fe",
        'g' => "ge",
        'ğ' => "yumuşak ge",
        'h' => "he",
        'ı' => "ı",
        'i' => "i",
        'j' => "je",
        'k' => "ke",
        'l' => "le",
        'm' => "me",
        'n' => "ne",
        'o' => "o",
        'ö' => "ö",
        'p' => "pe",
        'q' => "kü",
        'r' => "re",
        's' => "se",
        'ş' => "şe",
        't' => "te",
        'u' => "u",
        'ü' => "ü",
        'v' => "ve",
        'w' => "çift ve",
        'x' => "iks",
        'y' => "ye",
        'z' => "ze",
        _ => return None,
    };
    Some(name)
}

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// A character of an input sequence paired with its alphabet letter, if any.
///
/// Two characters are equal when their values are equal.
#[derive(Debug, Clone, Copy)]
pub struct Character {
    value: char,
    letter: Option<&'static Letter>,
}

impl Character {
    pub fn new(value: char) -> Self {
        Self { value, letter: letter_of(value) }
    }

    pub fn value(&self) -> char {
        self.value
    }

    pub fn letter(&self) -> Option<&'static Letter> {
        self.letter
    }

    pub fn is_letter(&self) -> bool {
        self.letter.is_some()
    }

    pub fn is_vowel(&self) -> bool {
        self.letter.is_some_and(|l| l.vowel)
    }

    pub fn is_consonant(&self) -> bool {
        self.letter.is_some_and(|l| !l.vowel)
    }

    pub fn is_upper(&self) -> bool {
        is_upper(self.value)
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Character {}

impl std::hash::Hash for Character {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
