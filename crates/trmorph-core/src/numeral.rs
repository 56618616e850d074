// Spelling out digit strings as Turkish number words

const ONES: [&str; 10] = ["", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz"];
const TENS: [&str; 10] =
    ["", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan"];
const SCALES: [&str; 7] = ["", "bin", "milyon", "milyar", "trilyon", "katrilyon", "kentilyon"];
const ZERO: &str = "sıfır";

/// Convert a digit string to its spoken Turkish form.
///
/// Accepts an optional sign, `.` as the thousands separator and `,` as
/// the decimal separator: `"-1.250,5"` becomes
/// `"eksi bin iki yüz elli virgül beş"`. Returns `None` for anything that
/// is not a digit string.
pub fn digits_to_text(digits: &str) -> Option<String> {
    let (negative, unsigned) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.strip_prefix('+').unwrap_or(digits)),
    };
    let (integer, fraction) = match unsigned.split_once(',') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let integer: String = integer.chars().filter(|c| *c != '.').collect();
    if integer.is_empty() || !integer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if let Some(f) = fraction {
        if f.is_empty() || !f.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }

    let mut words = Vec::new();
    if negative {
        words.push("eksi".to_string());
    }
    words.push(integer_to_text(&integer));
    if let Some(f) = fraction {
        words.push("virgül".to_string());
        let significant = f.trim_start_matches('0');
        for _ in 0..f.len() - significant.len() {
            words.push(ZERO.to_string());
        }
        if !significant.is_empty() {
            words.push(integer_to_text(significant));
        }
    }
    Some(words.join(" "))
}

fn integer_to_text(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return ZERO.to_string();
    }
    if digits.len() > SCALES.len() * 3 {
        return digits
            .bytes()
            .map(|b| match usize::from(b - b'0') {
                0 => ZERO,
                d => ONES[d],
            })
            .collect::<Vec<_>>()
            .join(" ");
    }

    let bytes = digits.as_bytes();
    let mut groups = Vec::new();
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        let value = bytes[start..end].iter().fold(0usize, |acc, b| acc * 10 + usize::from(b - b'0'));
        groups.push(value);
        end = start;
    }

    let mut words: Vec<String> = Vec::new();
    for (scale, &value) in groups.iter().enumerate().rev() {
        if value == 0 {
            continue;
        }
        if scale == 1 && value == 1 {
            words.push(SCALES[1].to_string());
            continue;
        }
        words.push(below_thousand(value));
        if scale > 0 {
            words.push(SCALES[scale].to_string());
        }
    }
    words.join(" ")
}

fn below_thousand(value: usize) -> String {
    let (hundreds, tens, ones) = (value / 100, (value / 10) % 10, value % 10);
    let mut words = Vec::new();
    if hundreds > 1 {
        words.push(ONES[hundreds]);
    }
    if hundreds > 0 {
        words.push("yüz");
    }
    if tens > 0 {
        words.push(TENS[tens]);
    }
    if ones > 0 {
        words.push(ONES[ones]);
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> String {
        digits_to_text(s).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(text("0"), "sıfır");
        assert_eq!(text("4"), "dört");
        assert_eq!(text("12"), "on iki");
        assert_eq!(text("100"), "yüz");
        assert_eq!(text("101"), "yüz bir");
        assert_eq!(text("345"), "üç yüz kırk beş");
    }

    #[test]
    fn thousands_and_beyond() {
        assert_eq!(text("1000"), "bin");
        assert_eq!(text("1100"), "bin yüz");
        assert_eq!(text("2.345"), "iki bin üç yüz kırk beş");
        assert_eq!(text("1.000.000"), "bir milyon");
        assert_eq!(text("3000000001"), "üç milyar bir");
    }

    #[test]
    fn sign_and_fraction() {
        assert_eq!(text("-3,14"), "eksi üç virgül on dört");
        assert_eq!(text("+7"), "yedi");
        assert_eq!(text("0,05"), "sıfır virgül sıfır beş");
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(digits_to_text("12a"), None);
        assert_eq!(digits_to_text(""), None);
        assert_eq!(digits_to_text("-"), None);
        assert_eq!(digits_to_text("1,"), None);
    }
}
