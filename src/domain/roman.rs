/// A token whose characters are all drawn from the Roman alphabet
/// `IVXLCDM`. Membership is the only invariant: non-canonical strings
/// such as `IIII` or `VX` are accepted and converted character by
/// character, and the empty token is (vacuously) valid with value 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanNumeral<'a> {
    text: &'a str,
}

impl<'a> RomanNumeral<'a> {
    /// Accepts `token` iff every character belongs to the Roman alphabet.
    pub fn parse(token: &'a str) -> Option<Self> {
        token
            .bytes()
            .all(|b| matches!(b, b'I' | b'V' | b'X' | b'L' | b'C' | b'D' | b'M'))
            .then_some(Self { text: token })
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Decimal value via a single left-to-right scan. `I`, `X` and `C`
    /// are subtracted instead of added when the immediately following
    /// character is one of their designated larger pair (I before V/X,
    /// X before L/C, C before D/M); `D` and `M` always add.
    pub fn value(&self) -> i64 {
        let glyphs = self.text.as_bytes();
        let mut total = 0i64;
        for (i, &glyph) in glyphs.iter().enumerate() {
            let next = glyphs.get(i + 1).copied();
            total += match glyph {
                b'M' => 1000,
                b'D' => 500,
                b'C' if matches!(next, Some(b'D' | b'M')) => -100,
                b'C' => 100,
                b'L' => 50,
                b'X' if matches!(next, Some(b'L' | b'C')) => -10,
                b'X' => 10,
                b'V' => 5,
                b'I' if matches!(next, Some(b'V' | b'X')) => -1,
                // `parse` admits nothing below here but 'I'.
                _ => 1,
            };
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(token: &str) -> i64 {
        RomanNumeral::parse(token).unwrap().value()
    }

    #[test]
    fn converts_reference_numerals() {
        assert_eq!(value_of("III"), 3);
        assert_eq!(value_of("IX"), 9);
        assert_eq!(value_of("LVIII"), 58);
        assert_eq!(value_of("MCMXCIV"), 1994);
    }

    #[test]
    fn subtractive_pairs_apply_per_character() {
        assert_eq!(value_of("IV"), 4);
        assert_eq!(value_of("XL"), 40);
        assert_eq!(value_of("XC"), 90);
        assert_eq!(value_of("CD"), 400);
        assert_eq!(value_of("CM"), 900);
    }

    #[test]
    fn non_canonical_numerals_convert_anyway() {
        // No grammar check, just the character-pairwise fold.
        assert_eq!(value_of("IIII"), 4);
        assert_eq!(value_of("VX"), 15);
        assert_eq!(value_of("IXX"), 19);
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert!(RomanNumeral::parse("MCMXIVA").is_none());
        assert!(RomanNumeral::parse("12").is_none());
        assert!(RomanNumeral::parse("iv").is_none());
        assert!(RomanNumeral::parse("X V").is_none());
    }

    #[test]
    fn empty_token_is_valid_and_zero() {
        assert_eq!(value_of(""), 0);
    }
}
