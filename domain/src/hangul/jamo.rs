//! Compatibility jamo tables and per-jamo stroke counts

/// First code point of the precomposed Hangul syllable block (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Number of initial consonants
pub const INITIAL_COUNT: u32 = 19;

/// Number of medial vowels
pub const MEDIAL_COUNT: u32 = 21;

/// Number of final slots, including "no final"
pub const FINAL_COUNT: u32 = 28;

/// Syllables sharing a single initial consonant (21 * 28 = 588)
pub const MEDIAL_FINAL_COUNT: u32 = MEDIAL_COUNT * FINAL_COUNT;

/// Total number of precomposed syllables (19 * 588 = 11172)
pub const SYLLABLE_COUNT: u32 = INITIAL_COUNT * MEDIAL_FINAL_COUNT;

/// Initial consonants in syllable index order
pub const INITIALS: [char; INITIAL_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Medial vowels in syllable index order
pub const MEDIALS: [char; MEDIAL_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Final consonants in syllable index order. Index 0 is "no final".
pub const FINALS: [Option<char>; FINAL_COUNT as usize] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// Stroke count of a single initial consonant or medial vowel.
///
/// Returns `None` for anything outside the table, including the compound
/// final clusters (see [`split_cluster`]).
pub const fn stroke_count(jamo: char) -> Option<u32> {
    let strokes = match jamo {
        'ㄱ' => 2,
        'ㄲ' => 4,
        'ㄴ' => 2,
        'ㄷ' => 3,
        'ㄸ' => 6,
        'ㄹ' => 5,
        'ㅁ' => 4,
        'ㅂ' => 4,
        'ㅃ' => 8,
        'ㅅ' => 2,
        'ㅆ' => 4,
        'ㅇ' => 1,
        'ㅈ' => 3,
        'ㅉ' => 6,
        'ㅊ' => 4,
        'ㅋ' => 3,
        'ㅌ' => 4,
        'ㅍ' => 4,
        'ㅎ' => 3,
        'ㅏ' => 2,
        'ㅐ' => 3,
        'ㅑ' => 3,
        'ㅒ' => 4,
        'ㅓ' => 2,
        'ㅔ' => 3,
        'ㅕ' => 3,
        'ㅖ' => 4,
        'ㅗ' => 2,
        'ㅘ' => 4,
        'ㅙ' => 5,
        'ㅚ' => 3,
        'ㅛ' => 3,
        'ㅜ' => 2,
        'ㅝ' => 4,
        'ㅞ' => 5,
        'ㅟ' => 3,
        'ㅠ' => 3,
        'ㅡ' => 1,
        'ㅢ' => 2,
        'ㅣ' => 1,
        _ => return None,
    };
    Some(strokes)
}

/// Split a compound final cluster into its two base consonants.
///
/// Doubled consonants (ㄲ, ㅆ) are letters in their own right and are not
/// clusters.
pub const fn split_cluster(jamo: char) -> Option<(char, char)> {
    match jamo {
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_arithmetic() {
        assert_eq!(MEDIAL_FINAL_COUNT, 588);
        assert_eq!(SYLLABLE_COUNT, 11172);
        assert_eq!(SYLLABLE_BASE + SYLLABLE_COUNT - 1, '힣' as u32);
    }

    #[test]
    fn test_every_initial_and_medial_has_strokes() {
        for jamo in INITIALS.iter().chain(MEDIALS.iter()) {
            let strokes = stroke_count(*jamo);
            assert!(matches!(strokes, Some(n) if n >= 1), "{jamo} has no strokes");
        }
    }

    #[test]
    fn test_every_final_resolves_to_table_entries() {
        for jamo in FINALS.iter().flatten() {
            match split_cluster(*jamo) {
                Some((first, second)) => {
                    assert!(stroke_count(*jamo).is_none(), "{jamo} is a table entry");
                    assert!(stroke_count(first).is_some());
                    assert!(stroke_count(second).is_some());
                }
                None => assert!(stroke_count(*jamo).is_some(), "{jamo} is missing"),
            }
        }
    }

    #[test]
    fn test_cluster_count() {
        let clusters = FINALS
            .iter()
            .flatten()
            .filter(|j| split_cluster(**j).is_some())
            .count();
        assert_eq!(clusters, 11);
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(stroke_count('a'), None);
        assert_eq!(stroke_count('가'), None);
        assert_eq!(split_cluster('ㄲ'), None);
    }
}
