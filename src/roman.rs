//! Roman numerals for fret position labels (I through XXIV).

const ROMAN_NUMERALS: [&str; 25] = [
    "", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI", "XXII", "XXIII", "XXIV",
];

/// Numeral for frets 1-24, the decimal string for anything else.
pub fn to_roman_numeral(num: u32) -> String {
    match ROMAN_NUMERALS.get(num as usize) {
        Some(numeral) if num >= 1 => numeral.to_string(),
        _ => num.to_string(),
    }
}

/// Inverse of [`to_roman_numeral`]; 0 for anything unrecognized.
pub fn from_roman_numeral(roman: &str) -> u32 {
    let upper = roman.trim().to_uppercase();
    ROMAN_NUMERALS
        .iter()
        .position(|n| !n.is_empty() && *n == upper)
        .map_or(0, |i| i as u32)
}
