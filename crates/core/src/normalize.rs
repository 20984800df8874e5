//! Address text normalization.
//!
//! Free-form Japanese address input arrives with full-width digits, mixed
//! hyphen glyphs, stray whitespace and parenthetical annotations. The
//! functions here canonicalize such text into a form that is only ever used
//! for comparison; normalized values are never persisted or displayed.
//!
//! [`normalize`] runs the steps of [`NormalizeStep::PIPELINE`] in a fixed
//! order. Each step is exposed on its own so its contract can be exercised in
//! isolation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Offset between a full-width ASCII variant (U+FF01..) and its ASCII form.
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Glyphs treated as a hyphen in address text.
const HYPHEN_GLYPHS: [char; 7] = [
    'ー', // U+30FC katakana prolonged sound mark
    '―', // U+2015 horizontal bar
    '—', // U+2014 em dash
    '–', // U+2013 en dash
    '‐', // U+2010 hyphen
    '−', // U+2212 minus sign
    '－', // U+FF0D full-width hyphen-minus
];

/// Separators deleted from postal codes: ASCII `-` and the dash glyphs.
///
/// `ー` is a kana length mark, not a dash, and is left in place.
const POSTAL_CODE_SEPARATORS: [char; 7] = ['-', '―', '—', '–', '‐', '−', '－'];

/// Single-character kanji numerals and their arabic replacement.
///
/// Token-for-token only: "十一" becomes "101", not "11".
const KANJI_NUMERALS: [(char, &str); 10] = [
    ('一', "1"),
    ('二', "2"),
    ('三', "3"),
    ('四', "4"),
    ('五', "5"),
    ('六', "6"),
    ('七', "7"),
    ('八', "8"),
    ('九', "9"),
    ('十', "10"),
];

/// First full-width opening parenthesis up to the nearest closing one.
static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)（.*?）").expect("valid regex"));

/// A value produced by [`normalize`], comparable but never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedString(String);

impl NormalizedString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substring test against another normalized value.
    pub fn contains(&self, other: &NormalizedString) -> bool {
        self.0.contains(other.as_str())
    }

    /// Concatenate two normalized values (e.g. city + town).
    pub fn concat(&self, other: &NormalizedString) -> NormalizedString {
        let mut joined = String::with_capacity(self.0.len() + other.0.len());
        joined.push_str(&self.0);
        joined.push_str(&other.0);
        NormalizedString(joined)
    }
}

impl AsRef<str> for NormalizedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for NormalizedString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One transform in the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeStep {
    FullWidthFold,
    WhitespaceStrip,
    HyphenUnify,
    ParentheticalStrip,
    NumeralSubstitute,
}

impl NormalizeStep {
    /// Step order applied by [`normalize`]. Reordering changes results.
    pub const PIPELINE: [NormalizeStep; 5] = [
        NormalizeStep::FullWidthFold,
        NormalizeStep::WhitespaceStrip,
        NormalizeStep::HyphenUnify,
        NormalizeStep::ParentheticalStrip,
        NormalizeStep::NumeralSubstitute,
    ];

    pub fn apply(self, input: &str) -> String {
        match self {
            NormalizeStep::FullWidthFold => fold_full_width(input),
            NormalizeStep::WhitespaceStrip => strip_whitespace(input),
            NormalizeStep::HyphenUnify => unify_hyphens(input),
            NormalizeStep::ParentheticalStrip => strip_parentheticals(input),
            NormalizeStep::NumeralSubstitute => substitute_kanji_numerals(input),
        }
    }
}

/// Canonicalize address text for comparison.
///
/// Total and deterministic; `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> NormalizedString {
    let folded = NormalizeStep::PIPELINE
        .iter()
        .fold(text.to_string(), |acc, step| step.apply(&acc));
    NormalizedString(folded)
}

/// Canonicalize a postal code: half-width digits, hyphens deleted, ends trimmed.
///
/// Postal codes never carry kanji or annotations, so the remaining steps of
/// [`normalize`] are not applied.
pub fn normalize_postal_code(text: &str) -> String {
    let folded = fold_full_width(text);
    let without_hyphens: String = folded
        .chars()
        .filter(|c| !POSTAL_CODE_SEPARATORS.contains(c))
        .collect();
    without_hyphens.trim().to_string()
}

/// Full-width digits and Latin letters to their half-width forms.
pub fn fold_full_width(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => {
                char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Remove every whitespace character, the ideographic space included.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Replace every hyphen-like glyph with an ASCII `-`.
pub fn unify_hyphens(input: &str) -> String {
    input
        .chars()
        .map(|c| if HYPHEN_GLYPHS.contains(&c) { '-' } else { c })
        .collect()
}

/// Drop `（...）` segments, matching each opening bracket to the nearest close.
pub fn strip_parentheticals(input: &str) -> String {
    PARENTHETICAL_RE.replace_all(input, "").into_owned()
}

/// Replace the kanji numerals 一 through 十 with arabic digits.
pub fn substitute_kanji_numerals(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match KANJI_NUMERALS.iter().find(|(kanji, _)| *kanji == c) {
            Some((_, digits)) => out.push_str(digits),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_full_width_digits_and_letters() {
        assert_eq!(fold_full_width("１２３ＡＢｃ"), "123ABc");
        assert_eq!(fold_full_width("新宿区"), "新宿区");
    }

    #[test]
    fn fold_leaves_full_width_parentheses_alone() {
        assert_eq!(fold_full_width("（旧）"), "（旧）");
    }

    #[test]
    fn strips_ascii_and_ideographic_whitespace() {
        assert_eq!(strip_whitespace(" 新宿区\t西新宿　1 "), "新宿区西新宿1");
    }

    #[test]
    fn unifies_every_hyphen_glyph() {
        for glyph in HYPHEN_GLYPHS {
            let input = format!("1{glyph}2");
            assert_eq!(unify_hyphens(&input), "1-2", "glyph {glyph:?}");
        }
    }

    #[test]
    fn strips_parenthetical_non_greedy() {
        assert_eq!(strip_parentheticals("新宿区（旧四谷区）西新宿"), "新宿区西新宿");
        assert_eq!(strip_parentheticals("A（x）B（y）C"), "ABC");
        assert_eq!(strip_parentheticals("A（x（y）B）C"), "AB）C");
    }

    #[test]
    fn unclosed_parenthesis_is_kept() {
        assert_eq!(strip_parentheticals("新宿区（旧"), "新宿区（旧");
    }

    #[test]
    fn substitutes_single_kanji_numerals() {
        assert_eq!(substitute_kanji_numerals("西新宿二丁目"), "西新宿2丁目");
        assert_eq!(substitute_kanji_numerals("十"), "10");
    }

    #[test]
    fn multi_character_kanji_numbers_are_replaced_token_by_token() {
        assert_eq!(substitute_kanji_numerals("十一"), "101");
        assert_eq!(normalize("二十三番地"), "2103番地");
    }

    #[test]
    fn full_width_digits_compare_equal() {
        assert_eq!(normalize("１２３番地"), normalize("123番地"));
    }

    #[test]
    fn hyphen_variants_normalize_to_single_ascii_hyphen() {
        for input in ["東京都－新宿区", "東京都―新宿区", "東京都—新宿区", "東京都-新宿区"] {
            let normalized = normalize(input);
            assert_eq!(normalized, "東京都-新宿区");
            assert_eq!(normalized.as_str().matches('-').count(), 1);
        }
    }

    #[test]
    fn parenthetical_annotation_is_removed() {
        let normalized = normalize("新宿区（旧四谷区）西新宿");
        assert_eq!(normalized, "新宿区西新宿");
        assert!(!normalized.as_str().contains("四谷"));
    }

    #[test]
    fn whitespace_inside_parentheses_does_not_block_stripping() {
        assert_eq!(normalize("新宿区（ 旧 四谷区 ）西新宿"), "新宿区西新宿");
    }

    #[test]
    fn steps_run_in_pipeline_order() {
        let mut manual = String::from("　西新宿　一－２（注）");
        for step in NormalizeStep::PIPELINE {
            manual = step.apply(&manual);
        }
        assert_eq!(normalize("　西新宿　一－２（注）").as_str(), manual);
        assert_eq!(manual, "西新宿1-2");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "",
            "東京都新宿区西新宿２－８－１",
            "新宿区（旧四谷区）西新宿",
            "（（a））b",
            "A（x（y）B）C",
            "十一番地　ーー",
            "  ＡＢＣ ｄｅｆ  ",
            "大字（未設定",
            "ラーメン横丁三丁目",
        ];
        for sample in samples {
            let once = normalize(sample);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn postal_code_deletes_hyphens_and_trims() {
        assert_eq!(normalize_postal_code(" 123-4567 "), "1234567");
        assert_eq!(normalize_postal_code("１２３－４５６７"), "1234567");
        assert_eq!(normalize_postal_code("　1234567　"), "1234567");
    }

    #[test]
    fn postal_code_deletes_dashes_but_not_length_mark() {
        for sep in ['―', '—', '–', '‐', '−'] {
            assert_eq!(normalize_postal_code(&format!("123{sep}4567")), "1234567");
        }
        assert_eq!(normalize_postal_code("123ー4567"), "123ー4567");
    }

    #[test]
    fn postal_code_keeps_inner_whitespace() {
        assert_eq!(normalize_postal_code("123 4567"), "123 4567");
    }

    #[test]
    fn concat_and_contains() {
        let city = normalize("新宿区");
        let town = normalize("西新宿");
        let candidate = city.concat(&town);
        assert_eq!(candidate, "新宿区西新宿");
        assert!(normalize("新宿区西新宿2-8-1").contains(&candidate));
    }
}
