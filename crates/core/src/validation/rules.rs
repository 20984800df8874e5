//! Per-field rule chains -- pure logic, no reference data.
//!
//! Each `check_*` function evaluates its conditions in order and returns the
//! message of the first one that fails, or `None` when the field passes.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidateEmail;

use super::submission::DocumentUpload;

pub const NAME_MAX_CHARS: usize = 20;
pub const KANA_MAX_CHARS: usize = 20;
pub const PREFECTURE_MAX_CHARS: usize = 10;
pub const CITY_TOWN_MAX_CHARS: usize = 50;
pub const BUILDING_MAX_CHARS: usize = 50;

/// Content types accepted for identity documents.
pub const ALLOWED_DOCUMENT_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// User-facing messages, one per failing condition.
pub mod messages {
    pub const NAME_REQUIRED: &str = "名前が入力されていません";
    pub const NAME_TOO_LONG: &str = "名前は20文字以内で入力してください";
    pub const EDGE_WHITESPACE: &str = "前後の空白を削除してください";
    pub const NAME_NOT_JAPANESE: &str = "日本語(漢字、ひらがな、カタカナ)で入力してください";

    pub const KANA_REQUIRED: &str = "ふりがなが入力されていません";
    pub const KANA_NOT_HIRAGANA: &str = "ひらがなで入力してください";
    pub const KANA_TOO_LONG: &str = "ふりがなは20文字以内で入力してください";

    pub const BIRTH_DATE_REQUIRED: &str = "生年月日が入力されていません";
    pub const BIRTH_DATE_INVALID: &str = "生年月日が正しくありません";
    pub const BIRTH_DATE_FUTURE: &str = "生年月日は未来の日付は入力できません";

    pub const POSTAL_CODE_REQUIRED: &str = "郵便番号が入力されていません";
    pub const POSTAL_CODE_FORMAT: &str = "郵便番号の形式が正しくありません（例: 123-4567）";

    pub const ADDRESS_REQUIRED: &str = "住所(都道府県もしくは市区町村・番地)が入力されていません";
    pub const PREFECTURE_TOO_LONG: &str = "都道府県は10文字以内で入力してください";
    pub const CITY_TOWN_TOO_LONG: &str = "市区町村・番地もしくは建物名は50文字以内で入力してください";
    pub const ADDRESS_MISMATCH: &str = "郵便番号と住所が一致しません";

    pub const TEL_REQUIRED: &str = "電話番号が入力されていません";
    pub const TEL_WHITESPACE: &str = "空白を削除してください";
    pub const TEL_NO_DIGIT: &str = "数字を入力してください";
    pub const TEL_FORMAT: &str = "電話番号の形式が正しくありません（例: 090-1234-5678）";

    pub const EMAIL_REQUIRED: &str = "メールアドレスが入力されていません";
    pub const EMAIL_INVALID: &str = "有効なメールアドレスを入力してください";

    pub const DOCUMENT1_TYPE: &str = "本人確認書類（表）はPNG/JPEG画像のみアップロード可能です";
    pub const DOCUMENT2_TYPE: &str = "本人確認書類（裏）はPNG/JPEG画像のみアップロード可能です";
}

static NAME_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Han}\p{Hiragana}\p{Katakana}ー\s]+$").expect("valid regex")
});

static KANA_DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^ぁ-んー\s]").expect("valid regex"));

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{4}$").expect("valid regex"));

static TEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0[0-9]{1,4}-[0-9]{1,4}-[0-9]{3,4}$").expect("valid regex")
});

/// A submitted, non-empty value. `"0"` counts as present.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn has_edge_whitespace(value: &str) -> bool {
    value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace)
}

pub fn check_name(value: Option<&str>) -> Option<&'static str> {
    let Some(name) = present(value) else {
        return Some(messages::NAME_REQUIRED);
    };
    if char_len(name) > NAME_MAX_CHARS {
        return Some(messages::NAME_TOO_LONG);
    }
    if has_edge_whitespace(name) {
        return Some(messages::EDGE_WHITESPACE);
    }
    if !NAME_CHARS_RE.is_match(name) {
        return Some(messages::NAME_NOT_JAPANESE);
    }
    None
}

pub fn check_kana(value: Option<&str>) -> Option<&'static str> {
    let Some(kana) = present(value) else {
        return Some(messages::KANA_REQUIRED);
    };
    let trimmed = kana.trim();
    if trimmed != kana {
        return Some(messages::EDGE_WHITESPACE);
    }
    if KANA_DISALLOWED_RE.is_match(trimmed) {
        return Some(messages::KANA_NOT_HIRAGANA);
    }
    if char_len(trimmed) > KANA_MAX_CHARS {
        return Some(messages::KANA_TOO_LONG);
    }
    None
}

/// Years the birth-date rule accepts as calendar-valid.
pub const BIRTH_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=32767;

/// Parse a year/month/day triple into a calendar date.
///
/// Years outside [`BIRTH_YEAR_RANGE`] are not valid dates.
pub fn parse_birth_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.trim().parse().ok()?;
    if !BIRTH_YEAR_RANGE.contains(&year) {
        return None;
    }
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn check_birth_date(
    year: Option<&str>,
    month: Option<&str>,
    day: Option<&str>,
    today: NaiveDate,
) -> Option<&'static str> {
    let (Some(year), Some(month), Some(day)) = (present(year), present(month), present(day)) else {
        return Some(messages::BIRTH_DATE_REQUIRED);
    };
    let Some(date) = parse_birth_date(year, month, day) else {
        return Some(messages::BIRTH_DATE_INVALID);
    };
    if date > today {
        return Some(messages::BIRTH_DATE_FUTURE);
    }
    None
}

pub fn check_postal_code(value: Option<&str>) -> Option<&'static str> {
    let Some(code) = present(value) else {
        return Some(messages::POSTAL_CODE_REQUIRED);
    };
    if !POSTAL_CODE_RE.is_match(code) {
        return Some(messages::POSTAL_CODE_FORMAT);
    }
    None
}

/// Prefecture, city/town and building, reported under one key.
pub fn check_address(
    prefecture: Option<&str>,
    city_town: Option<&str>,
    building: Option<&str>,
) -> Option<&'static str> {
    let (Some(prefecture), Some(city_town)) = (present(prefecture), present(city_town)) else {
        return Some(messages::ADDRESS_REQUIRED);
    };
    if char_len(prefecture) > PREFECTURE_MAX_CHARS {
        return Some(messages::PREFECTURE_TOO_LONG);
    }
    let building_len = building.map(char_len).unwrap_or(0);
    if char_len(city_town) > CITY_TOWN_MAX_CHARS || building_len > BUILDING_MAX_CHARS {
        return Some(messages::CITY_TOWN_TOO_LONG);
    }
    None
}

pub fn check_tel(value: Option<&str>) -> Option<&'static str> {
    let Some(tel) = present(value) else {
        return Some(messages::TEL_REQUIRED);
    };
    if tel.chars().any(char::is_whitespace) {
        return Some(messages::TEL_WHITESPACE);
    }
    if !tel.chars().any(|c| c.is_ascii_digit()) {
        return Some(messages::TEL_NO_DIGIT);
    }
    if !TEL_RE.is_match(tel) {
        return Some(messages::TEL_FORMAT);
    }
    None
}

pub fn check_email(value: Option<&str>) -> Option<&'static str> {
    let Some(email) = present(value) else {
        return Some(messages::EMAIL_REQUIRED);
    };
    if !email.validate_email() {
        return Some(messages::EMAIL_INVALID);
    }
    None
}

/// Content-type check for an attached document. No attachment passes.
pub fn check_document(
    document: Option<&DocumentUpload>,
    message: &'static str,
) -> Option<&'static str> {
    let document = document?;
    if ALLOWED_DOCUMENT_TYPES.contains(&document.content_type.as_str()) {
        None
    } else {
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::messages::*;
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    // -- name --

    #[test]
    fn name_accepts_kanji_kana_and_inner_space() {
        assert_eq!(check_name(Some("山田太郎")), None);
        assert_eq!(check_name(Some("やまだ タロー")), None);
        assert_eq!(check_name(Some("山田　花子")), None);
    }

    #[test]
    fn name_required() {
        assert_eq!(check_name(None), Some(NAME_REQUIRED));
        assert_eq!(check_name(Some("")), Some(NAME_REQUIRED));
    }

    #[test]
    fn name_length_counts_characters() {
        assert_eq!(check_name(Some(&"山".repeat(20))), None);
        assert_eq!(check_name(Some(&"山".repeat(21))), Some(NAME_TOO_LONG));
    }

    #[test]
    fn name_rejects_edge_whitespace() {
        assert_eq!(check_name(Some(" 山田")), Some(EDGE_WHITESPACE));
        assert_eq!(check_name(Some("山田　")), Some(EDGE_WHITESPACE));
    }

    #[test]
    fn name_rejects_latin_and_digits() {
        assert_eq!(check_name(Some("Yamada")), Some(NAME_NOT_JAPANESE));
        assert_eq!(check_name(Some("山田1")), Some(NAME_NOT_JAPANESE));
    }

    #[test]
    fn name_reports_only_first_failing_condition() {
        let long_latin = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(check_name(Some(long_latin)), Some(NAME_TOO_LONG));
    }

    // -- kana --

    #[test]
    fn kana_accepts_hiragana_with_long_vowel() {
        assert_eq!(check_kana(Some("やまだたろう")), None);
        assert_eq!(check_kana(Some("らーめん たろう")), None);
    }

    #[test]
    fn kana_rejects_edge_whitespace_before_charset() {
        assert_eq!(check_kana(Some("　やまだ")), Some(EDGE_WHITESPACE));
        assert_eq!(check_kana(Some(" ヤマダ ")), Some(EDGE_WHITESPACE));
    }

    #[test]
    fn kana_rejects_katakana_and_kanji() {
        assert_eq!(check_kana(Some("ヤマダ")), Some(KANA_NOT_HIRAGANA));
        assert_eq!(check_kana(Some("山田")), Some(KANA_NOT_HIRAGANA));
    }

    #[test]
    fn kana_length_checked_last() {
        assert_eq!(check_kana(Some(&"あ".repeat(21))), Some(KANA_TOO_LONG));
        assert_eq!(check_kana(Some(&"ア".repeat(21))), Some(KANA_NOT_HIRAGANA));
    }

    // -- birth date --

    #[test]
    fn birth_date_requires_all_parts() {
        assert_eq!(
            check_birth_date(Some("1990"), None, Some("1"), today()),
            Some(BIRTH_DATE_REQUIRED)
        );
        assert_eq!(
            check_birth_date(Some("1990"), Some(""), Some("1"), today()),
            Some(BIRTH_DATE_REQUIRED)
        );
    }

    #[test]
    fn birth_date_must_exist_on_calendar() {
        assert_eq!(
            check_birth_date(Some("2023"), Some("2"), Some("29"), today()),
            Some(BIRTH_DATE_INVALID)
        );
        assert_eq!(
            check_birth_date(Some("1990"), Some("13"), Some("1"), today()),
            Some(BIRTH_DATE_INVALID)
        );
        assert_eq!(
            check_birth_date(Some("abc"), Some("1"), Some("1"), today()),
            Some(BIRTH_DATE_INVALID)
        );
        assert_eq!(
            check_birth_date(Some("2020"), Some("2"), Some("29"), today()),
            None
        );
    }

    #[test]
    fn birth_date_rejects_years_before_one() {
        for year in ["0", "0000", "-5"] {
            assert_eq!(
                check_birth_date(Some(year), Some("1"), Some("1"), today()),
                Some(BIRTH_DATE_INVALID),
                "year {year:?}"
            );
        }
        assert_eq!(
            check_birth_date(Some("0099"), Some("1"), Some("1"), today()),
            None
        );
        assert!(parse_birth_date("32768", "1", "1").is_none());
    }

    #[test]
    fn zero_is_present_not_missing() {
        assert_eq!(
            check_birth_date(Some("1990"), Some("0"), Some("1"), today()),
            Some(BIRTH_DATE_INVALID)
        );
    }

    #[test]
    fn birth_date_today_allowed_tomorrow_rejected() {
        assert_eq!(
            check_birth_date(Some("2024"), Some("6"), Some("15"), today()),
            None
        );
        assert_eq!(
            check_birth_date(Some("2024"), Some("06"), Some("16"), today()),
            Some(BIRTH_DATE_FUTURE)
        );
    }

    // -- postal code --

    #[test]
    fn postal_code_format() {
        assert_eq!(check_postal_code(Some("123-4567")), None);
        assert_eq!(check_postal_code(Some("1234567")), Some(POSTAL_CODE_FORMAT));
        assert_eq!(check_postal_code(Some("１２３-４５６７")), Some(POSTAL_CODE_FORMAT));
        assert_eq!(check_postal_code(Some("123-45678")), Some(POSTAL_CODE_FORMAT));
        assert_eq!(check_postal_code(None), Some(POSTAL_CODE_REQUIRED));
    }

    // -- address --

    #[test]
    fn address_requires_prefecture_and_city_town() {
        assert_eq!(check_address(Some("東京都"), None, None), Some(ADDRESS_REQUIRED));
        assert_eq!(check_address(Some(""), Some("新宿区"), None), Some(ADDRESS_REQUIRED));
        assert_eq!(check_address(Some("東京都"), Some("新宿区"), None), None);
    }

    #[test]
    fn address_length_limits() {
        let long = "あ".repeat(51);
        assert_eq!(
            check_address(Some("東京都東京都東京都東京"), Some("新宿区"), None),
            Some(PREFECTURE_TOO_LONG)
        );
        assert_eq!(
            check_address(Some("東京都"), Some(&long), None),
            Some(CITY_TOWN_TOO_LONG)
        );
        assert_eq!(
            check_address(Some("東京都"), Some("新宿区"), Some(&long)),
            Some(CITY_TOWN_TOO_LONG)
        );
        assert_eq!(
            check_address(Some("東京都"), Some("新宿区"), Some("")),
            None
        );
    }

    // -- tel --

    #[test]
    fn tel_accepts_hyphenated_numbers() {
        assert_eq!(check_tel(Some("090-1234-5678")), None);
        assert_eq!(check_tel(Some("03-1234-5678")), None);
        assert_eq!(check_tel(Some("0120-12-345")), None);
    }

    #[test]
    fn tel_condition_order() {
        assert_eq!(check_tel(Some("")), Some(TEL_REQUIRED));
        assert_eq!(check_tel(Some("090 1234 5678")), Some(TEL_WHITESPACE));
        assert_eq!(check_tel(Some("abc-defg")), Some(TEL_NO_DIGIT));
        assert_eq!(check_tel(Some("0901234-5678")), Some(TEL_FORMAT));
        assert_eq!(check_tel(Some("90-1234-5678")), Some(TEL_FORMAT));
        assert_eq!(check_tel(Some("09012345678")), Some(TEL_FORMAT));
    }

    #[test]
    fn tel_full_width_digits_are_not_digits() {
        assert_eq!(check_tel(Some("０９０-１２３４-５６７８")), Some(TEL_NO_DIGIT));
    }

    // -- email --

    #[test]
    fn email_well_formedness() {
        assert_eq!(check_email(Some("a@example.com")), None);
        assert_eq!(check_email(Some("not-an-email")), Some(EMAIL_INVALID));
        assert_eq!(check_email(Some("a@")), Some(EMAIL_INVALID));
        assert_eq!(check_email(None), Some(EMAIL_REQUIRED));
    }

    // -- documents --

    #[test]
    fn document_absent_passes() {
        assert_eq!(check_document(None, DOCUMENT1_TYPE), None);
    }

    #[test]
    fn document_type_allow_list() {
        for allowed in ALLOWED_DOCUMENT_TYPES {
            let doc = DocumentUpload::new(allowed);
            assert_eq!(check_document(Some(&doc), DOCUMENT1_TYPE), None);
        }
        let pdf = DocumentUpload::new("application/pdf");
        assert_eq!(check_document(Some(&pdf), DOCUMENT2_TYPE), Some(DOCUMENT2_TYPE));
    }
}
