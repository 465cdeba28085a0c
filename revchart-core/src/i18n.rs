//! Fixed localization tables.
//!
//! Two languages, no fallback and no runtime loading. Keys are struct
//! fields, so a string missing from either table fails to compile.

use serde::{Deserialize, Serialize};

use crate::pipeline::format::{ConvertedUnit, CurrencyMode};

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageMode {
    /// Japanese.
    #[default]
    Primary,
    /// English.
    Secondary,
}

impl LanguageMode {
    pub fn toggle(self) -> Self {
        match self {
            LanguageMode::Primary => LanguageMode::Secondary,
            LanguageMode::Secondary => LanguageMode::Primary,
        }
    }

    /// BCP 47 tag of the language.
    pub fn tag(self) -> &'static str {
        resolve(self).language_tag
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "ja" | "jp" | "primary" => Some(LanguageMode::Primary),
            "en" | "secondary" => Some(LanguageMode::Secondary),
            _ => None,
        }
    }
}

/// Every static string the chart shows, for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizationTable {
    pub language_tag: &'static str,
    pub language_name: &'static str,
    pub title: &'static str,
    pub instructions: &'static str,
    pub companies_heading: &'static str,
    pub empty_selection_prompt: &'static str,
    pub no_data: &'static str,
    pub source_unavailable: &'static str,
    pub loading: &'static str,
    pub year_axis: &'static str,
    pub revenue_axis: &'static str,
    pub currency_base_label: &'static str,
    pub currency_converted_label: &'static str,
    pub currency_toggle_hint: &'static str,
    pub language_toggle_hint: &'static str,
    pub selection_toggle_hint: &'static str,
    pub quit_hint: &'static str,
    pub skipped_records: &'static str,
    pub converted_prefix: &'static str,
    pub yen_trillion_suffix: &'static str,
    pub yen_hundred_million_suffix: &'static str,
}

impl LocalizationTable {
    pub fn converted_suffix(&self, unit: ConvertedUnit) -> &'static str {
        match unit {
            ConvertedUnit::Trillion => self.yen_trillion_suffix,
            ConvertedUnit::HundredMillion => self.yen_hundred_million_suffix,
        }
    }

    /// Name of the currency currently shown.
    pub fn currency_label(&self, mode: CurrencyMode) -> &'static str {
        match mode {
            CurrencyMode::Base => self.currency_base_label,
            CurrencyMode::Converted => self.currency_converted_label,
        }
    }
}

pub const JAPANESE: LocalizationTable = LocalizationTable {
    language_tag: "ja",
    language_name: "日本語",
    title: "M7企業 売上推移グラフ",
    instructions: "表示する企業を選択してください。通貨と言語は切り替えできます。",
    companies_heading: "企業",
    empty_selection_prompt: "企業を1社以上選択してください",
    no_data: "表示できるデータがありません",
    source_unavailable: "データを取得できませんでした",
    loading: "読み込み中…",
    year_axis: "年度",
    revenue_axis: "売上高",
    currency_base_label: "ドル",
    currency_converted_label: "円",
    currency_toggle_hint: "通貨切替",
    language_toggle_hint: "English",
    selection_toggle_hint: "選択切替",
    quit_hint: "終了",
    skipped_records: "件の不正レコードを除外",
    converted_prefix: "",
    yen_trillion_suffix: "兆円",
    yen_hundred_million_suffix: "億円",
};

pub const ENGLISH: LocalizationTable = LocalizationTable {
    language_tag: "en",
    language_name: "English",
    title: "M7 Revenue Trends",
    instructions: "Choose the companies to show. Currency and language can be switched.",
    companies_heading: "Companies",
    empty_selection_prompt: "Select at least one company",
    no_data: "No data to display",
    source_unavailable: "Could not load revenue data",
    loading: "Loading…",
    year_axis: "Year",
    revenue_axis: "Revenue",
    currency_base_label: "USD",
    currency_converted_label: "JPY",
    currency_toggle_hint: "currency",
    language_toggle_hint: "日本語",
    selection_toggle_hint: "select",
    quit_hint: "quit",
    skipped_records: "malformed records skipped",
    converted_prefix: "¥",
    yen_trillion_suffix: "T",
    yen_hundred_million_suffix: "×100M",
};

/// Table for `lang`.
pub fn resolve(lang: LanguageMode) -> &'static LocalizationTable {
    match lang {
        LanguageMode::Primary => &JAPANESE,
        LanguageMode::Secondary => &ENGLISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_picks_fixed_tables() {
        assert_eq!(resolve(LanguageMode::Primary).language_tag, "ja");
        assert_eq!(resolve(LanguageMode::Secondary).language_tag, "en");
    }

    #[test]
    fn toggle_flips_between_two_languages() {
        assert_eq!(LanguageMode::Primary.toggle(), LanguageMode::Secondary);
        assert_eq!(LanguageMode::Secondary.toggle(), LanguageMode::Primary);
    }

    #[test]
    fn tags_round_trip() {
        for lang in [LanguageMode::Primary, LanguageMode::Secondary] {
            assert_eq!(LanguageMode::from_tag(lang.tag()), Some(lang));
        }
        assert_eq!(LanguageMode::from_tag("EN"), Some(LanguageMode::Secondary));
        assert_eq!(LanguageMode::from_tag("fr"), None);
    }

    #[test]
    fn no_table_has_blank_user_facing_strings() {
        for table in [&JAPANESE, &ENGLISH] {
            for s in [
                table.title,
                table.instructions,
                table.empty_selection_prompt,
                table.no_data,
                table.source_unavailable,
                table.year_axis,
                table.revenue_axis,
                table.yen_trillion_suffix,
            ] {
                assert!(!s.trim().is_empty(), "blank string in {}", table.language_tag);
            }
        }
    }

    #[test]
    fn converted_suffix_follows_unit() {
        assert_eq!(JAPANESE.converted_suffix(ConvertedUnit::Trillion), "兆円");
        assert_eq!(JAPANESE.converted_suffix(ConvertedUnit::HundredMillion), "億円");
        assert_eq!(ENGLISH.currency_label(CurrencyMode::Converted), "JPY");
    }
}
