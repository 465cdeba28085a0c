//! Unit/currency formatting of series values.
//!
//! Series values are billions of US dollars. The base display is
//! `$<value>B`; the converted display re-expresses the amount in yen under
//! a [`ConversionPolicy`]. Every rate, unit and precision lives in the
//! constants below; [`CANONICAL_CONVERSION`] is the single policy used by
//! the chart.

use serde::{Deserialize, Serialize};

use crate::i18n::LocalizationTable;

/// Yen per US dollar.
pub const USD_TO_JPY: f64 = 150.0;

/// Decimal places in the base (USD) display.
pub const BASE_DECIMALS: usize = 1;
pub const BASE_SYMBOL: &str = "$";
pub const BASE_SUFFIX: &str = "B";

/// Trillions of yen, two decimals (58.66兆円).
pub const JPY_TRILLIONS: ConversionPolicy = ConversionPolicy {
    rate: USD_TO_JPY,
    unit: ConvertedUnit::Trillion,
    decimals: 2,
};

/// Hundreds of millions of yen, whole units (150000億円).
pub const JPY_HUNDRED_MILLIONS: ConversionPolicy = ConversionPolicy {
    rate: USD_TO_JPY,
    unit: ConvertedUnit::HundredMillion,
    decimals: 0,
};

/// The conversion every chart display goes through.
pub const CANONICAL_CONVERSION: ConversionPolicy = JPY_TRILLIONS;

/// Which currency values are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyMode {
    /// US dollars, billions.
    #[default]
    Base,
    /// Yen, in the canonical converted unit.
    Converted,
}

impl CurrencyMode {
    pub fn toggle(self) -> Self {
        match self {
            CurrencyMode::Base => CurrencyMode::Converted,
            CurrencyMode::Converted => CurrencyMode::Base,
        }
    }
}

/// Display unit of the converted currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvertedUnit {
    /// 10^12 yen (兆).
    Trillion,
    /// 10^8 yen (億).
    HundredMillion,
}

impl ConvertedUnit {
    /// How many display units one billion of converted currency makes.
    pub fn per_billion(self) -> f64 {
        match self {
            ConvertedUnit::Trillion => 1e-3,
            ConvertedUnit::HundredMillion => 10.0,
        }
    }
}

/// Rate, unit and precision of the converted display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionPolicy {
    pub rate: f64,
    pub unit: ConvertedUnit,
    pub decimals: usize,
}

impl ConversionPolicy {
    /// Convert a value in billions of base currency into display units.
    pub fn convert(&self, billions: f64) -> f64 {
        billions * self.rate * self.unit.per_billion()
    }
}

/// Numeric bar height for `value` under `mode` (same unit as the label).
pub fn plotted_value(value: f64, mode: CurrencyMode) -> f64 {
    plotted_value_with(value, mode, &CANONICAL_CONVERSION)
}

pub fn plotted_value_with(value: f64, mode: CurrencyMode, policy: &ConversionPolicy) -> f64 {
    match mode {
        CurrencyMode::Base => value,
        CurrencyMode::Converted => policy.convert(value),
    }
}

/// Render a series value (billions of base currency) for display.
pub fn format_value(value: f64, mode: CurrencyMode, table: &LocalizationTable) -> String {
    format_value_with(value, mode, table, &CANONICAL_CONVERSION)
}

pub fn format_value_with(
    value: f64,
    mode: CurrencyMode,
    table: &LocalizationTable,
    policy: &ConversionPolicy,
) -> String {
    match mode {
        CurrencyMode::Base => {
            format!("{BASE_SYMBOL}{value:.prec$}{BASE_SUFFIX}", prec = BASE_DECIMALS)
        }
        CurrencyMode::Converted => format!(
            "{}{:.*}{}",
            table.converted_prefix,
            policy.decimals,
            policy.convert(value),
            table.converted_suffix(policy.unit),
        ),
    }
}

/// Short unit caption for axis titles ("$B", "兆円", "¥T").
pub fn unit_caption(mode: CurrencyMode, table: &LocalizationTable) -> String {
    match mode {
        CurrencyMode::Base => format!("{BASE_SYMBOL}{BASE_SUFFIX}"),
        CurrencyMode::Converted => format!(
            "{}{}",
            table.converted_prefix,
            table.converted_suffix(CANONICAL_CONVERSION.unit)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{resolve, LanguageMode};

    fn ja() -> &'static LocalizationTable {
        resolve(LanguageMode::Primary)
    }

    fn en() -> &'static LocalizationTable {
        resolve(LanguageMode::Secondary)
    }

    #[test]
    fn base_format_has_symbol_precision_and_suffix() {
        assert_eq!(format_value(391.035, CurrencyMode::Base, en()), "$391.0B");
        assert_eq!(format_value(16.675, CurrencyMode::Base, ja()), "$16.7B");
        assert_eq!(format_value(0.0, CurrencyMode::Base, en()), "$0.0B");
    }

    #[test]
    fn converted_format_applies_rate_and_unit() {
        // 391.035B USD * 150 = 58,655.25B JPY = 58.66 trillion yen
        assert_eq!(format_value(391.035, CurrencyMode::Converted, ja()), "58.66兆円");
        assert_eq!(format_value(391.035, CurrencyMode::Converted, en()), "¥58.66T");
    }

    #[test]
    fn alternative_policy_is_selectable() {
        let s = format_value_with(100.0, CurrencyMode::Converted, ja(), &JPY_HUNDRED_MILLIONS);
        assert_eq!(s, "150000億円");
    }

    #[test]
    fn negative_and_zero_values_format_literally() {
        assert_eq!(format_value(-2.5, CurrencyMode::Base, en()), "$-2.5B");
        assert_eq!(format_value(0.0, CurrencyMode::Converted, ja()), "0.00兆円");
    }

    #[test]
    fn plotted_value_matches_display_unit() {
        assert_eq!(plotted_value(100.0, CurrencyMode::Base), 100.0);
        assert!((plotted_value(100.0, CurrencyMode::Converted) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn currency_toggle_flips() {
        assert_eq!(CurrencyMode::Base.toggle(), CurrencyMode::Converted);
        assert_eq!(CurrencyMode::Base.toggle().toggle(), CurrencyMode::Base);
    }

    #[test]
    fn unit_captions() {
        assert_eq!(unit_caption(CurrencyMode::Base, ja()), "$B");
        assert_eq!(unit_caption(CurrencyMode::Converted, ja()), "兆円");
        assert_eq!(unit_caption(CurrencyMode::Converted, en()), "¥T");
    }
}
