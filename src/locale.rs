//! The display conventions for each supported locale.

use clap::ValueEnum;
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// The locale used to format money and dates and to label the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    /// US English, e.g. "$1,234.56" and "04/20/2020".
    #[default]
    #[value(name = "en-US")]
    EnUs,
    /// New Zealand English, e.g. "$1,234.56" and "20/04/2020".
    #[value(name = "en-NZ")]
    EnNz,
    /// Brazilian Portuguese, e.g. "R$ 1.234,56" and "20/04/2020".
    #[value(name = "pt-BR")]
    PtBr,
}

/// The text shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub income: &'static str,
    pub outcome: &'static str,
    pub total: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
}

const ENGLISH_LABELS: Labels = Labels {
    income: "Income",
    outcome: "Outcome",
    total: "Total",
    title: "Title",
    value: "Price",
    category: "Category",
    date: "Date",
    loading: "Loading transactions...",
    load_failed: "Could not load your transactions",
};

const PORTUGUESE_LABELS: Labels = Labels {
    income: "Entradas",
    outcome: "Saídas",
    total: "Total",
    title: "Título",
    value: "Preço",
    category: "Categoria",
    date: "Data",
    loading: "Carregando transações...",
    load_failed: "Não foi possível carregar suas transações",
};

impl Locale {
    /// The text placed before a currency amount.
    pub fn currency_symbol(self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnNz => "$",
            Locale::PtBr => "R$ ",
        }
    }

    /// The character between the whole and fractional part of a number.
    pub fn decimal_separator(self) -> char {
        match self {
            Locale::EnUs | Locale::EnNz => '.',
            Locale::PtBr => ',',
        }
    }

    /// The character between groups of thousands.
    pub fn grouping_separator(self) -> char {
        match self {
            Locale::EnUs | Locale::EnNz => ',',
            Locale::PtBr => '.',
        }
    }

    /// The `time` format description for dates.
    pub fn date_format(self) -> &'static [BorrowedFormatItem<'static>] {
        match self {
            Locale::EnUs => format_description!("[month]/[day]/[year]"),
            Locale::EnNz | Locale::PtBr => format_description!("[day]/[month]/[year]"),
        }
    }

    /// The page text in this locale's language.
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::EnUs | Locale::EnNz => &ENGLISH_LABELS,
            Locale::PtBr => &PORTUGUESE_LABELS,
        }
    }

    /// The value for the `lang` attribute of the page.
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnNz => "en-NZ",
            Locale::PtBr => "pt-BR",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::Locale;

    #[test]
    fn parses_language_tags() {
        assert_eq!(Locale::from_str("pt-BR", false), Ok(Locale::PtBr));
        assert_eq!(Locale::from_str("en-NZ", false), Ok(Locale::EnNz));
        assert!(Locale::from_str("fr-FR", false).is_err());
    }

    #[test]
    fn separators_differ() {
        for locale in Locale::value_variants() {
            assert_ne!(locale.decimal_separator(), locale.grouping_separator());
        }
    }
}
