//! Formatting of money and dates for display.
//!
//! The dashboard only talks to the [CurrencyFormatter] and [DateFormatter]
//! traits so that tests and other front ends can supply their own rules.

use numfmt::{Formatter, Precision};
use time::OffsetDateTime;
use time_tz::Tz;

use crate::{Error, locale::Locale, timezone::offset_at};

/// numfmt switches to scientific notation from 12 integer digits.
const NUMFMT_WHOLE_LIMIT: u64 = 1_000_000_000_000;

/// Turns an amount of money into display text.
pub trait CurrencyFormatter: Send + Sync {
    /// Format the magnitude of `amount`, e.g. `3800.0` as "$3,800.00".
    ///
    /// The sign is dropped; callers show direction separately.
    fn format_currency(&self, amount: f64) -> String;

    /// Format `amount` keeping its sign, e.g. `-200.0` as "-$200.00".
    fn format_signed_currency(&self, amount: f64) -> String;
}

/// Turns a timestamp into display text.
pub trait DateFormatter: Send + Sync {
    /// Format the calendar date of `timestamp`, e.g. "04/20/2020".
    fn format_date(&self, timestamp: OffsetDateTime) -> String;
}

/// Formats money and dates using the conventions of a [Locale].
pub struct LocaleFormatter {
    locale: Locale,
    timezone: &'static Tz,
    whole_fmt: Formatter,
}

impl LocaleFormatter {
    /// Create a formatter for `locale` that shows dates in `timezone`.
    ///
    /// # Errors
    /// Returns [Error::InvalidSeparator] if the locale's grouping separator
    /// cannot be used as a thousands separator.
    pub fn new(locale: Locale, timezone: &'static Tz) -> Result<Self, Error> {
        let separator = locale.grouping_separator();
        let whole_fmt = Formatter::new()
            .separator(separator)
            .map_err(|_| Error::InvalidSeparator(separator))?
            .precision(Precision::Decimals(0));

        Ok(Self {
            locale,
            timezone,
            whole_fmt,
        })
    }

    /// The locale this formatter follows.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Format an amount of `cents` without a sign or symbol, e.g. "1,234.56".
    fn format_number(&self, cents: u64) -> String {
        format!(
            "{}{}{:02}",
            self.format_whole(cents / 100),
            self.locale.decimal_separator(),
            cents % 100
        )
    }

    fn format_whole(&self, whole: u64) -> String {
        if whole < NUMFMT_WHOLE_LIMIT {
            // Zero is hardcoded as "0", which is what we want here
            return self.whole_fmt.fmt_string(whole as f64);
        }

        let separator = self.locale.grouping_separator();
        let low = whole % 1_000_000_000;

        format!(
            "{}{separator}{:03}{separator}{:03}{separator}{:03}",
            self.format_whole(whole / 1_000_000_000),
            low / 1_000_000,
            low / 1_000 % 1_000,
            low % 1_000
        )
    }
}

/// The magnitude of `amount` in whole cents, rounded half away from zero.
fn to_cents(amount: f64) -> u64 {
    (amount.abs() * 100.0).round() as u64
}

impl CurrencyFormatter for LocaleFormatter {
    fn format_currency(&self, amount: f64) -> String {
        format!(
            "{}{}",
            self.locale.currency_symbol(),
            self.format_number(to_cents(amount))
        )
    }

    fn format_signed_currency(&self, amount: f64) -> String {
        let cents = to_cents(amount);
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

        format!(
            "{sign}{}{}",
            self.locale.currency_symbol(),
            self.format_number(cents)
        )
    }
}

impl DateFormatter for LocaleFormatter {
    fn format_date(&self, timestamp: OffsetDateTime) -> String {
        let local = timestamp.to_offset(offset_at(self.timezone, timestamp));

        local
            .date()
            .format(self.locale.date_format())
            .unwrap_or_else(|error| {
                tracing::error!("could not format date {local}: {error}");
                local.date().to_string()
            })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{locale::Locale, timezone::get_timezone};

    use super::{CurrencyFormatter, DateFormatter, LocaleFormatter};

    fn formatter(locale: Locale) -> LocaleFormatter {
        LocaleFormatter::new(locale, get_timezone("Etc/UTC").unwrap()).unwrap()
    }

    #[test]
    fn formats_us_currency() {
        let formatter = formatter(Locale::EnUs);

        assert_eq!(formatter.format_currency(3800.0), "$3,800.00");
        assert_eq!(formatter.format_currency(12.3), "$12.30");
        assert_eq!(formatter.format_currency(0.5), "$0.50");
        assert_eq!(formatter.format_currency(1234567.89), "$1,234,567.89");
    }

    #[test]
    fn formats_brazilian_currency() {
        let formatter = formatter(Locale::PtBr);

        assert_eq!(formatter.format_currency(3800.0), "R$ 3.800,00");
        assert_eq!(formatter.format_currency(1234.56), "R$ 1.234,56");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(formatter(Locale::EnUs).format_currency(0.0), "$0.00");
        assert_eq!(formatter(Locale::PtBr).format_currency(0.0), "R$ 0,00");
    }

    #[test]
    fn drops_the_sign() {
        let formatter = formatter(Locale::EnUs);

        assert_eq!(
            formatter.format_currency(-1200.0),
            formatter.format_currency(1200.0)
        );
    }

    #[test]
    fn rounds_to_the_nearest_cent() {
        let formatter = formatter(Locale::EnUs);

        assert_eq!(formatter.format_currency(0.004), "$0.00");
        assert_eq!(formatter.format_currency(0.005), "$0.01");
        assert_eq!(formatter.format_currency(12.346), "$12.35");
        assert_eq!(formatter.format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn formats_large_amounts_in_full() {
        assert_eq!(
            formatter(Locale::EnUs).format_currency(1e12),
            "$1,000,000,000,000.00"
        );
        assert_eq!(
            formatter(Locale::EnUs).format_currency(123_456_789_012_345.0),
            "$123,456,789,012,345.00"
        );
        assert_eq!(
            formatter(Locale::PtBr).format_currency(1e12),
            "R$ 1.000.000.000.000,00"
        );
    }

    #[test]
    fn signed_currency_keeps_negative_sign() {
        assert_eq!(
            formatter(Locale::EnUs).format_signed_currency(-200.0),
            "-$200.00"
        );
        assert_eq!(
            formatter(Locale::PtBr).format_signed_currency(-1234.5),
            "-R$ 1.234,50"
        );
        assert_eq!(
            formatter(Locale::EnUs).format_signed_currency(3800.0),
            "$3,800.00"
        );
    }

    #[test]
    fn signed_currency_has_no_negative_zero() {
        let formatter = formatter(Locale::EnUs);

        assert_eq!(formatter.format_signed_currency(-0.001), "$0.00");
        assert_eq!(formatter.format_signed_currency(-0.0), "$0.00");
    }

    #[test]
    fn formats_dates_per_locale() {
        let timestamp = datetime!(2020-04-20 18:22:01 UTC);

        assert_eq!(formatter(Locale::EnUs).format_date(timestamp), "04/20/2020");
        assert_eq!(formatter(Locale::EnNz).format_date(timestamp), "20/04/2020");
        assert_eq!(formatter(Locale::PtBr).format_date(timestamp), "20/04/2020");
    }

    #[test]
    fn formats_dates_in_local_timezone() {
        let auckland = get_timezone("Pacific/Auckland").unwrap();
        let formatter = LocaleFormatter::new(Locale::EnNz, auckland).unwrap();

        // 18:22 UTC on the 20th is already the 21st in Auckland.
        let timestamp = datetime!(2020-04-20 18:22:01 UTC);

        assert_eq!(formatter.format_date(timestamp), "21/04/2020");
    }

    #[test]
    fn dates_use_the_offset_in_force_at_the_time() {
        let auckland = get_timezone("Pacific/Auckland").unwrap();
        let formatter = LocaleFormatter::new(Locale::EnNz, auckland).unwrap();

        // NZDT (+13) in January, NZST (+12) in June.
        assert_eq!(
            formatter.format_date(datetime!(2020-01-15 11:30 UTC)),
            "16/01/2020"
        );
        assert_eq!(
            formatter.format_date(datetime!(2020-06-30 11:30 UTC)),
            "30/06/2020"
        );
    }
}
