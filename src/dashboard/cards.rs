//! The summary cards at the top of the dashboard.

use maud::{Markup, html};

use crate::{dashboard::load::FormattedBalance, endpoints, locale::Labels};

/// One summary card: a label, an icon and a balance figure.
struct Card<'a> {
    label: &'a str,
    icon_url: &'a str,
    icon_alt: &'a str,
    figure: &'a str,
    test_id: &'a str,
    is_total: bool,
}

impl Card<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_total { "card total" } else { "card" };

        html! {
            div class=(style)
            {
                header
                {
                    p { (self.label) }
                    img src=(self.icon_url) alt=(self.icon_alt);
                }

                h1 data-testid=(self.test_id) { (self.figure) }
            }
        }
    }
}

/// Renders the income, outcome and total cards, in that order.
///
/// The total card is styled differently from the other two.
pub(super) fn summary_cards(balance: &FormattedBalance, labels: &Labels) -> Markup {
    let cards = [
        Card {
            label: labels.income,
            icon_url: endpoints::INCOME_ICON,
            icon_alt: "Income",
            figure: &balance.income,
            test_id: "balance-income",
            is_total: false,
        },
        Card {
            label: labels.outcome,
            icon_url: endpoints::OUTCOME_ICON,
            icon_alt: "Outcome",
            figure: &balance.outcome,
            test_id: "balance-outcome",
            is_total: false,
        },
        Card {
            label: labels.total,
            icon_url: endpoints::TOTAL_ICON,
            icon_alt: "Total",
            figure: &balance.total,
            test_id: "balance-total",
            is_total: true,
        },
    ];

    html! {
        section class="card-container"
        {
            @for card in cards {
                (card.into_html())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{dashboard::load::FormattedBalance, locale::Locale};

    use super::summary_cards;

    fn balance() -> FormattedBalance {
        FormattedBalance {
            income: "$5,000.00".to_owned(),
            outcome: "$1,200.00".to_owned(),
            total: "$3,800.00".to_owned(),
        }
    }

    #[test]
    fn only_total_card_is_highlighted() {
        let markup = summary_cards(&balance(), Locale::EnUs.labels());
        let html = Html::parse_fragment(&markup.into_string());

        let cards = Selector::parse("div.card").unwrap();
        assert_eq!(html.select(&cards).count(), 3);

        let total_cards: Vec<_> = html
            .select(&Selector::parse("div.card.total").unwrap())
            .collect();
        assert_eq!(total_cards.len(), 1);

        let figure = total_cards[0]
            .select(&Selector::parse("h1").unwrap())
            .next()
            .unwrap();
        assert_eq!(figure.text().collect::<String>(), "$3,800.00");
    }

    #[test]
    fn labels_follow_locale() {
        let markup = summary_cards(&balance(), Locale::PtBr.labels());
        let html = Html::parse_fragment(&markup.into_string());

        let labels: Vec<String> = html
            .select(&Selector::parse("div.card header p").unwrap())
            .map(|label| label.text().collect())
            .collect();

        assert_eq!(labels, ["Entradas", "Saídas", "Total"]);
    }
}
