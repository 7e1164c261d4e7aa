//! The table listing every transaction.

use maud::{Markup, html};

use crate::{dashboard::load::TransactionRow, locale::Labels};

/// Renders one row per transaction, in the order given.
///
/// Outgoing amounts are prefixed with "- "; incoming amounts have no prefix.
pub(super) fn transactions_table(rows: &[TransactionRow], labels: &Labels) -> Markup {
    html! {
        section class="table-container"
        {
            table
            {
                thead
                {
                    tr
                    {
                        th { (labels.title) }
                        th { (labels.value) }
                        th { (labels.category) }
                        th { (labels.date) }
                    }
                }

                tbody
                {
                    @for row in rows {
                        tr data-transaction-id=(row.id)
                        {
                            td class="title" { (row.title) }
                            td class=(row.kind.as_str())
                            {
                                (row.kind.sign_prefix()) (row.formatted_value)
                            }
                            td { (row.category) }
                            td { (row.formatted_date) }
                        }
                    }
                }
            }
        }
    }
}
