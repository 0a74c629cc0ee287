//! Table presenter: renders a row set with columns taken from the first
//! record, in that record's own order. Stateless with respect to its input.

use common::model::record::Record;
use yew::{html, Component, Context, Html, Properties};

/// Header set for a row sequence: the column names of the first record.
/// Later records with extra or missing keys do not change the header set.
pub fn table_columns(rows: &[Record]) -> Vec<String> {
    rows.first()
        .map(|record| record.columns().map(str::to_string).collect())
        .unwrap_or_default()
}

/// String form of one cell; missing or null fields render as empty text.
pub fn cell_text(record: &Record, column: &str) -> String {
    record
        .get(column)
        .map(|value| value.to_string())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct TableDisplayProps {
    pub rows: Vec<Record>,
}

pub struct TableDisplay;

impl Component for TableDisplay {
    type Message = ();
    type Properties = TableDisplayProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TableDisplay
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let rows = &ctx.props().rows;
        if rows.is_empty() {
            return html! { <p class="empty-notice">{"No data to display."}</p> };
        }

        let columns = table_columns(rows);
        html! {
            <div class="table-wrap">
                <table class="result-table">
                    <thead>
                        <tr>
                            { for columns.iter().map(|col| html! { <th>{ col.clone() }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for rows.iter().map(|record| html! {
                                <tr>
                                    { for columns.iter().map(|col| html! {
                                        <td>{ cell_text(record, col) }</td>
                                    }) }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}
