//! HTML templates using Askama.

use askama::Template;

use crate::domain::trade::Trade;

/// A ledger row preformatted for display, keyed by column.
pub struct TradeRow {
    pub date: String,
    pub ticker: String,
    pub entry: String,
    pub exit: String,
    pub quantity: String,
    pub price: String,
    pub strategy: String,
    pub notes: String,
}

fn optional_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => String::new(),
    }
}

impl TradeRow {
    pub fn from_trade(trade: &Trade) -> Self {
        Self {
            date: trade.date.format("%Y-%m-%d").to_string(),
            ticker: trade.ticker.clone(),
            entry: optional_price(trade.entry),
            exit: optional_price(trade.exit),
            quantity: trade.quantity.to_string(),
            price: format!("{:.2}", trade.price),
            strategy: trade.strategy.clone(),
            notes: trade.notes.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub rows: Vec<TradeRow>,
    pub chart_svg: String,
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl DashboardTemplate {
    /// Partial used when HTMX swaps the journal in place after a submission.
    pub fn fragment(&self) -> String {
        let mut html = String::from("<div id=\"journal\">");

        html.push_str("<table class=\"trades\">");
        html.push_str(
            "<tr><th>Date</th><th>Ticker</th><th>Entry</th><th>Exit</th>\
             <th>Quantity</th><th>Price</th><th>Strategy</th><th>Notes</th></tr>",
        );
        for row in &self.rows {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                row.date,
                escape(&row.ticker),
                row.entry,
                row.exit,
                row.quantity,
                row.price,
                escape(&row.strategy),
                escape(&row.notes),
            ));
        }
        html.push_str("</table>");

        html.push_str("<h2>Equity Curve</h2>");
        html.push_str(&format!("<div class=\"chart\">{}</div>", self.chart_svg));

        html.push_str("</div>");
        html
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
    pub status: u16,
}

impl<'a> ErrorTemplate<'a> {
    pub fn fragment(&self) -> String {
        format!(
            "<div id=\"error\" class=\"error\"><h1>Error {}</h1><p>{}</p></div>",
            self.status,
            escape(self.message)
        )
    }
}
