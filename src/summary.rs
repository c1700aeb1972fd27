use std::fmt::{self, Display};

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::portfolio::Portfolio;

/// One summarized holding; field names double as the export header.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryRow {
    pub ticker: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub value: Decimal,
}

#[derive(Clone, Debug)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub total: Decimal,
}

/// Computes per-row values and the running total, in entry order.
pub fn summarize(portfolio: &Portfolio) -> Summary {
    let rows: Vec<SummaryRow> = portfolio
        .holdings
        .iter()
        .map(|holding| SummaryRow {
            ticker: holding.ticker.clone(),
            quantity: holding.quantity,
            price: holding.price,
            value: holding.value(),
        })
        .collect();
    let total = rows.iter().fold(Decimal::ZERO, |acc, row| acc + row.value);

    Summary { rows, total }
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8}{:>10}{:>12}{:>14}", "Ticker", "Qty", "Price", "Value")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8}{:>10.2}{:>12.2}{:>14.2}",
                row.ticker, row.quantity, row.price, row.value
            )?;
        }
        write!(
            f,
            "\nTotal investment: {}",
            format!("${:.2}", self.total).yellow()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Holding;
    use rust_decimal_macros::dec;

    fn sample_portfolio() -> Portfolio {
        let mut portfolio = Portfolio::new();
        portfolio.push(Holding {
            ticker: "AAPL".into(),
            quantity: dec!(10),
            price: dec!(180.0),
        });
        portfolio.push(Holding {
            ticker: "TSLA".into(),
            quantity: dec!(2),
            price: dec!(250.0),
        });
        portfolio
    }

    #[test]
    fn rows_and_total_follow_entry_order() {
        let summary = summarize(&sample_portfolio());
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].value, dec!(1800.0));
        assert_eq!(summary.rows[1].value, dec!(500.0));
        assert_eq!(summary.total, dec!(2300.0));
    }

    #[test]
    fn empty_portfolio_sums_to_zero() {
        let summary = summarize(&Portfolio::new());
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total, Decimal::ZERO);
    }

    #[test]
    fn render_uses_fixed_width_columns() {
        colored::control::set_override(false);
        let rendered = summarize(&sample_portfolio()).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Ticker         Qty       Price         Value");
        assert_eq!(lines[1], "AAPL         10.00      180.00       1800.00");
        assert_eq!(lines[2], "TSLA          2.00      250.00        500.00");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Total investment: $2300.00");
    }
}
