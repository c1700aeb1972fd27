use std::fmt::{self, Display};
use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::console::Console;
use crate::prices::PriceTable;

/// One portfolio entry. Value is always derived from quantity and price,
/// never stored.
#[derive(Clone, Debug, Serialize)]
pub struct Holding {
    pub ticker: String,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl Holding {
    pub fn value(&self) -> Decimal {
        self.quantity * self.price
    }
}

/// Holdings in entry order, built over one session.
#[derive(Clone, Debug, Default)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self { holdings: vec![] }
    }

    pub fn push(&mut self, holding: Holding) {
        self.holdings.push(holding);
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.holdings
            .iter()
            .fold(Decimal::ZERO, |acc, holding| acc + holding.value())
    }
}

impl Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = vec![];
        for holding in self.holdings.iter() {
            s.push(format!(
                "{} {} @ {}",
                holding.ticker,
                holding.quantity.to_string().purple(),
                holding.price
            ));
        }
        write!(f, "~{} : {}", self.total().to_string().yellow(), s.join(" / "))
    }
}

/// Interactive collection loop. An empty ticker ends the session; a ticker
/// missing from the table falls back to manual pricing or is skipped.
pub fn collect<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prices: &PriceTable,
) -> Result<Portfolio> {
    let mut portfolio = Portfolio::new();

    loop {
        let ticker = console
            .prompt("\nEnter a ticker (or press Enter to finish): ")?
            .to_uppercase();
        if ticker.is_empty() {
            break;
        }

        let quantity = console.prompt_amount("Quantity (number of shares): ")?;

        let price = match prices.get(&ticker) {
            Some(price) => {
                console.println(format!("Using listed price for {ticker} : ${price:.2}"))?;
                price
            }
            None => {
                console.println(format!("{ticker} is not in the price list."))?;
                if console.confirm("Enter a price manually? (y/N): ")? {
                    console.prompt_amount("Price per share: $")?
                } else {
                    console.println(format!("Skipping {ticker}."))?;
                    continue;
                }
            }
        };

        debug!("adding {} {} @ {}", quantity, ticker, price);
        portfolio.push(Holding {
            ticker,
            quantity,
            price,
        });
    }

    Ok(portfolio)
}
