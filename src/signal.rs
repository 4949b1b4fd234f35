//! Moving-average signal for a single stock or ETF
//!
//! Quotes are supplied by the caller through a [`PriceSource`]; this module
//! never fetches market data itself.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Default short moving-average window (about one trading month)
pub const DEFAULT_SHORT_WINDOW: usize = 20;

/// Default long moving-average window (about one trading quarter)
pub const DEFAULT_LONG_WINDOW: usize = 60;

/// Supplier of daily closing prices, oldest first
pub trait PriceSource {
    fn closing_prices(&self, symbol: &str) -> Result<Vec<f64>>;
}

/// Closing prices read from a CSV file with a `Close` column
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(rename = "Close")]
    close: f64,
}

impl CsvPriceSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Vec<f64>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut prices = Vec::new();
        for result in csv_reader.deserialize() {
            let row: PriceRow = result?;
            prices.push(row.close);
        }
        Ok(prices)
    }
}

impl PriceSource for CsvPriceSource {
    /// The file holds one symbol, so `symbol` is only used for logging
    fn closing_prices(&self, symbol: &str) -> Result<Vec<f64>> {
        let file = std::fs::File::open(&self.path)?;
        let prices = Self::from_reader(file)?;
        log::info!("Loaded {} closes for {} from {}", prices.len(), symbol, self.path.display());
        Ok(prices)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Hold,
    Avoid,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Signal::Buy => "Buy",
            Signal::Hold => "Hold",
            Signal::Avoid => "Avoid",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReport {
    pub last_close: f64,
    pub short_ma: f64,
    pub long_ma: f64,
    pub signal: Signal,

    /// 0-100; 100 when close > short MA > long MA
    pub score: u32,
}

/// Mean of the last `window` values, or None if there are fewer
pub fn simple_moving_average(prices: &[f64], window: usize) -> Option<f64> {
    if window == 0 || prices.len() < window {
        return None;
    }
    let tail = &prices[prices.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Evaluate the latest close against a short and a long moving average.
///
/// Buy when close > short MA > long MA, Avoid when the close is below the
/// long MA, Hold otherwise.
pub fn evaluate_signal(prices: &[f64], short_window: usize, long_window: usize) -> Result<SignalReport> {
    let needed = short_window.max(long_window).max(1);
    let (Some(short_ma), Some(long_ma)) = (
        simple_moving_average(prices, short_window),
        simple_moving_average(prices, long_window),
    ) else {
        return Err(PlanError::InsufficientPrices {
            needed,
            available: prices.len(),
        });
    };
    let last_close = prices[prices.len() - 1];

    let mut score = 0;
    if last_close > long_ma {
        score += 40;
    }
    if short_ma > long_ma {
        score += 30;
    }
    if last_close > short_ma {
        score += 30;
    }

    let signal = if last_close > short_ma && short_ma > long_ma {
        Signal::Buy
    } else if last_close < long_ma {
        Signal::Avoid
    } else {
        Signal::Hold
    };

    Ok(SignalReport {
        last_close,
        short_ma,
        long_ma,
        signal,
        score,
    })
}
