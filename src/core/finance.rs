//! Currency purchase ledger and buy/wait advice on the live euro quote.

use crate::domain::model::Purchase;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_BASE_RATE: f64 = 6.60;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PurchaseSummary {
    pub total_eur: f64,
    pub total_brl: f64,
    /// BRL paid per euro on average; 0 when nothing was bought yet.
    pub average_rate: f64,
    pub target_eur: f64,
    pub remaining_eur: f64,
    /// Share of the target already bought, capped at 100.
    pub target_progress: f64,
}

impl PurchaseSummary {
    pub fn from_purchases(purchases: &[Purchase], target_eur: f64) -> Self {
        let total_eur: f64 = purchases.iter().map(|p| p.amount_eur).sum();
        let total_brl: f64 = purchases.iter().map(|p| p.total_brl).sum();

        let average_rate = if total_eur > 0.0 {
            total_brl / total_eur
        } else {
            0.0
        };
        let target_progress = if target_eur > 0.0 {
            (total_eur / target_eur * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            total_eur,
            total_brl,
            average_rate,
            target_eur,
            remaining_eur: (target_eur - total_eur).max(0.0),
            target_progress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RateSignal {
    CurrentQuote,
    Buy,
    VeryCheap,
    Rising,
    VeryExpensive,
}

impl RateSignal {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CurrentQuote => "Current quote",
            Self::Buy => "Buy!",
            Self::VeryCheap => "Very cheap!",
            Self::Rising => "Price rising",
            Self::VeryExpensive => "Very expensive",
        }
    }
}

impl fmt::Display for RateSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateAdvice {
    pub current_rate: f64,
    pub base_rate: f64,
    /// Distance from the base rate, in percent.
    pub diff_percent: f64,
    pub signal: RateSignal,
}

/// Compares the live quote with the rate the user considers normal.
pub fn rate_advice(current_rate: f64, base_rate: f64) -> RateAdvice {
    let diff_percent = if base_rate > 0.0 {
        (current_rate - base_rate) / base_rate * 100.0
    } else {
        0.0
    };

    let mut signal = RateSignal::CurrentQuote;
    if current_rate < base_rate {
        signal = RateSignal::Buy;
    }

    if diff_percent <= -15.0 {
        signal = RateSignal::VeryCheap;
    } else if (4.0..15.0).contains(&diff_percent) {
        signal = RateSignal::Rising;
    } else if diff_percent >= 15.0 {
        signal = RateSignal::VeryExpensive;
    }

    RateAdvice {
        current_rate,
        base_rate,
        diff_percent,
        signal,
    }
}
