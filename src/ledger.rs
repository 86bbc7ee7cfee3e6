//! Month closing sheet: a running cash balance carried from day to day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDay {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub income: i64,
    #[serde(default)]
    pub expense: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingRow {
    pub date: Option<NaiveDate>,
    pub income: i64,
    pub expense: i64,
    pub daily_balance: i64,
    pub closing_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingSheet {
    pub opening_balance: i64,
    pub rows: Vec<ClosingRow>,
    pub final_balance: i64,
}

/// Side entries taken out of the final balance to get the cash actually in hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashAdjustments {
    #[serde(default)]
    pub recovery: i64,
    #[serde(default)]
    pub extra_amount: i64,
    #[serde(default)]
    pub receivables: i64,
}

impl ClosingRow {
    fn new(day: &LedgerDay, daily_balance: i64, closing_balance: i64) -> Self {
        Self {
            date: day.date,
            income: day.income,
            expense: day.expense,
            daily_balance,
            closing_balance,
        }
    }
}

/// Folds `days` over `opening_balance` in the order given
///
/// Rows must already be chronological, every closing balance depends on all rows before it.
/// Balances saturate at the `i64` bounds, see [`checked_closing_sheet`] to refuse such input instead.
pub fn closing_sheet(opening_balance: i64, days: &[LedgerDay]) -> ClosingSheet {
    let rows = days.iter()
        .scan(opening_balance, |balance, day| {
            let daily_balance = day.income.saturating_sub(day.expense);
            *balance = balance.saturating_add(daily_balance);

            Some(ClosingRow::new(day, daily_balance, *balance))
        })
        .collect::<Vec<_>>();

    let final_balance = rows.last().map(|r| r.closing_balance).unwrap_or(opening_balance);

    ClosingSheet {
        opening_balance,
        rows,
        final_balance,
    }
}

/// Same fold as [`closing_sheet`], `None` once any balance leaves the `i64` range
pub fn checked_closing_sheet(opening_balance: i64, days: &[LedgerDay]) -> Option<ClosingSheet> {
    let mut balance = opening_balance;
    let mut rows = Vec::with_capacity(days.len());

    for day in days {
        let daily_balance = day.income.checked_sub(day.expense)?;
        balance = balance.checked_add(daily_balance)?;

        rows.push(ClosingRow::new(day, daily_balance, balance));
    }

    Some(ClosingSheet {
        opening_balance,
        rows,
        final_balance: balance,
    })
}

pub fn cash_in_hand(final_balance: i64, adjustments: &CashAdjustments) -> i64 {
    final_balance
        .saturating_sub(adjustments.recovery)
        .saturating_sub(adjustments.extra_amount)
        .saturating_sub(adjustments.receivables)
}

pub fn checked_cash_in_hand(final_balance: i64, adjustments: &CashAdjustments) -> Option<i64> {
    final_balance
        .checked_sub(adjustments.recovery)?
        .checked_sub(adjustments.extra_amount)?
        .checked_sub(adjustments.receivables)
}
