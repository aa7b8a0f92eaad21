//! Clock port - 日付の抽象化
//!
//! グルーピングの基準日（today）を提供します。

use chrono::{Local, NaiveDate};

/// Clock は現在の日付を提供
///
/// # テスト容易性
/// - 本番では [`SystemClock`]
/// - テストでは [`FixedClock`] で日付を固定
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
