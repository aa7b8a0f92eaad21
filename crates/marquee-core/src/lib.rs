//! marquee-core
//!
//! Core building blocks for the Marquee release catalogue.
//!
//! # モジュール構成
//! - **domain**: データ形状（`Release`, `GroupedReleases`）、日付パース、エラー
//! - **ports**: 抽象化レイヤー（`Clock`, `ReleaseSource`）
//! - **impls**: 実装（JSON ファイル、InMemory）
//! - **app**: グルーピング規則と `ReleaseService`

pub mod domain;
pub mod ports;
pub mod impls;
pub mod app;

pub use app::{GroupingConfig, ReleaseService, UnparseablePolicy, group_releases};
pub use domain::{GroupedReleases, MarqueeError, Release};
