//! Ports - 抽象化レイヤー
//!
//! 各 trait は外部の関心事を1つだけ隠蔽し、テストでは差し替え可能にします。
//! - `Clock`: 「今日」がいつか
//! - `ReleaseSource`: release レコードの供給元

pub mod clock;
pub mod release_source;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::release_source::ReleaseSource;
