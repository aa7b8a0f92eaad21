//! ReleaseSource port - release レコードの供給元
//!
//! カタログの中身を用意する側（ファイル、fixture など）は、
//! 供給元の順序のまま [`Release`] のリストを返すだけでよい。

use async_trait::async_trait;

use crate::domain::{MarqueeError, Release};

#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Load every release, preserving source order.
    async fn load(&self) -> Result<Vec<Release>, MarqueeError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}
