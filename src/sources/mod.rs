//! Upstream source strategies.
//!
//! Exactly one source runs per invocation; it fetches its collection once
//! and surfaces the first entry as a [`RawItem`].

pub mod headline;
pub mod podcast;

pub use headline::HeadlineSource;
pub use podcast::PodcastSource;

use async_trait::async_trait;

use crate::core::models::RawItem;
use crate::errors::NotifyError;

/// A read-only upstream that can produce its most recent item.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn latest(&self) -> Result<RawItem, NotifyError>;
}
