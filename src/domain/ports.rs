use crate::domain::model::{Card, Pokemon};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The fetch seam: anything that can look up one record by identifier.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self, id: u32) -> Result<Pokemon>;
}

/// The surface cards are appended to. Implementations use interior mutability
/// so a shared session can append from concurrent adds. Append and clear are
/// infallible.
pub trait DisplaySurface: Send + Sync {
    fn append(&self, card: Card);
    fn clear(&self);
    fn cards(&self) -> Vec<Card>;
    fn is_empty(&self) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    /// Exclusive upper bound for identifier selection.
    fn id_ceiling(&self) -> u32;
    fn card_count(&self) -> usize;
    fn rng_seed(&self) -> Option<u64>;
}
