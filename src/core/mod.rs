pub mod fetcher;
pub mod renderer;
pub mod selector;
pub mod session;

pub use crate::domain::model::{Card, Pokemon, SessionState};
pub use crate::domain::ports::{ConfigProvider, DisplaySurface, RecordSource};
pub use crate::utils::error::Result;
