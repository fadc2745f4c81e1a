pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{fetcher::HttpFetcher, session::Session};
pub use domain::model::{Card, Pokemon, SessionState};
pub use domain::ports::{ConfigProvider, DisplaySurface, RecordSource};
pub use utils::error::{DexError, Result};
