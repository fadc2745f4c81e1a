use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pokedeck")]
#[command(about = "Draw random creature cards from a record-lookup service")]
pub struct CliConfig {
    #[arg(long, default_value = "https://pokeapi.co/api/v2/pokemon")]
    pub api_base: String,

    /// Exclusive upper bound for the random identifier draw.
    #[arg(long, default_value = "893")]
    pub ceiling: u32,

    /// How many cards to draw this run.
    #[arg(long, default_value = "1")]
    pub count: usize,

    /// Seed the RNG for reproducible draws.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base
    }

    fn id_ceiling(&self) -> u32 {
        self.ceiling
    }

    fn card_count(&self) -> usize {
        self.count
    }

    fn rng_seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_positive_number("ceiling", self.ceiling as usize, 1)?;
        validate_range("count", self.count, 1, 100)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            api_base: "https://pokeapi.co/api/v2/pokemon".to_string(),
            ceiling: 893,
            count: 1,
            seed: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_zero_ceiling_is_rejected() {
        let mut config = base_config();
        config.ceiling = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_api_base_is_rejected() {
        let mut config = base_config();
        config.api_base = "ftp://pokeapi.co".to_string();
        assert!(config.validate().is_err());
    }
}
