//! Pool Configuration
//!
//! Settings for [`BufferPool`](crate::pool::BufferPool). Values are resolved in
//! this order, highest priority first:
//!
//! 1. **Programmatic**: fields set on the struct
//! 2. **Environment**: `BUFFER_POOL_SIZE`, applied by [`PoolConfig::apply_env_overrides`]
//! 3. **JSON**: [`PoolConfig::from_json`]
//! 4. **Defaults**: [`PoolConfig::default()`]

use entities_data_handling::constants::DEFAULT_POOL_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the slab size
pub const ENV_POOL_SIZE: &str = "BUFFER_POOL_SIZE";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pool configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("pool size must be a positive multiple of 8, got {0}")]
    InvalidPoolSize(usize),
    #[error("{name} is not a valid size: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Pool settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Size in bytes of each slab; requests below half of it are pooled
    pub pool_size: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl PoolConfig {
    /// Config with an explicit slab size
    pub fn with_pool_size(pool_size: usize) -> Result<Self, ConfigError> {
        let config = Self { pool_size };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing fields keep their defaults
    ///
    /// ```rust
    /// use usecases_memory_management::PoolConfig;
    ///
    /// let config = PoolConfig::from_json(r#"{"pool_size": 16384}"#).unwrap();
    /// assert_eq!(config.pool_size, 16384);
    /// assert_eq!(PoolConfig::from_json("{}").unwrap(), PoolConfig::default());
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: PoolConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `BUFFER_POOL_SIZE` when it is set
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var(ENV_POOL_SIZE) {
            self.apply_pool_size_override(&value)?;
        }
        Ok(())
    }

    fn apply_pool_size_override(&mut self, value: &str) -> Result<(), ConfigError> {
        let pool_size = value
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidEnv {
                name: ENV_POOL_SIZE,
                value: value.to_string(),
            })?;
        Self::with_pool_size(pool_size)?;
        self.pool_size = pool_size;
        Ok(())
    }

    /// Check the slab size is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 || self.pool_size % 8 != 0 {
            return Err(ConfigError::InvalidPoolSize(self.pool_size));
        }
        Ok(())
    }

    /// Largest request served from a slab (exclusive bound)
    pub fn pooling_threshold(&self) -> usize {
        self.pool_size >> 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = PoolConfig::default();
        assert_eq!(config.pool_size, 8192);
        assert_eq!(config.pooling_threshold(), 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(
            PoolConfig::with_pool_size(0),
            Err(ConfigError::InvalidPoolSize(0))
        ));
        assert!(matches!(
            PoolConfig::with_pool_size(100),
            Err(ConfigError::InvalidPoolSize(100))
        ));
        assert!(PoolConfig::from_json(r#"{"pool_size": 12}"#).is_err());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            PoolConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PoolConfig::from_json(r#"{"pool_size": -8}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_pool_size_override() {
        let mut config = PoolConfig::default();
        config.apply_pool_size_override(" 1024 ").unwrap();
        assert_eq!(config.pool_size, 1024);

        let err = config.apply_pool_size_override("big").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
        assert!(config.apply_pool_size_override("7").is_err());
        assert_eq!(config.pool_size, 1024);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&PoolConfig::default()).unwrap();
        assert_eq!(json, r#"{"pool_size":8192}"#);
    }
}
