//! Engine configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::MAX_AMOUNT;
use crate::calculations::marginal::DEFAULT_MARGINAL_INCREMENT;
use crate::error::TaxError;

/// Tunables for [`TaxEngine`](crate::TaxEngine).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.marginal_increment, dec!(1000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Income step used by the finite-difference marginal-rate estimate.
    pub marginal_increment: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            marginal_increment: DEFAULT_MARGINAL_INCREMENT,
        }
    }
}

impl EngineConfig {
    /// # Errors
    ///
    /// [`TaxError::InvalidConfig`] when the increment is zero, negative, or
    /// larger than [`MAX_AMOUNT`].
    pub fn validate(&self) -> Result<(), TaxError> {
        if self.marginal_increment <= Decimal::ZERO {
            return Err(TaxError::InvalidConfig(format!(
                "marginal increment must be positive, got {}",
                self.marginal_increment
            )));
        }
        if self.marginal_increment > MAX_AMOUNT {
            return Err(TaxError::InvalidConfig(format!(
                "marginal increment must not exceed {MAX_AMOUNT}, got {}",
                self.marginal_increment
            )));
        }
        Ok(())
    }
}
