use alloy::primitives::U256;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::common::{ProfilerError, WEI_PER_GWEI};

// Fixed pricing inputs for a run. Built once before any scenario and only
// ever handed out by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceConfig {
    gas_price_wei: U256,          // Price paid per unit of gas
    native_to_fiat_rate: Decimal, // Fiat value of one whole native unit
}

impl PriceConfig {
    pub fn new(gas_price_wei: U256, native_to_fiat_rate: Decimal) -> Result<Self, ProfilerError> {
        if native_to_fiat_rate < Decimal::ZERO {
            return Err(ProfilerError::InvalidConfig(format!(
                "native to fiat rate cannot be negative, got {native_to_fiat_rate}"
            )));
        }

        Ok(Self {
            gas_price_wei,
            native_to_fiat_rate,
        })
    }

    pub fn from_gwei(gas_price_gwei: u64, native_to_fiat_rate: Decimal) -> Result<Self, ProfilerError> {
        Self::new(U256::from(gas_price_gwei) * WEI_PER_GWEI, native_to_fiat_rate)
    }

    pub fn gas_price_wei(&self) -> U256 {
        self.gas_price_wei
    }

    pub fn native_to_fiat_rate(&self) -> Decimal {
        self.native_to_fiat_rate
    }
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            gas_price_wei: U256::from(60) * WEI_PER_GWEI, // 60 gwei
            native_to_fiat_rate: dec!(2600),              // USD per ETH
        }
    }
}
