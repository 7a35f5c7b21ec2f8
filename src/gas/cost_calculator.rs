use super::price_config::PriceConfig;
use crate::common::{BASE_UNITS_PER_TOKEN, NATIVE_DECIMALS, ProfilerError};
use alloy::primitives::U256;
use rust_decimal::Decimal;

// cost of one confirmed transfer, in gas, wei and fiat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    pub gas_used: U256,
    pub gas_cost_native: U256, // wei
    pub gas_cost_fiat: Decimal,
    pub whole_tokens: U256,

    // only set when at least one whole token moved
    pub effective_gas_per_token: Option<U256>,
    pub effective_cost_per_token_native: Option<U256>,
    pub effective_cost_per_token_fiat: Option<Decimal>,
}

impl CostBreakdown {
    pub fn has_per_token_cost(&self) -> bool {
        self.effective_gas_per_token.is_some()
    }
}

pub struct CostCalculator;

impl CostCalculator {
    /// Turns the gas used by one transfer of `amount` base units into a full
    /// cost breakdown.
    ///
    /// The per-token fiat figure is converted from the truncated per-token wei
    /// value, so it can sit up to one wei (times the fiat rate) below the
    /// exact ratio.
    pub fn compute_cost(
        gas_used: U256,
        amount: U256,
        price: &PriceConfig,
    ) -> Result<CostBreakdown, ProfilerError> {
        if gas_used.is_zero() {
            return Err(ProfilerError::ArithmeticAnomaly(
                "confirmed transfer reported zero gas used".to_string(),
            ));
        }

        let rate = price.native_to_fiat_rate();
        let gas_cost_native = Self::gas_cost_native(gas_used, price)?;
        let gas_cost_fiat = Self::native_to_fiat(gas_cost_native, rate)?;
        let whole_tokens = Self::whole_tokens(amount);

        let mut breakdown = CostBreakdown {
            gas_used,
            gas_cost_native,
            gas_cost_fiat,
            whole_tokens,
            effective_gas_per_token: None,
            effective_cost_per_token_native: None,
            effective_cost_per_token_fiat: None,
        };

        if !whole_tokens.is_zero() {
            let cost_per_token = gas_cost_native / whole_tokens;

            breakdown.effective_gas_per_token = Some(gas_used / whole_tokens);
            breakdown.effective_cost_per_token_native = Some(cost_per_token);
            breakdown.effective_cost_per_token_fiat = Some(Self::native_to_fiat(cost_per_token, rate)?);
        }

        Ok(breakdown)
    }

    // exact wei paid for the gas
    pub fn gas_cost_native(gas_used: U256, price: &PriceConfig) -> Result<U256, ProfilerError> {
        gas_used.checked_mul(price.gas_price_wei()).ok_or_else(|| {
            ProfilerError::ArithmeticAnomaly(format!(
                "gas cost overflow: {} gas at {} wei",
                gas_used,
                price.gas_price_wei()
            ))
        })
    }

    // truncating, half a token counts as zero
    pub fn whole_tokens(amount: U256) -> U256 {
        amount / BASE_UNITS_PER_TOKEN
    }

    pub fn native_to_fiat(wei: U256, rate: Decimal) -> Result<Decimal, ProfilerError> {
        let out_of_range = || {
            ProfilerError::ArithmeticAnomaly(format!("{wei} wei is out of range for a fiat conversion"))
        };

        let wei = u128::try_from(wei).map_err(|_| out_of_range())?;
        let wei = i128::try_from(wei).map_err(|_| out_of_range())?;
        let native = Decimal::try_from_i128_with_scale(wei, NATIVE_DECIMALS).map_err(|_| out_of_range())?;

        native.checked_mul(rate).ok_or_else(out_of_range)
    }
}
