use alloy::primitives::U256;

// Local hardhat / anvil node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
// the profiler's own events stay visible, dependencies only warn
pub const DEFAULT_LOG_FILTER: &str = "warn,token_gas_profiler=info";

// owner, actor_b, actor_c
pub const MIN_ACTORS: usize = 3;

pub const NATIVE_DECIMALS: u32 = 18;
pub const TOKEN_DECIMALS: u8 = 18;

// 10^18 base units make one whole token, 10^18 wei make one native unit
pub const BASE_UNITS_PER_TOKEN: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);
pub const WEI_PER_GWEI: U256 = U256::from_limbs([1_000_000_000, 0, 0, 0]);

// deployment defaults for a fresh token
pub const TOKEN_NAME: &str = "ERC4DoExample";
pub const TOKEN_SYMBOL: &str = "ERC4DO";
pub const NFT_SUPPLY: u64 = 500;
