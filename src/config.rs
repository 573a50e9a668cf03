use crate::utils::get_env_var;
use ethers::types::Address;
use lazy_static::lazy_static;
use std::str::FromStr;

pub const HAIKU_TOKEN: &str = "0x7E65A990165C29c2bcda67F495547472Fd05F10A";
pub const AUCTION_HOUSE: &str = "0xfD23Baf89Fa34C420aCF0Ddb8Fb13a9Ea74166Df";

/// Base mainnet.
pub const CHAIN_ID: u64 = 8453;
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";

lazy_static! {
    pub static ref HAIKU_TOKEN_ADDRESS: Address = Address::from_str(HAIKU_TOKEN).unwrap();
    pub static ref AUCTION_HOUSE_ADDRESS: Address = Address::from_str(AUCTION_HOUSE).unwrap();
}

pub fn rpc_url() -> String {
    get_env_var("BASE_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string())
}
