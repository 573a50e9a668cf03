use ethers::types::{Address, U256};
use ethers::utils::format_units;
use std::env;

pub fn get_env_var(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("env var \"{}\" not set", name))
}

/// `0x7e65…f10a` style rendering for addresses.
pub fn short_addr(addr: &Address) -> String {
    let hex = hex::encode(addr);
    format!("0x{}…{}", &hex[..4], &hex[hex.len() - 4..])
}

/// Wei amount rendered as ETH with four decimal places.
pub fn format_eth(wei: U256) -> String {
    match format_units(wei, "ether") {
        Ok(eth) => match eth.parse::<f64>() {
            Ok(eth) => format!("{:.4}", eth),
            Err(_) => eth,
        },
        Err(_) => wei.to_string(),
    }
}
