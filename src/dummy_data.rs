use crate::auction::{AuctionSnapshot, BidPolicy};
use crate::history::{BurnedEvent, SettledEvent};
use ethers::types::{Address, U256};
use std::str::FromStr;

/// Fixed "now" used by the fixtures and the tests.
pub const NOW: u64 = 1_700_000_000;

pub const LEADING_BID_WEI: u128 = 250_000_000_000_000_000; // 0.25 ETH
pub const RESERVE_PRICE_WEI: u128 = 2_000_000_000_000_000; // 0.002 ETH

pub enum SnapshotOption {
    Active,
    ActiveNoBids,
    EndedUnsettled,
    NeverStarted,
    Settled,
}

pub enum PolicyOption {
    Loaded,
    Unloaded,
    ReserveOnly,
}

pub fn bidder() -> Address {
    Address::from_str("0xFeebabE6b0418eC13b30aAdF129F5DcDd4f70CeA").unwrap()
}

pub fn winner() -> Address {
    Address::from_str("0xd2090025857B9C7B24387741f120538E928A3a59").unwrap()
}

pub fn new_snapshot(option: SnapshotOption) -> AuctionSnapshot {
    match option {
        SnapshotOption::Active => AuctionSnapshot {
            token_id: U256::from(7u64),
            amount: U256::from(LEADING_BID_WEI),
            start_time: NOW - 3_600,
            end_time: NOW + 3_600,
            bidder: bidder(),
            settled: false,
        },
        SnapshotOption::ActiveNoBids => AuctionSnapshot {
            token_id: U256::from(7u64),
            amount: U256::zero(),
            start_time: NOW - 3_600,
            end_time: NOW + 3_600,
            bidder: Address::zero(),
            settled: false,
        },
        SnapshotOption::EndedUnsettled => AuctionSnapshot {
            token_id: U256::from(7u64),
            amount: U256::from(LEADING_BID_WEI),
            start_time: NOW - 90_000,
            end_time: NOW - 60,
            bidder: bidder(),
            settled: false,
        },
        SnapshotOption::NeverStarted => AuctionSnapshot {
            token_id: U256::zero(),
            amount: U256::zero(),
            start_time: 0,
            end_time: 0,
            bidder: Address::zero(),
            settled: false,
        },
        SnapshotOption::Settled => AuctionSnapshot {
            token_id: U256::from(6u64),
            amount: U256::from(LEADING_BID_WEI),
            start_time: NOW - 180_000,
            end_time: NOW - 90_000,
            bidder: bidder(),
            settled: true,
        },
    }
}

pub fn new_policy(option: PolicyOption) -> BidPolicy {
    match option {
        PolicyOption::Loaded => BidPolicy {
            reserve_price: Some(U256::from(RESERVE_PRICE_WEI)),
            min_increment_percent: Some(5),
        },
        PolicyOption::ReserveOnly => BidPolicy {
            reserve_price: Some(U256::from(RESERVE_PRICE_WEI)),
            min_increment_percent: None,
        },
        PolicyOption::Unloaded => BidPolicy::default(),
    }
}

pub fn new_settled_event(token_id: u64, block_number: u64, amount_wei: u128) -> SettledEvent {
    SettledEvent {
        token_id: U256::from(token_id),
        winner: winner(),
        amount: U256::from(amount_wei),
        block_number,
    }
}

pub fn new_burned_event(token_id: u64, block_number: u64) -> BurnedEvent {
    BurnedEvent {
        token_id: U256::from(token_id),
        block_number,
    }
}
