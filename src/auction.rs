use crate::bid::minimum_bid;
use crate::countdown::Countdown;
use crate::utils::{format_eth, short_addr};
use ethers::types::{Address, U256};

/// Point-in-time read of the auction house state. Replaced wholesale on
/// every poll, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionSnapshot {
    pub token_id: U256,
    pub amount: U256,
    pub start_time: u64,
    pub end_time: u64,
    pub bidder: Address,
    pub settled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionPhase {
    NoAuction,
    Active,
    EndedUnsettled,
}

impl AuctionSnapshot {
    /// Lifecycle classification. Total over every reachable snapshot:
    /// unstarted or settled auctions are `NoAuction`, an elapsed end time
    /// means the auction awaits settlement, anything else is live.
    pub fn classify(&self, now: u64) -> AuctionPhase {
        if self.start_time == 0 || self.settled {
            return AuctionPhase::NoAuction;
        }
        if self.end_time <= now {
            return AuctionPhase::EndedUnsettled;
        }
        AuctionPhase::Active
    }

    /// The zero address is the contract's no-bidder sentinel. Affects only
    /// the bid label, not the lifecycle phase.
    pub fn has_bids(&self) -> bool {
        self.bidder != Address::zero()
    }
}

/// Reserve price and increment percentage as read from the auction house.
/// `None` until the corresponding read has succeeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidPolicy {
    pub reserve_price: Option<U256>,
    pub min_increment_percent: Option<u8>,
}

impl BidPolicy {
    pub fn is_loaded(&self) -> bool {
        self.reserve_price.is_some() && self.min_increment_percent.is_some()
    }
}

/// Renderable merge of snapshot, policy and clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionView {
    pub token_id: U256,
    pub phase: AuctionPhase,
    pub countdown: Countdown,
    pub bid_label: String,
    pub leader: Option<String>,
    pub minimum_bid: U256,
}

impl AuctionView {
    pub fn compose(snapshot: &AuctionSnapshot, policy: &BidPolicy, now: u64) -> AuctionView {
        let (bid_label, leader) = if snapshot.has_bids() {
            (
                format!("{} ETH", format_eth(snapshot.amount)),
                Some(short_addr(&snapshot.bidder)),
            )
        } else {
            ("No bids yet".to_string(), None)
        };
        AuctionView {
            token_id: snapshot.token_id,
            phase: snapshot.classify(now),
            countdown: Countdown::at(snapshot.end_time, now),
            bid_label,
            leader,
            minimum_bid: minimum_bid(snapshot, policy),
        }
    }
}
