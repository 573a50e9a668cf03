use crate::auction::{AuctionPhase, AuctionSnapshot, BidPolicy};
use crate::chain::ChainWriter;
use ethers::types::U256;
use ethers::utils::parse_ether;
use validator::{Validate, ValidationErrors};

/// 0.001 ETH, shown until the on-chain reserve price loads.
pub const DEFAULT_RESERVE_PRICE_WEI: u128 = 1_000_000_000_000_000;
pub const DEFAULT_MIN_INCREMENT_PERCENT: u8 = 5;

/// Smallest bid the contract will accept: the reserve price while there are
/// no bids, otherwise the leading bid raised by the increment percentage
/// (integer floor).
pub fn minimum_bid(snapshot: &AuctionSnapshot, policy: &BidPolicy) -> U256 {
    if snapshot.amount.is_zero() {
        return policy
            .reserve_price
            .unwrap_or_else(|| U256::from(DEFAULT_RESERVE_PRICE_WEI));
    }
    let pct = policy
        .min_increment_percent
        .unwrap_or(DEFAULT_MIN_INCREMENT_PERCENT);
    snapshot.amount + snapshot.amount * U256::from(pct) / U256::from(100u64)
}

/// User-entered bid amount, in ETH.
#[derive(Debug, Clone, PartialEq)]
pub struct BidInput {
    pub amount_eth: String,
}

impl Validate for BidInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let amount = match self.amount_eth.trim().parse::<f64>() {
            Ok(amount) => amount,
            Err(_) => return Err(ValidationErrors::new()),
        };
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationErrors::new());
        }
        Ok(())
    }
}

/// Local submission status. `Failed` carries the collaborator's message
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum TxStatus {
    PendingConfirmation,
    PendingInclusion,
    Succeeded,
    Failed(String),
}

impl TxStatus {
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            TxStatus::PendingConfirmation | TxStatus::PendingInclusion
        )
    }
}

/// One bid control, one status slot. Transitions are strictly sequential:
/// a new submission is refused while one is in flight.
#[derive(Debug, Default)]
pub struct BidController {
    pub status: Option<TxStatus>,
}

impl BidController {
    pub fn new() -> BidController {
        BidController { status: None }
    }

    pub async fn submit(
        &mut self,
        writer: &mut impl ChainWriter,
        input: &BidInput,
        snapshot: &AuctionSnapshot,
        policy: &BidPolicy,
        now: u64,
    ) -> Result<(), String> {
        if self.status.as_ref().map_or(false, TxStatus::is_pending) {
            return Err("A bid is already pending".to_string());
        }
        match snapshot.classify(now) {
            AuctionPhase::Active => (),
            AuctionPhase::EndedUnsettled => {
                return Err("Auction has ended, settlement required".to_string())
            }
            AuctionPhase::NoAuction => return Err("No active auction".to_string()),
        }
        // Submission is gated until both policy values have been read from
        // chain; the displayed minimum may use defaults, a submission may not.
        if !policy.is_loaded() {
            return Err("Bid parameters have not loaded yet".to_string());
        }
        if input.validate().is_err() {
            return Err("Bid amount must be a positive number".to_string());
        }
        let value = match parse_ether(input.amount_eth.trim()) {
            Ok(value) => value,
            Err(e) => return Err(e.to_string()),
        };

        println!("Submitting bid of {} wei", value);
        self.status = Some(TxStatus::PendingConfirmation);
        let tx_hash = match writer.submit_bid(value).await {
            Ok(tx_hash) => tx_hash,
            Err(e) => {
                self.status = Some(TxStatus::Failed(e.clone()));
                return Err(e);
            }
        };

        println!("Bid sent: {:?}, waiting for inclusion", tx_hash);
        self.status = Some(TxStatus::PendingInclusion);
        match writer.await_inclusion(tx_hash).await {
            Ok(()) => {
                self.status = Some(TxStatus::Succeeded);
                Ok(())
            }
            Err(e) => {
                self.status = Some(TxStatus::Failed(e.clone()));
                Err(e)
            }
        }
    }
}
