use crate::chain::LogQuery;
use ethers::types::{Address, U256};

/// Display bound on the feed, applied after the full merge is ordered.
pub const HISTORY_DISPLAY_LIMIT: usize = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct SettledEvent {
    pub token_id: U256,
    pub winner: Address,
    pub amount: U256,
    pub block_number: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BurnedEvent {
    pub token_id: U256,
    pub block_number: u64,
}

/// How a past auction concluded. The tag comes from the event category the
/// record was observed in, never inferred downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Settled { winner: Address, amount: U256 },
    Burned,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub token_id: U256,
    pub outcome: Outcome,
    pub block_number: u64,
}

/// Merge both completion streams into one feed, most recent block first.
/// The full merged set is ordered before the display bound is applied.
pub fn merge(settled: Vec<SettledEvent>, burned: Vec<BurnedEvent>) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = settled
        .into_iter()
        .map(|event| HistoryEntry {
            token_id: event.token_id,
            outcome: Outcome::Settled {
                winner: event.winner,
                amount: event.amount,
            },
            block_number: event.block_number,
        })
        .chain(burned.into_iter().map(|event| HistoryEntry {
            token_id: event.token_id,
            outcome: Outcome::Burned,
            block_number: event.block_number,
        }))
        .collect();
    entries.sort_by(|a, b| b.block_number.cmp(&a.block_number));
    entries.truncate(HISTORY_DISPLAY_LIMIT);
    entries
}

/// Fetch both event streams concurrently and merge once both complete.
/// Each call recomputes the feed from a fresh full fetch; a fetch failure
/// is logged and surfaces as an empty feed, never an error.
pub async fn fetch_history(logs: &impl LogQuery) -> Vec<HistoryEntry> {
    let (settled, burned) = match tokio::try_join!(logs.settled_events(), logs.burned_events()) {
        Ok(streams) => streams,
        Err(e) => {
            eprintln!("Failed to fetch auction history: {}", e);
            return Vec::new();
        }
    };
    merge(settled, burned)
}
