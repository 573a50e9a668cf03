use crate::auction::{AuctionPhase, AuctionSnapshot, AuctionView, BidPolicy};
use crate::bid::{BidController, BidInput, TxStatus};
use crate::chain::{ChainReader, ChainWriter, LogQuery};
use crate::history::{fetch_history, HistoryEntry};

/// Client-side application state: the latest auction snapshot, the bid
/// policy, the history feed and one status slot per write control. All of
/// it is recomputed from chain on refresh, nothing is persisted.
#[derive(Default)]
pub struct App {
    pub snapshot: Option<AuctionSnapshot>,
    pub policy: BidPolicy,
    pub history: Vec<HistoryEntry>,
    pub bid: BidController,
    pub settle_status: Option<TxStatus>,
}

impl App {
    pub fn new() -> App {
        App::default()
    }

    /// Read the current auction and the bid policy. A snapshot read failure
    /// propagates; policy read failures only leave the policy unloaded, so
    /// the display keeps working while bidding stays gated.
    pub async fn refresh_auction(&mut self, reader: &impl ChainReader) -> Result<(), String> {
        println!("Reading auction state");
        let snapshot = reader.get_auction().await?;
        self.snapshot = Some(snapshot);

        match reader.get_reserve_price().await {
            Ok(price) => self.policy.reserve_price = Some(price),
            Err(e) => eprintln!("Failed to read reserve price: {}", e),
        }
        match reader.get_min_increment_percent().await {
            Ok(pct) => self.policy.min_increment_percent = Some(pct),
            Err(e) => eprintln!("Failed to read bid increment: {}", e),
        }
        Ok(())
    }

    pub async fn refresh_history(&mut self, logs: &impl LogQuery) {
        self.history = fetch_history(logs).await;
    }

    pub async fn place_bid(
        &mut self,
        writer: &mut impl ChainWriter,
        amount_eth: &str,
        now: u64,
    ) -> Result<(), String> {
        let snapshot = match self.snapshot.as_ref() {
            Some(snapshot) => snapshot,
            None => return Err("Auction state has not loaded yet".to_string()),
        };
        let input = BidInput {
            amount_eth: amount_eth.to_string(),
        };
        self.bid
            .submit(writer, &input, snapshot, &self.policy, now)
            .await
    }

    /// Settle the ended auction. On confirmed success both the snapshot and
    /// the history feed are refreshed: settlement replaces the current
    /// auction and appends to history.
    pub async fn settle(
        &mut self,
        writer: &mut impl ChainWriter,
        reader: &impl ChainReader,
        logs: &impl LogQuery,
        now: u64,
    ) -> Result<(), String> {
        if self.settle_status.as_ref().map_or(false, TxStatus::is_pending) {
            return Err("Settlement is already pending".to_string());
        }
        let snapshot = match self.snapshot.as_ref() {
            Some(snapshot) => snapshot,
            None => return Err("Auction state has not loaded yet".to_string()),
        };
        match snapshot.classify(now) {
            AuctionPhase::EndedUnsettled => (),
            AuctionPhase::Active => return Err("Auction is still running".to_string()),
            AuctionPhase::NoAuction => return Err("No auction to settle".to_string()),
        }

        println!("Submitting settlement");
        self.settle_status = Some(TxStatus::PendingConfirmation);
        let tx_hash = match writer.settle_auction().await {
            Ok(tx_hash) => tx_hash,
            Err(e) => {
                self.settle_status = Some(TxStatus::Failed(e.clone()));
                return Err(e);
            }
        };

        println!("Settlement sent: {:?}, waiting for inclusion", tx_hash);
        self.settle_status = Some(TxStatus::PendingInclusion);
        if let Err(e) = writer.await_inclusion(tx_hash).await {
            self.settle_status = Some(TxStatus::Failed(e.clone()));
            return Err(e);
        }
        self.settle_status = Some(TxStatus::Succeeded);

        println!("Settled, refreshing auction and history");
        if let Err(e) = self.refresh_auction(reader).await {
            eprintln!("Failed to refresh auction after settlement: {}", e);
        }
        self.refresh_history(logs).await;
        Ok(())
    }

    pub fn view(&self, now: u64) -> Option<AuctionView> {
        self.snapshot
            .as_ref()
            .map(|snapshot| AuctionView::compose(snapshot, &self.policy, now))
    }
}
