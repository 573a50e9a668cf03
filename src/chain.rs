use crate::auction::AuctionSnapshot;
use crate::config;
use crate::history::{BurnedEvent, SettledEvent};
use async_trait::async_trait;
use ethers::contract::abigen;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, PendingTransaction, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{H256, U256, U64};
use mockall::automock;
use std::sync::Arc;

abigen!(
    AuctionHouse,
    r#"[
        function auction() external view returns (uint256 tokenId, uint256 amount, uint256 startTime, uint256 endTime, address bidder, bool settled)
        function reservePrice() external view returns (uint256)
        function minBidIncrementPercentage() external view returns (uint8)
        function createBid() external payable
        function settleAuction() external
        event AuctionSettled(uint256 indexed tokenId, address winner, uint256 amount)
        event AuctionBurned(uint256 indexed tokenId)
    ]"#
);

abigen!(
    HaikuToken,
    r#"[
        function tokenURI(uint256 tokenId) external view returns (string)
        function currentTokenId() external view returns (uint256)
    ]"#
);

#[automock]
#[async_trait]
pub trait ChainReader: Send + Sync {
    async fn get_auction(&self) -> Result<AuctionSnapshot, String>;
    async fn get_reserve_price(&self) -> Result<U256, String>;
    async fn get_min_increment_percent(&self) -> Result<u8, String>;
    async fn get_token_uri(&self, token_id: U256) -> Result<String, String>;
}

#[automock]
#[async_trait]
pub trait ChainWriter: Send {
    async fn submit_bid(&mut self, value_wei: U256) -> Result<H256, String>;
    async fn settle_auction(&mut self) -> Result<H256, String>;
    async fn await_inclusion(&mut self, tx_hash: H256) -> Result<(), String>;
}

#[automock]
#[async_trait]
pub trait LogQuery: Send + Sync {
    async fn settled_events(&self) -> Result<Vec<SettledEvent>, String>;
    async fn burned_events(&self) -> Result<Vec<BurnedEvent>, String>;
}

pub struct HttpChainReader {
    auction_house: AuctionHouse<Provider<Http>>,
    token: HaikuToken<Provider<Http>>,
}

impl HttpChainReader {
    pub fn new(provider: Arc<Provider<Http>>) -> HttpChainReader {
        HttpChainReader {
            auction_house: AuctionHouse::new(*config::AUCTION_HOUSE_ADDRESS, provider.clone()),
            token: HaikuToken::new(*config::HAIKU_TOKEN_ADDRESS, provider),
        }
    }
}

#[async_trait]
impl ChainReader for HttpChainReader {
    async fn get_auction(&self) -> Result<AuctionSnapshot, String> {
        let (token_id, amount, start_time, end_time, bidder, settled) =
            match self.auction_house.auction().call().await {
                Ok(auction) => auction,
                Err(e) => return Err(e.to_string()),
            };
        Ok(AuctionSnapshot {
            token_id,
            amount,
            start_time: start_time.as_u64(),
            end_time: end_time.as_u64(),
            bidder,
            settled,
        })
    }

    async fn get_reserve_price(&self) -> Result<U256, String> {
        match self.auction_house.reserve_price().call().await {
            Ok(price) => Ok(price),
            Err(e) => Err(e.to_string()),
        }
    }

    async fn get_min_increment_percent(&self) -> Result<u8, String> {
        match self.auction_house.min_bid_increment_percentage().call().await {
            Ok(pct) => Ok(pct),
            Err(e) => Err(e.to_string()),
        }
    }

    async fn get_token_uri(&self, token_id: U256) -> Result<String, String> {
        match self.token.token_uri(token_id).call().await {
            Ok(uri) => Ok(uri),
            Err(e) => Err(e.to_string()),
        }
    }
}

pub struct WalletChainWriter {
    auction_house: AuctionHouse<SignerMiddleware<Provider<Http>, LocalWallet>>,
    provider: Arc<Provider<Http>>,
}

impl WalletChainWriter {
    pub fn new(provider: Arc<Provider<Http>>, wallet: LocalWallet) -> WalletChainWriter {
        let wallet = wallet.with_chain_id(config::CHAIN_ID);
        let client = Arc::new(SignerMiddleware::new((*provider).clone(), wallet));
        WalletChainWriter {
            auction_house: AuctionHouse::new(*config::AUCTION_HOUSE_ADDRESS, client),
            provider,
        }
    }
}

#[async_trait]
impl ChainWriter for WalletChainWriter {
    async fn submit_bid(&mut self, value_wei: U256) -> Result<H256, String> {
        let call = self.auction_house.create_bid().value(value_wei);
        let result = match call.send().await {
            Ok(pending) => Ok(*pending),
            Err(e) => Err(e.to_string()),
        };
        result
    }

    async fn settle_auction(&mut self) -> Result<H256, String> {
        match self.auction_house.settle_auction().send().await {
            Ok(pending) => Ok(*pending),
            Err(e) => Err(e.to_string()),
        }
    }

    async fn await_inclusion(&mut self, tx_hash: H256) -> Result<(), String> {
        let pending = PendingTransaction::new(tx_hash, self.provider.as_ref());
        match pending.await {
            Ok(Some(receipt)) => {
                if receipt.status == Some(U64::one()) {
                    Ok(())
                } else {
                    Err("Transaction reverted".to_string())
                }
            }
            Ok(None) => Err("Transaction dropped from mempool".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

pub struct HttpLogQuery {
    auction_house: AuctionHouse<Provider<Http>>,
}

impl HttpLogQuery {
    pub fn new(provider: Arc<Provider<Http>>) -> HttpLogQuery {
        HttpLogQuery {
            auction_house: AuctionHouse::new(*config::AUCTION_HOUSE_ADDRESS, provider),
        }
    }
}

#[async_trait]
impl LogQuery for HttpLogQuery {
    async fn settled_events(&self) -> Result<Vec<SettledEvent>, String> {
        let query = self.auction_house.auction_settled_filter().from_block(0u64);
        let logs = match query.query_with_meta().await {
            Ok(logs) => logs,
            Err(e) => return Err(e.to_string()),
        };
        Ok(logs
            .into_iter()
            .map(|(event, meta)| SettledEvent {
                token_id: event.token_id,
                winner: event.winner,
                amount: event.amount,
                block_number: meta.block_number.as_u64(),
            })
            .collect())
    }

    async fn burned_events(&self) -> Result<Vec<BurnedEvent>, String> {
        let query = self.auction_house.auction_burned_filter().from_block(0u64);
        let logs = match query.query_with_meta().await {
            Ok(logs) => logs,
            Err(e) => return Err(e.to_string()),
        };
        Ok(logs
            .into_iter()
            .map(|(event, meta)| BurnedEvent {
                token_id: event.token_id,
                block_number: meta.block_number.as_u64(),
            })
            .collect())
    }
}
