//! Client for the Daily Haiku auction house: reads the current auction,
//! derives the renderable view, places bids, settles expired auctions and
//! aggregates the completed-auction history.

pub mod auction;
pub mod bid;
pub mod chain;
pub mod config;
pub mod core;
pub mod countdown;
pub mod dummy_data;
pub mod history;
pub mod metadata;
pub mod utils;
