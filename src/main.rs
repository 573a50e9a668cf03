use chrono::Utc;
use ethers::providers::{Http, Provider};
use ethers::signers::LocalWallet;
use haiku_auction_client::auction::AuctionPhase;
use haiku_auction_client::chain::{
    ChainReader, HttpChainReader, HttpLogQuery, WalletChainWriter,
};
use haiku_auction_client::config;
use haiku_auction_client::core::App;
use haiku_auction_client::countdown::Countdown;
use haiku_auction_client::history::Outcome;
use haiku_auction_client::metadata::decode_token_uri;
use haiku_auction_client::utils::{format_eth, get_env_var, short_addr};
use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const POLL_INTERVAL_SECS: u64 = 30;

fn now_secs() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .init();
    dotenv::dotenv().ok();

    if let Err(e) = run().await {
        // Last-resort boundary: anything escaping the run loop lands here.
        eprintln!("────────────────────────────────────────");
        eprintln!("Something went wrong");
        eprintln!("{}", e);
        eprintln!("────────────────────────────────────────");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let provider = match Provider::<Http>::try_from(config::rpc_url()) {
        Ok(provider) => Arc::new(provider),
        Err(e) => return Err(e.to_string()),
    };
    let reader = HttpChainReader::new(provider.clone());
    let logs = HttpLogQuery::new(provider.clone());
    let mut writer = match get_env_var("PRIVATE_KEY") {
        Ok(key) => match key.parse::<LocalWallet>() {
            Ok(wallet) => Some(WalletChainWriter::new(provider, wallet)),
            Err(e) => return Err(format!("Invalid PRIVATE_KEY: {}", e)),
        },
        Err(_) => {
            println!("PRIVATE_KEY not set, running in read-only mode");
            None
        }
    };

    let mut app = App::new();
    app.refresh_auction(&reader).await?;
    app.refresh_history(&logs).await;
    render(&app, &reader).await;

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await; // first tick fires immediately
    let mut seconds = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                seconds += 1;
                if seconds % POLL_INTERVAL_SECS == 0 {
                    if let Err(e) = app.refresh_auction(&reader).await {
                        eprintln!("Refresh failed: {}", e);
                    }
                    render(&app, &reader).await;
                } else if let Some(snapshot) = app.snapshot.as_ref() {
                    if snapshot.classify(now_secs()) == AuctionPhase::Active {
                        print!(
                            "\r  Time remaining: {} ",
                            Countdown::at(snapshot.end_time, now_secs())
                        );
                        let _ = std::io::stdout().flush();
                    }
                }
            }
            line = stdin.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    _ => break,
                };
                handle_command(line.trim(), &mut app, &mut writer, &reader, &logs).await;
            }
        }
    }
    Ok(())
}

async fn handle_command(
    line: &str,
    app: &mut App,
    writer: &mut Option<WalletChainWriter>,
    reader: &HttpChainReader,
    logs: &HttpLogQuery,
) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["bid", amount] => {
            let writer = match writer.as_mut() {
                Some(writer) => writer,
                None => {
                    eprintln!("Connect a wallet first (set PRIVATE_KEY)");
                    return;
                }
            };
            match app.place_bid(writer, amount, now_secs()).await {
                Ok(()) => println!("✓ Bid placed!"),
                Err(e) => eprintln!("Bid failed: {}", e),
            }
        }
        ["settle"] => {
            let writer = match writer.as_mut() {
                Some(writer) => writer,
                None => {
                    eprintln!("Connect a wallet first (set PRIVATE_KEY)");
                    return;
                }
            };
            match app.settle(writer, reader, logs, now_secs()).await {
                Ok(()) => {
                    println!("✓ Settled!");
                    render(app, reader).await;
                }
                Err(e) => eprintln!("Settle failed: {}", e),
            }
        }
        ["refresh"] => {
            if let Err(e) = app.refresh_auction(reader).await {
                eprintln!("Refresh failed: {}", e);
            }
            app.refresh_history(logs).await;
            render(app, reader).await;
        }
        ["history"] => render_history(app, reader).await,
        ["quit"] | ["exit"] => std::process::exit(0),
        [] => (),
        _ => println!("Commands: bid <eth> | settle | refresh | history | quit"),
    }
}

async fn render(app: &App, reader: &HttpChainReader) {
    println!();
    println!("Daily Haiku");
    println!("═══════════");
    let now = now_secs();
    let view = match app.view(now) {
        Some(view) => view,
        None => {
            println!("Loading auction…");
            return;
        }
    };

    if view.phase == AuctionPhase::NoAuction {
        println!("No active auction");
        println!("Check back tomorrow at 12pm ET");
        return;
    }

    println!("Token #{}", view.token_id);
    if let Ok(uri) = reader.get_token_uri(view.token_id).await {
        match decode_token_uri(&uri) {
            Some(meta) => {
                if let Some(description) = meta.description {
                    println!("{}", description);
                }
                if let Some(image) = meta.image {
                    println!("[image] {}", image);
                }
            }
            None => println!("—"),
        }
    }
    println!("Time remaining: {}", view.countdown);
    println!("Current bid: {}", view.bid_label);
    if let Some(leader) = &view.leader {
        println!("Leader: {}", leader);
    }
    match view.phase {
        AuctionPhase::Active => println!(
            "Min bid: {} ETH  (type: bid <eth>)",
            format_eth(view.minimum_bid)
        ),
        AuctionPhase::EndedUnsettled => {
            println!("Auction ended, awaiting settlement  (type: settle)")
        }
        AuctionPhase::NoAuction => (),
    }
}

async fn render_history(app: &App, reader: &HttpChainReader) {
    if app.history.is_empty() {
        println!("No settled auctions yet");
        return;
    }
    println!();
    println!("Past Haikus");
    println!("───────────");
    for entry in &app.history {
        let outcome = match &entry.outcome {
            Outcome::Settled { winner, amount } => {
                format!("{} ETH to {}", format_eth(*amount), short_addr(winner))
            }
            Outcome::Burned => "Burned".to_string(),
        };
        println!("Token #{}: {}", entry.token_id, outcome);
        if let Ok(uri) = reader.get_token_uri(entry.token_id).await {
            if let Some(meta) = decode_token_uri(&uri) {
                if let Some(description) = meta.description {
                    println!("  {}", description.replace('\n', " / "));
                }
            }
        }
    }
}
