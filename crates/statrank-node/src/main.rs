//! Rank plan binary
//!
//! Computes and prints the rank-group plan for one account from saved stats
//! payloads, applied against an in-memory copy of the member's groups.
//!
//! Usage: `statrank-plan <account-id> [current-group-ids]`

use std::collections::BTreeSet;
use std::env;
use std::sync::Arc;

use statrank_groups::StatAssignmentEngine;
use statrank_node::{
    member_description, parse_group_list, AuthorizationFlow, FileStatsSource, InMemoryMembership,
    MemberId, NodeConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statrank=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(account) = args.get(1) else {
        eprintln!("Usage: statrank-plan <account-id> [current-group-ids]");
        std::process::exit(2);
    };
    let current = match args.get(2) {
        Some(raw) => parse_group_list(raw)?,
        None => BTreeSet::new(),
    };

    let config = NodeConfig::from_env()?;
    let catalog = config.load_catalog().await?;
    let engine = StatAssignmentEngine::new(Arc::new(catalog), config.protected_groups.clone());
    let stats = FileStatsSource::new(&config.stats_dir, config.recent_window);

    let member = MemberId::new(format!("account-{}", account));
    let membership = InMemoryMembership::new();
    membership.insert_member(member.clone(), current).await;

    let flow = AuthorizationFlow::new(engine, stats, membership);
    let assignment = flow.complete(&member, account).await?;

    tracing::info!("{}", member_description(account, &assignment.scores));
    println!("{}", serde_json::to_string_pretty(&assignment)?);

    Ok(())
}
