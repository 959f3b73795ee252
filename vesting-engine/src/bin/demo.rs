//! Scripted end-to-end run of the vesting engine
//!
//! Registers a schedule, confirms it, withdraws at two points in time, then
//! migrates the beneficiary and terminates a second schedule early.

use anyhow::Result;
use asset_ledger::{Address, TokenLedger};
use vesting_engine::{Config, CustodyLedger, ScheduleRegistry};

const WAD: u128 = 1_000_000_000_000_000_000; // 1e18 base units

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(service = %config.service_name, admin = %config.administrator, "starting demo");

    let admin = config.administrator.clone();
    let depositor = Address::new("treasury");
    let alice = Address::new("alice");
    let bob = Address::new("bob");
    let charlie = Address::new("charlie");

    // Fund the depositor and authorize the custody account to pull
    let mut ledger = TokenLedger::new();
    ledger.mint(&depositor, 10 * WAD)?;
    ledger.approve(&depositor, &config.custody_account, 10 * WAD)?;

    let custody = CustodyLedger::new(ledger, config.custody_account.clone());
    let mut registry = ScheduleRegistry::new(admin.clone(), custody);

    let start = chrono::Utc::now().timestamp() as u64;
    let cliff = start + 500;
    let end = start + 1_000;

    // Alice: register, confirm, withdraw at 3/4, withdraw the rest at end
    registry.register(&admin, &alice, &depositor, start, cliff, end, WAD)?;
    registry.confirm(&alice, start, cliff, end, WAD)?;

    let event = registry.withdraw(&alice, start + 750)?;
    tracing::info!(?event, "withdrawal at three quarters");
    let event = registry.withdraw(&alice, end)?;
    tracing::info!(?event, "withdrawal at end");

    // Bob: confirm, migrate to charlie, then the administrator ends it early
    registry.register(&admin, &bob, &depositor, start, cliff, end, 2 * WAD)?;
    registry.confirm(&bob, start, cliff, end, 2 * WAD)?;
    registry.request_address_change(&bob, &charlie)?;
    registry.confirm_address_change(&admin, &bob, &charlie)?;

    let event = registry.end_vesting(&admin, &charlie, &depositor, start + 600)?;
    tracing::info!(?event, "early termination");

    let ledger = registry.ledger().ledger();
    tracing::info!(
        alice = ledger.balance_of(&alice),
        charlie = ledger.balance_of(&charlie),
        treasury = ledger.balance_of(&depositor),
        custody = ledger.balance_of(&config.custody_account),
        "final balances"
    );

    Ok(())
}
