//! Faucet Use Cases
//!
//! Funding of test-network wallets.

mod fund_wallet;
mod fund_wallets;

pub use fund_wallet::FundWalletUseCase;
pub use fund_wallets::FundWalletsUseCase;
