//! Wallet Use Cases

mod create_wallet;

pub use create_wallet::CreateWalletUseCase;
