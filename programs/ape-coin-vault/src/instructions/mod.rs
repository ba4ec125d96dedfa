pub mod approve_shares;
pub mod deposit;
pub mod harvest;
pub mod initialize;
pub mod staking_accounts;
pub mod transfer_authority;
pub mod transfer_shares;
pub mod update_fee;
pub mod views;
pub mod withdraw;

pub use approve_shares::*;
pub use deposit::*;
pub use harvest::*;
pub use initialize::*;
pub use staking_accounts::*;
pub use transfer_authority::*;
pub use transfer_shares::*;
pub use update_fee::*;
pub use views::*;
pub use withdraw::*;
