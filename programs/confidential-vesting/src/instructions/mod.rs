pub mod create_vesting;
pub mod deposit_tokens;
pub mod initialize_registry;
pub mod release;
pub mod revoke_vesting;
pub mod set_attestors;
pub mod verify_decryption;
pub mod views;

pub use create_vesting::*;
pub use deposit_tokens::*;
pub use initialize_registry::*;
pub use release::*;
pub use revoke_vesting::*;
pub use set_attestors::*;
pub use verify_decryption::*;
pub use views::*;
