//! Engineering core of the embeddable swap widget.
//!
//! Two independent leaf components:
//! - [`validator`]: gates externally supplied token-list JSON against the
//!   embedded schemas before any of it is trusted as asset metadata.
//! - [`wallet`]: the open/close decision state machine behind the
//!   wallet-connection dialog, with an integrator veto/defer hook.

pub mod model;
pub mod validator;
pub mod wallet;

pub use model::{TagDefinition, TokenInfo, TokenList, Version};
pub use validator::{validate_token_list, validate_tokens, ValidationError};
pub use wallet::{ConnectDecision, DialogState, WalletConnectGate, WALLET_TRIGGER_TEST_ID};
