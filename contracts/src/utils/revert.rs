//! Solidity `Error(string)` revert payloads.
//!
//! Contracts in this crate report failures the way `require(cond, "reason")`
//! does in Solidity: the revert data is the `Error(string)` selector
//! (`0x08c379a0`) followed by the ABI-encoded reason.
use alloc::vec::Vec;

use alloy_sol_types::{Revert, SolError};

/// Encodes `reason` as a Solidity `Error(string)` revert payload.
#[must_use]
pub fn encode_reason(reason: &str) -> Vec<u8> {
    Revert { reason: reason.into() }.abi_encode()
}

/// Decodes the reason of a Solidity `Error(string)` revert payload.
///
/// Returns `None` when `data` is not such a payload (e.g. a custom error, a
/// panic, or an empty revert).
#[must_use]
pub fn decode_reason(data: &[u8]) -> Option<alloc::string::String> {
    Revert::abi_decode(data, true).ok().map(|revert| revert.reason)
}
