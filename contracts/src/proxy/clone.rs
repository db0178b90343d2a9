//! [EIP-1167] minimal proxy ("clone") creation code.
//!
//! A clone is a 45-byte runtime that forwards every call to a master
//! contract via `delegatecall`, bubbling the result. The clone keeps its own
//! storage and balance.
//!
//! [EIP-1167]: https://eips.ethereum.org/EIPS/eip-1167
use alloy_primitives::{keccak256, Address, B256};
use hex_literal::hex;

/// Length of an address in bytes.
const ADDRESS_LEN: usize = 20;
/// Creation code preceding the master address.
const INIT_CODE_PREFIX: [u8; 20] =
    hex!("3d602d80600a3d3981f3363d3d373d3d3d363d73");
/// Creation code following the master address.
const INIT_CODE_SUFFIX: [u8; 15] = hex!("5af43d82803e903d91602b57fd5bf3");

/// Length of the clone creation code.
pub const INIT_CODE_LEN: usize =
    INIT_CODE_PREFIX.len() + ADDRESS_LEN + INIT_CODE_SUFFIX.len();

/// Returns the creation code of a minimal proxy delegating to `master`.
#[must_use]
pub fn clone_init_code(master: Address) -> [u8; INIT_CODE_LEN] {
    let mut code = [0_u8; INIT_CODE_LEN];
    let (prefix, rest) = code.split_at_mut(INIT_CODE_PREFIX.len());
    let (target, suffix) = rest.split_at_mut(ADDRESS_LEN);
    prefix.copy_from_slice(&INIT_CODE_PREFIX);
    target.copy_from_slice(master.as_slice());
    suffix.copy_from_slice(&INIT_CODE_SUFFIX);
    code
}

/// Returns the `CREATE2` salt used for a clone initialised with `data`.
#[must_use]
pub fn clone_salt(data: &[u8]) -> B256 {
    keccak256(data)
}

/// Returns the address a `CREATE2` clone of `master` initialised with `data`
/// gets when deployed by `deployer`.
#[must_use]
pub fn predict_clone_address(
    deployer: Address,
    master: Address,
    data: &[u8],
) -> Address {
    let init_code_hash = keccak256(clone_init_code(master));
    deployer.create2(clone_salt(data), init_code_hash)
}
