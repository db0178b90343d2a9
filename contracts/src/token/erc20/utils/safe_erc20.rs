//! Wrappers around ERC-20 operations that revert on failure (when the token
//! contract returns false).
//!
//! Tokens that return no value (and instead revert on failure) are also
//! supported: non-reverting calls are assumed to be successful.
//!
//! To use this library, embed a [`SafeErc20`] in your contract and call the
//! safe operations as `self.safe_erc20.safe_transfer(token, ...)`, etc. The
//! operations act on behalf of the calling contract.

use alloc::{vec, vec::Vec};

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use stylus_sdk::{
    call::{MethodError, RawCall},
    contract,
    prelude::*,
    ArbResult,
};

use crate::utils::{
    address::{self, AddressUtils},
    revert::encode_reason,
    ReentrantCallHandler,
};

/// Failure message used when a token call reverts without data.
pub const LOW_LEVEL_CALL_FAILED: &str = "SafeERC20: low-level call failed";

/// A [`SafeErc20`] error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error from the low-level call to the token, see [`address::Error`].
    Address(address::Error),
    /// The token returned data that is not an ABI-encoded `true`.
    CallFailed,
    /// A non-zero approval was requested over a non-zero allowance.
    ExploitableApprove,
    /// An allowance decrease would take the allowance below zero.
    AllowanceBelowZero,
}

impl Error {
    /// Revert reason reported for this error, if it has one of its own.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Error::Address(error) => error.reason(),
            Error::CallFailed => Some("SafeERC20: ERC20 call failed"),
            Error::ExploitableApprove => Some("SafeERC20: exploitable approve"),
            Error::AllowanceBelowZero => Some("SafeERC20: reduced allowance <0"),
        }
    }
}

impl From<address::Error> for Error {
    fn from(value: address::Error) -> Self {
        Error::Address(value)
    }
}

impl From<Error> for Vec<u8> {
    fn from(value: Error) -> Self {
        match value {
            Error::Address(error) => error.into(),
            error => error.reason().map(encode_reason).unwrap_or_default(),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

pub use token::*;
mod token {
    #![allow(missing_docs)]
    #![cfg_attr(coverage_nightly, coverage(off))]
    alloy_sol_types::sol! {
        /// Interface of the ERC-20 token.
        interface IErc20 {
            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 value) external returns (bool);
            function transfer(address to, uint256 value) external returns (bool);
            function transferFrom(address from, address to, uint256 value) external returns (bool);
        }
    }
}

/// State of a [`SafeErc20`] Contract.
#[storage]
pub struct SafeErc20 {}

/// NOTE: Implementation of [`TopLevelStorage`] to be able use `&mut self` when
/// calling other contracts and not `&mut (impl TopLevelStorage +
/// BorrowMut<Self>)`.
unsafe impl TopLevelStorage for SafeErc20 {}

/// Required interface of a [`SafeErc20`] utility contract.
pub trait ISafeErc20 {
    /// The error type associated to this trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Transfer `value` amount of `token` from the calling contract to `to`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::Address`] - If `token` is not a contract or reverts.
    /// * [`Error::CallFailed`] - If `token` returns a value that is not
    ///   `true`.
    fn safe_transfer(
        &mut self,
        token: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Transfer `value` amount of `token` from `from` to `to`, spending the
    /// approval given by `from` to the calling contract.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::Address`] - If `token` is not a contract or reverts.
    /// * [`Error::CallFailed`] - If `token` returns a value that is not
    ///   `true`.
    fn safe_transfer_from(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Set the calling contract's allowance toward `spender` to `value`.
    ///
    /// Only allowed when setting the allowance to zero, or when the current
    /// allowance is zero. Use [`ISafeErc20::safe_increase_allowance`] and
    /// [`ISafeErc20::safe_decrease_allowance`] to adjust a live allowance.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - Value allowed to be spent by `spender`.
    ///
    /// # Errors
    ///
    /// * [`Error::ExploitableApprove`] - If both `value` and the current
    ///   allowance are non-zero.
    /// * [`Error::Address`] - If `token` is not a contract or reverts.
    /// * [`Error::CallFailed`] - If `token` returns a value that is not
    ///   `true`.
    fn safe_approve(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Increase the calling contract's allowance toward `spender` by `value`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - Value to increase current allowance for `spender`.
    ///
    /// # Errors
    ///
    /// * [`Error::Address`] - If `token` is not a contract or reverts.
    /// * [`Error::CallFailed`] - If `token` returns a value that is not
    ///   `true`, or a malformed allowance.
    ///
    /// # Panics
    ///
    /// * If increased allowance exceeds [`U256::MAX`].
    fn safe_increase_allowance(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Decrease the calling contract's allowance toward `spender` by `value`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - Value to decrease current allowance for `spender`.
    ///
    /// # Errors
    ///
    /// * [`Error::AllowanceBelowZero`] - If the current allowance is less
    ///   than `value`.
    /// * [`Error::Address`] - If `token` is not a contract or reverts.
    /// * [`Error::CallFailed`] - If `token` returns a value that is not
    ///   `true`, or a malformed allowance.
    fn safe_decrease_allowance(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error>;
}

#[public]
#[implements(ISafeErc20<Error = Error>)]
impl SafeErc20 {}

#[public]
impl ISafeErc20 for SafeErc20 {
    type Error = Error;

    fn safe_transfer(
        &mut self,
        token: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let call = IErc20::transferCall { to, value };

        Self::call_optional_return(token, &call)
    }

    fn safe_transfer_from(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let call = IErc20::transferFromCall { from, to, value };

        Self::call_optional_return(token, &call)
    }

    fn safe_approve(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        if !value.is_zero() && !Self::allowance(token, spender)?.is_zero() {
            return Err(Error::ExploitableApprove);
        }

        let call = IErc20::approveCall { spender, value };
        Self::call_optional_return(token, &call)
    }

    fn safe_increase_allowance(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let new_allowance = Self::allowance(token, spender)?
            .checked_add(value)
            .expect("should not exceed `U256::MAX` for allowance");

        let call = IErc20::approveCall { spender, value: new_allowance };
        Self::call_optional_return(token, &call)
    }

    fn safe_decrease_allowance(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let new_allowance = Self::allowance(token, spender)?
            .checked_sub(value)
            .ok_or(Error::AllowanceBelowZero)?;

        let call = IErc20::approveCall { spender, value: new_allowance };
        Self::call_optional_return(token, &call)
    }
}

impl SafeErc20 {
    /// Imitates a Stylus high-level call, relaxing the requirement on the
    /// return value: if data is returned, it must be `true`, otherwise calls
    /// are assumed to be successful.
    ///
    /// # Arguments
    ///
    /// * `token` - Address of the ERC-20 token contract.
    /// * `call` - [`IErc20`] call that implements [`SolCall`] trait.
    ///
    /// # Errors
    ///
    /// * [`Error::Address`] - If `token` is not a contract or reverts.
    /// * [`Error::CallFailed`] - If `token` returns a value that is not
    ///   `true`.
    fn call_optional_return(
        token: Address,
        call: &impl SolCall,
    ) -> Result<(), Error> {
        if !AddressUtils::is_contract(token) {
            return Err(address::Error::NonContract.into());
        }

        let result =
            RawCall::new().call_with_reentrant_handling(token, &call.abi_encode());
        Self::verify_optional_return(result)
    }

    /// Maps the outcome of a call to a token. Returned data must be empty or
    /// an ABI-encoded `true`. A revert without data fails with
    /// [`LOW_LEVEL_CALL_FAILED`].
    ///
    /// # Arguments
    ///
    /// * `result` - Raw outcome of the call to the token.
    ///
    /// # Errors
    ///
    /// * [`Error::Address`] - If `result` is a revert.
    /// * [`Error::CallFailed`] - If the returned data is not `true`.
    fn verify_optional_return(result: ArbResult) -> Result<(), Error> {
        let data = AddressUtils::verify_call_result(result, LOW_LEVEL_CALL_FAILED)?;

        if data.is_empty() || Self::returns_true(&data) {
            Ok(())
        } else {
            Err(Error::CallFailed)
        }
    }

    /// Returns the allowance of the calling contract toward `spender` on
    /// `token`.
    ///
    /// # Arguments
    ///
    /// * `token` - Address of the ERC-20 token contract.
    /// * `spender` - Account that will spend the tokens.
    ///
    /// # Errors
    ///
    /// * [`Error::Address`] - If `token` is not a contract or reverts.
    /// * [`Error::CallFailed`] - If `token` returns less than one ABI word.
    fn allowance(token: Address, spender: Address) -> Result<U256, Error> {
        let call =
            IErc20::allowanceCall { owner: contract::address(), spender };
        let data = AddressUtils::function_call_with_message(
            token,
            &call.abi_encode(),
            LOW_LEVEL_CALL_FAILED,
        )?;

        let word = data.get(..32).ok_or(Error::CallFailed)?;
        Ok(U256::from_be_slice(word))
    }

    /// Returns true if the first ABI word of `data` is an encoded `true`.
    fn returns_true(data: &[u8]) -> bool {
        data.get(..32).is_some_and(Self::encodes_true)
    }

    /// Returns true if a slice of bytes is an ABI encoded `true` value.
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of bytes.
    fn encodes_true(data: &[u8]) -> bool {
        data.split_last().is_some_and(|(last, rest)| {
            *last == 1 && rest.iter().all(|&byte| byte == 0)
        })
    }
}
