//! Alternative to [`IErc20::approve`] that adjusts an allowance relative to
//! its current value.
//!
//! Changing an allowance with [`IErc20::approve`] lets a spender front-run
//! the change and use both the old and the new allowance. Increasing or
//! decreasing the allowance atomically avoids having to reset it to zero
//! first.
use alloy_primitives::{Address, U256};
use stylus_sdk::msg;

use crate::token::erc20::{self, Erc20, IErc20};

/// Relative allowance adjustments for an [`Erc20`] token.
pub trait IErc20AltApprove {
    /// The error type associated to this trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Atomically increases the allowance granted to `spender` by the caller.
    ///
    /// Returns a boolean value indicating whether the operation succeeded.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `spender` - Account that will spend the tokens.
    /// * `added_value` - Amount the allowance is increased by.
    ///
    /// # Errors
    ///
    /// * [`erc20::Error::ApproveToZero`] - If `spender` is
    ///   [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`erc20::Approval`].
    ///
    /// # Panics
    ///
    /// * If the new allowance exceeds [`U256::MAX`].
    fn increase_allowance(
        &mut self,
        spender: Address,
        added_value: U256,
    ) -> Result<bool, Self::Error>;

    /// Atomically decreases the allowance granted to `spender` by the caller.
    ///
    /// Returns a boolean value indicating whether the operation succeeded.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `spender` - Account that will spend the tokens.
    /// * `subtracted_value` - Amount the allowance is decreased by.
    ///
    /// # Errors
    ///
    /// * [`erc20::Error::AllowanceBelowZero`] - If the current allowance is
    ///   below `subtracted_value`.
    /// * [`erc20::Error::ApproveToZero`] - If `spender` is
    ///   [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`erc20::Approval`].
    fn decrease_allowance(
        &mut self,
        spender: Address,
        subtracted_value: U256,
    ) -> Result<bool, Self::Error>;
}

impl IErc20AltApprove for Erc20 {
    type Error = erc20::Error;

    fn increase_allowance(
        &mut self,
        spender: Address,
        added_value: U256,
    ) -> Result<bool, Self::Error> {
        let owner = msg::sender();
        let allowance = self
            .allowance(owner, spender)
            .checked_add(added_value)
            .expect("should not exceed `U256::MAX` for allowance");
        self._approve(owner, spender, allowance)?;
        Ok(true)
    }

    fn decrease_allowance(
        &mut self,
        spender: Address,
        subtracted_value: U256,
    ) -> Result<bool, Self::Error> {
        let owner = msg::sender();
        let allowance = self
            .allowance(owner, spender)
            .checked_sub(subtracted_value)
            .ok_or(erc20::Error::AllowanceBelowZero)?;
        self._approve(owner, spender, allowance)?;
        Ok(true)
    }
}
