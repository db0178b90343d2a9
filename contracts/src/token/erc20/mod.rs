//! Implementation of the ERC-20 token standard.
//!
//! Functions revert instead of returning `false` on failure, with the same
//! `Error(string)` revert reasons as the classic Solidity implementation
//! (e.g. `ERC20: transfer exceeds balance`).
//!
//! An allowance of [`U256::MAX`] is treated as infinite: spending it through
//! [`IErc20::transfer_from`] leaves it untouched and emits no [`Approval`].
use alloc::{vec, vec::Vec};

use alloy_primitives::{Address, U256};
pub use sol::*;
use stylus_sdk::{
    call::MethodError,
    evm, msg,
    prelude::*,
    storage::{StorageMap, StorageU256},
};

use crate::utils::revert::encode_reason;

pub mod extensions;
pub mod utils;

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `value` tokens are moved from one account (`from`) to
        /// another (`to`).
        ///
        /// Note that `value` may be zero.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Transfer(address indexed from, address indexed to, uint256 value);
        /// Emitted when the allowance of a `spender` for an `owner` is set by a
        /// call to `approve`. `value` is the new allowance.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Approval(address indexed owner, address indexed spender, uint256 value);
    }
}

/// An [`Erc20`] error, reported as a Solidity `Error(string)` revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The approving account is [`Address::ZERO`].
    ApproveFromZero,
    /// The approved spender is [`Address::ZERO`].
    ApproveToZero,
    /// Tokens are burnt from [`Address::ZERO`].
    BurnFromZero,
    /// The burnt amount exceeds the account's balance.
    BurnExceedsBalance,
    /// Tokens are minted to [`Address::ZERO`].
    MintToZero,
    /// Tokens are transferred from [`Address::ZERO`].
    TransferFromZero,
    /// Tokens are transferred to [`Address::ZERO`].
    TransferToZero,
    /// The transferred amount exceeds the sender's balance.
    TransferExceedsBalance,
    /// The spent amount exceeds the spender's allowance.
    InsufficientAllowance,
    /// An allowance decrease would take the allowance below zero.
    AllowanceBelowZero,
}

impl Error {
    /// Revert reason reported for this error.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Error::ApproveFromZero => "ERC20: approve from address(0)",
            Error::ApproveToZero => "ERC20: approve to address(0)",
            Error::BurnFromZero => "ERC20: burn from address(0)",
            Error::BurnExceedsBalance => "ERC20: burn exceeds balance",
            Error::MintToZero => "ERC20: mint to address(0)",
            Error::TransferFromZero => "ERC20: transfer from address(0)",
            Error::TransferToZero => "ERC20: transfer to address(0)",
            Error::TransferExceedsBalance => "ERC20: transfer exceeds balance",
            Error::InsufficientAllowance => "ERC20: insufficient allowance",
            Error::AllowanceBelowZero => "ERC20: reduced allowance below 0",
        }
    }
}

impl From<Error> for Vec<u8> {
    fn from(value: Error) -> Self {
        encode_reason(value.reason())
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`Erc20`] token.
#[storage]
pub struct Erc20 {
    /// Maps users to balances.
    pub(crate) balances: StorageMap<Address, StorageU256>,
    /// Maps users to a mapping of each spender's allowance.
    pub(crate) allowances:
        StorageMap<Address, StorageMap<Address, StorageU256>>,
    /// The total supply of the token.
    pub(crate) total_supply: StorageU256,
}

/// Required interface of an [`Erc20`] compliant contract.
pub trait IErc20 {
    /// The error type associated to this ERC-20 trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Returns the number of tokens in existence.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn total_supply(&self) -> U256;

    /// Returns the number of tokens owned by `account`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `account` - Account to get balance from.
    fn balance_of(&self, account: Address) -> U256;

    /// Moves a `value` amount of tokens from the caller's account to `to`.
    ///
    /// Returns a boolean value indicating whether the operation succeeded.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::TransferToZero`] - If the `to` address is
    ///   [`Address::ZERO`].
    /// * [`Error::TransferExceedsBalance`] - If the caller doesn't have a
    ///   balance of at least `value`.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error>;

    /// Returns the remaining number of tokens that `spender` will be allowed
    /// to spend on behalf of `owner` through `transfer_from`. This is zero by
    /// default.
    ///
    /// This value changes when `approve` or `transfer_from` are called.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `owner` - Account that owns the tokens.
    /// * `spender` - Account that will spend the tokens.
    fn allowance(&self, owner: Address, spender: Address) -> U256;

    /// Sets a `value` number of tokens as the allowance of `spender` over the
    /// caller's tokens.
    ///
    /// Returns a boolean value indicating whether the operation succeeded.
    ///
    /// WARNING: Beware that changing an allowance with this method brings the
    /// risk that someone may use both the old and the new allowance by
    /// unfortunate transaction ordering. One possible solution to mitigate
    /// this race condition is to first reduce the `spender`'s allowance to 0
    /// and set the desired value afterwards, or to use
    /// [`extensions::IErc20AltApprove`].
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - The number of tokens being allowed to transfer by
    ///   `spender`.
    ///
    /// # Errors
    ///
    /// * [`Error::ApproveToZero`] - If the `spender` address is
    ///   [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`Approval`].
    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error>;

    /// Moves a `value` number of tokens from `from` to `to` using the
    /// allowance mechanism. `value` is then deducted from the caller's
    /// allowance, unless the allowance is infinite.
    ///
    /// Returns a boolean value indicating whether the operation succeeded.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientAllowance`] - If the caller's allowance over
    ///   `from` is below `value`.
    /// * [`Error::TransferFromZero`] - If the `from` address is
    ///   [`Address::ZERO`].
    /// * [`Error::TransferToZero`] - If the `to` address is
    ///   [`Address::ZERO`].
    /// * [`Error::TransferExceedsBalance`] - If `from` doesn't have a balance
    ///   of at least `value`.
    ///
    /// # Events
    ///
    /// * [`Approval`], unless the allowance is infinite.
    /// * [`Transfer`].
    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error>;
}

#[public]
#[implements(IErc20<Error = Error>)]
impl Erc20 {}

#[public]
impl IErc20 for Erc20 {
    type Error = Error;

    fn total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        let from = msg::sender();
        self._transfer(from, to, value)?;
        Ok(true)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(owner).get(spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        let owner = msg::sender();
        self._approve(owner, spender, value)?;
        Ok(true)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        let spender = msg::sender();
        self._spend_allowance(from, spender, value)?;
        self._transfer(from, to, value)?;
        Ok(true)
    }
}

impl Erc20 {
    /// Sets `value` as the allowance of `spender` over the `owner`'s tokens.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `owner` - Account that owns the tokens.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - The new allowance.
    ///
    /// # Errors
    ///
    /// * [`Error::ApproveFromZero`] - If `owner` is [`Address::ZERO`].
    /// * [`Error::ApproveToZero`] - If `spender` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`Approval`].
    pub fn _approve(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Error> {
        if owner.is_zero() {
            return Err(Error::ApproveFromZero);
        }

        if spender.is_zero() {
            return Err(Error::ApproveToZero);
        }

        self.allowances.setter(owner).insert(spender, value);
        evm::log(Approval { owner, spender, value });
        Ok(())
    }

    /// Internal implementation of transferring tokens between two accounts.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - The number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::TransferFromZero`] - If `from` is [`Address::ZERO`].
    /// * [`Error::TransferToZero`] - If `to` is [`Address::ZERO`].
    /// * [`Error::TransferExceedsBalance`] - If `from` doesn't have enough
    ///   tokens.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    pub fn _transfer(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Error> {
        if from.is_zero() {
            return Err(Error::TransferFromZero);
        }
        if to.is_zero() {
            return Err(Error::TransferToZero);
        }

        let from_balance = self.balances.get(from);
        if from_balance < value {
            return Err(Error::TransferExceedsBalance);
        }
        // Overflow not possible:
        // `value` <= `from_balance` <= `total_supply`.
        self.balances.setter(from).set(from_balance - value);
        // Overflow not possible:
        // `to_balance` + `value` is at most `total_supply`.
        let to_balance = self.balances.get(to);
        self.balances.setter(to).set(to_balance + value);

        evm::log(Transfer { from, to, value });

        Ok(())
    }

    /// Creates a `value` amount of tokens and assigns them to `account`,
    /// increasing the total supply.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `account` - Account receiving the minted tokens.
    /// * `value` - Amount to be minted.
    ///
    /// # Errors
    ///
    /// * [`Error::MintToZero`] - If `account` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`Transfer`] from [`Address::ZERO`].
    ///
    /// # Panics
    ///
    /// * If the total supply exceeds [`U256::MAX`].
    pub fn _mint(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Error> {
        if account.is_zero() {
            return Err(Error::MintToZero);
        }

        // Overflow check required: the rest of the code assumes that
        // `total_supply` never overflows.
        let total_supply = self
            .total_supply
            .get()
            .checked_add(value)
            .expect("should not exceed `U256::MAX` for `total_supply`");
        self.total_supply.set(total_supply);
        // Overflow not possible: `balance` + `value` <= `total_supply`.
        let balance = self.balances.get(account);
        self.balances.setter(account).set(balance + value);

        evm::log(Transfer { from: Address::ZERO, to: account, value });

        Ok(())
    }

    /// Destroys a `value` amount of tokens from `account`, lowering the total
    /// supply.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `account` - Owner's address.
    /// * `value` - Amount to be burnt.
    ///
    /// # Errors
    ///
    /// * [`Error::BurnFromZero`] - If `account` is [`Address::ZERO`].
    /// * [`Error::BurnExceedsBalance`] - If `account` doesn't have enough
    ///   tokens.
    ///
    /// # Events
    ///
    /// * [`Transfer`] to [`Address::ZERO`].
    pub fn _burn(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Error> {
        if account.is_zero() {
            return Err(Error::BurnFromZero);
        }

        let balance = self.balances.get(account);
        if balance < value {
            return Err(Error::BurnExceedsBalance);
        }
        // Overflow not possible:
        // `value` <= `balance` <= `total_supply`.
        self.balances.setter(account).set(balance - value);
        let total_supply = self.total_supply.get();
        self.total_supply.set(total_supply - value);

        evm::log(Transfer { from: account, to: Address::ZERO, value });

        Ok(())
    }

    /// Updates `owner`'s allowance for `spender` based on spent `value`.
    ///
    /// Does not update the allowance in the case of infinite allowance.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `owner` - Account that owns the tokens.
    /// * `spender` - Account spending the tokens.
    /// * `value` - The number of tokens spent.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientAllowance`] - If not enough allowance is
    ///   available.
    ///
    /// # Events
    ///
    /// * [`Approval`], unless the allowance is infinite.
    pub fn _spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Error> {
        let current_allowance = self.allowance(owner, spender);
        if current_allowance != U256::MAX {
            if current_allowance < value {
                return Err(Error::InsufficientAllowance);
            }

            self._approve(owner, spender, current_allowance - value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use alloy_primitives::{uint, Address, U256};
    use alloy_sol_types::SolEvent;
    use motsu::prelude::*;
    use stylus_sdk::prelude::*;

    use super::*;
    use crate::utils::revert::decode_reason;

    unsafe impl TopLevelStorage for Erc20 {}

    #[motsu::test]
    fn reads_balance(contract: Contract<Erc20>, alice: Address) {
        let balance = contract.sender(alice).balance_of(Address::ZERO);
        assert_eq!(U256::ZERO, balance);

        let one = U256::ONE;
        contract.sender(alice).balances.setter(alice).set(one);
        let balance = contract.sender(alice).balance_of(alice);
        assert_eq!(one, balance);
    }

    #[motsu::test]
    fn constructs_without_events(contract: Contract<Erc20>, alice: Address) {
        assert_eq!(U256::ZERO, contract.sender(alice).total_supply());
        assert!(contract.all_events().is_empty());
    }

    #[motsu::test]
    fn mints(contract: Contract<Erc20>, alice: Address) {
        let one = U256::ONE;

        let initial_balance = contract.sender(alice).balance_of(alice);
        let initial_supply = contract.sender(alice).total_supply();
        contract.sender(alice)._mint(alice, one).motsu_expect("should mint");

        assert_eq!(initial_balance + one, contract.sender(alice).balance_of(alice));
        assert_eq!(initial_supply + one, contract.sender(alice).total_supply());

        contract.assert_emitted(&Transfer {
            from: Address::ZERO,
            to: alice,
            value: one,
        });
    }

    #[motsu::test]
    fn mint_reverts_when_account_is_zero(
        contract: Contract<Erc20>,
        alice: Address,
    ) {
        let err = contract
            .sender(alice)
            ._mint(Address::ZERO, U256::ONE)
            .motsu_unwrap_err();

        assert_eq!(err, Error::MintToZero);
        assert_eq!(U256::ZERO, contract.sender(alice).total_supply());
    }

    #[motsu::test]
    #[should_panic = "should not exceed `U256::MAX` for `total_supply`"]
    fn mint_panics_on_total_supply_overflow(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
    ) {
        contract
            .sender(alice)
            ._mint(alice, U256::MAX)
            .motsu_expect("should mint tokens");
        let _ = contract.sender(alice)._mint(bob, U256::ONE);
    }

    #[motsu::test]
    fn burns(contract: Contract<Erc20>, alice: Address) {
        let two = uint!(2_U256);
        contract.sender(alice)._mint(alice, two).motsu_unwrap();

        contract
            .sender(alice)
            ._burn(alice, U256::ONE)
            .motsu_expect("should burn");

        assert_eq!(U256::ONE, contract.sender(alice).balance_of(alice));
        assert_eq!(U256::ONE, contract.sender(alice).total_supply());
        contract.assert_emitted(&Transfer {
            from: alice,
            to: Address::ZERO,
            value: U256::ONE,
        });
    }

    #[motsu::test]
    fn burn_reverts_when_exceeding_balance(
        contract: Contract<Erc20>,
        alice: Address,
    ) {
        contract.sender(alice)._mint(alice, U256::ONE).motsu_unwrap();

        let err = contract
            .sender(alice)
            ._burn(alice, uint!(2_U256))
            .motsu_unwrap_err();

        assert_eq!(err, Error::BurnExceedsBalance);
        assert_eq!(U256::ONE, contract.sender(alice).balance_of(alice));
        assert_eq!(U256::ONE, contract.sender(alice).total_supply());
    }

    #[motsu::test]
    fn burn_reverts_when_account_is_zero(
        contract: Contract<Erc20>,
        alice: Address,
    ) {
        let err = contract
            .sender(alice)
            ._burn(Address::ZERO, U256::ZERO)
            .motsu_unwrap_err();

        assert_eq!(err, Error::BurnFromZero);
    }

    #[motsu::test]
    fn transfers(
        contract: Contract<Erc20>,
        alice: Address,
        carol: Address,
    ) {
        let hundred = uint!(100_U256);
        let ten = uint!(10_U256);
        contract.sender(alice)._mint(alice, hundred).motsu_unwrap();

        let result = contract
            .sender(alice)
            .transfer(carol, ten)
            .motsu_expect("should transfer");
        assert!(result);

        assert_eq!(uint!(90_U256), contract.sender(alice).balance_of(alice));
        assert_eq!(ten, contract.sender(alice).balance_of(carol));
        assert_eq!(hundred, contract.sender(alice).total_supply());

        let expected = vec![
            Transfer { from: Address::ZERO, to: alice, value: hundred }
                .encode_log_data(),
            Transfer { from: alice, to: carol, value: ten }.encode_log_data(),
        ];
        assert_eq!(expected, contract.all_events());
    }

    #[motsu::test]
    fn transfer_reverts_when_exceeding_balance(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
    ) {
        let one = U256::ONE;
        contract.sender(alice)._mint(alice, one).motsu_unwrap();

        let err = contract
            .sender(alice)
            .transfer(bob, uint!(2_U256))
            .motsu_unwrap_err();

        assert_eq!(err, Error::TransferExceedsBalance);
        assert_eq!(one, contract.sender(alice).balance_of(alice));
        assert_eq!(U256::ZERO, contract.sender(alice).balance_of(bob));
    }

    #[motsu::test]
    fn transfer_reverts_when_receiver_is_zero(
        contract: Contract<Erc20>,
        alice: Address,
    ) {
        let one = U256::ONE;
        contract.sender(alice)._mint(alice, one).motsu_unwrap();

        let err = contract
            .sender(alice)
            .transfer(Address::ZERO, one)
            .motsu_unwrap_err();

        assert_eq!(err, Error::TransferToZero);
        assert_eq!(one, contract.sender(alice).balance_of(alice));
        assert_eq!(one, contract.sender(alice).total_supply());
    }

    #[motsu::test]
    fn internal_transfer_reverts_when_sender_is_zero(
        contract: Contract<Erc20>,
        alice: Address,
    ) {
        let err = contract
            .sender(alice)
            ._transfer(Address::ZERO, alice, U256::ZERO)
            .motsu_unwrap_err();

        assert_eq!(err, Error::TransferFromZero);
    }

    #[motsu::test]
    fn transfers_zero_value(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
    ) {
        contract
            .sender(alice)
            .transfer(bob, U256::ZERO)
            .motsu_expect("should transfer zero tokens");

        contract.assert_emitted(&Transfer {
            from: alice,
            to: bob,
            value: U256::ZERO,
        });
    }

    #[motsu::test]
    fn approves(contract: Contract<Erc20>, alice: Address, bob: Address) {
        let fifty = uint!(50_U256);

        let result = contract
            .sender(alice)
            .approve(bob, fifty)
            .motsu_expect("should approve");
        assert!(result);

        assert_eq!(fifty, contract.sender(alice).allowance(alice, bob));
        contract.assert_emitted(&Approval {
            owner: alice,
            spender: bob,
            value: fifty,
        });
    }

    #[motsu::test]
    fn approve_reverts_when_spender_is_zero(
        contract: Contract<Erc20>,
        alice: Address,
    ) {
        let err = contract
            .sender(alice)
            .approve(Address::ZERO, U256::ONE)
            .motsu_unwrap_err();

        assert_eq!(err, Error::ApproveToZero);
    }

    #[motsu::test]
    fn internal_approve_reverts_when_owner_is_zero(
        contract: Contract<Erc20>,
        alice: Address,
    ) {
        let err = contract
            .sender(alice)
            ._approve(Address::ZERO, alice, U256::ONE)
            .motsu_unwrap_err();

        assert_eq!(err, Error::ApproveFromZero);
    }

    #[motsu::test]
    fn transfers_from(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
        carol: Address,
    ) {
        let hundred = uint!(100_U256);
        let fifty = uint!(50_U256);
        let ten = uint!(10_U256);
        contract.sender(alice)._mint(alice, hundred).motsu_unwrap();
        contract.sender(alice).approve(bob, fifty).motsu_unwrap();

        let result = contract
            .sender(bob)
            .transfer_from(alice, carol, ten)
            .motsu_expect("should transfer from");
        assert!(result);

        assert_eq!(uint!(90_U256), contract.sender(alice).balance_of(alice));
        assert_eq!(ten, contract.sender(alice).balance_of(carol));
        assert_eq!(uint!(40_U256), contract.sender(alice).allowance(alice, bob));

        let expected = vec![
            Transfer { from: Address::ZERO, to: alice, value: hundred }
                .encode_log_data(),
            Approval { owner: alice, spender: bob, value: fifty }
                .encode_log_data(),
            Approval { owner: alice, spender: bob, value: uint!(40_U256) }
                .encode_log_data(),
            Transfer { from: alice, to: carol, value: ten }.encode_log_data(),
        ];
        assert_eq!(expected, contract.all_events());
    }

    #[motsu::test]
    fn transfer_from_keeps_infinite_allowance(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
        carol: Address,
    ) {
        let ten = uint!(10_U256);
        contract.sender(alice)._mint(alice, ten).motsu_unwrap();
        contract.sender(alice).approve(bob, U256::MAX).motsu_unwrap();

        contract
            .sender(bob)
            .transfer_from(alice, carol, ten)
            .motsu_expect("should transfer from");

        assert_eq!(U256::MAX, contract.sender(alice).allowance(alice, bob));
        assert_eq!(ten, contract.sender(alice).balance_of(carol));
        let expected = vec![
            Transfer { from: Address::ZERO, to: alice, value: ten }
                .encode_log_data(),
            Approval { owner: alice, spender: bob, value: U256::MAX }
                .encode_log_data(),
            Transfer { from: alice, to: carol, value: ten }.encode_log_data(),
        ];
        assert_eq!(expected, contract.all_events());
    }

    #[motsu::test]
    fn transfer_from_reverts_when_insufficient_allowance(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
    ) {
        let hundred = uint!(100_U256);
        contract.sender(alice)._mint(alice, hundred).motsu_unwrap();
        contract.sender(alice).approve(bob, U256::ONE).motsu_unwrap();

        let err = contract
            .sender(bob)
            .transfer_from(alice, bob, uint!(2_U256))
            .motsu_unwrap_err();

        assert_eq!(err, Error::InsufficientAllowance);
        assert_eq!(hundred, contract.sender(alice).balance_of(alice));
        assert_eq!(U256::ZERO, contract.sender(alice).balance_of(bob));
    }

    #[motsu::test]
    fn transfer_from_reverts_when_exceeding_balance(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
    ) {
        let one = U256::ONE;
        contract.sender(alice).approve(bob, one).motsu_unwrap();

        let err = contract
            .sender(bob)
            .transfer_from(alice, bob, one)
            .motsu_unwrap_err();

        assert_eq!(err, Error::TransferExceedsBalance);
    }

    #[motsu::test]
    fn transfer_from_reverts_when_receiver_is_zero(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
    ) {
        let one = U256::ONE;
        contract.sender(alice)._mint(alice, one).motsu_unwrap();
        contract.sender(alice).approve(bob, one).motsu_unwrap();

        let err = contract
            .sender(bob)
            .transfer_from(alice, Address::ZERO, one)
            .motsu_unwrap_err();

        assert_eq!(err, Error::TransferToZero);
        assert_eq!(one, contract.sender(alice).balance_of(alice));
    }

    #[motsu::test]
    fn balances_sum_to_total_supply(
        contract: Contract<Erc20>,
        alice: Address,
        bob: Address,
        carol: Address,
    ) {
        contract.sender(alice)._mint(alice, uint!(100_U256)).motsu_unwrap();
        contract.sender(alice)._mint(bob, uint!(30_U256)).motsu_unwrap();
        contract.sender(alice).transfer(carol, uint!(25_U256)).motsu_unwrap();
        contract.sender(bob).approve(alice, uint!(20_U256)).motsu_unwrap();
        contract
            .sender(alice)
            .transfer_from(bob, carol, uint!(20_U256))
            .motsu_unwrap();
        contract.sender(alice)._burn(carol, uint!(5_U256)).motsu_unwrap();
        // Failed operations leave the ledger untouched.
        let _ = contract.sender(bob).transfer(alice, uint!(1000_U256));

        let sum = [alice, bob, carol]
            .into_iter()
            .map(|account| contract.sender(alice).balance_of(account))
            .fold(U256::ZERO, |acc, balance| acc + balance);
        assert_eq!(sum, contract.sender(alice).total_supply());
        assert_eq!(uint!(125_U256), sum);
    }

    #[test]
    fn encodes_revert_reasons() {
        let encoded: Vec<u8> = Error::TransferExceedsBalance.into();
        assert_eq!(
            decode_reason(&encoded).as_deref(),
            Some("ERC20: transfer exceeds balance")
        );

        let encoded: Vec<u8> = Error::AllowanceBelowZero.into();
        assert_eq!(
            decode_reason(&encoded).as_deref(),
            Some("ERC20: reduced allowance below 0")
        );
    }
}
