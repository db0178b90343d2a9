#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{Address, U256};
use exoda_stylus::{
    access::ownable::{self, IOwnable, Ownable},
    token::erc20::{
        self,
        extensions::{
            Erc20Metadata, IErc20AltApprove, IErc20Burnable, IErc20Metadata,
        },
        Erc20, IErc20,
    },
};
use stylus_sdk::prelude::*;

#[entrypoint]
#[storage]
struct Erc20BurnableExample {
    erc20: Erc20,
    metadata: Erc20Metadata,
    ownable: Ownable,
}

#[public]
#[implements(
    IErc20<Error = erc20::Error>,
    IErc20Burnable<Error = erc20::Error>,
    IErc20AltApprove<Error = erc20::Error>,
    IErc20Metadata,
    IOwnable<Error = ownable::Error>
)]
impl Erc20BurnableExample {
    #[constructor]
    fn constructor(&mut self, name: String, symbol: String) {
        self.metadata.constructor(name, symbol);
        self.ownable.constructor();
    }

    fn mint(&mut self, account: Address, value: U256) -> Result<(), Vec<u8>> {
        self.ownable.only_owner()?;
        self.erc20._mint(account, value)?;
        Ok(())
    }
}

#[public]
impl IErc20 for Erc20BurnableExample {
    type Error = erc20::Error;

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.erc20.balance_of(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.transfer(to, value)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.approve(spender, value)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.transfer_from(from, to, value)
    }
}

#[public]
impl IErc20Burnable for Erc20BurnableExample {
    type Error = erc20::Error;

    fn burn(&mut self, value: U256) -> Result<(), Self::Error> {
        self.erc20.burn(value)
    }

    fn burn_from(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        self.erc20.burn_from(account, value)
    }
}

#[public]
impl IErc20AltApprove for Erc20BurnableExample {
    type Error = erc20::Error;

    fn increase_allowance(
        &mut self,
        spender: Address,
        added_value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.increase_allowance(spender, added_value)
    }

    fn decrease_allowance(
        &mut self,
        spender: Address,
        subtracted_value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.decrease_allowance(spender, subtracted_value)
    }
}

#[public]
impl IErc20Metadata for Erc20BurnableExample {
    fn name(&self) -> String {
        self.metadata.name()
    }

    fn symbol(&self) -> String {
        self.metadata.symbol()
    }

    fn decimals(&self) -> u8 {
        self.metadata.decimals()
    }
}

#[public]
impl IOwnable for Erc20BurnableExample {
    type Error = ownable::Error;

    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Self::Error> {
        self.ownable.transfer_ownership(new_owner)
    }

    fn renounce_ownership(&mut self) -> Result<(), Self::Error> {
        self.ownable.renounce_ownership()
    }
}
