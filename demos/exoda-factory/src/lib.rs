#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{vec, vec::Vec};

use alloy_primitives::{Address, U256};
use exoda_stylus::proxy::{
    factory::{self, ExodaFactory},
    IExodaFactory,
};
use stylus_sdk::{abi::Bytes, prelude::*};

#[entrypoint]
#[storage]
struct ExodaFactoryExample {
    factory: ExodaFactory,
}

#[public]
#[implements(IExodaFactory)]
impl ExodaFactoryExample {
    #[payable]
    fn deploy(
        &mut self,
        master_contract: Address,
        data: Bytes,
        use_create2: bool,
    ) -> Result<Address, factory::Error> {
        self.factory.deploy(master_contract, data, use_create2)
    }
}

#[public]
impl IExodaFactory for ExodaFactoryExample {
    fn master_of(&self, clone: Address) -> Address {
        self.factory.master_of(clone)
    }

    fn clones_of(&self, master_contract: Address) -> Vec<Address> {
        self.factory.clones_of(master_contract)
    }

    fn clones_of_count(&self, master_contract: Address) -> U256 {
        self.factory.clones_of_count(master_contract)
    }

    fn predict_deterministic_address(
        &self,
        master_contract: Address,
        data: Bytes,
    ) -> Address {
        self.factory.predict_deterministic_address(master_contract, data)
    }
}
