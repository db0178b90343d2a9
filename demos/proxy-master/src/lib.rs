#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{vec, vec::Vec};

use alloy_primitives::{Address, U256};
use stylus_sdk::{
    abi::Bytes,
    msg,
    prelude::*,
    storage::{StorageBytes, StorageMap, StorageU256},
};

/// Master contract cloned by the factory. `init` records the deployer and
/// the initialisation data, so clones can be told apart.
#[entrypoint]
#[storage]
struct ProxyMasterExample {
    value1: StorageU256,
    value2: StorageMap<Address, StorageU256>,
    value3: StorageBytes,
}

#[public]
impl ProxyMasterExample {
    #[payable]
    fn init(&mut self, data: Bytes) {
        self.value1.set(U256::from(100));
        self.value2.setter(msg::sender()).set(U256::from(200));
        self.value3.set_bytes(data.0);
    }

    fn set_values(
        &mut self,
        value1: U256,
        account: Address,
        value2: U256,
        value3: Bytes,
    ) {
        self.value1.set(value1);
        self.value2.setter(account).set(value2);
        self.value3.set_bytes(value3.0);
    }

    fn value1(&self) -> U256 {
        self.value1.get()
    }

    fn value2(&self, account: Address) -> U256 {
        self.value2.get(account)
    }

    fn value3(&self) -> Bytes {
        self.value3.get_bytes().into()
    }
}
