//! Factory deploying [EIP-1167] minimal proxy clones of master contracts.
//!
//! Every clone is initialised through [`IMasterContract::init`] with the data
//! it was deployed with, and registered so that its master and the clones of
//! a master can be looked up later.
//!
//! Clones are deployed with `CREATE`, or with `CREATE2` using the hash of the
//! initialisation data as salt. In the latter case the clone address is known
//! upfront (see [`IExodaFactory::predict_deterministic_address`]), and
//! deploying the same master with the same data twice fails.
//!
//! [EIP-1167]: https://eips.ethereum.org/EIPS/eip-1167
use alloc::{vec, vec::Vec};

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolCall;
pub use sol::*;
use stylus_sdk::{
    abi::Bytes,
    call::{MethodError, RawCall},
    contract,
    deploy::RawDeploy,
    evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageMap, StorageVec},
};

use crate::{
    proxy::clone::{clone_init_code, clone_salt, predict_clone_address},
    utils::{revert::encode_reason, ReentrantCallHandler},
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when a clone of `master_contract` is deployed to
        /// `clone_address` and initialised with `data`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event LogDeploy(address indexed master_contract, bytes data, address indexed clone_address);
    }

    sol! {
        /// Interface every master contract exposes to initialise its clones.
        #[allow(missing_docs)]
        interface IMasterContract {
            /// Initialises a freshly deployed clone with `data`. Receives the
            /// value attached to the deployment.
            function init(bytes calldata data) external payable;
        }
    }
}

/// An [`ExodaFactory`] error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The master contract is [`Address::ZERO`].
    NoMasterContract,
    /// Creating the clone failed. Holds the creation's revert data, empty
    /// when e.g. the `CREATE2` address is already taken.
    DeployFailed(Vec<u8>),
    /// [`IMasterContract::init`] reverted on the clone. Holds its revert
    /// data.
    InitFailed(Vec<u8>),
}

impl Error {
    /// Revert reason reported for this error, if it has one of its own.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Error::NoMasterContract => Some("ExodaFactory: No master contract"),
            Error::DeployFailed(_) | Error::InitFailed(_) => None,
        }
    }
}

impl From<Error> for Vec<u8> {
    fn from(value: Error) -> Self {
        match value {
            Error::NoMasterContract => {
                encode_reason("ExodaFactory: No master contract")
            }
            Error::DeployFailed(data) | Error::InitFailed(data) => data,
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`ExodaFactory`] contract.
#[storage]
pub struct ExodaFactory {
    /// Maps clones to the master contract they delegate to.
    pub(crate) master_contract_of: StorageMap<Address, StorageAddress>,
    /// Maps master contracts to their clones, in deployment order.
    pub(crate) clones_of: StorageMap<Address, StorageVec<StorageAddress>>,
}

/// NOTE: Implementation of [`TopLevelStorage`] to be able use `&mut self` when
/// calling other contracts and not `&mut (impl TopLevelStorage +
/// BorrowMut<Self>)`.
unsafe impl TopLevelStorage for ExodaFactory {}

/// Read interface of an [`ExodaFactory`] contract.
pub trait IExodaFactory {
    /// Returns the master contract of `clone`, or [`Address::ZERO`] if
    /// `clone` wasn't deployed by this factory.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `clone` - Address of the clone.
    fn master_of(&self, clone: Address) -> Address;

    /// Returns the clones of `master_contract`, in deployment order.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `master_contract` - Address of the master contract.
    fn clones_of(&self, master_contract: Address) -> Vec<Address>;

    /// Returns the number of clones of `master_contract`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `master_contract` - Address of the master contract.
    fn clones_of_count(&self, master_contract: Address) -> U256;

    /// Returns the address a `CREATE2` clone of `master_contract`
    /// initialised with `data` gets when deployed by this factory.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `master_contract` - Address of the master contract.
    /// * `data` - Initialisation data of the clone.
    fn predict_deterministic_address(
        &self,
        master_contract: Address,
        data: Bytes,
    ) -> Address;
}

#[public]
#[implements(IExodaFactory)]
impl ExodaFactory {
    /// Deploys a clone of `master_contract`, calls
    /// [`IMasterContract::init`] on it with `data` and the attached value, and
    /// registers it.
    ///
    /// Returns the address of the clone.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `master_contract` - Address of the contract to clone.
    /// * `data` - Initialisation data passed to the clone.
    /// * `use_create2` - Deploy with `CREATE2`, salted with the hash of
    ///   `data`, instead of `CREATE`.
    ///
    /// # Errors
    ///
    /// * [`Error::NoMasterContract`] - If `master_contract` is
    ///   [`Address::ZERO`].
    /// * [`Error::DeployFailed`] - If the clone could not be created.
    /// * [`Error::InitFailed`] - If the clone's initialisation reverted.
    ///
    /// # Events
    ///
    /// * [`LogDeploy`].
    #[payable]
    pub fn deploy(
        &mut self,
        master_contract: Address,
        data: Bytes,
        use_create2: bool,
    ) -> Result<Address, Error> {
        if master_contract.is_zero() {
            return Err(Error::NoMasterContract);
        }

        let salt = use_create2.then(|| clone_salt(&data));
        let clone = Self::create_clone(master_contract, salt)?;
        self._initialize_clone(master_contract, clone, &data, msg::value())?;

        Ok(clone)
    }
}

#[public]
impl IExodaFactory for ExodaFactory {
    fn master_of(&self, clone: Address) -> Address {
        self.master_contract_of.get(clone)
    }

    fn clones_of(&self, master_contract: Address) -> Vec<Address> {
        let clones = self.clones_of.get(master_contract);
        (0..clones.len()).filter_map(|index| clones.get(index)).collect()
    }

    fn clones_of_count(&self, master_contract: Address) -> U256 {
        U256::from(self.clones_of.get(master_contract).len())
    }

    fn predict_deterministic_address(
        &self,
        master_contract: Address,
        data: Bytes,
    ) -> Address {
        predict_clone_address(contract::address(), master_contract, &data)
    }
}

impl ExodaFactory {
    /// Registers a freshly created `clone` of `master_contract` and calls
    /// [`IMasterContract::init`] on it with `data`, forwarding `value`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `master_contract` - Address of the master contract.
    /// * `clone` - Address of the clone.
    /// * `data` - Initialisation data passed to the clone.
    /// * `value` - Value forwarded to the clone.
    ///
    /// # Errors
    ///
    /// * [`Error::InitFailed`] - If the clone's initialisation reverted.
    ///
    /// # Events
    ///
    /// * [`LogDeploy`].
    pub fn _initialize_clone(
        &mut self,
        master_contract: Address,
        clone: Address,
        data: &[u8],
        value: U256,
    ) -> Result<(), Error> {
        self._register_clone(master_contract, clone);
        Self::init_clone(clone, data, value)?;

        evm::log(LogDeploy {
            master_contract,
            data: data.to_vec().into(),
            clone_address: clone,
        });

        Ok(())
    }

    /// Records `clone` as a clone of `master_contract`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `master_contract` - Address of the master contract.
    /// * `clone` - Address of the clone.
    pub fn _register_clone(&mut self, master_contract: Address, clone: Address) {
        self.master_contract_of.setter(clone).set(master_contract);
        self.clones_of.setter(master_contract).push(clone);
    }

    /// Creates a minimal proxy delegating to `master_contract`, with
    /// `CREATE2` if a `salt` is given.
    ///
    /// # Errors
    ///
    /// * [`Error::DeployFailed`] - If the creation failed.
    fn create_clone(
        master_contract: Address,
        salt: Option<B256>,
    ) -> Result<Address, Error> {
        let code = clone_init_code(master_contract);
        let deployer = RawDeploy::new().salt_option(salt);
        #[cfg(feature = "reentrant")]
        let deployer = deployer.flush_storage_cache();

        // SAFETY: the clone's creation code only returns its runtime and
        // never calls back into this contract.
        unsafe { deployer.deploy(&code, U256::ZERO) }
            .map_err(Error::DeployFailed)
    }

    /// Calls [`IMasterContract::init`] on `clone`, forwarding `value`.
    ///
    /// # Errors
    ///
    /// * [`Error::InitFailed`] - If the call reverted.
    fn init_clone(clone: Address, data: &[u8], value: U256) -> Result<(), Error> {
        let call = IMasterContract::initCall { data: data.to_vec().into() };
        RawCall::new_with_value(value)
            .call_with_reentrant_handling(clone, &call.abi_encode())
            .map(|_| ())
            .map_err(Error::InitFailed)
    }
}
