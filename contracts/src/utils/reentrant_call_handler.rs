//! Raw external calls that stay sound when the `reentrant` feature is on.
//!
//! With `reentrant` enabled a callee may call back into the current contract,
//! so cached storage values have to be written out before control leaves the
//! contract. [`ReentrantCallHandler`] hides that difference from the call
//! sites in [`crate::utils::address`] and [`crate::proxy::factory`].

use alloy_primitives::Address;
use stylus_sdk::{call::RawCall, ArbResult};

/// Performs a [`RawCall`], flushing the storage cache first when the
/// `reentrant` feature is enabled.
pub trait ReentrantCallHandler {
    /// Calls `contract` with `call_data` and returns the raw return data, or
    /// the raw revert data on failure.
    ///
    /// # Arguments
    ///
    /// * `self` - Configured raw call (value, gas, return data limits).
    /// * `contract` - Address of the callee.
    /// * `call_data` - ABI-encoded call data.
    ///
    /// # Errors
    ///
    /// * The callee's revert data if the call fails.
    fn call_with_reentrant_handling(
        self,
        contract: Address,
        call_data: &[u8],
    ) -> ArbResult;
}

impl ReentrantCallHandler for RawCall {
    fn call_with_reentrant_handling(
        self,
        contract: Address,
        call_data: &[u8],
    ) -> ArbResult {
        #[cfg(feature = "reentrant")]
        unsafe {
            self.flush_storage_cache().call(contract, call_data)
        }
        #[cfg(not(feature = "reentrant"))]
        unsafe {
            self.call(contract, call_data)
        }
    }
}
