//! Low-level call helpers for working with [`Address`].
//!
//! These mirror the checks of Solidity's `Address` library: the target must
//! be a contract, the caller must hold enough balance to forward value, and a
//! callee's revert data is bubbled up unchanged. Calls that revert without
//! data fail with a caller-supplied message instead.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use alloy_primitives::{Address, U256};
use stylus_sdk::{
    call::{MethodError, RawCall},
    contract,
    types::AddressVM,
    ArbResult,
};

use crate::utils::{revert::encode_reason, ReentrantCallHandler};

/// Default failure message of [`AddressUtils::function_call`].
pub const CALL_FAILED: &str = "Address: call failed";
/// Default failure message of [`AddressUtils::function_call_with_value`].
pub const CALL_WITH_VALUE_FAILED: &str = "Address: call with value failed";

/// An [`AddressUtils`] error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The call target has no code.
    NonContract,
    /// The calling contract holds less than the value it tried to forward.
    InsufficientBalance,
    /// The callee reverted without data. Holds the failure message to revert
    /// with.
    Failed(String),
    /// The callee reverted with data, which is bubbled up verbatim.
    Reverted(Vec<u8>),
}

impl Error {
    /// Revert reason reported for this error, if it has one of its own.
    ///
    /// Bubbled revert data ([`Error::Reverted`]) has no reason of its own.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Error::NonContract => Some("Address: call to non-contract"),
            Error::InsufficientBalance => {
                Some("Address: balance to low for call")
            }
            Error::Failed(message) => Some(message),
            Error::Reverted(_) => None,
        }
    }
}

impl From<Error> for Vec<u8> {
    fn from(value: Error) -> Self {
        match value {
            Error::Reverted(data) => data,
            error => error.reason().map(encode_reason).unwrap_or_default(),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> Vec<u8> {
        self.into()
    }
}

/// A collection of utilities for working with [`Address`].
pub struct AddressUtils;

impl AddressUtils {
    /// Returns true if `account` is a contract.
    ///
    /// NOTE: This returns false for contracts under construction and for
    /// addresses where a contract will be created or has been destroyed.
    #[must_use]
    pub fn is_contract(account: Address) -> bool {
        account.has_code()
    }

    /// Calls `target` with `data`, forwarding no value.
    ///
    /// # Errors
    ///
    /// * [`Error::NonContract`] - If `target` has no code.
    /// * [`Error::Reverted`] - If `target` reverts with data.
    /// * [`Error::Failed`] - With [`CALL_FAILED`] if `target` reverts without
    ///   data.
    pub fn function_call(
        target: Address,
        data: &[u8],
    ) -> Result<Vec<u8>, Error> {
        Self::function_call_with_message(target, data, CALL_FAILED)
    }

    /// Same as [`AddressUtils::function_call`], with `error_message` as the
    /// failure reason when `target` reverts without data.
    ///
    /// # Errors
    ///
    /// * [`Error::NonContract`] - If `target` has no code.
    /// * [`Error::Reverted`] - If `target` reverts with data.
    /// * [`Error::Failed`] - If `target` reverts without data.
    pub fn function_call_with_message(
        target: Address,
        data: &[u8],
        error_message: &str,
    ) -> Result<Vec<u8>, Error> {
        Self::call(RawCall::new(), target, data, error_message)
    }

    /// Calls `target` with `data`, forwarding `value` wei from the calling
    /// contract.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientBalance`] - If the calling contract's balance is
    ///   below `value`.
    /// * [`Error::NonContract`] - If `target` has no code.
    /// * [`Error::Reverted`] - If `target` reverts with data.
    /// * [`Error::Failed`] - With [`CALL_WITH_VALUE_FAILED`] if `target`
    ///   reverts without data.
    pub fn function_call_with_value(
        target: Address,
        data: &[u8],
        value: U256,
    ) -> Result<Vec<u8>, Error> {
        Self::function_call_with_value_and_message(
            target,
            data,
            value,
            CALL_WITH_VALUE_FAILED,
        )
    }

    /// Same as [`AddressUtils::function_call_with_value`], with
    /// `error_message` as the failure reason when `target` reverts without
    /// data.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientBalance`] - If the calling contract's balance is
    ///   below `value`.
    /// * [`Error::NonContract`] - If `target` has no code.
    /// * [`Error::Reverted`] - If `target` reverts with data.
    /// * [`Error::Failed`] - If `target` reverts without data.
    pub fn function_call_with_value_and_message(
        target: Address,
        data: &[u8],
        value: U256,
        error_message: &str,
    ) -> Result<Vec<u8>, Error> {
        if contract::balance() < value {
            return Err(Error::InsufficientBalance);
        }
        Self::call(RawCall::new_with_value(value), target, data, error_message)
    }

    /// Maps the outcome of a raw call: return data passes through, revert
    /// data is bubbled, and an empty revert becomes
    /// [`Error::Failed`] with `error_message`.
    ///
    /// # Errors
    ///
    /// * [`Error::Reverted`] - If `result` holds non-empty revert data.
    /// * [`Error::Failed`] - If `result` holds empty revert data.
    pub fn verify_call_result(
        result: ArbResult,
        error_message: &str,
    ) -> Result<Vec<u8>, Error> {
        result.map_err(|revert_data| {
            if revert_data.is_empty() {
                Error::Failed(error_message.to_string())
            } else {
                Error::Reverted(revert_data)
            }
        })
    }

    fn call(
        call: RawCall,
        target: Address,
        data: &[u8],
        error_message: &str,
    ) -> Result<Vec<u8>, Error> {
        if !Self::is_contract(target) {
            return Err(Error::NonContract);
        }

        let result = call.call_with_reentrant_handling(target, data);
        Self::verify_call_result(result, error_message)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use alloy_primitives::{Address, U256};
    use alloy_sol_types::{sol, SolCall};
    use motsu::prelude::*;
    use stylus_sdk::{abi::Bytes, prelude::*};

    use super::*;
    use crate::utils::revert::decode_reason;

    sol! {
        interface ICallReceiverMock {
            function mockFunction() external returns (string memory);
            function mockFunctionRevertsNoReason() external;
            function mockFunctionRevertsReason() external;
        }
    }

    #[storage]
    struct CallReceiverMock;

    unsafe impl TopLevelStorage for CallReceiverMock {}

    #[public]
    impl CallReceiverMock {
        #[payable]
        fn mock_function(&mut self) -> String {
            "0x1234".into()
        }

        fn mock_function_reverts_no_reason(&mut self) -> Result<(), Vec<u8>> {
            Err(vec![])
        }

        fn mock_function_reverts_reason(&mut self) -> Result<(), Vec<u8>> {
            Err(encode_reason("CallReceiverMock: reverting"))
        }
    }

    #[storage]
    struct AddressExample;

    unsafe impl TopLevelStorage for AddressExample {}

    #[public]
    impl AddressExample {
        fn is_contract(&self, account: Address) -> bool {
            AddressUtils::is_contract(account)
        }

        fn function_call(
            &mut self,
            target: Address,
            data: Bytes,
        ) -> Result<Bytes, Error> {
            Ok(AddressUtils::function_call(target, &data)?.into())
        }

        fn function_call_with_message(
            &mut self,
            target: Address,
            data: Bytes,
            error_message: String,
        ) -> Result<Bytes, Error> {
            Ok(AddressUtils::function_call_with_message(
                target,
                &data,
                &error_message,
            )?
            .into())
        }

        #[payable]
        fn function_call_with_value(
            &mut self,
            target: Address,
            data: Bytes,
            value: U256,
        ) -> Result<Bytes, Error> {
            Ok(AddressUtils::function_call_with_value(target, &data, value)?
                .into())
        }
    }

    #[test]
    fn verify_call_result_passes_return_data() {
        let result =
            AddressUtils::verify_call_result(Ok(vec![1, 2, 3]), CALL_FAILED);
        assert_eq!(result, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn verify_call_result_uses_message_on_empty_revert() {
        let result = AddressUtils::verify_call_result(Err(vec![]), CALL_FAILED);
        assert_eq!(result, Err(Error::Failed(CALL_FAILED.into())));
    }

    #[test]
    fn verify_call_result_bubbles_revert_data() {
        let result =
            AddressUtils::verify_call_result(Err(vec![1, 2, 3]), CALL_FAILED);
        assert_eq!(result, Err(Error::Reverted(vec![1, 2, 3])));
    }

    #[test]
    fn encodes_reverted_error_verbatim() {
        let encoded: Vec<u8> = Error::Reverted(vec![0xde, 0xad]).into();
        assert_eq!(encoded, vec![0xde, 0xad]);
    }

    #[test]
    fn encodes_non_contract_reason() {
        let encoded: Vec<u8> = Error::NonContract.into();
        assert_eq!(
            decode_reason(&encoded).as_deref(),
            Some("Address: call to non-contract")
        );
    }

    #[motsu::test]
    fn is_contract_false_for_account(
        contract: Contract<AddressExample>,
        alice: Address,
    ) {
        assert!(!contract.sender(alice).is_contract(alice));
    }

    #[motsu::test]
    fn is_contract_true_for_contract(
        contract: Contract<AddressExample>,
        alice: Address,
    ) {
        assert!(contract.sender(alice).is_contract(contract.address()));
    }

    #[motsu::test]
    fn function_call_calls_requested_function(
        contract: Contract<AddressExample>,
        receiver: Contract<CallReceiverMock>,
        alice: Address,
    ) {
        let data = ICallReceiverMock::mockFunctionCall {}.abi_encode();

        let returned = contract
            .sender(alice)
            .function_call(receiver.address(), data.into())
            .motsu_expect("should call the requested function");

        let decoded = ICallReceiverMock::mockFunctionCall::abi_decode_returns(
            &returned, true,
        )
        .expect("should decode the returned string");
        assert_eq!(decoded._0, "0x1234");
    }

    #[test]
    fn verify_call_result_reverts_with_custom_message() {
        let err = AddressUtils::verify_call_result(
            Err(vec![]),
            "Custom Error: Works!",
        )
        .expect_err("should fail on an empty revert");

        let encoded: Vec<u8> = err.into();
        assert_eq!(
            decode_reason(&encoded).as_deref(),
            Some("Custom Error: Works!")
        );
    }

    // Covers callees that revert without a reason, run out of gas, or have no
    // function for the selector.
    #[test]
    fn verify_call_result_reports_call_failed_by_default() {
        let err = AddressUtils::verify_call_result(Err(vec![]), CALL_FAILED)
            .expect_err("should fail on an empty revert");

        assert_eq!(err.reason(), Some("Address: call failed"));
    }

    // Non-payable callees revert without data when they receive value.
    #[test]
    fn verify_call_result_reports_call_with_value_failed_by_default() {
        let err = AddressUtils::verify_call_result(
            Err(vec![]),
            CALL_WITH_VALUE_FAILED,
        )
        .expect_err("should fail on an empty revert");

        assert_eq!(err.reason(), Some("Address: call with value failed"));
    }

    #[motsu::test]
    fn function_call_bubbles_callee_reason(
        contract: Contract<AddressExample>,
        receiver: Contract<CallReceiverMock>,
        alice: Address,
    ) {
        let data =
            ICallReceiverMock::mockFunctionRevertsReasonCall {}.abi_encode();

        let err = contract
            .sender(alice)
            .function_call(receiver.address(), data.into())
            .motsu_unwrap_err();

        let Error::Reverted(revert_data) = err else {
            panic!("should bubble the callee's revert data");
        };
        assert_eq!(
            decode_reason(&revert_data).as_deref(),
            Some("CallReceiverMock: reverting")
        );
    }

    #[motsu::test]
    fn function_call_reverts_when_target_is_not_contract(
        contract: Contract<AddressExample>,
        alice: Address,
        bob: Address,
    ) {
        let data = ICallReceiverMock::mockFunctionCall {}.abi_encode();

        let err = contract
            .sender(alice)
            .function_call(bob, data.into())
            .motsu_unwrap_err();

        assert_eq!(err, Error::NonContract);
        assert_eq!(err.reason(), Some("Address: call to non-contract"));
    }

    #[motsu::test]
    fn function_call_with_value_calls_requested_function(
        contract: Contract<AddressExample>,
        receiver: Contract<CallReceiverMock>,
        alice: Address,
    ) {
        let data = ICallReceiverMock::mockFunctionCall {}.abi_encode();

        let returned = contract
            .sender(alice)
            .function_call_with_value(receiver.address(), data.into(), U256::ZERO)
            .motsu_expect("should call the requested function");

        let decoded = ICallReceiverMock::mockFunctionCall::abi_decode_returns(
            &returned, true,
        )
        .expect("should decode the returned string");
        assert_eq!(decoded._0, "0x1234");
    }

    #[motsu::test]
    fn function_call_with_value_reverts_when_balance_too_low(
        contract: Contract<AddressExample>,
        receiver: Contract<CallReceiverMock>,
        alice: Address,
    ) {
        let data = ICallReceiverMock::mockFunctionCall {}.abi_encode();
        let amount = U256::from(1_200_000_000_000_000_000_u128);

        let err = contract
            .sender(alice)
            .function_call_with_value(receiver.address(), data.into(), amount)
            .motsu_unwrap_err();

        assert_eq!(err, Error::InsufficientBalance);
        assert_eq!(err.reason(), Some("Address: balance to low for call"));
    }

    #[motsu::test]
    fn function_call_with_value_forwards_existing_balance(
        contract: Contract<AddressExample>,
        receiver: Contract<CallReceiverMock>,
        alice: Address,
    ) {
        let data = ICallReceiverMock::mockFunctionCall {}.abi_encode();
        let amount = U256::from(1_200_000_000_000_000_000_u128);
        contract.fund(amount);

        contract
            .sender(alice)
            .function_call_with_value(receiver.address(), data.into(), amount)
            .motsu_expect("should forward value to the receiver");

        assert_eq!(amount, receiver.balance());
        assert_eq!(U256::ZERO, contract.balance());
    }

    #[motsu::test]
    fn function_call_with_value_forwards_transaction_funds(
        contract: Contract<AddressExample>,
        receiver: Contract<CallReceiverMock>,
        alice: Address,
    ) {
        let data = ICallReceiverMock::mockFunctionCall {}.abi_encode();
        let amount = U256::from(1_200_000_000_000_000_000_u128);
        alice.fund(amount);

        contract
            .sender_and_value(alice, amount)
            .function_call_with_value(receiver.address(), data.into(), amount)
            .motsu_expect("should forward value to the receiver");

        assert_eq!(U256::ZERO, alice.balance());
        assert_eq!(U256::ZERO, contract.balance());
        assert_eq!(amount, receiver.balance());
    }
}
