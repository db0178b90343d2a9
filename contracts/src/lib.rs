/*!
# Exoda Contracts for Stylus

A library of smart contract primitives for
[Arbitrum Stylus](https://docs.arbitrum.io/stylus/stylus-gentle-introduction):
an ERC-20 token with burnable and alternative-approve extensions, an
ownership access-control primitive, a defensive wrapper for talking to
non-standard ERC-20 tokens, and a factory deploying minimal proxy clones.

Every failure is reported as a Solidity `Error(string)` revert, so clients
written against the Solidity versions of these contracts see the same revert
reasons.

## Usage

Add `exoda-stylus` to your `Cargo.toml` and compose the storage structs in
your entrypoint contract:

```ignore
use exoda_stylus::token::erc20::{self, Erc20, IErc20};
use stylus_sdk::prelude::*;

#[entrypoint]
#[storage]
struct MyToken {
    erc20: Erc20,
}

#[public]
#[implements(IErc20<Error = erc20::Error>)]
impl MyToken {}

#[public]
impl IErc20 for MyToken {
    type Error = erc20::Error;
    // forward to `self.erc20` ...
}
```
*/

#![allow(clippy::module_name_repetitions, clippy::used_underscore_items)]
#![cfg_attr(not(any(test, feature = "std", feature = "export-abi")), no_std, no_main)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod access;
pub mod proxy;
pub mod token;
pub mod utils;
