//! Deployment of minimal proxy clones.
//!
//! [`clone`] builds the [EIP-1167] creation code of a clone, and
//! [`factory::ExodaFactory`] deploys, initialises and registers clones of
//! master contracts.
//!
//! [EIP-1167]: https://eips.ethereum.org/EIPS/eip-1167
pub mod clone;
pub mod factory;

pub use factory::{ExodaFactory, IExodaFactory, IMasterContract};
