//! Common extensions to the ERC-20 standard.
pub mod alt_approve;
pub mod burnable;
pub mod metadata;

pub use alt_approve::IErc20AltApprove;
pub use burnable::IErc20Burnable;
pub use metadata::{Erc20Metadata, IErc20Metadata};
