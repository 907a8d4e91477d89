#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image filtering module.
pub mod filter;

/// module containing the fork/join parallelization utilities.
pub mod parallel;

/// nested-loop reference implementations of the filters.
pub mod sequential;
