//! Graph construction and representation
//!
//! [`ranked::RankedGraph`] is the text-agnostic ranking engine. The two
//! builders turn normalized text units into one: tokens linked by
//! co-occurrence, or sentences linked by lexical overlap.

pub mod cooccurrence;
pub mod csr;
pub mod ranked;
pub mod similarity;
