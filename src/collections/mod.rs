//! The six data structures, grouped by storage discipline.
//!
//! # Purpose
//! Each submodule is one exercise: a structure, its operation set, and its edge-case policy.
//! They share nothing but the crate's error types, so each can be read (or feature-gated off)
//! on its own.
//!
//! # Method
//! [`contiguous`] holds the growable array, [`bounded`] the fixed-capacity stack and queue,
//! [`linked`] the node-chain list and [`hash`] the two hash structures. Where a structure is
//! backed by a contiguous buffer it exposes slice access, which saves reimplementing the more
//! repetitive read-only functionality.

#[cfg(feature = "bounded")]
pub mod bounded;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
