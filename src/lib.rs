//! A set of introductory data structures, each written from scratch as a learning exercise.
//!
//! # Purpose
//! This crate started life as a series of C exercises, one file per structure, and grew into a
//! proper library while I was porting it. Rewriting each structure forced me to understand it
//! properly: not just "a stack is LIFO" but what the edge cases are, who owns which allocation,
//! and what should happen when an operation can't proceed.
//!
//! # Method
//! Every structure here is deliberately simple and deliberately concrete. There are no generic
//! element types: the sequences hold `i32` and the hash structures hold strings, because the point
//! is the structure, not the type system. Each one is a leaf module with no dependency on the
//! others.
//!
//! Some of the originals had quirks worth keeping. The [`Queue`](collections::bounded::Queue)
//! never wraps its indices, so it permanently loses a slot for every element dequeued - that's
//! how the exercise defined it, and the behavior is preserved and documented rather than silently
//! upgraded to a ring buffer. Quirks that were plainly bugs (an off-by-one bound, a probe that
//! never advanced) are fixed, with the fixes noted on the methods in question.
//!
//! # Error Handling
//! Operations that can fail on bad input come in pairs: a `try_*` method returning a strongly
//! typed [`Result`], and a convenience wrapper that panics with the error's own message. Absence
//! is never an error here - searches and lookups return [`Option`], and popping an empty
//! structure is `None` rather than the `-1` sentinel the C versions used.
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
