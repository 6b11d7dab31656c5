//! Shared helpers for the cd-test lock tests.

#![forbid(unsafe_code)]

pub mod project;
