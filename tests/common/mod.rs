//! Common test utilities and helpers
#![allow(dead_code)]

pub mod git;
