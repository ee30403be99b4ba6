// Library target exists solely for criterion benchmarks and integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// that harnesses can import types via `quillr::essay::*` / `quillr::store::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

pub mod app;
pub mod buddy;
pub mod catalog;
pub mod config;
pub mod essay;
pub mod event;
pub mod session;
pub mod store;
pub mod ui;
