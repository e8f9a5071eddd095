//! # charmane-store
//!
//! Local persistence for the storefront.
//!
//! This crate provides:
//! - A key-value storage abstraction shaped like browser local storage
//! - In-memory and single-file backends
//! - The persistent cart store, which keeps the cart under one key

mod cart_store;
mod kv;

pub use cart_store::{CartStore, CART_STORAGE_KEY};
pub use kv::{FileStorage, KeyValueStorage, MemoryStorage};
