//! Growable array with list-like semantics.
//!
//! [`DynArr`] supports signed indexing, extended slicing, and amortized *O*(1) appends and pops,
//! shrinking its backing store again when elements are removed.

pub use flexarr_common::{
    collections::*,
    dynarr,
    error::{Error, Result},
    prelude,
    value::Value,
};

pub use flexarr_logging as logging;
