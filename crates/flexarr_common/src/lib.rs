//! Core containers: the list-like [`DynArr`](collections::DynArr), extended slicing, and dynamically typed values.

pub mod collections;
pub mod error;
pub mod value;

pub mod prelude;

pub use flexarr_base::count_exprs;
