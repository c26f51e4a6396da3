pub use crate::{
    collections::{DynArr, GrowthFactor, SliceRange},
    dynarr,
    error::{Error, Result},
    value::Value,
};
