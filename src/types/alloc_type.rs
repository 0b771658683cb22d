//! Allocation-backed types, resolved from `std` or `alloc` depending on the
//! `std` feature.

#[cfg(not(feature = "std"))]
pub use alloc::{
    borrow::Cow,
    boxed::Box,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};

#[cfg(feature = "std")]
pub use std::{
    borrow::Cow,
    boxed::Box,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
