#![allow(dead_code)]

pub(crate) mod partition;
pub mod prelude;
pub mod quad;
pub mod result;
pub mod simpson;
pub mod strategy;
pub(crate) mod test_utils;
pub mod trapezoid;
