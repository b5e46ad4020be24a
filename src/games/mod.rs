//! Game implementations.

pub mod noughts;
