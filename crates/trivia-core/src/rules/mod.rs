//! Field rules enforced before anything reaches a store

pub mod validation;
