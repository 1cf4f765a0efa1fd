//! Wire types shared between the category admin frontend and the REST backend.

pub mod domain;
pub mod shared;
