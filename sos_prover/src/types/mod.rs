//! Types which are not structures, e.g. errors.

pub mod err;
