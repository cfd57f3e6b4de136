//! Engine scenario tests.

mod mapping;
mod validation;
