//! Cart endpoints

pub(crate) mod errors;
pub(crate) mod handlers;

pub(crate) use handlers::{add, get, remove, update};
