#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod cache;
pub mod firestore;
pub mod local_storage;
pub mod memory;
