//! Storage layer (process-local memory).

pub mod memory;

pub use memory::RecordStore;
