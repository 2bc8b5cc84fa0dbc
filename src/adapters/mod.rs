//! Adapters - Implementations of ports.

mod in_memory_store;

pub use in_memory_store::InMemoryLearnerStore;
