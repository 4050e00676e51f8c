//! In-memory model registry implementation

mod registry;
mod traits_impl;


pub use registry::InMemoryRegistry;
