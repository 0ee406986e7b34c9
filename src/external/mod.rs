//! Interfaces of the collaborators the core works with (embedding providers,
//! vector stores) and in-process implementations backed by the core.
pub mod provider;
pub mod store;
