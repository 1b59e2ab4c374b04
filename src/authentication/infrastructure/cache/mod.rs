pub mod identity_cache_repository;
pub mod in_memory;
