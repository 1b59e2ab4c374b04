pub mod lru_identity_cache_repository_impl;
