pub mod sqlx_invidious_account_repository_impl;
