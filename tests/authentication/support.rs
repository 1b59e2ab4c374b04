
pub use fakes::{
    FakeAccountRepository, FakeFeedProbe, FakeInvidiousFeed, FeedRequest, ManualClock,
};
pub use fixtures::{
    CACHE_TTL, HEADER_TOKEN, HEADER_TOKEN_WITHOUT_SESSION, OPAQUE_TOKEN, SESSION_ID, USER_EMAIL,
    identity,
};
pub use harness::{create_harness, create_harness_with_cache, create_harness_with_capacity};
