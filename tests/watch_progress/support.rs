#[path = "support/fakes.rs"]
mod fakes;

pub use fakes::{FakeWatchProgressRepository, StaticAuthenticationGate};
pub use fixtures::{ALICE, ALICE_TOKEN, BOB, BOB_TOKEN, VIDEO_ID, identity, progress};
pub use harness::{create_harness, create_rest_harness};
