pub mod invidious_feed_probe;
pub mod reqwest_invidious_feed_probe_impl;
