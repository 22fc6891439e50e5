//! Service-level test harness.


pub(crate) use context::TestContext;
