//! Helpers shared by the crate's unit tests and, through the `test-util`
//! feature, its integration tests.

pub mod mock_server;

pub use mock_server::{CapturedRequest, MockServer, unused_addr};
