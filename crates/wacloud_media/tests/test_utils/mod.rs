//! Test utilities for media client tests.
//!
//! This module provides a scripted transport and helpers.

pub mod mock_transport;

#[allow(unused_imports)]
pub use mock_transport::{CloseHandle, MockReply, MockTransport};
