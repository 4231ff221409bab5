//! scorewire-test-utils: Test infrastructure for scorewire.
//!
//! Provides:
//! - MockSession: In-memory packet sink recording everything it receives
//! - MockRegistry: Session registry backed by a plain map

mod mock_session;

pub use mock_session::{MockRegistry, MockSession};
