//! Editor Session Test Suite
//!
//! End-to-end coverage of the graph core through the public facade: an
//! interactive editing session, the search contract the shell relies on,
//! and a full save/load round trip on disk.
//!
//! ## Running
//!
//! ```bash
//! cargo test --test editor_session
//! ```

// Test modules
mod persistence_round_trip;
mod search_contract;
mod session_flow;
