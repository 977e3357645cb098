//! Property-based tests for voicepick
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `custom_voice_props`: Tests for the custom voice ID picker
//!   - Blank drafts never reach the callback
//!   - Committed IDs are trimmed and delivered exactly once
//!   - Unsupported providers never consume input
//!   - Custom classification matches the premade catalogue
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod custom_voice_props;
