//! Property-based tests for the character explorer
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `normalize_props`: Field normalization
//!   - `first_alternate` is the identity without a separator
//!   - `first_alternate` never contains a separator
//!   - Decoding is the identity without `&#`
//!   - Decoding maps each in-range entity to its code point
//!
//! - `filter_props`: Search and color filtering
//!   - The predicate is the AND of its two halves
//!   - Recomputing a filtered set is deterministic
//!   - Filtered indices stay in catalog order
//!   - The table sort is an ordering of the filtered rows
//!
//! By default, proptest runs 256 cases per property. Set `PROPTEST_CASES`
//! to change it.

mod filter_props;
mod normalize_props;
