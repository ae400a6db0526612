//! Tristate Comprehensive Test Suite
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Scalar state invariants and literal round-trips
//! - **Tier 2**: Codec registry and dynamic factory
//! - **Tier 3**: Null propagation through aggregates
//! - **Tier 4**: Storage mapping over decoded records
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test tristate_comprehensive
//! ```

// Tier 1: Scalar Invariants
mod tier1_scalar_round_trip;
mod tier1_scalar_states;

// Tier 2: Registry and Factory
mod tier2_registry;

// Tier 3: Null Propagation
mod tier3_null_propagation;

// Tier 4: Storage Mapping
mod tier4_storage_mapping;
