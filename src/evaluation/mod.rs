//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns finished fits into continuous, queryable models.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Continuous model over a finished fit.
pub mod model;
