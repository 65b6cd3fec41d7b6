//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the ACE computation:
//! - Input and parameter validation
//! - The alternating conditional expectation loops
//! - Result structures
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// The alternating conditional expectation loops.
pub mod solver;

/// Result structures.
pub mod output;
