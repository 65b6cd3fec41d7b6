//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout ACE:
//! - Scalar and SIMD accumulation kernels for window statistics
//! - Basic moments (mean, population standard deviation)
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scalar and SIMD window accumulation kernels.
pub mod accumulate;

/// Basic statistics helpers.
pub mod stats;
