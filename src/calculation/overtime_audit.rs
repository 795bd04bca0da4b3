//! Overtime audit trail integration tests.
//!
//! This module provides integration tests verifying the complete audit trail
//! for overtime calculations as per US-4.4 acceptance criteria.
