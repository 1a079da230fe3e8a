//! Shared fixtures for integration tests
//!
//! Synthetic catalogs with descriptions written to hit exact scores, so
//! tier boundaries can be exercised without depending on built-in data.

#![allow(dead_code)]

use iepa_standards::{Standard, StandardsCatalog};

/// Goal that scores 0.84 against [`addition_standard`]
pub const ADDITION_GOAL: &str = "solve addition word problems";

pub fn addition_standard(code: &str) -> Standard {
    Standard::new(
        code,
        "math",
        "1",
        "solve addition word problems",
        &["solve", "addition", "word problems"],
        "Operations and Algebraic Thinking",
    )
}

pub fn writing_standard(code: &str) -> Standard {
    Standard::new(
        code,
        "ela",
        "1",
        "solve addition word problems",
        &["solve", "addition", "word problems"],
        "Writing",
    )
}

/// Standard sharing nothing with [`ADDITION_GOAL`]
pub fn unrelated_standard(code: &str) -> Standard {
    Standard::new(
        code,
        "science",
        "1",
        "Observe patterns of the moon.",
        &["moon", "patterns"],
        "Earth Science",
    )
}

/// Catalog with `primary_count` identical strong matches plus one unrelated standard
pub fn synthetic_catalog(primary_count: usize) -> StandardsCatalog {
    let mut national: Vec<Standard> = (0..primary_count)
        .map(|i| addition_standard(&format!("SYN.OA.{}", i + 1)))
        .collect();
    national.push(unrelated_standard("SYN.ESS.1"));
    StandardsCatalog::new(national, Vec::new())
}
