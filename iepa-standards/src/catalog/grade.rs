//! Grade token parsing and grade relevance
//!
//! Grade tokens are loose strings ("K", "kindergarten", "3", "pre-k").
//! A standard's grade may also be a hyphenated range ("K-2", "3-5").

/// Convert a grade token to a comparable number
///
/// - "K" / "kindergarten" (any case) → 0
/// - "pre-k" (any case) → -1
/// - otherwise the leading integer of the token ("3" → 3, "12th" → 12),
///   saturating at the `i64` bounds
/// - unparseable → 0
pub fn grade_to_number(grade: &str) -> i64 {
    let lower = grade.to_lowercase();
    match lower.as_str() {
        "k" | "kindergarten" => 0,
        "pre-k" => -1,
        _ => leading_integer(grade).unwrap_or(0),
    }
}

/// Check whether a standard's grade is relevant to the target grade
///
/// Ranges are inclusive on both ends. Single grades accept the target
/// grade and its immediate neighbours (±1).
pub fn is_relevant_grade(standard_grade: &str, target_grade: &str) -> bool {
    let target = grade_to_number(target_grade);

    if standard_grade.contains('-') {
        let mut parts = standard_grade.split('-');
        let start = grade_to_number(parts.next().unwrap_or_default());
        let end = grade_to_number(parts.next().unwrap_or_default());
        return target >= start && target <= end;
    }

    grade_to_number(standard_grade).abs_diff(target) <= 1
}

/// Parse an optionally signed integer prefix, ignoring leading whitespace
fn leading_integer(token: &str) -> Option<i64> {
    let trimmed = token.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Digits only, so accumulation can fail solely by overflowing
    let value = digits[..end].bytes().try_fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.checked_mul(10)?.checked_sub(digit)
        } else {
            acc.checked_mul(10)?.checked_add(digit)
        }
    });

    Some(value.unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}
