//! Arg-max selection over classifier scores.

/// Returns the index of the highest score.
///
/// Ties resolve to the lowest index. NaN scores are never selected. An empty
/// slice, or one holding only NaN, yields `None`.
///
/// ```rust
/// use deepfake_detect::processors::argmax;
///
/// assert_eq!(argmax(&[0.1, 0.9, 0.05]), Some(1));
/// assert_eq!(argmax(&[0.5, 0.5]), Some(0));
/// assert_eq!(argmax(&[]), None);
/// ```
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Converts an optional class index into the signed form shown to users,
/// where `-1` means no class could be selected.
pub fn class_id_or_sentinel(index: Option<usize>) -> i64 {
    index.map_or(-1, |idx| idx as i64)
}
