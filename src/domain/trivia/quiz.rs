//! Trivia Context - 测验抽题

use rand::Rng;
use std::collections::HashSet;

/// 从候选题目中排除已出过的题，均匀随机抽取一道
///
/// 全部出过时返回 None
pub fn pick_unseen<T, R>(
    candidates: Vec<T>,
    previous: &[i64],
    id_of: impl Fn(&T) -> i64,
    rng: &mut R,
) -> Option<T>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let mut remaining: Vec<T> = candidates
        .into_iter()
        .filter(|c| !seen.contains(&id_of(c)))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..remaining.len());
    Some(remaining.swap_remove(index))
}
