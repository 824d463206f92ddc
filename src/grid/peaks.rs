//! Peak finding and merging on a 1-D projection.
//!
//! Two phases keep a thick drawn line from producing several grid lines:
//! 1. local-maximum filter: a position is a peak when it reaches the strength
//!    floor and no position within `floor(min_gap / 2)` on either side is
//!    strictly larger; positions closer than that to either end are skipped;
//! 2. clustering: peaks sorted by position are grouped while each is less than
//!    `min_gap` past the previous member, and each group keeps its strongest
//!    member. Ties keep the first (lowest) position.
use log::trace;
use serde::Serialize;

/// Candidate line position in a projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Peak {
    pub position: usize,
    pub strength: u32,
}

/// Local maxima of `values` reaching `min_strength`.
pub fn find_peaks(values: &[u32], min_gap: usize, min_strength: u32) -> Vec<Peak> {
    let half = min_gap / 2;
    let mut peaks = Vec::new();
    if values.len() <= 2 * half {
        return peaks;
    }
    for i in half..values.len() - half {
        let v = values[i];
        if v < min_strength {
            continue;
        }
        let window = &values[i - half..=i + half];
        if window.iter().all(|&other| other <= v) {
            peaks.push(Peak {
                position: i,
                strength: v,
            });
        }
    }
    peaks
}

fn strongest(cluster: &[Peak]) -> Option<Peak> {
    // `>=` against the running best keeps the earliest of equal peaks.
    cluster
        .iter()
        .copied()
        .reduce(|best, p| if best.strength >= p.strength { best } else { p })
}

/// Merge peaks closer than `min_gap`, returning ascending line positions.
pub fn merge_peaks(mut peaks: Vec<Peak>, min_gap: usize) -> Vec<usize> {
    if peaks.is_empty() {
        return Vec::new();
    }
    peaks.sort_by_key(|p| p.position);

    let mut merged = Vec::new();
    let mut cur: Vec<Peak> = Vec::new();
    for p in peaks {
        let joins = cur
            .last()
            .map_or(true, |last| p.position - last.position < min_gap);
        if joins {
            cur.push(p);
        } else {
            if let Some(best) = strongest(&cur) {
                trace!("merged {} peaks -> {}", cur.len(), best.position);
                merged.push(best.position);
            }
            cur = vec![p];
        }
    }
    if let Some(best) = strongest(&cur) {
        merged.push(best.position);
    }
    merged.sort_unstable();
    merged
}
