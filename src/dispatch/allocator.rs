use super::candidate::PlantCandidate;
use super::round_mw;

/// Distribute the load over the committed plants: every committed plant
/// starts at its pmin, then the remaining load is filled greedily in merit
/// order until it reaches zero.
///
/// Trusts the commitment solver's bracket guarantee and does not re-check
/// feasibility. Every cumulative sum is rounded to one decimal after each
/// step; the order of those roundings is load-bearing at boundary loads.
/// Returns one allocation per candidate, zero for uncommitted ones.
pub fn allocate(candidates: &[PlantCandidate], committed: &[usize], load: f64) -> Vec<f64> {
    let mut allocation = vec![0.0; candidates.len()];

    let mut dispatched = 0.0;
    for &index in committed {
        allocation[index] = candidates[index].pmin;
        dispatched += candidates[index].pmin;
    }

    let mut remaining = round_mw(load - dispatched);
    for &index in committed {
        if remaining <= 0.0 {
            break;
        }

        let candidate = &candidates[index];
        let headroom = round_mw(candidate.effective_pmax - candidate.pmin);
        let take = remaining.min(headroom);

        allocation[index] = round_mw(allocation[index] + take);
        remaining = round_mw(remaining - take);
    }

    allocation
}
