use super::candidate::PlantCandidate;

/// Absolute tolerance on the upper feasibility bound, absorbing the
/// one-decimal rounding applied during normalization.
pub const FEASIBILITY_TOLERANCE: f64 = 0.01;

/// Decide which plants to run: find the first subset, in include-first
/// depth-first order over the merit-ranked slice, whose combined
/// [sum pmin, sum effective_pmax] range brackets the load.
///
/// Returns the committed candidate indices in merit order, or `None` when no
/// subset brackets the load. The search stops at the first feasible decision
/// prefix, so it is biased toward committing cheap plants and is neither
/// cost-optimal nor minimum-cardinality. Worst case explores all 2^n
/// subsets; fleets are tens of plants at most, so that is acceptable.
pub fn commit(candidates: &[PlantCandidate], load: f64) -> Option<Vec<usize>> {
    search(candidates, load, 0, 0.0, 0.0)
}

fn search(
    candidates: &[PlantCandidate],
    load: f64,
    index: usize,
    sum_pmin: f64,
    sum_pmax: f64,
) -> Option<Vec<usize>> {
    // Feasibility is checked before any decision at this node, including at
    // depth 0: a feasible prefix ends the search with every unvisited
    // candidate implicitly excluded.
    if sum_pmin <= load && load <= sum_pmax + FEASIBILITY_TOLERANCE {
        return Some(Vec::new());
    }
    if index >= candidates.len() {
        return None;
    }

    let candidate = &candidates[index];

    // Commit branch first; the skip branch only runs if committing this
    // candidate cannot lead to a feasible subset.
    if let Some(rest) = search(
        candidates,
        load,
        index + 1,
        sum_pmin + candidate.pmin,
        sum_pmax + candidate.effective_pmax,
    ) {
        let mut committed = Vec::with_capacity(rest.len() + 1);
        committed.push(index);
        committed.extend(rest);
        return Some(committed);
    }

    search(candidates, load, index + 1, sum_pmin, sum_pmax)
}
