use ordered_float::OrderedFloat;
use std::cmp::Reverse;

use super::candidate::PlantCandidate;

/// Sort candidates into merit order: cheapest marginal cost first, ties
/// broken by larger effective capacity (it covers more load per committed
/// unit), remaining ties keep input order.
///
/// The sorted order is an output contract: the final plan is emitted in
/// exactly this sequence.
pub fn rank(candidates: &mut [PlantCandidate]) {
    candidates.sort_by_key(|c| (OrderedFloat(c.cost), Reverse(OrderedFloat(c.effective_pmax))));
}
