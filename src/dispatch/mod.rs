//! Two-phase dispatch core: unit commitment over merit-ordered plants,
//! then greedy economic dispatch of the load.
//!
//! Pure and synchronous; knows nothing about JSON or HTTP. Each request is
//! computed from freshly built candidates, so concurrent requests need no
//! coordination.

pub mod allocator;
pub mod candidate;
pub mod commitment;
pub mod merit;

use crate::domain::{DispatchRequest, ProductionPlan};
use candidate::PlantCandidate;

/// Compute the production plan for one request.
///
/// Never fails: when no plant subset brackets the load, every plant is
/// planned at zero output. The plan carries one entry per input plant and is
/// always emitted in merit order.
pub fn plan(request: &DispatchRequest) -> Vec<ProductionPlan> {
    let mut candidates: Vec<PlantCandidate> = request
        .powerplants
        .iter()
        .map(|plant| PlantCandidate::new(plant, &request.fuels))
        .collect();

    merit::rank(&mut candidates);

    let committed = match commitment::commit(&candidates, request.load) {
        Some(indices) => indices,
        None => {
            tracing::warn!(
                load = request.load,
                plants = candidates.len(),
                "no feasible commitment, planning all plants at zero output"
            );
            return candidates
                .into_iter()
                .map(|c| ProductionPlan { name: c.name, p: 0.0 })
                .collect();
        }
    };

    let allocation = allocator::allocate(&candidates, &committed, request.load);

    tracing::debug!(
        load = request.load,
        committed = committed.len(),
        plants = candidates.len(),
        "dispatch complete"
    );

    candidates
        .into_iter()
        .zip(allocation)
        .map(|(c, p)| ProductionPlan { name: c.name, p })
        .collect()
}

/// Round to one decimal, half away from zero. Applied after every cumulative
/// arithmetic step so results stay on the one-decimal grid the 0.01
/// feasibility tolerance was chosen for.
pub(crate) fn round_mw(mw: f64) -> f64 {
    (mw * 10.0).round() / 10.0
}
