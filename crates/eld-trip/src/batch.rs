//! Planning many independent trips at once.

use tracing::info;

use crate::{TripPlan, TripPlanner, TripRequest, TripResult};

/// Plan every request with `planner`; results are in input order.
///
/// Each request gets its own `CycleState`, so one failed trip does not
/// affect the others.  With the `parallel` Cargo feature the requests are
/// planned on Rayon's thread pool.
pub fn plan_batch(planner: &TripPlanner, requests: &[TripRequest]) -> Vec<TripResult<TripPlan>> {
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = requests.iter().map(|r| planner.plan(r)).collect();

    #[cfg(feature = "parallel")]
    let results: Vec<_> = {
        use rayon::prelude::*;

        // Indexed collect keeps input order.
        requests.par_iter().map(|r| planner.plan(r)).collect()
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(trips = requests.len(), failed, "batch planned");
    results
}
