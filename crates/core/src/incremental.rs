use crate::network::Network;
use crate::solver::{decide_dc, Verdict};

/// Caches the last DC verdict for a network, recomputing only when the
/// caller has flagged an update. Mirrors the original `DcTester`'s two
/// booleans (`update_pending`, `first_time`) as a single cache slot: an
/// empty cache is exactly "first time or updated since last query".
///
/// There is no incremental algorithm behind this yet — every cache miss
/// calls `decide_dc` from scratch, as spec.md §9 directs. A true
/// incremental variant, if it is ever written, replaces only the body of
/// `query`'s cache-miss branch.
pub struct IncrementalDcTester {
    network: Network,
    cached: Option<Verdict>,
}

impl IncrementalDcTester {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            cached: None,
        }
    }

    /// Returns the DC verdict, reusing the cached answer if the network has
    /// not been marked updated since the last query.
    pub fn query(&mut self) -> Verdict {
        if let Some(verdict) = self.cached {
            return verdict;
        }
        let verdict = decide_dc(&self.network);
        self.cached = Some(verdict);
        verdict
    }

    /// Replaces the underlying network and invalidates the cache. The next
    /// `query` call recomputes from scratch.
    pub fn mark_updated(&mut self, network: Network) {
        self.network = network;
        self.cached = None;
    }

    pub fn network(&self) -> &Network {
        &self.network
    }
}
