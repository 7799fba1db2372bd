//! Per-cluster subscene selection pools.
//!
//! A pool is built once per generation run from a cluster's weighted groups
//! and then drawn from without replacement as chunks are placed.

use rand::Rng;
use scenegraft_assets::{ClusterTemplate, SceneChunk, SubSceneEntry};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::rng::pick_weighted;

/// Clusters of one world template, keyed by cluster id.
pub type ClusterIndex<'a> = BTreeMap<i32, &'a ClusterTemplate>;

/// Runtime pools for one generation run, keyed by cluster id.
pub type ClusterPools = BTreeMap<i32, SelectionPool>;

/// Index clusters by id. A later cluster with a repeated id replaces the
/// earlier one.
pub fn index_clusters(clusters: &[ClusterTemplate]) -> ClusterIndex<'_> {
    clusters.iter().map(|c| (c.id, c)).collect()
}

/// Count how many chunks draw from each indexed cluster.
///
/// Chunks without a cluster, or naming a cluster missing from `index`, are
/// not counted.
pub fn cluster_counts(chunks: &[SceneChunk], index: &ClusterIndex<'_>) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for chunk in chunks {
        let Some(id) = chunk.specification.cluster() else {
            continue;
        };
        if index.contains_key(&id) {
            *counts.entry(id).or_insert(0) += 1;
        } else {
            debug!(cluster = id, chunk = %chunk.scene, "skipping unknown cluster in count");
        }
    }
    counts
}

/// Build one pool per counted cluster.
pub fn build_pools<R>(
    index: &ClusterIndex<'_>,
    counts: &BTreeMap<i32, usize>,
    rng: &mut R,
) -> ClusterPools
where
    R: Rng + ?Sized,
{
    counts
        .iter()
        .filter_map(|(id, count)| {
            let cluster = index.get(id)?;
            Some((*id, SelectionPool::build(cluster, *count, &mut *rng)))
        })
        .collect()
}

/// Pre-sampled subscene choices for one cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionPool {
    entries: Vec<SubSceneEntry>,
}

impl SelectionPool {
    /// Sample `count` entries from `cluster`.
    ///
    /// Groups are visited in order and each contributes up to its required
    /// minimum, weighted by probability. Whatever is still missing is drawn
    /// from the default group. A group that has nothing selectable is
    /// skipped, so a malformed cluster can produce a short pool.
    pub fn build<R>(cluster: &ClusterTemplate, count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut entries = Vec::with_capacity(count);
        let mut remaining = count;

        for (index, group) in cluster.groups.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            let quota = (group.required_minimum as usize).min(remaining);
            for _ in 0..quota {
                match pick_weighted(rng, &group.entries, |e| e.probability) {
                    Some(entry) => {
                        entries.push(entry.clone());
                        remaining -= 1;
                    }
                    None => {
                        warn!(
                            cluster = cluster.id,
                            group = index,
                            "subscene group has no selectable entries"
                        );
                        break;
                    }
                }
            }
        }

        while remaining > 0 {
            match pick_weighted(rng, &cluster.default.entries, |e| e.probability) {
                Some(entry) => {
                    entries.push(entry.clone());
                    remaining -= 1;
                }
                None => {
                    warn!(
                        cluster = cluster.id,
                        missing = remaining,
                        "default subscene group has no selectable entries, pool is short"
                    );
                    break;
                }
            }
        }

        debug!(cluster = cluster.id, size = entries.len(), "built selection pool");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries still available, in no particular order.
    pub fn entries(&self) -> &[SubSceneEntry] {
        &self.entries
    }

    /// Remove and return a uniformly chosen entry. `None` once exhausted.
    pub fn draw<R>(&mut self, rng: &mut R) -> Option<SubSceneEntry>
    where
        R: Rng + ?Sized,
    {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.entries.len());
        Some(self.entries.swap_remove(index))
    }
}
