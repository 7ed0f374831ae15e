use std::collections::BTreeSet;

use geomutil::Polygon;

use crate::rooms::RoomRecord;

/// Outward buffer applied to every room footprint before overlap testing, in map units. The
/// rooms of one physical restroom complex don't share boundaries exactly; this tolerance
/// bridges the gaps.
pub const ADJACENCY_BUFFER: f64 = 0.8;

/// How buffered footprints get merged into clusters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClusterMethod {
    /// For each room, collect the room plus everything its buffered footprint overlaps, then
    /// dedupe the resulting sets. This never takes a transitive closure, so it can under-merge
    /// when overlaps form a chain (A-B and B-C overlap, A-C don't) longer than the subset
    /// pruning can repair. The default; switching to exact components changes which points get
    /// emitted on chained layouts.
    NeighborExpansion,
    /// Exact connected components over the pairwise overlap graph, via union-find.
    ConnectedComponents,
}

/// Group one floor's rooms into clusters of location codes: two rooms land in the same cluster
/// when their buffered footprints are connected by overlaps. Every room appears in at least one
/// cluster; a room overlapping nothing forms a singleton. The buffered polygons only live for
/// the duration of this call.
pub fn build_clusters(rooms: &[&RoomRecord], method: ClusterMethod) -> Vec<BTreeSet<String>> {
    let buffered: Vec<(&str, Polygon)> = rooms
        .iter()
        .map(|r| (r.code.as_str(), r.polygon.buffer(ADJACENCY_BUFFER)))
        .collect();
    match method {
        ClusterMethod::NeighborExpansion => neighbor_expansion(&buffered),
        ClusterMethod::ConnectedComponents => connected_components(&buffered),
    }
}

fn neighbor_expansion(buffered: &[(&str, Polygon)]) -> Vec<BTreeSet<String>> {
    let mut clusters: Vec<BTreeSet<String>> = Vec::new();
    for (code, polygon) in buffered {
        let mut overlapping = BTreeSet::new();
        overlapping.insert(code.to_string());
        for (other_code, other) in buffered {
            if other.intersects(polygon) {
                overlapping.insert(other_code.to_string());
            }
        }
        if !clusters.contains(&overlapping) {
            clusters.push(overlapping);
        }
    }
    clusters
}

fn connected_components(buffered: &[(&str, Polygon)]) -> Vec<BTreeSet<String>> {
    let mut uf = UnionFind::new(buffered.len());
    for i in 0..buffered.len() {
        for j in (i + 1)..buffered.len() {
            if buffered[i].1.intersects(&buffered[j].1) {
                uf.union(i, j);
            }
        }
    }

    // One cluster per root, ordered by each root's first member.
    let mut clusters: Vec<(usize, BTreeSet<String>)> = Vec::new();
    for (idx, (code, _)) in buffered.iter().enumerate() {
        let root = uf.find(idx);
        match clusters.iter_mut().find(|(r, _)| *r == root) {
            Some((_, cluster)) => {
                cluster.insert(code.to_string());
            }
            None => {
                let mut cluster = BTreeSet::new();
                cluster.insert(code.to_string());
                clusters.push((root, cluster));
            }
        }
    }
    clusters.into_iter().map(|(_, c)| c).collect()
}

/// Drop every cluster that's a strict subset of another. Equal clusters don't exclude each
/// other. Survivor order is stable with respect to input order.
pub fn prune_subsets(clusters: Vec<BTreeSet<String>>) -> Vec<BTreeSet<String>> {
    clusters
        .iter()
        .filter(|cluster| {
            !clusters
                .iter()
                .any(|other| other.len() > cluster.len() && other.is_superset(cluster))
        })
        .cloned()
        .collect()
}

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> UnionFind {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let (a, b) = (self.find(a), self.find(b));
        if a == b {
            return;
        }
        if self.rank[a] < self.rank[b] {
            self.parent[a] = b;
        } else if self.rank[a] > self.rank[b] {
            self.parent[b] = a;
        } else {
            self.parent[b] = a;
            self.rank[a] += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use geomutil::Polygon;

    use crate::rooms::RoomRecord;

    use super::*;

    // 4x3 rooms along the x axis; consecutive rooms a gap apart.
    fn room(idx: usize, x: f64) -> RoomRecord {
        RoomRecord::new(
            format!("BUD01N05{:03}", idx),
            "WC".to_string(),
            Polygon::rectangle(4.0, 3.0).translate(x, 0.0),
        )
        .unwrap()
    }

    fn set(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn adjacent_rooms_cluster_together() {
        let rooms = vec![room(1, 0.0), room(2, 4.5), room(3, 20.0)];
        let refs: Vec<&RoomRecord> = rooms.iter().collect();
        let clusters = build_clusters(&refs, ClusterMethod::NeighborExpansion);

        // Coverage: every code shows up in some cluster, the lonely room as a singleton.
        for code in ["BUD01N05001", "BUD01N05002", "BUD01N05003"] {
            assert!(clusters.iter().any(|c| c.contains(code)), "{} missing", code);
        }
        let pruned = prune_subsets(clusters);
        assert_eq!(
            pruned,
            vec![
                set(&["BUD01N05001", "BUD01N05002"]),
                set(&["BUD01N05003"]),
            ]
        );
    }

    #[test]
    fn short_chains_repair_via_pruning() {
        // 1 and 3 don't touch even buffered, but both touch 2.
        let rooms = vec![room(1, 0.0), room(2, 5.0), room(3, 10.0)];
        let refs: Vec<&RoomRecord> = rooms.iter().collect();
        let pruned = prune_subsets(build_clusters(&refs, ClusterMethod::NeighborExpansion));
        assert_eq!(
            pruned,
            vec![set(&["BUD01N05001", "BUD01N05002", "BUD01N05003"])]
        );
    }

    #[test]
    fn long_chains_under_merge() {
        // Four rooms, only consecutive ones within buffered reach.
        let rooms = vec![room(1, 0.0), room(2, 5.0), room(3, 10.0), room(4, 15.0)];
        let refs: Vec<&RoomRecord> = rooms.iter().collect();

        let approx = prune_subsets(build_clusters(&refs, ClusterMethod::NeighborExpansion));
        assert_eq!(
            approx,
            vec![
                set(&["BUD01N05001", "BUD01N05002", "BUD01N05003"]),
                set(&["BUD01N05002", "BUD01N05003", "BUD01N05004"]),
            ]
        );

        let exact = prune_subsets(build_clusters(&refs, ClusterMethod::ConnectedComponents));
        assert_eq!(
            exact,
            vec![set(&[
                "BUD01N05001",
                "BUD01N05002",
                "BUD01N05003",
                "BUD01N05004"
            ])]
        );
    }

    #[test]
    fn pruning_drops_strict_subsets_only() {
        let input = vec![
            set(&["R1"]),
            set(&["R1", "R2"]),
            set(&["R3"]),
            set(&["R3"]),
        ];
        let pruned = prune_subsets(input);
        // The strict subset goes; the equal pair both stay.
        assert_eq!(
            pruned,
            vec![set(&["R1", "R2"]), set(&["R3"]), set(&["R3"])]
        );
    }

    #[test]
    fn pruning_is_idempotent() {
        let input = vec![set(&["R1"]), set(&["R1", "R2"]), set(&["R2", "R3"])];
        let once = prune_subsets(input);
        let twice = prune_subsets(once.clone());
        assert_eq!(once, twice);
        // Maximality: no survivor is a strict subset of another.
        for a in &once {
            for b in &once {
                assert!(!(b.len() > a.len() && b.is_superset(a)));
            }
        }
    }
}
