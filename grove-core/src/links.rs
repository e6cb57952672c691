//! Proximity link extraction for the silhouette layout.

use crate::{config::Config, node::Node, types::NodeId};

/// A renderable segment between two close nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: NodeId,
    pub b: NodeId,
    /// Opacity in `[0, link_alpha]`; closer pairs are more opaque.
    pub alpha: f32,
}

/// Scans every unordered node pair and returns a link for each pair
/// closer than `cfg.link_distance`.
///
/// The opacity is `link_alpha * (1 - d²/max²)`: a coincident pair gets
/// the full base alpha, a pair exactly at the threshold would get zero
/// and is not emitted at all. Deliberately O(n²) — fine for the few
/// hundred nodes a silhouette holds; a much larger cloud would need a
/// spatial grid while keeping the same opacity contract.
pub fn collect(nodes: &[Node], cfg: &Config) -> Vec<Link> {
    let max2 = cfg.link_distance * cfg.link_distance;
    let mut links = Vec::new();

    for a in 0..nodes.len() {
        for b in (a + 1)..nodes.len() {
            let d2 = nodes[a].position.distance_squared(nodes[b].position);
            if d2 < max2 {
                links.push(Link {
                    a,
                    b,
                    alpha: cfg.link_alpha * (1.0 - d2 / max2),
                });
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn nodes_at(positions: &[Vec2]) -> Vec<Node> {
        positions.iter().copied().map(Node::at_rest).collect()
    }

    #[test]
    fn coincident_pair_gets_the_full_base_alpha() {
        let cfg = Config::default();
        let nodes = nodes_at(&[Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)]);

        let links = collect(&nodes, &cfg);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].alpha, cfg.link_alpha);
    }

    #[test]
    fn pair_exactly_at_the_threshold_is_invisible() {
        let cfg = Config::default();
        let nodes = nodes_at(&[
            Vec2::ZERO,
            Vec2::new(cfg.link_distance, 0.0),
        ]);

        assert!(collect(&nodes, &cfg).is_empty());
    }

    #[test]
    fn alpha_falls_off_with_distance() {
        let cfg = Config::default();
        let nodes = nodes_at(&[
            Vec2::ZERO,
            Vec2::new(cfg.link_distance * 0.25, 0.0),
            Vec2::new(cfg.link_distance * 0.9, 0.0),
        ]);

        let links = collect(&nodes, &cfg);
        let near = links.iter().find(|l| l.a == 0 && l.b == 1).unwrap();
        let far = links.iter().find(|l| l.a == 0 && l.b == 2).unwrap();
        assert!(near.alpha > far.alpha);
        assert!(far.alpha > 0.0);
    }

    #[test]
    fn pairs_are_unordered_and_unique() {
        let cfg = Config::default();
        let nodes = nodes_at(&[Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]);

        let links = collect(&nodes, &cfg);
        assert_eq!(links.len(), 3);
        for link in &links {
            assert!(link.a < link.b);
        }
    }
}
