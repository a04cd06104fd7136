use std::f32::consts::TAU;

use eframe::egui::{Pos2, Vec2, vec2};

use crate::roles::{Category, Node};

const GOLDEN_ANGLE: f32 = 2.399_963;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Pos2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
    /// Ring radius per category as a fraction of `min(width, height)`.
    pub ring_fractions: [f32; Category::ALL.len()],
    pub angle_offsets: [f32; Category::ALL.len()],
    pub top_tier_radius: f32,
    pub node_radius: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let mut angle_offsets = [0.0; Category::ALL.len()];
        for (index, offset) in angle_offsets.iter_mut().enumerate() {
            *offset = (index as f32 * GOLDEN_ANGLE).rem_euclid(TAU);
        }

        Self {
            // Leadership, Executive, Technical, Operations, Business, Finance, HR, External
            ring_fractions: [0.06, 0.16, 0.25, 0.285, 0.32, 0.355, 0.39, 0.45],
            angle_offsets,
            top_tier_radius: 26.0,
            node_radius: 18.0,
        }
    }
}

impl LayoutConfig {
    pub fn ring_radius(&self, category: Category, size: Vec2) -> f32 {
        self.ring_fractions[category.index()] * size.x.min(size.y).max(0.0)
    }

    pub fn node_radius(&self, category: Category) -> f32 {
        if category.tier() == 0 {
            self.top_tier_radius
        } else {
            self.node_radius
        }
    }
}

/// Places every node on its category ring in one pass.
///
/// Members of a category are spread evenly over the full circle in input
/// order; a single member sits at angle 0. The output is parallel to `nodes`.
pub fn radial_layout(nodes: &[Node], size: Vec2, config: &LayoutConfig) -> Vec<Placement> {
    let center = (size * 0.5).to_pos2();

    let mut category_sizes = [0usize; Category::ALL.len()];
    for node in nodes {
        category_sizes[node.category.index()] += 1;
    }

    let mut next_slot = [0usize; Category::ALL.len()];
    nodes
        .iter()
        .map(|node| {
            let category = node.category.index();
            let members = category_sizes[category].max(1);
            let slot = next_slot[category];
            next_slot[category] += 1;

            let angle = if members == 1 {
                0.0
            } else {
                TAU * slot as f32 / members as f32 + config.angle_offsets[category]
            };
            let ring = config.ring_radius(node.category, size);

            Placement {
                position: center + vec2(angle.cos(), angle.sin()) * ring,
                radius: config.node_radius(node.category),
            }
        })
        .collect()
}

/// Shifts all placements so whatever sat at the old canvas center sits at the
/// new one. `scale` is the viewport scale the center movement is seen through.
pub fn recenter(placements: &mut [Placement], old_size: Vec2, new_size: Vec2, scale: f32) {
    let delta = (new_size - old_size) * 0.5 / scale;
    if delta == Vec2::ZERO || !delta.is_finite() {
        return;
    }

    for placement in placements {
        placement.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::NodeId;
    use proptest::prelude::*;

    fn node(id: u32, category: Category) -> Node {
        Node {
            id: NodeId(id),
            label: format!("Node {id}"),
            short_label: format!("N{id}"),
            category,
            role: String::new(),
            description: String::new(),
        }
    }

    fn category_strategy() -> impl Strategy<Value = Category> {
        (0..Category::ALL.len()).prop_map(|index| Category::ALL[index])
    }

    proptest! {
        #[test]
        fn prop_layout_is_deterministic(
            categories in proptest::collection::vec(category_strategy(), 0..40),
            width in 100.0f32..3000.0,
            height in 100.0f32..3000.0,
        ) {
            let nodes = categories
                .iter()
                .enumerate()
                .map(|(index, category)| node(index as u32, *category))
                .collect::<Vec<_>>();
            let config = LayoutConfig::default();

            let first = radial_layout(&nodes, vec2(width, height), &config);
            let second = radial_layout(&nodes, vec2(width, height), &config);

            prop_assert_eq!(first.len(), nodes.len());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_single_member_sits_at_angle_zero() {
        let nodes = vec![node(1, Category::Leadership), node(2, Category::Finance)];
        let size = vec2(800.0, 600.0);
        let config = LayoutConfig::default();

        let placements = radial_layout(&nodes, size, &config);

        let center = Pos2::new(400.0, 300.0);
        let ring = config.ring_radius(Category::Finance, size);
        assert!((placements[1].position.x - (center.x + ring)).abs() < 1e-3);
        assert!((placements[1].position.y - center.y).abs() < 1e-3);
    }

    #[test]
    fn test_category_members_share_ring_and_spread_evenly() {
        let nodes = (0..4)
            .map(|id| node(id, Category::Technical))
            .collect::<Vec<_>>();
        let size = vec2(1000.0, 1000.0);
        let config = LayoutConfig::default();
        let center = Pos2::new(500.0, 500.0);

        let placements = radial_layout(&nodes, size, &config);

        let ring = config.ring_radius(Category::Technical, size);
        for placement in &placements {
            assert!((placement.position.distance(center) - ring).abs() < 1e-2);
        }
        let neighbor_gap = placements[0].position.distance(placements[1].position);
        for pair in placements.windows(2) {
            assert!((pair[0].position.distance(pair[1].position) - neighbor_gap).abs() < 1e-2);
        }
    }

    #[test]
    fn test_rings_grow_with_tier_and_top_tier_is_larger() {
        let nodes = vec![
            node(1, Category::Leadership),
            node(2, Category::Executive),
            node(3, Category::Operations),
            node(4, Category::External),
        ];
        let size = vec2(900.0, 700.0);
        let center = Pos2::new(450.0, 350.0);

        let placements = radial_layout(&nodes, size, &LayoutConfig::default());
        let distances = placements
            .iter()
            .map(|placement| placement.position.distance(center))
            .collect::<Vec<_>>();

        assert!(distances.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(placements[0].radius > placements[1].radius);
        assert_eq!(placements[1].radius, placements[3].radius);
    }

    #[test]
    fn test_recenter_translates_uniformly() {
        let nodes = (0..5)
            .map(|id| node(id, Category::ALL[id as usize % 3]))
            .collect::<Vec<_>>();
        let mut placements = radial_layout(&nodes, vec2(800.0, 600.0), &LayoutConfig::default());
        placements[2].position = Pos2::new(12.0, -40.0);
        let before = placements.clone();

        recenter(&mut placements, vec2(800.0, 600.0), vec2(1000.0, 500.0), 1.0);

        for (old, new) in before.iter().zip(&placements) {
            let shift = new.position - old.position;
            assert!((shift.x - 100.0).abs() < 1e-3 && (shift.y + 50.0).abs() < 1e-3);
            assert_eq!(new.radius, old.radius);
        }
    }

    #[test]
    fn test_recenter_divides_center_movement_by_scale() {
        let mut placements = vec![Placement {
            position: Pos2::new(10.0, 20.0),
            radius: 18.0,
        }];

        recenter(&mut placements, vec2(800.0, 600.0), vec2(1000.0, 600.0), 2.0);

        assert!((placements[0].position.x - 60.0).abs() < 1e-3);
        assert!((placements[0].position.y - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_empty_input_yields_empty_layout() {
        assert!(radial_layout(&[], vec2(640.0, 480.0), &LayoutConfig::default()).is_empty());
    }
}
