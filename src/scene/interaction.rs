use eframe::egui::{Pos2, Vec2};

use crate::roles::NodeId;

use super::GraphSession;

const CLICK_SLOP: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down {
        pos: Pos2,
        button: PointerButton,
        pan_modifier: bool,
    },
    Move {
        pos: Pos2,
    },
    Up {
        pos: Pos2,
    },
    Left,
    Scroll {
        pos: Pos2,
        delta: Vec2,
        zoom_modifier: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerMode {
    #[default]
    Idle,
    DraggingNode {
        id: NodeId,
        grab_offset: Vec2,
        pressed_at: Pos2,
        moved: bool,
    },
    Panning {
        anchor: Pos2,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub mode: PointerMode,
    pub hovered: Option<NodeId>,
    pub selected: Option<NodeId>,
    /// Last canvas position the pointer was seen at; `None` once it leaves.
    pub pointer: Option<Pos2>,
}

impl GraphSession {
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                pos,
                button,
                pan_modifier,
            } => self.pointer_down(pos, button, pan_modifier),
            PointerEvent::Move { pos } => self.pointer_move(pos),
            PointerEvent::Up { pos } => self.pointer_up(pos),
            PointerEvent::Left => {
                self.interaction.pointer = None;
                self.interaction.hovered = None;
            }
            PointerEvent::Scroll {
                pos,
                delta,
                zoom_modifier,
            } => {
                if zoom_modifier {
                    self.viewport.zoom_by_wheel(delta.y, pos, &self.zoom_config);
                } else {
                    self.viewport.pan_by(delta);
                }
                self.update_hover(pos);
            }
        }
    }

    /// Node whose drawn circle contains `screen`; the nearest center wins.
    pub fn node_at(&self, screen: Pos2) -> Option<NodeId> {
        self.graph
            .nodes()
            .iter()
            .zip(&self.placements)
            .filter_map(|(node, placement)| {
                let center = self.viewport.scene_to_screen(placement.position);
                let distance = center.distance(screen);
                (distance <= self.viewport.scale_length(placement.radius))
                    .then_some((node.id, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    fn pointer_down(&mut self, pos: Pos2, button: PointerButton, pan_modifier: bool) {
        self.interaction.pointer = Some(pos);
        if self.interaction.mode != PointerMode::Idle {
            return;
        }

        let pans = match button {
            PointerButton::Middle => true,
            PointerButton::Primary => pan_modifier,
            PointerButton::Secondary => return,
        };

        if pans {
            self.enter_mode(PointerMode::Panning { anchor: pos });
            return;
        }

        match self.node_at(pos) {
            Some(id) => {
                let Some(center) = self.screen_position(id) else {
                    return;
                };
                self.enter_mode(PointerMode::DraggingNode {
                    id,
                    grab_offset: pos - center,
                    pressed_at: pos,
                    moved: false,
                });
            }
            None => self.set_selected(None),
        }
    }

    fn pointer_move(&mut self, pos: Pos2) {
        match self.interaction.mode {
            PointerMode::Idle => {}
            PointerMode::DraggingNode {
                id,
                grab_offset,
                pressed_at,
                moved,
            } => {
                if moved || pos.distance(pressed_at) > CLICK_SLOP {
                    self.interaction.mode = PointerMode::DraggingNode {
                        id,
                        grab_offset,
                        pressed_at,
                        moved: true,
                    };
                    self.move_node(id, pos - grab_offset);
                }
            }
            PointerMode::Panning { anchor } => {
                self.viewport.pan_by(pos - anchor);
                self.interaction.mode = PointerMode::Panning { anchor: pos };
            }
        }

        self.update_hover(pos);
    }

    fn pointer_up(&mut self, pos: Pos2) {
        if let PointerMode::DraggingNode {
            id, moved: false, ..
        } = self.interaction.mode
        {
            let next = (self.interaction.selected != Some(id)).then_some(id);
            self.set_selected(next);
        }

        self.enter_mode(PointerMode::Idle);
        self.update_hover(pos);
    }

    fn move_node(&mut self, id: NodeId, screen: Pos2) {
        let scene = self.viewport.screen_to_scene(screen);
        let Some(placement) = self
            .graph
            .index_of(id)
            .and_then(|index| self.placements.get_mut(index))
        else {
            return;
        };
        placement.position = scene;
    }

    fn update_hover(&mut self, pos: Pos2) {
        self.interaction.pointer = Some(pos);
        self.interaction.hovered = self.node_at(pos);
    }

    pub(super) fn refresh_hover(&mut self) {
        self.interaction.hovered = self
            .interaction
            .pointer
            .and_then(|pos| self.node_at(pos));
    }

    fn enter_mode(&mut self, mode: PointerMode) {
        if std::mem::discriminant(&self.interaction.mode) != std::mem::discriminant(&mode) {
            tracing::debug!(from = ?self.interaction.mode, to = ?mode, "pointer mode");
        }
        self.interaction.mode = mode;
    }

    pub(super) fn set_selected(&mut self, id: Option<NodeId>) {
        if self.interaction.selected != id {
            tracing::info!(selected = ?id, "selection changed");
            self.interaction.selected = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{Category, Edge, Node, RoleGraph};
    use crate::scene::tests::session_with;
    use eframe::egui::{pos2, vec2};
    use proptest::prelude::*;

    fn graph() -> RoleGraph {
        let node = |id: u32, category| Node {
            id: NodeId(id),
            label: format!("Role {id}"),
            short_label: format!("R{id}"),
            category,
            role: format!("Title {id}"),
            description: String::new(),
        };
        RoleGraph::new(
            vec![
                node(1, Category::Leadership),
                node(2, Category::Executive),
                node(3, Category::Executive),
                node(4, Category::External),
            ],
            vec![
                Edge {
                    source: NodeId(1),
                    target: NodeId(2),
                },
                Edge {
                    source: NodeId(1),
                    target: NodeId(3),
                },
            ],
        )
    }

    fn session() -> GraphSession {
        session_with(graph())
    }

    fn down(pos: Pos2) -> PointerEvent {
        PointerEvent::Down {
            pos,
            button: PointerButton::Primary,
            pan_modifier: false,
        }
    }

    fn click(session: &mut GraphSession, id: NodeId) {
        let pos = session.screen_position(id).unwrap();
        session.handle(down(pos));
        session.handle(PointerEvent::Up { pos });
    }

    /// A canvas point no node covers.
    fn empty_spot(session: &GraphSession) -> Pos2 {
        let spot = pos2(5.0, 5.0);
        assert!(session.node_at(spot).is_none());
        spot
    }

    #[test]
    fn test_click_toggles_selection() {
        let mut session = session();

        click(&mut session, NodeId(1));
        assert_eq!(session.selected_id(), Some(NodeId(1)));

        click(&mut session, NodeId(1));
        assert_eq!(session.selected_id(), None);

        click(&mut session, NodeId(1));
        click(&mut session, NodeId(2));
        assert_eq!(session.selected_id(), Some(NodeId(2)));
        assert_eq!(session.interaction().mode, PointerMode::Idle);
    }

    #[test]
    fn test_click_does_not_move_node() {
        let mut session = session();
        let before = session.placements().to_vec();
        let pos = session.screen_position(NodeId(2)).unwrap();

        session.handle(down(pos + vec2(4.0, 0.0)));
        session.handle(PointerEvent::Move {
            pos: pos + vec2(5.0, 1.0),
        });
        session.handle(PointerEvent::Up {
            pos: pos + vec2(5.0, 1.0),
        });

        assert_eq!(session.placements(), before.as_slice());
        assert_eq!(session.selected_id(), Some(NodeId(2)));
    }

    #[test]
    fn test_drag_keeps_grab_offset_and_skips_selection() {
        let mut session = session();
        session.handle(PointerEvent::Scroll {
            pos: pos2(400.0, 300.0),
            delta: vec2(0.0, 120.0),
            zoom_modifier: true,
        });
        let center = session.screen_position(NodeId(4)).unwrap();
        let grab = center + vec2(6.0, -3.0);

        session.handle(down(grab));
        assert!(matches!(
            session.interaction().mode,
            PointerMode::DraggingNode { id: NodeId(4), .. }
        ));
        let target = grab + vec2(-150.0, 80.0);
        session.handle(PointerEvent::Move { pos: target });
        session.handle(PointerEvent::Up { pos: target });

        let moved_center = session.screen_position(NodeId(4)).unwrap();
        assert!((moved_center - (target - vec2(6.0, -3.0))).length() < 1e-2);
        assert_eq!(session.selected_id(), None);
        assert_eq!(session.interaction().mode, PointerMode::Idle);
    }

    #[test]
    fn test_empty_canvas_press_clears_selection() {
        let mut session = session();
        click(&mut session, NodeId(3));
        let spot = empty_spot(&session);

        session.handle(down(spot));

        assert_eq!(session.selected_id(), None);
        assert_eq!(session.interaction().mode, PointerMode::Idle);
    }

    #[test]
    fn test_middle_button_and_modifier_pan_incrementally() {
        let mut session = session();
        click(&mut session, NodeId(1));
        let spot = empty_spot(&session);
        let placements = session.placements().to_vec();

        session.handle(PointerEvent::Down {
            pos: spot,
            button: PointerButton::Middle,
            pan_modifier: false,
        });
        session.handle(PointerEvent::Move {
            pos: spot + vec2(10.0, 0.0),
        });
        session.handle(PointerEvent::Move {
            pos: spot + vec2(30.0, 5.0),
        });
        session.handle(PointerEvent::Up {
            pos: spot + vec2(30.0, 5.0),
        });
        assert_eq!(session.viewport().translate, vec2(30.0, 5.0));

        let node = session.screen_position(NodeId(2)).unwrap();
        session.handle(PointerEvent::Down {
            pos: node,
            button: PointerButton::Primary,
            pan_modifier: true,
        });
        assert!(matches!(
            session.interaction().mode,
            PointerMode::Panning { .. }
        ));
        session.handle(PointerEvent::Move {
            pos: node + vec2(-5.0, -5.0),
        });
        session.handle(PointerEvent::Up {
            pos: node + vec2(-5.0, -5.0),
        });

        assert_eq!(session.viewport().translate, vec2(25.0, 0.0));
        assert_eq!(session.placements(), placements.as_slice());
        assert_eq!(session.selected_id(), Some(NodeId(1)));
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut session = session();
        let pos = session.screen_position(NodeId(1)).unwrap();

        session.handle(PointerEvent::Down {
            pos,
            button: PointerButton::Secondary,
            pan_modifier: false,
        });

        assert_eq!(session.interaction().mode, PointerMode::Idle);
    }

    #[test]
    fn test_hover_follows_pointer_and_leave() {
        let mut session = session();
        let pos = session.screen_position(NodeId(3)).unwrap();

        session.handle(PointerEvent::Move { pos });
        assert_eq!(session.hovered_id(), Some(NodeId(3)));

        session.handle(PointerEvent::Move {
            pos: empty_spot(&session),
        });
        assert_eq!(session.hovered_id(), None);

        session.handle(PointerEvent::Move { pos });
        session.handle(PointerEvent::Left);
        assert_eq!(session.hovered_id(), None);
    }

    #[test]
    fn test_plain_scroll_pans() {
        let mut session = session();

        session.handle(PointerEvent::Scroll {
            pos: pos2(100.0, 100.0),
            delta: vec2(0.0, -40.0),
            zoom_modifier: false,
        });

        assert_eq!(session.viewport().translate, vec2(0.0, -40.0));
        assert_eq!(session.viewport().scale, 1.0);
    }

    #[test]
    fn test_drag_survives_resize() {
        let mut session = session();
        let grab = session.screen_position(NodeId(2)).unwrap();

        session.handle(down(grab));
        session.handle(PointerEvent::Move {
            pos: grab + vec2(40.0, 0.0),
        });
        session.resize(vec2(1000.0, 600.0));
        session.handle(PointerEvent::Move {
            pos: grab + vec2(60.0, 0.0),
        });
        session.handle(PointerEvent::Up {
            pos: grab + vec2(60.0, 0.0),
        });

        let center = session.screen_position(NodeId(2)).unwrap();
        assert!((center - (grab + vec2(60.0, 0.0))).length() < 1e-2);
    }

    proptest! {
        #[test]
        fn prop_drag_changes_only_dragged_node(
            which in 0usize..4,
            tx in -900.0f32..900.0,
            ty in -900.0f32..900.0,
        ) {
            let mut session = session();
            let ids = session.graph().nodes().iter().map(|node| node.id).collect::<Vec<_>>();
            let edges = session.graph().edges().to_vec();
            let before = session.placements().to_vec();
            let id = ids[which];
            let grab = session.screen_position(id).unwrap();
            let target = pos2(tx, ty);
            prop_assume!(target.distance(grab) > CLICK_SLOP);

            session.handle(down(grab));
            session.handle(PointerEvent::Move { pos: target });
            session.handle(PointerEvent::Up { pos: target });

            let after_ids = session.graph().nodes().iter().map(|node| node.id).collect::<Vec<_>>();
            prop_assert_eq!(&after_ids, &ids);
            prop_assert_eq!(session.graph().edges(), edges.as_slice());
            for (index, (old, new)) in before.iter().zip(session.placements()).enumerate() {
                if index == which {
                    prop_assert!((new.position - target).length() < 1e-2);
                    prop_assert_eq!(new.radius, old.radius);
                } else {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }
}
