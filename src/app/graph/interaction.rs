use eframe::egui::{self, Event, MouseWheelUnit, Pos2, Rect, Ui, Vec2};

use crate::scene::{PointerButton, PointerEvent, PointerMode};

use super::super::ViewModel;

const POINTS_PER_WHEEL_LINE: f32 = 50.0;

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

impl ViewModel {
    /// Presses only count when they land on the canvas itself; moves and
    /// releases are forwarded while a gesture is in progress even when the
    /// pointer has left the canvas.
    pub(in crate::app) fn forward_pointer_events(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        let canvas_has_pointer = response.contains_pointer();
        let events = ui.input(|input| input.events.clone());
        let local = |pos: Pos2| (pos - rect.min).to_pos2();
        let mut last_pointer = ui.input(|input| input.pointer.latest_pos());

        for event in events {
            let gesture_active = self.session.interaction().mode != PointerMode::Idle;

            match event {
                Event::PointerMoved(pos) => {
                    last_pointer = Some(pos);
                    if rect.contains(pos) || gesture_active {
                        self.session.handle(PointerEvent::Move { pos: local(pos) });
                    } else {
                        self.session.handle(PointerEvent::Left);
                    }
                }
                Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    modifiers,
                    ..
                } => {
                    let Some(button) = map_button(button) else {
                        continue;
                    };
                    if pressed {
                        if canvas_has_pointer && rect.contains(pos) {
                            self.session.handle(PointerEvent::Down {
                                pos: local(pos),
                                button,
                                pan_modifier: modifiers.shift,
                            });
                        }
                    } else if gesture_active || rect.contains(pos) {
                        self.session.handle(PointerEvent::Up { pos: local(pos) });
                    }
                }
                Event::PointerGone => {
                    if !gesture_active {
                        self.session.handle(PointerEvent::Left);
                    }
                }
                Event::MouseWheel {
                    unit,
                    delta,
                    modifiers,
                    ..
                } => {
                    let Some(pos) = last_pointer.filter(|pos| rect.contains(*pos)) else {
                        continue;
                    };
                    if !canvas_has_pointer {
                        continue;
                    }
                    let delta = match unit {
                        MouseWheelUnit::Point => delta,
                        MouseWheelUnit::Line => delta * POINTS_PER_WHEEL_LINE,
                        MouseWheelUnit::Page => delta * rect.height(),
                    };
                    if delta != Vec2::ZERO {
                        self.session.handle(PointerEvent::Scroll {
                            pos: local(pos),
                            delta,
                            zoom_modifier: modifiers.command,
                        });
                    }
                }
                _ => {}
            }
        }
    }
}
