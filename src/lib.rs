//! Radial relationship graph of organizational roles.
//!
//! [`roles`] loads the static dataset, [`layout`] places it, and [`scene`]
//! holds the interactive core. The egui front end in `app` only translates
//! input into [`scene::PointerEvent`]s and paints [`scene::DrawList`]s.

mod app;
pub mod layout;
pub mod roles;
pub mod scene;
pub mod util;

pub use app::RoleGraphApp;
