//! A swipeable, animatable side drawer for egui.
//!
//! The drawer is a panel anchored to the left or right screen edge, rendered
//! above the rest of the UI together with a dimming backdrop overlay. The host
//! owns the open flag; the drawer animates a continuous open progress toward
//! it and lets the user drag the panel shut when swiping is enabled.

mod drawer;
pub mod easing;
mod state;
mod width;

pub use drawer::{Drawer, DrawerResponse, Side};
pub use easing::Easing;
pub use state::DrawerState;
pub use width::DrawerWidth;
