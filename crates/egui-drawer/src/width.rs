use egui::NumExt;

/// Width of the drawer panel.
pub enum DrawerWidth<'a> {
    /// Fixed width in points.
    Points(f32),
    /// Fraction of the current viewport width.
    Fraction(f32),
    /// Arbitrary function of the current viewport width.
    Custom(Box<dyn Fn(f32) -> f32 + 'a>),
}

impl Default for DrawerWidth<'_> {
    fn default() -> Self {
        DrawerWidth::Fraction(0.85)
    }
}

impl DrawerWidth<'_> {
    /// Resolves against the viewport, clamped to `[0, viewport_width]` so the
    /// panel can neither exceed the screen nor go negative.
    pub fn resolve(&self, viewport_width: f32) -> f32 {
        let width = match self {
            DrawerWidth::Points(points) => *points,
            DrawerWidth::Fraction(fraction) => viewport_width * fraction,
            DrawerWidth::Custom(width_fn) => width_fn(viewport_width),
        };
        width.clamp(0.0, viewport_width.at_least(0.0))
    }
}

impl From<f32> for DrawerWidth<'static> {
    fn from(points: f32) -> Self {
        DrawerWidth::Points(points)
    }
}
