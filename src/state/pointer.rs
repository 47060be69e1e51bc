#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// Latest pointer position for the cursor glow.
///
/// `None` until the first pointer event, which keeps the glow hidden instead
/// of flashing at the page origin on load.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTrail {
    position: Option<(f64, f64)>,
}

impl PointerTrail {
    /// Diameter of the glow element in CSS pixels.
    pub const GLOW_SIZE_PX: f64 = 320.0;

    pub fn track(&mut self, x: f64, y: f64) {
        self.position = Some((x, y));
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.position.is_some()
    }

    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    /// CSS `transform` that centres the glow on the pointer.
    #[must_use]
    pub fn transform(&self) -> String {
        let (x, y) = self.position.unwrap_or_default();
        let half = Self::GLOW_SIZE_PX / 2.0;
        format!("translate3d({}px, {}px, 0)", x - half, y - half)
    }
}
