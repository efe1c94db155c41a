//! Unit types: Px, Dp, and conversions

/// Raw physical pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl Px {
    pub fn to_dp(&self, density: f32) -> Dp {
        Dp(self.0 / density)
    }
}

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

#[cfg(test)]
#[path = "tests/unit_tests.rs"]
mod tests;
