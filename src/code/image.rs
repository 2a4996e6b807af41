//! Module grids and their terminal rasterization.

/// Light modules added around the code on every side.
pub const QUIET_ZONE_MODULES: usize = 2;

/// A square grid of dark/light modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeImage {
    size: usize,
    modules: Vec<bool>,
}

impl CodeImage {
    /// Build an image from a row-major `width * width` grid, padding it with
    /// a quiet zone of [`QUIET_ZONE_MODULES`].
    pub fn with_quiet_zone(width: usize, dark: Vec<bool>) -> Self {
        debug_assert_eq!(dark.len(), width * width);
        let size = width + 2 * QUIET_ZONE_MODULES;
        let mut modules = vec![false; size * size];
        for y in 0..width {
            for x in 0..width {
                modules[(y + QUIET_ZONE_MODULES) * size + x + QUIET_ZONE_MODULES] =
                    dark[y * width + x];
            }
        }
        Self { size, modules }
    }

    /// Width and height in modules, quiet zone included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at `(x, y)` is dark. Outside the grid is light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.modules[y * self.size + x]
    }

    /// Terminal columns needed at `scale`.
    pub fn columns(&self, scale: usize) -> usize {
        self.size * scale.max(1)
    }

    /// Terminal rows needed at `scale` (two pixel rows per text row).
    pub fn rows(&self, scale: usize) -> usize {
        (self.size * scale.max(1)).div_ceil(2)
    }

    /// Rasterize into lines of half-block characters.
    ///
    /// Each module becomes `scale` x `scale` pixels and every text cell holds
    /// two vertically stacked pixels. Dark pixels are drawn with the
    /// foreground colour, so the caller should paint dark on light.
    pub fn to_half_block_lines(&self, scale: usize) -> Vec<String> {
        let scale = scale.max(1);
        let pixels = self.size * scale;
        let dark = |px: usize, py: usize| self.is_dark(px / scale, py / scale);

        (0..pixels)
            .step_by(2)
            .map(|py| {
                (0..pixels)
                    .map(|px| match (dark(px, py), py + 1 < pixels && dark(px, py + 1)) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    })
                    .collect()
            })
            .collect()
    }
}
