//! Workgroup grid covering the destination image

use crate::config::RaymarchConfig;

/// Number of workgroups along each image axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchGrid {
    pub x: u32,
    pub y: u32,
}

impl DispatchGrid {
    /// Covers `width` x `height` pixels in square tiles of `config.workgroup_size`.
    ///
    /// In coarse preview the effective resolution is first divided by
    /// `config.coarse_factor`, never dropping below one pixel.
    pub fn cover(width: u32, height: u32, config: &RaymarchConfig) -> Self {
        let tile = config.workgroup_size.max(1);
        let (width, height) = if config.coarse_preview {
            let factor = config.coarse_factor.max(1);
            ((width / factor).max(1), (height / factor).max(1))
        } else {
            (width.max(1), height.max(1))
        };

        Self {
            x: width.div_ceil(tile),
            y: height.div_ceil(tile),
        }
    }

    pub fn workgroups(&self) -> (u32, u32, u32) {
        (self.x, self.y, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let grid = DispatchGrid::cover(640, 480, &RaymarchConfig::default());
        assert_eq!(grid, DispatchGrid { x: 40, y: 30 });
    }

    #[test]
    fn test_partial_tiles_round_up() {
        let grid = DispatchGrid::cover(1921, 1080, &RaymarchConfig::default());
        assert_eq!(grid, DispatchGrid { x: 121, y: 68 });
    }

    #[test]
    fn test_coarse_preview_divides_resolution() {
        let config = RaymarchConfig::default().with_coarse_preview(true);
        // 1920/16 = 120 -> 8 tiles, 1080/16 = 67 -> 5 tiles
        assert_eq!(
            DispatchGrid::cover(1920, 1080, &config),
            DispatchGrid { x: 8, y: 5 }
        );
    }

    #[test]
    fn test_tiny_images_still_dispatch() {
        let coarse = RaymarchConfig::default().with_coarse_preview(true);
        assert_eq!(
            DispatchGrid::cover(8, 8, &coarse),
            DispatchGrid { x: 1, y: 1 }
        );
        assert_eq!(
            DispatchGrid::cover(0, 0, &RaymarchConfig::default()),
            DispatchGrid { x: 1, y: 1 }
        );
    }

    #[test]
    fn test_workgroups_has_single_depth() {
        let grid = DispatchGrid::cover(32, 16, &RaymarchConfig::default());
        assert_eq!(grid.workgroups(), (2, 1, 1));
    }
}
