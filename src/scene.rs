//! Scene state: the region collection and the interaction flags.
//!
//! One [`SceneState`] owns every region plus the cross-region state the
//! host needs - which substance is selected, the current zoom, whether a
//! system drag is in progress, and whether the camera should be re-fitted.
//! All of it is explicit state passed to the update and input paths; there
//! are no module-level globals.

use crate::noise::NoiseField;
use crate::region::Region;
use crate::tuning::Tuning;
use crate::Vec3;
use rand::Rng;

/// The region collection and interaction state for one session.
#[derive(Debug)]
pub struct SceneState {
    regions: Vec<Region>,
    active: usize,
    zoom: f32,
    dragging: bool,
    needs_refit: bool,
}

impl SceneState {
    /// Wrap a region collection. No region is selected yet; call
    /// [`select`](Self::select) to show one.
    pub fn new(regions: Vec<Region>) -> Self {
        Self {
            regions,
            active: 0,
            zoom: 1.0,
            dragging: false,
            needs_refit: true,
        }
    }

    /// Mark exactly one region visible and hide the rest.
    ///
    /// The newly visible region is re-centered on the origin; a crystal
    /// region is additionally shifted down-screen so the lattice sits
    /// comfortably in frame. Requests a camera re-fit. Out-of-range
    /// indices are ignored.
    pub fn select(&mut self, index: usize, tuning: &Tuning) {
        if index >= self.regions.len() {
            return;
        }
        self.active = index;
        for (i, region) in self.regions.iter_mut().enumerate() {
            region.visible = i == index;
            if region.visible {
                region.center = Vec3::ZERO;
                if region.has_crystal() {
                    region.center.y += tuning.crystal_screen_shift;
                }
            }
        }
        self.needs_refit = true;
    }

    /// Begin a system drag (Ctrl + left press in the reference gesture).
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// End the system drag.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Whether a system drag is in progress (hosts use this for the cursor).
    #[inline]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Translate all visible regions by a screen-space delta, scaled into
    /// world units by the current zoom. Only applies while a drag is
    /// active.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !self.dragging {
            return;
        }
        let world = Vec3::new(dx / self.zoom, dy / self.zoom, 0.0);
        for region in self.regions.iter_mut().filter(|r| r.visible) {
            region.center += world;
        }
    }

    /// Fit the visible regions into a window of the given pixel size,
    /// choosing a zoom that leaves `tuning.fit_margin` pixels of border.
    /// Clears the re-fit request.
    pub fn fit_to_view(&mut self, width: f32, height: f32, tuning: &Tuning) {
        self.needs_refit = false;
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut any = false;
        for region in self.regions.iter().filter(|r| r.visible) {
            let half = region.size * 0.5;
            min = min.min(region.center - Vec3::splat(half));
            max = max.max(region.center + Vec3::splat(half));
            any = true;
        }
        if !any {
            return;
        }
        let world_w = max.x - min.x;
        let world_h = max.y - min.y;
        if world_w <= 0.0 || world_h <= 0.0 {
            return;
        }
        let scale_x = (width - tuning.fit_margin) / world_w;
        let scale_y = (height - tuning.fit_margin) / world_h;
        self.zoom = scale_x.min(scale_y).clamp(tuning.zoom_min, tuning.zoom_max);
    }

    /// Whether a camera re-fit has been requested since the last
    /// [`fit_to_view`](Self::fit_to_view).
    #[inline]
    pub fn needs_refit(&self) -> bool {
        self.needs_refit
    }

    /// Current zoom factor.
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Index of the selected region.
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The selected region, if any regions exist.
    pub fn active_region(&self) -> Option<&Region> {
        self.regions.get(self.active)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut [Region] {
        &mut self.regions
    }

    /// Advance every visible, non-static region by one frame.
    pub fn update<R: Rng>(&mut self, tuning: &Tuning, noise: &NoiseField, rng: &mut R) {
        for region in &mut self.regions {
            region.step(tuning, noise, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Atom, Body, BodyKind};
    use crate::spawn::SpawnContext;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn gas_body(_ctx: &mut SpawnContext) -> Body {
        Body::new(
            BodyKind::Free,
            vec![Atom::new(Vec3::ZERO, Vec3::ONE, 14.0, None)],
        )
    }

    fn crystal_body(_ctx: &mut SpawnContext) -> Body {
        Body::new(
            BodyKind::Crystal,
            vec![Atom::new(Vec3::ZERO, Vec3::ONE, 9.0, None)],
        )
    }

    fn scene() -> (SceneState, Tuning, SmallRng) {
        let tuning = Tuning::default();
        let mut rng = SmallRng::seed_from_u64(77);
        let regions = vec![
            Region::new("He", Vec3::ZERO, 220.0, 3, false, gas_body, &tuning, &mut rng),
            Region::new("Ne", Vec3::ZERO, 220.0, 3, false, gas_body, &tuning, &mut rng),
            Region::new(
                "NaCl",
                Vec3::ZERO,
                220.0,
                1,
                true,
                crystal_body,
                &tuning,
                &mut rng,
            ),
        ];
        (SceneState::new(regions), tuning, rng)
    }

    #[test]
    fn test_select_shows_exactly_one_region() {
        let (mut scene, tuning, _) = scene();
        scene.select(1, &tuning);
        let visible: Vec<bool> = scene.regions().iter().map(|r| r.visible).collect();
        assert_eq!(visible, vec![false, true, false]);
        assert_eq!(scene.active_index(), 1);
        assert!(scene.needs_refit());
        assert_eq!(scene.regions()[1].center, Vec3::ZERO);
    }

    #[test]
    fn test_select_shifts_crystal_region() {
        let (mut scene, tuning, _) = scene();
        scene.select(2, &tuning);
        assert_eq!(
            scene.regions()[2].center,
            Vec3::new(0.0, tuning.crystal_screen_shift, 0.0)
        );
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let (mut scene, tuning, _) = scene();
        scene.select(0, &tuning);
        scene.select(99, &tuning);
        assert_eq!(scene.active_index(), 0);
        assert!(scene.regions()[0].visible);
    }

    #[test]
    fn test_pan_moves_only_visible_regions_while_dragging() {
        let (mut scene, tuning, _) = scene();
        scene.select(0, &tuning);

        // Not dragging: pan is a no-op.
        scene.pan(10.0, 5.0);
        assert_eq!(scene.regions()[0].center, Vec3::ZERO);

        scene.begin_drag();
        scene.pan(10.0, 5.0);
        scene.end_drag();
        // zoom is 1.0, so screen delta equals world delta.
        assert_eq!(scene.regions()[0].center, Vec3::new(10.0, 5.0, 0.0));
        assert_eq!(scene.regions()[1].center, Vec3::ZERO);
    }

    #[test]
    fn test_pan_scales_by_zoom() {
        let (mut scene, tuning, _) = scene();
        scene.select(0, &tuning);
        scene.fit_to_view(680.0, 680.0, &tuning);
        // 220-unit region in a 680px window with a 240px margin: zoom 2.0.
        assert!((scene.zoom() - 2.0).abs() < 1e-5);
        scene.begin_drag();
        scene.pan(10.0, 0.0);
        assert!((scene.regions()[0].center.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_fit_clamps_zoom_and_clears_refit() {
        let (mut scene, tuning, _) = scene();
        scene.select(0, &tuning);
        assert!(scene.needs_refit());
        scene.fit_to_view(10_000.0, 10_000.0, &tuning);
        assert_eq!(scene.zoom(), tuning.zoom_max);
        assert!(!scene.needs_refit());
        scene.fit_to_view(250.0, 250.0, &tuning);
        assert_eq!(scene.zoom(), tuning.zoom_min);
    }

    #[test]
    fn test_update_only_touches_visible_dynamic_regions() {
        let (mut scene, tuning, mut rng) = scene();
        scene.select(0, &tuning);
        let noise = NoiseField::new();
        let hidden_before: Vec<Vec3> =
            scene.regions()[1].bodies.iter().map(|b| b.position).collect();
        let crystal_before = scene.regions()[2].bodies[0].position;
        scene.update(&tuning, &noise, &mut rng);
        for (body, pos) in scene.regions()[1].bodies.iter().zip(hidden_before) {
            assert_eq!(body.position, pos);
        }
        assert_eq!(scene.regions()[2].bodies[0].position, crystal_before);
    }
}
