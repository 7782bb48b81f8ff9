//! Navigation controller: which POI is active
//!
//! Each POI is a two-state automaton (Inactive/Active). Activating one POI
//! forces every other active POI inactive first, so at most one POI is
//! active at any instant. Activating the already-active POI toggles it off.
//! Closing a POI never moves the camera; only opening one issues a
//! transition request.

use galleria_core::Pose;
use tracing::warn;

use crate::poi::PointOfInterest;

/// A camera transition the controller wants the engine to run.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub poi_id: String,
    pub pose: Pose,
}

/// Per-POI selection state, owned by the controller.
#[derive(Debug, Clone)]
struct PoiState {
    poi_id: String,
    is_active: bool,
}

/// Owns the POI registry and the exclusive-selection state machine.
pub struct NavigationController {
    pois: Vec<PointOfInterest>,
    states: Vec<PoiState>,
}

impl NavigationController {
    /// Build a controller over an ordered POI registry. All POIs start
    /// inactive.
    pub fn new(pois: Vec<PointOfInterest>) -> Self {
        let states = pois
            .iter()
            .map(|poi| PoiState {
                poi_id: poi.id.clone(),
                is_active: false,
            })
            .collect();
        Self { pois, states }
    }

    /// Toggle a POI. Opening it closes every other POI (state change only,
    /// no camera motion for those) and returns a transition request toward
    /// its target pose. Closing it returns `None`.
    ///
    /// Callers are expected to pass ids present in the registry; an unknown
    /// id is logged and ignored.
    pub fn activate(&mut self, poi_id: &str) -> Option<TransitionRequest> {
        let Some(index) = self.index_of(poi_id) else {
            warn!("activate called for unknown POI '{poi_id}'");
            return None;
        };

        if self.states[index].is_active {
            // Click on the open POI closes it; no camera motion.
            self.states[index].is_active = false;
            return None;
        }

        for state in &mut self.states {
            state.is_active = false;
        }
        self.states[index].is_active = true;

        Some(TransitionRequest {
            poi_id: self.pois[index].id.clone(),
            pose: self.pois[index].target_pose,
        })
    }

    /// Force a POI inactive. State change only; the camera stays put.
    pub fn deactivate(&mut self, poi_id: &str) {
        match self.index_of(poi_id) {
            Some(index) => self.states[index].is_active = false,
            None => warn!("deactivate called for unknown POI '{poi_id}'"),
        }
    }

    /// Id of the active POI, if any.
    pub fn active_poi(&self) -> Option<&str> {
        self.states
            .iter()
            .find(|s| s.is_active)
            .map(|s| s.poi_id.as_str())
    }

    /// Number of active POIs. The exclusivity invariant keeps this ≤ 1.
    pub fn active_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_active).count()
    }

    /// Look up a POI by id.
    pub fn poi(&self, poi_id: &str) -> Option<&PointOfInterest> {
        self.pois.iter().find(|p| p.id == poi_id)
    }

    /// The ordered POI registry.
    pub fn pois(&self) -> &[PointOfInterest] {
        &self.pois
    }

    /// The first configured POI (the tour-opening fly-to target).
    pub fn first_poi(&self) -> Option<&PointOfInterest> {
        self.pois.first()
    }

    fn index_of(&self, poi_id: &str) -> Option<usize> {
        self.states.iter().position(|s| s.poi_id == poi_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galleria_core::Vec3;

    fn controller() -> NavigationController {
        let pois = ["owl", "tripod", "bell"]
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let mut pose = Pose::looking_at(Vec3::splat(i as f32), Vec3::ZERO);
                pose.zoom = 1.0 + i as f32 * 0.1;
                PointOfInterest::new(id, id.to_uppercase(), Vec3::splat(i as f32), pose)
            })
            .collect();
        NavigationController::new(pois)
    }

    #[test]
    fn starts_all_inactive() {
        let nav = controller();
        assert_eq!(nav.active_poi(), None);
        assert_eq!(nav.active_count(), 0);
    }

    #[test]
    fn activate_opens_and_requests_transition() {
        let mut nav = controller();
        let request = nav.activate("owl").unwrap();
        assert_eq!(request.poi_id, "owl");
        assert_eq!(request.pose, nav.poi("owl").unwrap().target_pose);
        assert_eq!(nav.active_poi(), Some("owl"));
    }

    #[test]
    fn exclusivity_holds_across_arbitrary_sequences() {
        let mut nav = controller();
        let sequence = [
            "owl", "tripod", "tripod", "bell", "owl", "bell", "bell", "owl",
        ];
        for id in sequence {
            nav.activate(id);
            assert!(nav.active_count() <= 1, "after activate({id})");
        }
    }

    #[test]
    fn switching_pois_closes_the_previous_silently() {
        let mut nav = controller();
        nav.activate("owl");
        let request = nav.activate("bell").unwrap();
        assert_eq!(request.poi_id, "bell");
        assert_eq!(nav.active_poi(), Some("bell"));
        assert_eq!(nav.active_count(), 1);
    }

    #[test]
    fn double_activate_toggles_off_with_no_second_request() {
        let mut nav = controller();
        assert!(nav.activate("owl").is_some());
        assert!(nav.activate("owl").is_none());
        assert_eq!(nav.active_poi(), None);
    }

    #[test]
    fn deactivate_only_changes_state() {
        let mut nav = controller();
        nav.activate("tripod");
        nav.deactivate("tripod");
        assert_eq!(nav.active_poi(), None);
        // Deactivating an inactive POI is a no-op.
        nav.deactivate("owl");
        assert_eq!(nav.active_count(), 0);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut nav = controller();
        assert!(nav.activate("ghost").is_none());
        nav.deactivate("ghost");
        assert_eq!(nav.active_poi(), None);
    }

    #[test]
    fn first_poi_is_manifest_order() {
        let nav = controller();
        assert_eq!(nav.first_poi().unwrap().id, "owl");
    }
}
