use alloc::vec::Vec;

use serde::Serialize;

use crate::*;

/// Everything a view needs to draw one frame, detached from the controller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub level_index: usize,
    pub level_count: usize,
    pub level_id: &'static str,
    pub level_label: &'static str,
    pub faces: Vec<CardFace>,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub time_remaining: Seconds,
    pub timed: bool,
    pub phase: Phase,
    pub has_next_level: bool,
    pub has_interacted: bool,
}

impl Snapshot {
    pub fn from_controller<S: SoundGateway>(controller: &GameController<S>) -> Self {
        let level = controller.level();
        let faces = controller.faces().collect();

        Self {
            level_index: controller.level_index(),
            level_count: controller.catalog().len(),
            level_id: level.id,
            level_label: level.label,
            faces,
            matched_pairs: controller.matched_pairs(),
            total_pairs: controller.deck().pair_count(),
            time_remaining: controller.time_remaining(),
            timed: level.is_timed(),
            phase: controller.phase(),
            has_next_level: controller.has_next_level(),
            has_interacted: controller.has_interacted(),
        }
    }

    pub fn face_up_count(&self) -> usize {
        self.faces.iter().filter(|face| face.is_face_up()).count()
    }

    pub fn is_all_complete(&self) -> bool {
        self.phase == Phase::AllLevelsComplete
    }
}
