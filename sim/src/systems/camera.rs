use bevy_ecs::prelude::*;
use bevy_math::Vec2;

use common::{
    constants::{CAMERA_SMOOTHING, VIEW_HEIGHT, VIEW_WIDTH},
    markers::PlayerMarker,
    protocol::Position,
};

use crate::resources::CameraState;

// ============================================================================
// Camera Follow System
// ============================================================================

// Center the viewport target on the player, then exponentially smooth the
// camera toward it: camera += (target - camera) / smoothing.
pub fn camera_follow_system(
    mut camera: ResMut<CameraState>,
    query: Query<&Position, With<PlayerMarker>>,
) {
    let Ok(pos) = query.single() else {
        return;
    };

    let target = Vec2::new(pos.x - VIEW_WIDTH / 2.0, pos.y - VIEW_HEIGHT / 2.0);
    let current = camera.pos;
    camera.pos = current + (target - current) / CAMERA_SMOOTHING;
}
