use bevy_ecs::prelude::*;

use common::{constants::SANITY_DECAY_STEP, lighting::light_radius};

use crate::resources::{LightState, SanityState};

// ============================================================================
// Sanity Decay System
// ============================================================================

// Runs on the slow decay cadence, decoupled from movement ticks. Sanity
// floors at zero with no terminal state; the radius just stays at its
// minimum from then on.
pub fn sanity_decay_system(mut sanity: ResMut<SanityState>, mut light: ResMut<LightState>) {
    sanity.sanity = (sanity.sanity - SANITY_DECAY_STEP).max(0.0);
    light.radius = light_radius(sanity.sanity);
}
