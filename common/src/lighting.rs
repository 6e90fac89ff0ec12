use crate::{
    constants::{
        CHASE_RADIUS_RATIO, DEBUG_FLOOR_CHANNEL, DEBUG_WALL_CHANNEL, ENEMY_VISIBILITY_INSET,
        FLOOR_CHANNEL_MAX, LIGHT_RADIUS_MAX, LIGHT_RADIUS_MIN, PHYSICS_EPSILON, SANITY_MAX,
        WALL_CHANNEL_MAX, WALL_CHANNEL_MIN,
    },
    tiles::Tile,
};

// ============================================================================
// Shading
// ============================================================================

// Normalized distance falloff: 0 at the light source, 1 at the radius edge
// and beyond.
#[must_use]
pub fn shade_factor(distance: f32, radius: f32) -> f32 {
    if radius < PHYSICS_EPSILON {
        return 1.0;
    }
    (distance / radius).clamp(0.0, 1.0)
}

// Floor brightness over the full dynamic range; exactly zero past the radius.
#[must_use]
pub fn floor_channel(distance: f32, radius: f32) -> u8 {
    if distance > radius {
        return 0;
    }
    let lit = FLOOR_CHANNEL_MAX * (1.0 - shade_factor(distance, radius));
    lit.clamp(0.0, 255.0) as u8
}

// Walls fall off on a dimmer curve and never drop below a visible minimum,
// so they read as walls even at the radius edge.
#[must_use]
pub fn wall_channel(distance: f32, radius: f32) -> u8 {
    if distance > radius {
        return WALL_CHANNEL_MIN as u8;
    }
    let lit = WALL_CHANNEL_MAX * (1.0 - shade_factor(distance, radius));
    lit.max(WALL_CHANNEL_MIN) as u8
}

// Channel for a tile of either kind; debug mode bypasses distance shading.
#[must_use]
pub fn tile_channel(tile: Tile, distance: f32, radius: f32, debug_mode: bool) -> u8 {
    if debug_mode {
        return match tile {
            Tile::Wall => DEBUG_WALL_CHANNEL,
            Tile::Floor => DEBUG_FLOOR_CHANNEL,
        };
    }
    match tile {
        Tile::Wall => wall_channel(distance, radius),
        Tile::Floor => floor_channel(distance, radius),
    }
}

// ============================================================================
// Sanity-Driven Radius
// ============================================================================

// Light radius shrinks linearly with sanity, clamped to [MIN, MAX]
#[must_use]
pub fn light_radius(sanity: f32) -> f32 {
    let fraction = (sanity / SANITY_MAX).clamp(0.0, 1.0);
    (LIGHT_RADIUS_MAX - LIGHT_RADIUS_MIN).mul_add(fraction, LIGHT_RADIUS_MIN)
}

// Enemies speed up outside this radius and slow down within it
#[must_use]
pub fn chase_radius(light_radius: f32) -> f32 {
    CHASE_RADIUS_RATIO * light_radius
}

// ============================================================================
// Enemy Visibility
// ============================================================================

// Red intensity for an enemy at the given distance from the player, or None
// if it sits outside the inset visibility margin.
#[must_use]
pub fn enemy_red(distance: f32, radius: f32) -> Option<u8> {
    if distance > radius - ENEMY_VISIBILITY_INSET {
        return None;
    }
    let lit = FLOOR_CHANNEL_MAX * (1.0 - shade_factor(distance, radius));
    Some(lit.clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f32 = 150.0;

    #[test]
    fn floor_brightness_is_monotonic_in_distance() {
        let mut last = u8::MAX;
        for step in 0..=200 {
            let distance = step as f32;
            let channel = floor_channel(distance, RADIUS);
            assert!(channel <= last, "brightness rose at distance {distance}");
            last = channel;
        }
    }

    #[test]
    fn floor_is_fully_dark_beyond_radius() {
        assert_eq!(floor_channel(RADIUS + 0.1, RADIUS), 0);
        assert_eq!(floor_channel(RADIUS * 3.0, RADIUS), 0);
        assert_eq!(floor_channel(0.0, RADIUS), 255);
    }

    #[test]
    fn walls_stay_within_dim_band() {
        for step in 0..=200 {
            let channel = wall_channel(step as f32, RADIUS);
            assert!((30..=100).contains(&channel));
        }
        assert_eq!(wall_channel(0.0, RADIUS), 100);
        assert_eq!(wall_channel(RADIUS + 1.0, RADIUS), 30);
    }

    #[test]
    fn debug_mode_ignores_distance() {
        assert_eq!(tile_channel(Tile::Wall, 0.0, RADIUS, true), 100);
        assert_eq!(tile_channel(Tile::Wall, 9999.0, RADIUS, true), 100);
        assert_eq!(tile_channel(Tile::Floor, 9999.0, RADIUS, true), 180);
    }

    #[test]
    fn radius_tracks_sanity_linearly() {
        assert!((light_radius(100.0) - 150.0).abs() < 1e-4);
        assert!((light_radius(0.0) - 40.0).abs() < 1e-4);
        assert!((light_radius(50.0) - 95.0).abs() < 1e-4);

        // monotonic non-increasing as sanity drains
        let mut last = f32::MAX;
        for step in (0..=100).rev() {
            let radius = light_radius(step as f32);
            assert!(radius <= last);
            last = radius;
        }
    }

    #[test]
    fn enemy_hidden_outside_inset_margin() {
        assert!(enemy_red(RADIUS - 1.0, RADIUS).is_none());
        assert!(enemy_red(RADIUS - 5.0, RADIUS).is_some());
        let near = enemy_red(10.0, RADIUS).unwrap();
        let far = enemy_red(100.0, RADIUS).unwrap();
        assert!(near > far);
    }
}
