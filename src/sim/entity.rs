//! Transient roadway entities: collectibles, obstacles and rare bonuses
//!
//! One tagged type covers every kind so the step iterates a single pool.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::character::PlayerSlot;
use super::collision::Aabb;
use crate::consts::*;

/// Travel direction of an obstacle lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }
}

/// One horizontal band of traffic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lane {
    /// Top y of obstacles in this lane
    pub top: f32,
    pub heading: Heading,
    /// Multiplier on the run speed
    pub speed_class: f32,
}

impl Lane {
    /// X an obstacle enters at: just past the edge it travels away from
    pub fn entry_x(&self) -> f32 {
        match self.heading {
            Heading::Left => SCREEN_WIDTH,
            Heading::Right => -OBSTACLE_WIDTH,
        }
    }
}

pub const LANES: [Lane; 4] = [
    Lane {
        top: 70.0,
        heading: Heading::Left,
        speed_class: 1.0,
    },
    Lane {
        top: 120.0,
        heading: Heading::Right,
        speed_class: 1.4,
    },
    Lane {
        top: 170.0,
        heading: Heading::Left,
        speed_class: 1.2,
    },
    Lane {
        top: 220.0,
        heading: Heading::Right,
        speed_class: 1.7,
    },
];

/// Collision shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Box anchored at the entity's top-left `pos`
    Box { size: Vec2 },
    /// Circle centred on the entity's `pos`
    Circle { radius: f32 },
}

/// Kind-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Carrot (Bunny) or fish (Cat): only its owner may collect it
    Collectible { owner: PlayerSlot, restore: f64 },
    /// Vehicle moving along a lane
    Obstacle { lane: usize, heading: Heading, speed: f32 },
    /// Golden carrot, collectible by either player
    RareBonus { restore: f64 },
}

/// A live roadway entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub pos: Vec2,
    pub shape: Shape,
    pub kind: EntityKind,
}

impl Entity {
    pub fn collectible(id: u32, owner: PlayerSlot, pos: Vec2, restore: f64) -> Self {
        Self {
            id,
            pos,
            shape: Shape::Box {
                size: Vec2::splat(COLLECTIBLE_SIZE),
            },
            kind: EntityKind::Collectible { owner, restore },
        }
    }

    pub fn obstacle(id: u32, lane_index: usize, x: f32, run_speed: f32) -> Self {
        let lane = LANES[lane_index];
        Self {
            id,
            pos: Vec2::new(x, lane.top),
            shape: Shape::Box {
                size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            },
            kind: EntityKind::Obstacle {
                lane: lane_index,
                heading: lane.heading,
                speed: lane.speed_class * run_speed,
            },
        }
    }

    pub fn rare_bonus(id: u32, center: Vec2, restore: f64) -> Self {
        Self {
            id,
            pos: center,
            shape: Shape::Circle {
                radius: BONUS_RADIUS,
            },
            kind: EntityKind::RareBonus { restore },
        }
    }

    pub fn is_obstacle(&self) -> bool {
        matches!(self.kind, EntityKind::Obstacle { .. })
    }

    /// Axis-aligned bounds (circles use their enclosing square)
    pub fn bounds(&self) -> Aabb {
        match self.shape {
            Shape::Box { size } => Aabb::new(self.pos, size),
            Shape::Circle { radius } => {
                Aabb::new(self.pos - Vec2::splat(radius), Vec2::splat(radius * 2.0))
            }
        }
    }

    /// Horizontal displacement for one tick if nothing blocks it
    pub fn step_dx(&self, drift_speed: f32) -> f32 {
        match self.kind {
            EntityKind::Obstacle { heading, speed, .. } => heading.sign() * speed,
            EntityKind::Collectible { .. } | EntityKind::RareBonus { .. } => -drift_speed,
        }
    }

    /// True once the entity has fully left the screen on the side it travels toward
    pub fn is_off_screen(&self) -> bool {
        let bounds = self.bounds();
        match self.kind {
            EntityKind::Obstacle {
                heading: Heading::Right,
                ..
            } => bounds.min.x > SCREEN_WIDTH,
            _ => bounds.max().x < 0.0,
        }
    }
}

/// Whether `mover`, after moving by `dx`, would come within `margin` of the
/// obstacle `ahead` in its direction of travel
pub fn blocked_by(mover: &Aabb, dx: f32, ahead: &Aabb, margin: f32) -> bool {
    if dx > 0.0 {
        ahead.min.x > mover.min.x && mover.max().x + dx + margin > ahead.min.x
    } else if dx < 0.0 {
        ahead.min.x < mover.min.x && mover.min.x + dx - margin < ahead.max().x
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_avoid_home_row() {
        let home_top = BUNNY_HOME.1;
        for lane in LANES {
            assert!(lane.top + OBSTACLE_HEIGHT <= home_top);
        }
    }

    #[test]
    fn test_obstacle_speed_from_lane() {
        let obstacle = Entity::obstacle(1, 3, 0.0, 2.0);
        assert_eq!(obstacle.step_dx(2.0), 1.7 * 2.0);
        let obstacle = Entity::obstacle(2, 0, 0.0, 2.0);
        assert_eq!(obstacle.step_dx(2.0), -2.0);
    }

    #[test]
    fn test_collectible_drifts_left() {
        let carrot = Entity::collectible(1, PlayerSlot::Bunny, Vec2::new(300.0, 75.0), 20.0);
        assert_eq!(carrot.step_dx(3.0), -3.0);
    }

    #[test]
    fn test_off_screen_respects_heading() {
        let mut left = Entity::obstacle(1, 0, -OBSTACLE_WIDTH + 1.0, 2.0);
        assert!(!left.is_off_screen());
        left.pos.x = -OBSTACLE_WIDTH - 1.0;
        assert!(left.is_off_screen());

        // Freshly spawned right-bound obstacle sits left of the screen but is not culled
        let mut right = Entity::obstacle(2, 1, LANES[1].entry_x(), 2.0);
        assert!(!right.is_off_screen());
        right.pos.x = SCREEN_WIDTH + 1.0;
        assert!(right.is_off_screen());

        let mut bonus = Entity::rare_bonus(3, Vec2::new(-19.0, 100.0), 50.0);
        assert!(!bonus.is_off_screen());
        bonus.pos.x = -21.0;
        assert!(bonus.is_off_screen());
    }

    #[test]
    fn test_blocked_by_following_distance() {
        let size = Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        let trailing = Aabb::new(Vec2::new(100.0, 120.0), size);
        let close = Aabb::new(Vec2::new(175.0, 120.0), size);
        let far = Aabb::new(Vec2::new(300.0, 120.0), size);

        assert!(blocked_by(&trailing, 3.0, &close, 10.0));
        assert!(!blocked_by(&trailing, 3.0, &far, 10.0));
        // Obstacles behind never block
        assert!(!blocked_by(&close, 3.0, &trailing, 10.0));

        // Leftward: ahead means smaller x
        let lead = Aabb::new(Vec2::new(100.0, 70.0), size);
        let follow = Aabb::new(Vec2::new(178.0, 70.0), size);
        assert!(blocked_by(&follow, -2.0, &lead, 10.0));
        assert!(!blocked_by(&lead, -2.0, &follow, 10.0));
    }
}
