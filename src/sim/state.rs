//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::serve::ServeSource;
use crate::config::GameConfig;

/// Which half of the field a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, red, W/S keys
    Left,
    /// Player 2, blue, arrow keys
    Right,
}

impl Side {
    /// Team name shown on screen
    pub fn team_name(self) -> &'static str {
        match self {
            Side::Left => "Red",
            Side::Right => "Blue",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// A side went past the win score; ball frozen until restart
    Won(Side),
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball crossed a goal edge; `scorer` got the point
    Goal { scorer: Side },
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Match decided
    Victory(Side),
    /// Restart command processed
    Restarted,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Direction of travel; components are flipped on bounces, never renormalized
    pub dir: Vec2,
    pub size: f32,
}

impl Ball {
    /// Serve from `center`: horizontal unit vector of a random sign, rotated
    /// by a random angle
    pub fn serve(center: Vec2, size: f32, serve: &mut dyn ServeSource) -> Self {
        let mut ball = Self {
            pos: center,
            dir: Vec2::X,
            size,
        };
        ball.reset(center, serve);
        ball
    }

    pub fn reset(&mut self, center: Vec2, serve: &mut dyn ServeSource) {
        let sign = serve.serve_sign();
        let angle = serve.serve_angle_degrees();
        self.pos = center;
        self.dir = Vec2::from_angle(angle.to_radians()).rotate(Vec2::new(sign, 0.0));
        log::debug!(
            "Serve: sign {}, angle {:.1} deg, dir ({:.3}, {:.3})",
            sign,
            angle,
            self.dir.x,
            self.dir.y
        );
    }

    pub fn bounds_at(&self, pos: Vec2) -> Aabb {
        Aabb::centered(pos, Vec2::splat(self.size))
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds_at(self.pos)
    }
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Center; x never changes
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let x = match side {
            Side::Left => config.left_paddle_x(),
            Side::Right => config.right_paddle_x(),
        };
        Self {
            side,
            pos: Vec2::new(x, config.center().y),
            size: config.paddle_extent(),
        }
    }

    /// Move vertically by `delta` (positive is down) and keep the paddle on screen
    pub fn move_by(&mut self, delta: f32, config: &GameConfig) {
        self.pos.y = config.clamp_paddle_y(self.pos.y + delta);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::centered(self.pos, self.size)
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// First side whose score is strictly above `win_score`, left checked first
    pub fn winner(&self, win_score: u32) -> Option<Side> {
        if self.left > win_score {
            Some(Side::Left)
        } else if self.right > win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub scores: Scores,
    pub phase: GamePhase,
    /// Frames simulated since start
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(config: &GameConfig, serve: &mut dyn ServeSource) -> Self {
        Self {
            ball: Ball::serve(config.center(), config.ball_size, serve),
            left: Paddle::new(Side::Left, config),
            right: Paddle::new(Side::Right, config),
            scores: Scores::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn reset_ball(&mut self, config: &GameConfig, serve: &mut dyn ServeSource) {
        self.ball.reset(config.center(), serve);
    }

    /// Back to 0-0 with a fresh serve; paddles stay where they are
    pub fn restart(&mut self, config: &GameConfig, serve: &mut dyn ServeSource) {
        self.reset_ball(config, serve);
        self.scores.clear();
        self.phase = GamePhase::Playing;
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::Won(side) => Some(side),
            GamePhase::Playing => None,
        }
    }
}
