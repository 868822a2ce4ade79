//! Per-frame simulation step
//!
//! Order within a frame: paddles, restart, tentative ball position, goals,
//! walls, paddles, integrate, win check. Goal, wall and paddle checks all
//! test the same tentative box, so several of them can fire in one frame.

use super::serve::ServeSource;
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::config::GameConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Restart pressed this frame (edge, not held)
    pub restart: bool,
}

impl TickInput {
    /// Vertical direction requested for a paddle: -1 up, 1 down, 0 both or neither
    pub fn paddle_axis(&self, side: Side) -> f32 {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        let mut axis = 0.0;
        if up {
            axis -= 1.0;
        }
        if down {
            axis += 1.0;
        }
        axis
    }
}

/// Advance the game by `dt` seconds. Returns what happened, in order.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    config: &GameConfig,
    serve: &mut dyn ServeSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    let ball_delta = config.ball_speed * dt;
    let paddle_delta = config.paddle_speed * dt;

    for side in [Side::Left, Side::Right] {
        let axis = input.paddle_axis(side);
        state.paddle_mut(side).move_by(axis * paddle_delta, config);
    }

    if input.restart {
        state.restart(config, serve);
        events.push(GameEvent::Restarted);
        return events;
    }

    // Ball stays parked at center once the match is decided
    if matches!(state.phase, GamePhase::Won(_)) {
        state.ball.pos = config.center();
        return events;
    }

    let next_pos = state.ball.pos + state.ball.dir * ball_delta;
    let ball_box = state.ball.bounds_at(next_pos);
    let left_box = state.left.bounds();
    let right_box = state.right.bounds();

    // Goals: the scorer is the side opposite the edge crossed
    if ball_box.x_min < 0.0 {
        score_goal(state, Side::Right, config, serve, &mut events);
    }
    if ball_box.x_max > config.screen_width {
        score_goal(state, Side::Left, config, serve, &mut events);
    }

    if ball_box.y_min < 0.0 || ball_box.y_max > config.screen_height {
        state.ball.dir.y = -state.ball.dir.y;
        events.push(GameEvent::WallBounce);
    }

    for (side, paddle_box) in [(Side::Left, left_box), (Side::Right, right_box)] {
        if ball_box.overlaps(&paddle_box) {
            state.ball.dir.x = -state.ball.dir.x;
            events.push(GameEvent::PaddleHit(side));
            // One flip per frame even if both paddles are touched
            break;
        }
    }

    state.ball.pos += state.ball.dir * ball_delta;

    if let Some(winner) = state.scores.winner(config.win_score) {
        state.phase = GamePhase::Won(winner);
        state.ball.pos = config.center();
        events.push(GameEvent::Victory(winner));
        log::info!(
            "{} team wins {}-{}",
            winner.team_name(),
            state.scores.left,
            state.scores.right
        );
    }

    events
}

/// Award a point and re-serve from center
fn score_goal(
    state: &mut GameState,
    scorer: Side,
    config: &GameConfig,
    serve: &mut dyn ServeSource,
    events: &mut Vec<GameEvent>,
) {
    state.scores.award(scorer);
    state.reset_ball(config, serve);
    events.push(GameEvent::Goal { scorer });
    log::info!(
        "Goal for {}: {}-{}",
        scorer.team_name(),
        state.scores.left,
        state.scores.right
    );
}
