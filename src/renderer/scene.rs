//! Scene drawing: field, ball, paddles, scores and the victory banner

use super::canvas::{Canvas, Color};
use crate::config::GameConfig;
use crate::sim::{GameState, Side};

pub const SCORE_FONT_SIZE: f32 = 20.0;
pub const SCORE_Y: f32 = 50.0;
pub const BANNER_FONT_SIZE: f32 = 100.0;

pub fn side_color(side: Side) -> Color {
    match side {
        Side::Left => Color::RED,
        Side::Right => Color::BLUE,
    }
}

/// Horizontal anchor of each side's score, as a fraction of screen width
fn score_anchor(side: Side) -> f32 {
    match side {
        Side::Left => 0.4,
        Side::Right => 0.6,
    }
}

pub fn score_text(score: u32) -> String {
    format!(" {score} ")
}

pub fn victory_text(side: Side) -> String {
    format!("{} Team Wins!", side.team_name())
}

/// Draw one complete frame of the current state
pub fn draw_frame(canvas: &mut dyn Canvas, state: &GameState, config: &GameConfig) {
    canvas.clear(Color::BLACK);
    canvas.fill_rect(state.ball.bounds(), Color::WHITE);
    for side in [Side::Left, Side::Right] {
        canvas.fill_rect(state.paddle(side).bounds(), side_color(side));
    }

    for side in [Side::Left, Side::Right] {
        let text = score_text(state.scores.get(side));
        let width = canvas.measure_text(&text, SCORE_FONT_SIZE);
        let x = config.screen_width * score_anchor(side) - width * 0.5;
        canvas.draw_text(&text, x, SCORE_Y, SCORE_FONT_SIZE, side_color(side));
    }

    if let Some(winner) = state.winner() {
        let text = victory_text(winner);
        let center = config.center();
        let width = canvas.measure_text(&text, BANNER_FONT_SIZE);
        canvas.draw_text(
            &text,
            center.x - width * 0.5,
            center.y,
            BANNER_FONT_SIZE,
            side_color(winner),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::canvas::{DrawCommand, Recorder};
    use crate::sim::{FixedServe, GamePhase};

    #[test]
    fn test_frame_draw_order() {
        let config = GameConfig::default();
        let state = GameState::new(&config, &mut FixedServe::right());
        let mut recorder = Recorder::new();
        draw_frame(&mut recorder, &state, &config);

        assert_eq!(recorder.commands[0], DrawCommand::Clear(Color::BLACK));
        let rects: Vec<_> = recorder.rects().collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(*rects[0].1, Color::WHITE);
        assert_eq!(*rects[0].0, state.ball.bounds());
        assert_eq!(*rects[1].1, Color::RED);
        assert_eq!(*rects[2].1, Color::BLUE);
        assert_eq!(recorder.texts().collect::<Vec<_>>(), vec![" 0 ", " 0 "]);
    }

    #[test]
    fn test_scores_are_centered_on_anchors() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, &mut FixedServe::right());
        state.scores.left = 3;
        state.scores.right = 12;
        let mut recorder = Recorder::new();
        draw_frame(&mut recorder, &state, &config);

        let texts: Vec<_> = recorder
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, y, font_size, color } => {
                    Some((text.clone(), *x, *y, *font_size, *color))
                }
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 2);

        let (text, x, y, size, color) = &texts[0];
        assert_eq!(text, " 3 ");
        let width = recorder.measure_text(text, SCORE_FONT_SIZE);
        assert!((x + width * 0.5 - 480.0).abs() < 1e-3);
        assert_eq!(*y, SCORE_Y);
        assert_eq!(*size, SCORE_FONT_SIZE);
        assert_eq!(*color, Color::RED);

        let (text, x, _, _, color) = &texts[1];
        assert_eq!(text, " 12 ");
        let width = recorder.measure_text(text, SCORE_FONT_SIZE);
        assert!((x + width * 0.5 - 720.0).abs() < 1e-3);
        assert_eq!(*color, Color::BLUE);
    }

    #[test]
    fn test_banner_only_when_won() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, &mut FixedServe::right());
        state.scores.right = 5;
        let mut recorder = Recorder::new();
        draw_frame(&mut recorder, &state, &config);
        assert!(!recorder.texts().any(|t| t.contains("Wins")));

        state.scores.right = 6;
        state.phase = GamePhase::Won(Side::Right);
        recorder.reset();
        draw_frame(&mut recorder, &state, &config);
        assert!(recorder.texts().any(|t| t == "Blue Team Wins!"));
    }
}
