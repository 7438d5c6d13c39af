//! Screen renderer
//!
//! Draws a [`Frame`] onto any [`Canvas`]: the shared background, then the
//! screen for the current phase. Reads the snapshot only.

use glam::Vec2;

use super::canvas::{Canvas, Paint, Rect, TextStyle};
use super::vertex::colors::*;
use crate::consts::{HEIGHT, WIDTH};
use crate::sim::layout::*;
use crate::sim::{Frame, GamePhase};
use crate::{rgba, with_alpha};

const TITLE: &str = "BLOCK BREAKER";
const PLAY_CAPTION: &str = "START GAME";
const PLACEHOLDER: &str = "The game screen will appear here";
const ESCAPE_HINT: &str = "Press ESC to go to the game over screen";
const GAME_OVER: &str = "GAME OVER";
const RESTART_HINT: &str = "Press SPACE to restart";

/// Render one frame
pub fn render_frame(canvas: &mut impl Canvas, frame: &Frame) {
    draw_background(canvas, frame);

    match frame.phase {
        GamePhase::Start => draw_start_screen(canvas, frame),
        GamePhase::Playing => draw_playing_screen(canvas),
        GamePhase::GameOver => draw_game_over_screen(canvas, frame),
    }
}

/// Whole-unit oval at `pos`, snapped the way integer pixel APIs snap it
fn dot(pos: Vec2, size: f32) -> Rect {
    let size = size.trunc();
    Rect::new(pos.x.trunc(), pos.y.trunc(), size, size)
}

fn draw_background(canvas: &mut impl Canvas, frame: &Frame) {
    let sky = Paint::gradient(Vec2::ZERO, SKY_TOP, Vec2::new(0.0, HEIGHT), SKY_BOTTOM);
    canvas.fill_rect(Rect::new(0.0, 0.0, WIDTH, HEIGHT), &sky);

    for star in &frame.stars {
        canvas.fill_ellipse(
            dot(star.pos, star.size),
            &Paint::Solid(with_alpha(WHITE, star.alpha)),
        );
    }
}

fn draw_start_screen(canvas: &mut impl Canvas, frame: &Frame) {
    canvas.fill_round_rect(TITLE_PANEL, &rgba(0, 0, 0, 80).into());
    canvas.stroke_round_rect(TITLE_PANEL, 2.0, &rgba(255, 255, 255, 40).into());

    let title_paint = Paint::cyclic_gradient(
        Vec2::new(WIDTH / 2.0 - 150.0, HEIGHT / 4.0 - 20.0),
        WHITE,
        Vec2::new(WIDTH / 2.0 + 150.0, HEIGHT / 4.0 + 20.0),
        LIGHT_BLUE,
    );
    canvas.draw_text_centered(
        TITLE,
        WIDTH / 2.0,
        TITLE_BASELINE,
        TextStyle::bold(48.0),
        &title_paint,
    );

    draw_play_button(canvas, frame);
}

fn draw_play_button(canvas: &mut impl Canvas, frame: &Frame) {
    let bounds = PLAY_BUTTON.bounds;
    let (from, to) = if frame.hover {
        (TURQUOISE, TEAL)
    } else {
        (STEEL_BLUE, MIDNIGHT_BLUE)
    };
    canvas.fill_ellipse(
        bounds,
        &Paint::cyclic_gradient(bounds.min, from, bounds.max(), to),
    );
    canvas.stroke_ellipse(bounds, 2.0, &rgba(255, 255, 255, 100).into());

    // Play icon
    let icon = [
        bounds.at(0.35, 0.25).trunc(),
        bounds.at(0.35, 0.75).trunc(),
        bounds.at(0.75, 0.5).trunc(),
    ];
    canvas.fill_triangle(icon, &WHITE.into());

    canvas.draw_text_centered(
        PLAY_CAPTION,
        bounds.center().x,
        bounds.max().y + PLAY_CAPTION_GAP,
        TextStyle::bold(18.0),
        &WHITE.into(),
    );

    if frame.hover {
        let pulse = 0.5 + (frame.tick as f32 * 0.1).sin() * 0.2;
        let inner_alpha = (pulse * 100.0).trunc() / 255.0;
        canvas.stroke_ellipse(
            bounds.inflate(-5.0),
            2.0,
            &with_alpha(WHITE, inner_alpha).into(),
        );
        canvas.stroke_ellipse(bounds.inflate(3.0), 2.0, &rgba(255, 255, 255, 50).into());
    }
}

fn draw_playing_screen(canvas: &mut impl Canvas) {
    canvas.fill_round_rect(INFO_PANEL, &rgba(0, 0, 0, 100).into());
    canvas.stroke_round_rect(INFO_PANEL, 1.0, &rgba(255, 255, 255, 60).into());

    canvas.draw_text_centered(
        PLACEHOLDER,
        WIDTH / 2.0,
        INFO_BASELINES[0],
        TextStyle::plain(20.0),
        &WHITE.into(),
    );
    canvas.draw_text_centered(
        ESCAPE_HINT,
        WIDTH / 2.0,
        INFO_BASELINES[1],
        TextStyle::plain(16.0),
        &WHITE.into(),
    );
}

fn draw_game_over_screen(canvas: &mut impl Canvas, frame: &Frame) {
    canvas.fill_rect(Rect::new(0.0, 0.0, WIDTH, HEIGHT), &rgba(0, 0, 0, 150).into());

    canvas.fill_round_rect(HEADER_PANEL, &HEADER_FILL.into());
    canvas.stroke_round_rect(HEADER_PANEL, 2.0, &HEADER_BORDER.into());
    canvas.draw_text_centered(
        GAME_OVER,
        WIDTH / 2.0,
        HEADER_BASELINE,
        TextStyle::bold(40.0),
        &WHITE.into(),
    );

    canvas.fill_round_rect(SCORE_PANEL, &rgba(0, 0, 0, 150).into());
    canvas.stroke_round_rect(SCORE_PANEL, 2.0, &with_alpha(GOLD, 100.0 / 255.0).into());
    canvas.draw_text_centered(
        &format!("FINAL SCORE: {}", frame.score),
        WIDTH / 2.0,
        SCORE_BASELINE,
        TextStyle::bold(30.0),
        &GOLD.into(),
    );

    let button = RESTART_BUTTON.rect;
    canvas.fill_round_rect(
        RESTART_BUTTON,
        &Paint::cyclic_gradient(button.min, ROYAL_BLUE, button.max(), MIDNIGHT_BLUE),
    );
    canvas.stroke_round_rect(RESTART_BUTTON, 2.0, &rgba(255, 255, 255, 100).into());
    canvas.draw_text_centered(
        RESTART_HINT,
        WIDTH / 2.0,
        RESTART_BASELINE,
        TextStyle::bold(20.0),
        &WHITE.into(),
    );

    for particle in &frame.particles {
        canvas.fill_ellipse(dot(particle.pos, particle.size), &particle.color.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::{CommandList, DrawCommand};
    use crate::sim::{Game, Input, Key, TickHost};

    struct Pointer(Option<Vec2>);

    impl TickHost for Pointer {
        fn pointer_position(&self) -> Option<Vec2> {
            self.0
        }
        fn request_redraw(&mut self) {}
    }

    fn record(frame: &Frame) -> CommandList {
        let mut list = CommandList::new();
        render_frame(&mut list, frame);
        list
    }

    fn stroked_ellipses(list: &CommandList) -> usize {
        list.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeEllipse(..)))
            .count()
    }

    fn filled_ellipses(list: &CommandList) -> usize {
        list.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillEllipse(..)))
            .count()
    }

    fn start_frame(pointer: Option<Vec2>) -> Frame {
        let mut game = Game::new(3);
        game.tick(&mut Pointer(pointer));
        game.snapshot()
    }

    fn game_over_game() -> Game {
        let mut game = Game::new(11);
        game.handle_input(Input::KeyPress(Key::Space));
        game.handle_input(Input::KeyPress(Key::Escape));
        game
    }

    #[test]
    fn test_background_and_stars_always_drawn() {
        let mut game = game_over_game();
        let frames = [start_frame(None), game.snapshot(), {
            game.handle_input(Input::KeyPress(Key::Space));
            game.handle_input(Input::KeyPress(Key::Space));
            game.snapshot()
        }];
        assert_eq!(frames[2].phase, GamePhase::Playing);

        for frame in &frames {
            let list = record(frame);
            assert!(matches!(
                list.commands[0],
                DrawCommand::FillRect(_, Paint::LinearGradient { cyclic: false, .. })
            ));
            let stars = list.commands[1..=frame.stars.len()]
                .iter()
                .filter(|c| matches!(c, DrawCommand::FillEllipse(..)))
                .count();
            assert_eq!(stars, 150);
        }
    }

    #[test]
    fn test_glow_rings_only_when_hovered() {
        let idle = record(&start_frame(None));
        let hovered = record(&start_frame(Some(PLAY_BUTTON.center())));
        // Button border, plus two glow rings when hovered
        assert_eq!(stroked_ellipses(&idle), 1);
        assert_eq!(stroked_ellipses(&hovered), 3);
    }

    #[test]
    fn test_hover_changes_button_gradient() {
        let paint_of = |list: &CommandList| {
            list.commands.iter().find_map(|c| match c {
                DrawCommand::FillEllipse(r, p) if *r == PLAY_BUTTON.bounds => Some(*p),
                _ => None,
            })
        };
        let idle = paint_of(&record(&start_frame(None)));
        let hovered = paint_of(&record(&start_frame(Some(PLAY_BUTTON.center()))));
        assert!(matches!(
            idle,
            Some(Paint::LinearGradient { start_color, cyclic: true, .. }) if start_color == STEEL_BLUE
        ));
        assert!(matches!(
            hovered,
            Some(Paint::LinearGradient { start_color, .. }) if start_color == TURQUOISE
        ));
    }

    #[test]
    fn test_start_screen_texts() {
        let list = record(&start_frame(None));
        assert_eq!(list.texts().collect::<Vec<_>>(), vec![TITLE, PLAY_CAPTION]);
    }

    #[test]
    fn test_playing_screen_texts() {
        let mut game = Game::new(5);
        game.handle_input(Input::KeyPress(Key::Space));
        let list = record(&game.snapshot());
        assert_eq!(
            list.texts().collect::<Vec<_>>(),
            vec![PLACEHOLDER, ESCAPE_HINT]
        );
        assert_eq!(stroked_ellipses(&list), 0);
    }

    #[test]
    fn test_game_over_shows_score() {
        let game = game_over_game();
        let list = record(&game.snapshot());
        assert!(list.has_text(GAME_OVER));
        assert!(list.has_text("FINAL SCORE: 0"));
        assert!(list.has_text(RESTART_HINT));
    }

    #[test]
    fn test_particles_only_on_game_over() {
        let mut game = game_over_game();
        let mut host = Pointer(None);
        for _ in 0..10 {
            game.tick(&mut host);
        }
        let frame = game.snapshot();
        assert_eq!(frame.particles.len(), 5);
        let list = record(&frame);
        assert_eq!(filled_ellipses(&list), 150 + 5);

        // Restart clears the pool; the start screen draws only stars and the button
        game.handle_input(Input::KeyPress(Key::Space));
        let list = record(&game.snapshot());
        assert_eq!(filled_ellipses(&list), 150 + 1);
    }

    #[test]
    fn test_render_leaves_frame_untouched() {
        let frame = start_frame(Some(PLAY_BUTTON.center()));
        let copy = frame.clone();
        record(&frame);
        assert_eq!(frame, copy);
    }
}
