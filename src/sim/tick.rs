//! Fixed-tick game loop driver
//!
//! `Game` owns every piece of mutable state. One call to [`Game::tick`] is one
//! loop iteration: apply pending input, advance the animation counter, update
//! stars and particles, emit embers, recompute hover and finally ask the host
//! for a redraw. Rendering reads an owned [`Frame`] snapshot and never touches
//! the game.

use glam::Vec2;

use super::layout::PLAY_BUTTON;
use super::particles::ParticlePool;
use super::rng::ParamRng;
use super::stars::StarField;
use super::state::{GamePhase, GameState, Input, Transition};
use crate::consts::*;

/// What the driver needs from the host each tick
pub trait TickHost {
    /// Current pointer position in canvas space, `None` when outside the window
    fn pointer_position(&self) -> Option<Vec2>;
    /// Schedule a redraw of the latest state
    fn request_redraw(&mut self);
}

/// Summary of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    /// Transition caused by the pending input applied at the start of the tick
    pub transition: Option<Transition>,
    /// Origin of the ember burst emitted this tick
    pub burst: Option<Vec2>,
    pub hover: bool,
}

/// A star as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSprite {
    pub pos: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// A live particle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Immutable copy of everything the renderer reads
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub phase: GamePhase,
    pub score: u64,
    pub tick: u64,
    pub hover: bool,
    pub stars: Vec<StarSprite>,
    /// Live particles only; color alpha already carries the fade
    pub particles: Vec<ParticleSprite>,
}

/// Top-level driver
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    stars: StarField,
    particles: ParticlePool,
    rng: ParamRng,
    tick: u64,
    hover: bool,
    pending: Option<Input>,
}

impl Game {
    /// Create a game in the start screen; stars are generated from `seed`
    pub fn new(seed: u64) -> Self {
        let mut rng = ParamRng::new(seed);
        let stars = StarField::generate(&mut rng);
        Self {
            state: GameState::new(),
            stars,
            particles: ParticlePool::new(),
            rng,
            tick: 0,
            hover: false,
            pending: None,
        }
    }

    /// Queue an input for the next tick. Only inputs that fire a transition
    /// from the current phase are kept; a newer one replaces an unconsumed one.
    pub fn post_input(&mut self, input: Input) {
        if self.state.transition_for(&input).is_none() {
            log::debug!("Input {:?} ignored in {}", input, self.state.phase.as_str());
            return;
        }
        if let Some(dropped) = self.pending.replace(input) {
            log::debug!("Input {:?} superseded before tick", dropped);
        }
    }

    /// Apply an input right away (host calls between ticks)
    pub fn handle_input(&mut self, input: Input) -> Option<Transition> {
        let transition = self.state.apply(&input);
        if transition == Some(Transition::Restarted) {
            self.particles.clear();
        }
        transition
    }

    /// Run one loop iteration
    pub fn tick(&mut self, host: &mut impl TickHost) -> TickReport {
        let transition = self.pending.take().and_then(|input| self.handle_input(input));

        self.tick = self.tick.wrapping_add(1);
        self.stars.update_all();
        self.particles.update_all();

        let mut burst = None;
        if self.state.phase == GamePhase::GameOver && self.tick % EMBER_INTERVAL_TICKS == 0 {
            let origin = self.rng.ember_origin();
            let color = self.rng.ember_color();
            self.particles.seek(self.tick);
            self.particles
                .emit(EMBER_BURST_SIZE, origin, color, &mut self.rng);
            burst = Some(origin);
        }

        self.hover = match self.state.phase {
            GamePhase::Start => host
                .pointer_position()
                .is_some_and(|p| PLAY_BUTTON.contains(p)),
            GamePhase::Playing | GamePhase::GameOver => false,
        };

        host.request_redraw();

        TickReport {
            tick: self.tick,
            transition,
            burst,
            hover: self.hover,
        }
    }

    /// Owned snapshot for rendering
    pub fn snapshot(&self) -> Frame {
        Frame {
            phase: self.state.phase,
            score: self.state.score,
            tick: self.tick,
            hover: self.hover,
            stars: self
                .stars
                .stars()
                .iter()
                .map(|s| StarSprite {
                    pos: s.pos,
                    size: s.size,
                    alpha: s.effective_alpha(),
                })
                .collect(),
            particles: self
                .particles
                .iter_live()
                .map(|p| ParticleSprite {
                    pos: p.pos,
                    size: p.size,
                    color: crate::with_alpha(p.color, p.alpha),
                })
                .collect(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn hover(&self) -> bool {
        self.hover
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::RESTART_BUTTON;
    use crate::sim::state::Key;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum HostCall {
        Pointer,
        Redraw,
    }

    /// Host stub that logs every call the driver makes
    #[derive(Default)]
    struct StubHost {
        pointer: Option<Vec2>,
        calls: RefCell<Vec<HostCall>>,
    }

    impl TickHost for StubHost {
        fn pointer_position(&self) -> Option<Vec2> {
            self.calls.borrow_mut().push(HostCall::Pointer);
            self.pointer
        }

        fn request_redraw(&mut self) {
            self.calls.get_mut().push(HostCall::Redraw);
        }
    }

    fn run(game: &mut Game, host: &mut StubHost, ticks: usize) -> Vec<TickReport> {
        (0..ticks).map(|_| game.tick(host)).collect()
    }

    const CENTER: Vec2 = Vec2::new(300.0, 470.0);

    #[test]
    fn test_tick_advances_counter_and_requests_redraw() {
        let mut game = Game::new(1);
        let mut host = StubHost::default();
        let reports = run(&mut game, &mut host, 3);
        assert_eq!(game.tick_count(), 3);
        assert_eq!(reports.iter().map(|r| r.tick).collect::<Vec<_>>(), [1, 2, 3]);
        // Hover is computed before the single redraw request of each tick
        use HostCall::*;
        assert_eq!(
            host.calls.into_inner(),
            [Pointer, Redraw, Pointer, Redraw, Pointer, Redraw]
        );
    }

    #[test]
    fn test_one_redraw_per_tick_in_every_phase() {
        let mut game = Game::new(12);
        let mut host = StubHost::default();
        game.handle_input(Input::KeyPress(Key::Space));
        run(&mut game, &mut host, 4);
        game.handle_input(Input::KeyPress(Key::Escape));
        run(&mut game, &mut host, 6);
        // No pointer query outside the start screen, one redraw per tick
        assert_eq!(host.calls.into_inner(), [HostCall::Redraw; 10]);
    }

    #[test]
    fn test_hover_in_start_only() {
        let mut game = Game::new(2);
        let mut host = StubHost {
            pointer: Some(CENTER),
            ..Default::default()
        };
        assert!(game.tick(&mut host).hover);

        host.pointer = Some(Vec2::new(10.0, 10.0));
        assert!(!game.tick(&mut host).hover);

        host.pointer = None;
        assert!(!game.tick(&mut host).hover);

        host.pointer = Some(CENTER);
        game.handle_input(Input::KeyPress(Key::Space));
        assert!(!game.tick(&mut host).hover);

        game.handle_input(Input::KeyPress(Key::Escape));
        assert!(!game.tick(&mut host).hover);
        assert!(!game.snapshot().hover);
    }

    #[test]
    fn test_no_embers_outside_game_over() {
        let mut game = Game::new(3);
        let mut host = StubHost::default();
        let reports = run(&mut game, &mut host, 30);
        assert!(reports.iter().all(|r| r.burst.is_none()));
        game.handle_input(Input::KeyPress(Key::Space));
        let reports = run(&mut game, &mut host, 30);
        assert!(reports.iter().all(|r| r.burst.is_none()));
        assert_eq!(game.particles().live_count(), 0);
    }

    #[test]
    fn test_embers_every_tenth_tick() {
        let mut game = Game::new(4);
        let mut host = StubHost::default();
        game.handle_input(Input::KeyPress(Key::Space));
        game.handle_input(Input::KeyPress(Key::Escape));
        let reports = run(&mut game, &mut host, 50);
        let burst_ticks: Vec<u64> = reports
            .iter()
            .filter(|r| r.burst.is_some())
            .map(|r| r.tick)
            .collect();
        assert_eq!(burst_ticks, [10, 20, 30, 40, 50]);
        assert_eq!(game.particles().live_count(), 25);

        // Burst at tick 50 landed in slots 50..55
        for i in 50..55 {
            assert!(game.particles().slot(i).is_some());
        }
    }

    #[test]
    fn test_ember_origin_on_bottom_edge() {
        let mut game = Game::new(5);
        let mut host = StubHost::default();
        game.handle_input(Input::KeyPress(Key::Space));
        game.handle_input(Input::KeyPress(Key::Escape));
        for report in run(&mut game, &mut host, 100) {
            if let Some(origin) = report.burst {
                assert!((0.0..WIDTH).contains(&origin.x));
                assert_eq!(origin.y, HEIGHT - EMBER_BOTTOM_MARGIN);
            }
        }
    }

    #[test]
    fn test_pool_stays_bounded_over_long_game_over() {
        let mut game = Game::new(6);
        let mut host = StubHost::default();
        game.handle_input(Input::KeyPress(Key::Space));
        game.handle_input(Input::KeyPress(Key::Escape));
        for _ in 0..5000 {
            game.tick(&mut host);
            assert!(game.particles().live_count() <= PARTICLE_CAPACITY);
        }
    }

    #[test]
    fn test_pending_input_applied_at_next_tick() {
        let mut game = Game::new(7);
        let mut host = StubHost::default();
        game.post_input(Input::Click(CENTER));
        assert_eq!(game.phase(), GamePhase::Start);
        let report = game.tick(&mut host);
        assert_eq!(report.transition, Some(Transition::Started));
        assert_eq!(game.phase(), GamePhase::Playing);

        // An input that does nothing can't displace one that does
        game.post_input(Input::KeyPress(Key::Escape));
        game.post_input(Input::KeyPress(Key::Other));
        game.post_input(Input::Click(CENTER));
        let report = game.tick(&mut host);
        assert_eq!(report.transition, Some(Transition::Ended));
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_restart_survives_click_in_same_tick() {
        let mut game = Game::new(13);
        let mut host = StubHost::default();
        game.handle_input(Input::KeyPress(Key::Space));
        game.handle_input(Input::KeyPress(Key::Escape));
        run(&mut game, &mut host, 10);
        assert_eq!(game.particles().live_count(), EMBER_BURST_SIZE);

        game.post_input(Input::KeyPress(Key::Space));
        game.post_input(Input::Click(RESTART_BUTTON.rect.center()));
        let report = game.tick(&mut host);
        assert_eq!(report.transition, Some(Transition::Restarted));
        assert_eq!(game.phase(), GamePhase::Start);
        assert_eq!(game.particles().live_count(), 0);
    }

    #[test]
    fn test_ignored_input_leaves_nothing_pending() {
        let mut game = Game::new(14);
        let mut host = StubHost::default();
        game.post_input(Input::KeyPress(Key::Escape));
        game.post_input(Input::Click(Vec2::new(5.0, 5.0)));
        assert_eq!(game.tick(&mut host).transition, None);
        assert_eq!(game.phase(), GamePhase::Start);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut game = Game::new(8);
        let mut host = StubHost::default();
        assert_eq!(game.phase(), GamePhase::Start);
        assert_eq!(game.score(), 0);

        game.handle_input(Input::Click(CENTER));
        assert_eq!(game.phase(), GamePhase::Playing);

        game.handle_input(Input::KeyPress(Key::Escape));
        assert_eq!(game.phase(), GamePhase::GameOver);

        let reports = run(&mut game, &mut host, 10);
        assert_eq!(reports.iter().filter(|r| r.burst.is_some()).count(), 1);
        assert_eq!(game.particles().live_count(), EMBER_BURST_SIZE);
        assert_eq!(game.snapshot().particles.len(), EMBER_BURST_SIZE);

        game.handle_input(Input::KeyPress(Key::Space));
        assert_eq!(game.phase(), GamePhase::Start);
        assert_eq!(game.score(), 0);
        assert_eq!(game.particles().live_count(), 0);
        assert_eq!(game.particles().occupied_count(), 0);
    }

    #[test]
    fn test_same_seed_same_frames() {
        let mut a = Game::new(99999);
        let mut b = Game::new(99999);
        let mut host = StubHost {
            pointer: Some(CENTER),
            ..Default::default()
        };
        for g in [&mut a, &mut b] {
            g.handle_input(Input::KeyPress(Key::Space));
            g.handle_input(Input::KeyPress(Key::Escape));
        }
        for _ in 0..137 {
            a.tick(&mut host);
            b.tick(&mut host);
        }
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.seed(), 99999);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut game = Game::new(10);
        let mut host = StubHost::default();
        let frame = game.snapshot();
        let copy = frame.clone();
        game.tick(&mut host);
        assert_eq!(frame, copy);
        assert_eq!(frame.stars.len(), STAR_COUNT);
        assert_ne!(game.snapshot().tick, frame.tick);
    }
}
