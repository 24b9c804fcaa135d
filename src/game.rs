use crate::animation::{AnimationClock, AnimationState};
use crate::config::{FRAME_DURATION, MAX_CATCH_UP_FRAMES};
use crate::input;
use crate::match_state::MatchState;
use crate::render::{FrameView, Renderer};
use crate::throw_gen::{DistanceSource, ThrowGenerator};
use crate::types::{Command, PlayerId, RoundOutcome, ThrowRecord};
use crate::{debug_input, debug_throw};
use log::{error, info};
use macroquad::prelude::{get_frame_time, next_frame};

/// The Game struct ties the match model, the throw animation and the
/// distance source together and runs the frame loop.
pub struct Game<S: DistanceSource = ThrowGenerator> {
    match_state: MatchState,
    clock: AnimationClock,
    distances: S,
    in_flight: Option<AnimationState>, // Last frame handed out by the clock
    time_accumulator: f32,
    show_rules: bool,
    quit: bool,
}

impl<S: DistanceSource> Game<S> {
    pub fn new(distances: S) -> Self {
        Game {
            match_state: MatchState::new(),
            clock: AnimationClock::new(),
            distances,
            in_flight: None,
            time_accumulator: 0.0,
            show_rules: false,
            quit: false,
        }
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn is_animating(&self) -> bool {
        self.clock.is_active()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether `player`'s throw control is live: their turn, nothing in the
    /// air, match undecided, rules closed.
    pub fn throw_enabled(&self, player: PlayerId) -> bool {
        !self.show_rules && !self.clock.is_active() && self.match_state.can_throw(player)
    }

    pub fn handle(&mut self, command: Command) {
        // The rules overlay covers the field and controls
        if self.show_rules && !matches!(command, Command::ToggleRules | Command::Quit) {
            debug_input!("{:?} ignored while rules are shown", command);
            return;
        }
        match command {
            Command::Throw(player) => {
                self.request_throw(player);
            }
            Command::Reset => {
                if self.match_state.winner().is_some() {
                    self.match_state.reset();
                } else {
                    debug_input!("Reset ignored, match still in progress");
                }
            }
            Command::ToggleRules => self.show_rules = !self.show_rules,
            Command::Quit => self.quit = true,
        }
    }

    /// Start a throw for `player` if the controls allow it. Disallowed
    /// requests are silently dropped.
    pub fn request_throw(&mut self, player: PlayerId) -> bool {
        if !self.throw_enabled(player) {
            debug_throw!("{} throw ignored ({:?})", player, self.match_state.phase());
            return false;
        }
        let distance = self.distances.next_distance();
        debug_throw!("{} throws, {}m", player, distance);
        self.clock.start(player, distance)
    }

    /// Advance the animation by one frame. Returns the round outcome if this
    /// frame's landing closed a round.
    pub fn tick(&mut self) -> Option<RoundOutcome> {
        let mut drawn = None;
        let landed = self.clock.advance(|state| drawn = Some(*state));
        self.in_flight = drawn;
        landed.and_then(|record| self.land(record))
    }

    fn land(&mut self, record: ThrowRecord) -> Option<RoundOutcome> {
        match self.match_state.record_throw(record) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Dropping throw from {}: {}", record.player, e);
                None
            }
        }
    }

    /// Feed elapsed wall time into the fixed-rate animation clock. Returns
    /// the number of animation frames advanced.
    pub fn update(&mut self, dt: f32) -> u32 {
        self.time_accumulator += dt;
        let mut frames = 0;
        while self.time_accumulator >= FRAME_DURATION {
            self.time_accumulator -= FRAME_DURATION;
            self.tick();
            frames += 1;
            if frames >= MAX_CATCH_UP_FRAMES {
                // Long stall (window drag, breakpoint): drop the backlog
                self.time_accumulator = self.time_accumulator.min(FRAME_DURATION);
                break;
            }
        }
        frames
    }

    pub fn frame_view(&self) -> FrameView {
        FrameView {
            score: self.match_state.score(),
            round: self.match_state.round(),
            throws: self.match_state.throws(),
            winner: self.match_state.winner(),
            in_flight: self.in_flight,
            throw_enabled: [self.throw_enabled(PlayerId::One), self.throw_enabled(PlayerId::Two)],
            last_round: self.match_state.last_round(),
            show_rules: self.show_rules,
        }
    }

    /// Run the main game loop using the provided renderer
    pub async fn run(&mut self, renderer: &mut Renderer) {
        info!("Starting main loop...");

        while !self.should_quit() {
            for command in input::poll_commands(self.match_state.winner().is_some()) {
                self.handle(command);
            }
            self.update(get_frame_time());
            renderer.draw_frame(&self.frame_view());
            next_frame().await;
        }

        info!("Exiting after {} frames.", renderer.frames_drawn());
    }
}
