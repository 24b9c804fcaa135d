use crate::animation::AnimationState;
use crate::config::{
    ARC_HEIGHT, GROUND_Y, HEAD_RADIUS, HEAD_Y, JAVELIN_LENGTH, MARKER_MAX_METERS, MARKER_STEP_METERS,
    PIXELS_PER_METER, PLAYER1_X, PLAYER2_X, RELEASE_OFFSET_X, RELEASE_Y, SCALE_ORIGIN_X, SCENE_HEIGHT,
    WINDOW_HEIGHT, WINDOW_WIDTH, WINS_TO_TAKE_MATCH,
};
use crate::input::{Button, button_rect, visible_buttons};
use crate::match_state::RoundThrows;
use crate::types::{MatchScore, PlayerId, RoundOutcome};
use crate::utils;
use macroquad::prelude::*;

const RULES: [&str; 5] = [
    "Players take turns throwing the javelin",
    "Player 1 must throw first, followed by Player 2",
    "The player who throws the furthest distance wins the round",
    "First to win 3 rounds wins the game",
    "Distances range from 50-100 meters",
];

fn background_color() -> Color {
    Color::from_rgba(44, 62, 80, 255)
}

fn highlight_color() -> Color {
    Color::from_rgba(76, 175, 80, 255)
}

fn javelin_color() -> Color {
    Color::from_rgba(255, 215, 0, 255)
}

fn player_color(player: PlayerId) -> Color {
    match player {
        PlayerId::One => Color::from_rgba(239, 68, 68, 255),
        PlayerId::Two => Color::from_rgba(59, 130, 246, 255),
    }
}

fn faded_color(mut color: Color, alpha: f32) -> Color {
    color.a *= alpha;
    color
}

/// Everything a frame needs, read off the game model.
#[derive(Debug, Clone, Copy)]
pub struct FrameView {
    pub score: MatchScore,
    pub round: u32,
    pub throws: RoundThrows,
    pub winner: Option<PlayerId>,
    pub in_flight: Option<AnimationState>,
    pub throw_enabled: [bool; 2],
    pub last_round: Option<RoundOutcome>,
    pub show_rules: bool,
}

/// Position and heading of the javelin for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JavelinPose {
    pub position: Vec2,
    pub rotation: f32, // Radians, screen space (y down)
}

pub fn player_x(player: PlayerId) -> f32 {
    match player {
        PlayerId::One => PLAYER1_X,
        PlayerId::Two => PLAYER2_X,
    }
}

/// Where the javelin leaves the thrower's hand.
pub fn release_point(player: PlayerId) -> Vec2 {
    vec2(player_x(player) + RELEASE_OFFSET_X * player.facing(), RELEASE_Y)
}

/// Javelin pose along its flight.
///
/// Horizontal travel is linear over `distance * PIXELS_PER_METER`, height is a
/// half-sine peaking mid-flight, and the rotation follows the path tangent.
pub fn javelin_pose(state: &AnimationState) -> JavelinPose {
    let t = state.progress();
    let start = release_point(state.player);
    let span = state.distance_meters as f32 * PIXELS_PER_METER * state.player.facing();

    let position = vec2(
        utils::lerp(start.x, start.x + span, t),
        start.y - utils::sine_arc(ARC_HEIGHT, t),
    );
    let dx = span;
    let dy = -utils::sine_arc_slope(ARC_HEIGHT, t);

    JavelinPose {
        position,
        rotation: dy.atan2(dx),
    }
}

/// A thrower is highlighted while their javelin is in the air, or while
/// their throw control is live.
pub fn player_highlighted(view: &FrameView, player: PlayerId) -> bool {
    let throwing = view.in_flight.is_some_and(|s| s.player == player);
    throwing || view.throw_enabled[(player.number() - 1) as usize]
}

/// Distance scale markers as (meters, screen x).
pub fn distance_markers() -> impl Iterator<Item = (u32, f32)> {
    (0..=MARKER_MAX_METERS)
        .step_by(MARKER_STEP_METERS as usize)
        .map(|m| (m, SCALE_ORIGIN_X + m as f32 * PIXELS_PER_METER))
}

/// Handles rendering the game state using macroquad
#[derive(Debug, Default)]
pub struct Renderer {
    frames_drawn: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn draw_frame(&mut self, view: &FrameView) {
        clear_background(BLACK);
        draw_rectangle(0.0, 0.0, WINDOW_WIDTH as f32, SCENE_HEIGHT as f32, background_color());

        Self::draw_field();
        for player in PlayerId::ALL {
            Self::draw_player(player, view);
        }
        Self::draw_recorded_distances(&view.throws);
        if let Some(state) = &view.in_flight {
            Self::draw_javelin(&javelin_pose(state));
        }

        Self::draw_hud(view);
        Self::draw_controls(view);

        if let Some(winner) = view.winner {
            Self::draw_announcement(&format!("{} Wins!", winner));
        }
        if view.show_rules {
            Self::draw_rules();
        }
        self.frames_drawn += 1;
    }

    fn draw_field() {
        draw_line(0.0, GROUND_Y, WINDOW_WIDTH as f32, GROUND_Y, 2.0, WHITE);
        for (meters, x) in distance_markers() {
            draw_line(x, GROUND_Y - 5.0, x, GROUND_Y + 5.0, 2.0, WHITE);
            draw_text(&format!("{}m", meters), x, GROUND_Y + 20.0, 16.0, WHITE);
        }
    }

    fn draw_player(player: PlayerId, view: &FrameView) {
        let x = player_x(player);
        let facing = player.facing();
        let throwing = view.in_flight.is_some_and(|s| s.player == player);
        let color = if player_highlighted(view, player) { highlight_color() } else { WHITE };

        // Head and body
        draw_circle_lines(x, HEAD_Y, HEAD_RADIUS, 2.0, color);
        draw_line(x, HEAD_Y + HEAD_RADIUS, x, GROUND_Y - 10.0, 2.0, color);

        // Throwing arm goes up, idle arm hangs forward
        let shoulder_y = HEAD_Y + 20.0;
        let (arm_dx, arm_dy) = if throwing { (25.0, -10.0) } else { (20.0, 10.0) };
        draw_line(x, shoulder_y, x + arm_dx * facing, shoulder_y + arm_dy, 2.0, color);

        // Legs
        let hip_y = GROUND_Y - 10.0;
        draw_line(x, hip_y, x + 15.0 * facing, GROUND_Y, 2.0, color);
        draw_line(x, hip_y, x - 15.0 * facing, GROUND_Y, 2.0, color);
    }

    fn draw_recorded_distances(throws: &RoundThrows) {
        for player in PlayerId::ALL {
            if let Some(distance) = throws.distance(player) {
                draw_text(&format!("{}m", distance), player_x(player) - 20.0, HEAD_Y - 20.0, 22.0, WHITE);
            }
        }
    }

    fn draw_javelin(pose: &JavelinPose) {
        let half = Vec2::from_angle(pose.rotation) * (JAVELIN_LENGTH / 2.0);
        let tail = pose.position - half;
        let tip = pose.position + half;
        draw_line(tail.x, tail.y, tip.x, tip.y, 2.0, javelin_color());
    }

    fn draw_hud(view: &FrameView) {
        let score_text = format!(
            "Player 1  {} - {}  Player 2",
            view.score.player1_wins, view.score.player2_wins
        );
        let dims = measure_text(&score_text, None, 26, 1.0);
        draw_text(&score_text, (WINDOW_WIDTH as f32 - dims.width) / 2.0, 28.0, 26.0, WHITE);

        let status = match (view.winner, view.last_round) {
            (Some(_), _) => format!("Match over after {} rounds", view.round),
            (None, Some(last)) => format!(
                "Round {} of first-to-{}  |  last: {}m vs {}m, {} took it",
                view.round, WINS_TO_TAKE_MATCH, last.player1_distance, last.player2_distance, last.winner
            ),
            (None, None) => format!("Round {} of first-to-{}", view.round, WINS_TO_TAKE_MATCH),
        };
        let dims = measure_text(&status, None, 16, 1.0);
        draw_text(&status, (WINDOW_WIDTH as f32 - dims.width) / 2.0, 50.0, 16.0, LIGHTGRAY);
    }

    fn draw_controls(view: &FrameView) {
        for button in visible_buttons(view.winner.is_some()) {
            let (label, color, enabled) = match *button {
                Button::Throw(player) => {
                    let idx = (player.number() - 1) as usize;
                    let key = if player == PlayerId::One { "A" } else { "L" };
                    (format!("Throw ({})", key), player_color(player), view.throw_enabled[idx])
                }
                Button::PlayAgain => ("Play Again".to_string(), Color::from_rgba(59, 130, 246, 255), true),
                Button::Rules => ("Rules (R)".to_string(), GRAY, true),
            };
            Self::draw_button(button_rect(*button), &label, color, enabled);
        }
    }

    fn draw_button(rect: Rect, label: &str, color: Color, enabled: bool) {
        let alpha = if enabled { 1.0 } else { 0.5 };
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, faded_color(color, alpha));
        let font_size = (rect.h * 0.5).min(24.0) as u16;
        let dims = measure_text(label, None, font_size, 1.0);
        draw_text(
            label,
            rect.x + (rect.w - dims.width) / 2.0,
            rect.y + (rect.h + dims.offset_y) / 2.0,
            font_size as f32,
            faded_color(WHITE, alpha),
        );
    }

    fn draw_announcement(msg: &str) {
        let rect_width = 360.0;
        let rect_height = 90.0;
        let x = (WINDOW_WIDTH as f32 - rect_width) / 2.0;
        let y = (SCENE_HEIGHT as f32 - rect_height) / 2.0;
        draw_rectangle(x, y, rect_width, rect_height, Color::from_rgba(0, 0, 0, 180));

        let font_size = 40.0;
        let dims = measure_text(msg, None, font_size as u16, 1.0);
        draw_text(msg, x + (rect_width - dims.width) / 2.0, y + 50.0, font_size, WHITE);

        let hint = "Space / Enter to play again";
        let dims = measure_text(hint, None, 18, 1.0);
        draw_text(hint, x + (rect_width - dims.width) / 2.0, y + rect_height - 12.0, 18.0, LIGHTGRAY);
    }

    fn draw_rules() {
        let margin = 40.0;
        let (w, h) = (WINDOW_WIDTH as f32 - 2.0 * margin, WINDOW_HEIGHT as f32 - 2.0 * margin);
        draw_rectangle(margin, margin, w, h, Color::from_rgba(255, 255, 255, 240));

        let mut y = margin + 40.0;
        draw_text("How to Play", margin + 20.0, y, 32.0, BLACK);
        y += 36.0;
        draw_text(
            "Objective: be the first to win 3 rounds by throwing further.",
            margin + 20.0,
            y,
            18.0,
            DARKGRAY,
        );
        y += 30.0;
        for rule in RULES {
            draw_text(&format!("- {}", rule), margin + 30.0, y, 18.0, BLACK);
            y += 26.0;
        }
        draw_text("Press R to close", margin + 20.0, margin + h - 20.0, 18.0, GRAY);
    }
}
