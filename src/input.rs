// Keyboard and mouse handling: turns raw macroquad input into game commands

use crate::config::{SCENE_HEIGHT, WINDOW_WIDTH};
use crate::debug_input;
use crate::types::{Command, PlayerId};
use macroquad::prelude::*;

/// On-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Throw(PlayerId),
    PlayAgain,
    Rules,
}

static PLAYING_BUTTONS: [Button; 3] = [Button::Throw(PlayerId::One), Button::Throw(PlayerId::Two), Button::Rules];
static MATCH_OVER_BUTTONS: [Button; 2] = [Button::PlayAgain, Button::Rules];

const BUTTON_WIDTH: f32 = 140.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_MARGIN_X: f32 = 60.0;
const BUTTON_TOP: f32 = SCENE_HEIGHT as f32 + 40.0;

pub fn button_rect(button: Button) -> Rect {
    let width = WINDOW_WIDTH as f32;
    match button {
        Button::Throw(PlayerId::One) => Rect::new(BUTTON_MARGIN_X, BUTTON_TOP, BUTTON_WIDTH, BUTTON_HEIGHT),
        Button::Throw(PlayerId::Two) => Rect::new(
            width - BUTTON_MARGIN_X - BUTTON_WIDTH,
            BUTTON_TOP,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        ),
        Button::PlayAgain => Rect::new((width - 180.0) / 2.0, BUTTON_TOP, 180.0, BUTTON_HEIGHT),
        Button::Rules => Rect::new(width - 90.0, 8.0, 80.0, 26.0),
    }
}

/// Buttons on screen for the current match state. Throw buttons give way to
/// "Play Again" once the match is decided.
pub fn visible_buttons(match_over: bool) -> &'static [Button] {
    if match_over { &MATCH_OVER_BUTTONS } else { &PLAYING_BUTTONS }
}

pub fn button_at(point: Vec2, match_over: bool) -> Option<Button> {
    visible_buttons(match_over)
        .iter()
        .copied()
        .find(|b| button_rect(*b).contains(point))
}

pub fn button_command(button: Button) -> Command {
    match button {
        Button::Throw(player) => Command::Throw(player),
        Button::PlayAgain => Command::Reset,
        Button::Rules => Command::ToggleRules,
    }
}

pub fn key_command(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::A => Some(Command::Throw(PlayerId::One)),
        KeyCode::L => Some(Command::Throw(PlayerId::Two)),
        KeyCode::Space | KeyCode::Enter | KeyCode::KpEnter => Some(Command::Reset),
        KeyCode::R => Some(Command::ToggleRules),
        KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Commands issued since the last frame.
pub fn poll_commands(match_over: bool) -> Vec<Command> {
    let mut commands: Vec<Command> = get_keys_pressed().into_iter().filter_map(key_command).collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        if let Some(button) = button_at(vec2(x, y), match_over) {
            debug_input!("Clicked {:?} at ({:.0}, {:.0})", button, x, y);
            commands.push(button_command(button));
        }
    }

    if is_quit_requested() {
        commands.push(Command::Quit);
    }
    if !commands.is_empty() {
        debug_input!("Commands this frame: {:?}", commands);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(button: Button) -> Vec2 {
        button_rect(button).center()
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_command(KeyCode::A), Some(Command::Throw(PlayerId::One)));
        assert_eq!(key_command(KeyCode::L), Some(Command::Throw(PlayerId::Two)));
        assert_eq!(key_command(KeyCode::Enter), Some(Command::Reset));
        assert_eq!(key_command(KeyCode::R), Some(Command::ToggleRules));
        assert_eq!(key_command(KeyCode::Escape), Some(Command::Quit));
        assert_eq!(key_command(KeyCode::Q), None);
    }

    #[test]
    fn test_throw_buttons_hit() {
        let p1 = Button::Throw(PlayerId::One);
        let p2 = Button::Throw(PlayerId::Two);
        assert_eq!(button_at(center(p1), false), Some(p1));
        assert_eq!(button_at(center(p2), false), Some(p2));
        assert_eq!(button_at(vec2(300.0, 100.0), false), None);
    }

    #[test]
    fn test_play_again_only_after_match() {
        let play_again = center(Button::PlayAgain);
        assert_eq!(button_at(play_again, true), Some(Button::PlayAgain));
        assert_ne!(button_at(play_again, false), Some(Button::PlayAgain));
        // Throw buttons are gone once the match is over
        assert_eq!(button_at(center(Button::Throw(PlayerId::One)), true), None);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        for match_over in [false, true] {
            let buttons = visible_buttons(match_over);
            for (i, a) in buttons.iter().enumerate() {
                assert!(button_rect(*a).right() <= WINDOW_WIDTH as f32);
                for b in &buttons[i + 1..] {
                    assert!(
                        button_rect(*a).intersect(button_rect(*b)).is_none(),
                        "{:?} overlaps {:?}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_button_commands() {
        assert_eq!(button_command(Button::PlayAgain), Command::Reset);
        assert_eq!(button_command(Button::Rules), Command::ToggleRules);
        assert_eq!(
            button_command(Button::Throw(PlayerId::Two)),
            Command::Throw(PlayerId::Two)
        );
    }
}
