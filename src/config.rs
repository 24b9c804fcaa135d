//! Configuration constants for the javelin throw game.

// Game rules
pub const MIN_THROW_DISTANCE: u32 = 50; // Meters, inclusive
pub const MAX_THROW_DISTANCE: u32 = 100; // Meters, inclusive
pub const WINS_TO_TAKE_MATCH: u32 = 3; // First to this many round wins takes the match

// Animation
pub const THROW_FRAMES: u32 = 60; // Frames per throw animation
pub const FRAME_RATE: u32 = 60; // Target animation frames per second
pub const FRAME_DURATION: f32 = 1.0 / FRAME_RATE as f32;
pub const MAX_CATCH_UP_FRAMES: u32 = 4; // Cap on animation frames advanced per rendered frame

// Rendering configuration
pub const WINDOW_WIDTH: i32 = 600;
pub const WINDOW_HEIGHT: i32 = 420;
pub const SCENE_HEIGHT: i32 = 300; // Top part of the window holds the field, the rest is controls

// Field geometry (screen pixels)
pub const GROUND_Y: f32 = 250.0;
pub const SCALE_ORIGIN_X: f32 = 50.0; // x of the 0m marker
pub const PIXELS_PER_METER: f32 = 5.0;
pub const MARKER_STEP_METERS: u32 = 10;
pub const MARKER_MAX_METERS: u32 = 100;

// Players
pub const PLAYER1_X: f32 = 50.0;
pub const PLAYER2_X: f32 = 550.0;
pub const HEAD_Y: f32 = 200.0;
pub const HEAD_RADIUS: f32 = 10.0;

// Javelin flight
pub const RELEASE_OFFSET_X: f32 = 25.0; // Release point in front of the thrower
pub const RELEASE_Y: f32 = 220.0;
pub const ARC_HEIGHT: f32 = 100.0; // Peak height above the release point
pub const JAVELIN_LENGTH: f32 = 40.0;
