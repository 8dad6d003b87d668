//! Sprite-sheet frame selection
//!
//! Pure function of elapsed time and facing direction: the player sheet is a
//! 4x4 atlas with one four-frame walk cycle per direction.

/// Facing direction, indexes into the frame tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

/// Frames in one walk cycle
pub const FRAMES_PER_DIRECTION: usize = 4;

/// Seconds each walk frame is held
pub const FRAME_DURATION: f32 = 0.25;

/// Sheet frame indices for each direction's walk cycle (column-major sheet)
const FRAMES_UP: [usize; FRAMES_PER_DIRECTION] = [2, 6, 10, 14];
const FRAMES_DOWN: [usize; FRAMES_PER_DIRECTION] = [0, 4, 8, 12];
const FRAMES_LEFT: [usize; FRAMES_PER_DIRECTION] = [1, 5, 9, 13];
const FRAMES_RIGHT: [usize; FRAMES_PER_DIRECTION] = [3, 7, 11, 15];

/// Animation state for a sprite-sheet entity
#[derive(Debug, Clone)]
pub struct SpriteAnimation {
    pub facing: Direction,
    /// Time accumulated toward the next frame
    pub time: f32,
    /// Slot within the active frame table
    pub slot: usize,
    /// Sheet geometry
    pub cols: usize,
    pub rows: usize,
}

impl Default for SpriteAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteAnimation {
    pub fn new() -> Self {
        Self {
            facing: Direction::Right,
            time: 0.0,
            slot: 0,
            cols: 4,
            rows: 4,
        }
    }

    /// The frame table for a facing direction
    pub fn table(facing: Direction) -> &'static [usize; FRAMES_PER_DIRECTION] {
        match facing {
            Direction::Up => &FRAMES_UP,
            Direction::Down => &FRAMES_DOWN,
            Direction::Left => &FRAMES_LEFT,
            Direction::Right => &FRAMES_RIGHT,
        }
    }

    /// Advance the walk cycle; a stationary sprite rests on the first frame
    pub fn advance(&mut self, dt: f32, moving: bool) {
        if !moving {
            self.time = 0.0;
            self.slot = 0;
            return;
        }
        self.time += dt;
        if self.time >= FRAME_DURATION {
            self.time -= FRAME_DURATION;
            self.slot = (self.slot + 1) % FRAMES_PER_DIRECTION;
        }
    }

    /// Current sheet frame index
    pub fn frame(&self) -> usize {
        Self::table(self.facing)[self.slot]
    }

    /// Normalized atlas rect (u, v, width, height) of the current frame
    pub fn atlas_rect(&self) -> (f32, f32, f32, f32) {
        let frame = self.frame();
        let u = (frame % self.cols) as f32 / self.cols as f32;
        let v = (frame / self.cols) as f32 / self.rows as f32;
        (u, v, 1.0 / self.cols as f32, 1.0 / self.rows as f32)
    }
}
