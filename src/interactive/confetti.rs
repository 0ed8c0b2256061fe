//! Confetti animation for a won game
//!
//! Particles are spawned above the visible area and fall under a little
//! gravity until they leave it. The animation does not recycle particles.

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

const GRAVITY: f32 = 0.04;
const GLYPHS: &[char] = &['*', '•', '◆', '▪', '✦', '❖'];
const COLORS: &[Color] = &[
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::LightRed,
    Color::LightGreen,
];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    glyph: char,
    color: Color,
}

#[derive(Debug, Default, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Particle count that looks right for an area of this size
    #[must_use]
    pub fn pieces_for(area: Rect) -> usize {
        (usize::from(area.width) * usize::from(area.height) / 8).clamp(40, 400)
    }

    /// Spawn `count` particles spread over `area`, staggered above its top edge
    pub fn burst<R: Rng + ?Sized>(&mut self, area: Rect, count: usize, rng: &mut R) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = f32::from(area.width);
        let height = f32::from(area.height);
        self.particles.extend((0..count).map(|_| Particle {
            x: f32::from(area.x) + rng.random_range(0.0..width),
            y: f32::from(area.y) - rng.random_range(0.0..height),
            vx: rng.random_range(-0.3..0.3),
            vy: rng.random_range(0.2..0.8),
            glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
            color: COLORS[rng.random_range(0..COLORS.len())],
        }));
    }

    /// Advance one frame and drop particles that left `area`
    pub fn tick(&mut self, area: Rect) {
        let left = f32::from(area.x);
        let right = f32::from(area.right());
        let bottom = f32::from(area.bottom());

        for p in &mut self.particles {
            p.vy += GRAVITY;
            p.x += p.vx;
            p.y += p.vy;
        }
        self.particles
            .retain(|p| p.y < bottom && p.x >= left && p.x < right);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Draw visible particles over whatever is already in `buf`
    pub fn render(&self, buf: &mut Buffer, area: Rect) {
        for p in &self.particles {
            if p.y < f32::from(area.y) || p.x < f32::from(area.x) {
                continue;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(p.glyph).set_fg(p.color);
            }
        }
    }
}
