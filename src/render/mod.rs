//! Renderer interface
//!
//! The simulation never draws; it exposes state and this module walks it
//! in a fixed order each tick. Implementations only need to know how to
//! put a sprite or a line of text somewhere, not what a raider is.

pub mod term;

use crate::sim::{Body, Facing, MatchPhase, MatchState, PickupKind, Pose, Rect};

/// Which image to draw. Implementations map these to their own assets
/// (glyphs, textures, whatever they have).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Avatar(Facing, Pose),
    Projectile,
    Raider { halted: bool },
    Hazard,
    Pickup(PickupKind),
    /// Explosions alternate between two mirrored frames
    Explosion { frame: u8 },
}

/// HUD text slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Score,
    TimeLeft,
    /// Single end-of-match message
    Banner,
}

/// One frame's worth of drawing, consumed by the match loop.
pub trait Renderer {
    type Error;

    /// Wipe the previous frame and draw the background.
    fn clear(&mut self) -> Result<(), Self::Error>;
    /// Draw one sprite at the given arena-space rect.
    fn draw(&mut self, visual: Visual, rect: &Rect) -> Result<(), Self::Error>;
    /// Draw a HUD text element.
    fn draw_text(&mut self, kind: TextKind, text: &str) -> Result<(), Self::Error>;
    /// Draw the special gauge bar and its label.
    fn draw_gauge(&mut self, value: u8, max: u8) -> Result<(), Self::Error>;
    /// Flush the frame to the screen.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Draw one complete frame in the fixed order: background, avatar,
/// projectiles, pickups, raiders, hazards, explosions, then the HUD
/// (score, timer, gauge) and any end-of-match banner.
pub fn draw_frame<R: Renderer>(renderer: &mut R, state: &MatchState) -> Result<(), R::Error> {
    renderer.clear()?;

    renderer.draw(
        Visual::Avatar(state.avatar.facing, state.avatar.pose),
        state.avatar.rect(),
    )?;
    for projectile in &state.projectiles {
        renderer.draw(Visual::Projectile, projectile.rect())?;
    }
    for pickup in &state.pickups {
        renderer.draw(Visual::Pickup(pickup.kind), pickup.rect())?;
    }
    for raider in &state.raiders {
        renderer.draw(
            Visual::Raider {
                halted: raider.halted(),
            },
            raider.rect(),
        )?;
    }
    for hazard in &state.hazards {
        renderer.draw(Visual::Hazard, hazard.rect())?;
    }
    for explosion in &state.explosions {
        renderer.draw(
            Visual::Explosion {
                frame: explosion.frame(),
            },
            explosion.rect(),
        )?;
    }

    renderer.draw_text(TextKind::Score, &format!("Score: {}", state.score.value()))?;
    renderer.draw_text(
        TextKind::TimeLeft,
        &format!("Time: {}", state.timer.time_left(state.tick)),
    )?;
    renderer.draw_gauge(state.gauge.value(), state.gauge.max())?;

    match state.phase {
        MatchPhase::AvatarDefeated => {
            renderer.draw_text(
                TextKind::Banner,
                &format!("DOWNED  -  Score: {}", state.score.value()),
            )?;
        }
        MatchPhase::TimeExpired => {
            renderer.draw_text(
                TextKind::Banner,
                &format!("TIME UP  -  Score: {}", state.score.value()),
            )?;
        }
        MatchPhase::Paused => {
            renderer.draw_text(TextKind::Banner, "PAUSED")?;
        }
        _ => {}
    }

    renderer.present()
}
