//! Ball trail particles. Decoration only, nothing here feeds back into the game.

use glam::Vec2;
use rand::Rng;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const NUM_PARTICLES: usize = 30;
/// Frames a particle lives before it respawns at the emitter
const LIFETIME: f32 = 200.0;
const MAX_SPEED: f32 = 0.25;
const SPAWN_RANGE: f32 = 1.0;
const EXPANSION_RATE: f32 = 0.2;

#[derive(Debug, Clone, Copy)]
struct Particle {
    pos: Vec2,
    vel: Vec2,
    size: f32,
    age: f32,
    decay: f32,
}

/// Fixed pool of white square particles that respawn at the latest emit point
pub struct Emitter {
    particles: Vec<Particle>,
}

impl Emitter {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..NUM_PARTICLES)
            .map(|_| {
                let mut p = spawn(&mut rng, Vec2::ZERO);
                // Stagger ages so the pool does not respawn all at once
                p.age = rng.gen_range(0.0..LIFETIME);
                p
            })
            .collect();
        Self { particles }
    }

    /// Advance one frame with the emitter at `origin` and draw
    pub fn update_and_draw(&mut self, ctx: &CanvasRenderingContext2d, origin: Vec2) {
        let mut rng = rand::thread_rng();
        for p in self.particles.iter_mut() {
            p.age += p.decay;
            p.size += EXPANSION_RATE;
            p.pos += p.vel;
            if p.age >= LIFETIME {
                *p = spawn(&mut rng, origin);
            }

            let alpha = (1.0 - p.age / LIFETIME).clamp(0.0, 1.0);
            #[allow(deprecated)]
            ctx.set_fill_style(&JsValue::from_str(&format!(
                "rgba(255, 255, 255, {:.3})",
                alpha
            )));
            ctx.fill_rect(
                (p.pos.x - p.size / 2.0) as f64,
                (p.pos.y - p.size / 2.0) as f64,
                p.size as f64,
                p.size as f64,
            );
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn(rng: &mut impl Rng, origin: Vec2) -> Particle {
    let jitter = Vec2::new(
        rng.gen_range(-SPAWN_RANGE..=SPAWN_RANGE),
        rng.gen_range(-SPAWN_RANGE..=SPAWN_RANGE),
    );
    Particle {
        pos: origin + jitter,
        vel: Vec2::new(
            rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            rng.gen_range(-MAX_SPEED..=MAX_SPEED),
        ),
        size: rng.gen_range(1.0..3.0),
        age: 0.0,
        decay: rng.gen_range(2.0..6.0),
    }
}
