// Looping depth field: item population, wrap math, opacity policy and
// per-item transform composition.
//
// Everything here is platform-free and host-testable. The web shell feeds
// `place_all` the smoothed scroll state once per frame and applies the
// resulting outputs to DOM elements.

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Number of foreground items (headings + cards).
pub const ITEM_COUNT: usize = 20;
/// Background starfield population.
pub const PARTICLE_COUNT: usize = 150;
/// Depth spacing between consecutive foreground items.
pub const Z_GAP: f32 = 800.0;
/// Depth distance after which the field repeats.
pub const LOOP_SIZE: f32 = ITEM_COUNT as f32 * Z_GAP;
/// Scroll position to camera depth multiplier.
pub const CAM_SPEED: f32 = 2.5;

// Wrapped depth past this limit belongs to the next period and is pulled back.
pub const NEAR_WRAP_LIMIT: f32 = 500.0;
// Opacity ramps: fully culled behind FAR_CULL, ramping in over FAR_RAMP_SPAN,
// fading out past NEAR_FADE_START over NEAR_FADE_SPAN.
pub const FAR_CULL: f32 = -3000.0;
pub const FAR_RAMP_SPAN: f32 = 1000.0;
pub const NEAR_FADE_START: f32 = 100.0;
pub const NEAR_FADE_SPAN: f32 = 400.0;

// Motion styling gains.
pub const PARTICLE_STRETCH_GAIN: f32 = 0.1;
pub const PARTICLE_STRETCH_MAX: f32 = 10.0;
pub const CHROMA_VELOCITY_MIN: f32 = 1.0;
pub const CHROMA_OFFSET_GAIN: f32 = 2.0;
pub const CARD_BOB_DEG: f32 = 10.0;

/// Display labels cycled across headings and cards.
pub const LABELS: &[&str] = &[
    "IMPACT", "VELOCITY", "BRUTAL", "SYSTEM", "FUTURE", "DESIGN", "PIXEL", "HYPER", "NEON", "VOID",
];

#[derive(Clone, Debug)]
pub enum ItemKind {
    Heading {
        label: &'static str,
    },
    Card {
        label: &'static str,
        card_id: u16,
        grid: (u8, u8),
        data_size_mb: f32,
    },
    Particle,
}

impl ItemKind {
    #[inline]
    pub fn is_particle(&self) -> bool {
        matches!(self, ItemKind::Particle)
    }
}

/// One member of the field. Built once, read every frame, never mutated.
#[derive(Clone, Debug)]
pub struct WorldItem {
    pub kind: ItemKind,
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub base_depth: f32,
}

/// Build the fixed population: headings every 4th slot, cards on a spiral,
/// particles scattered across one full wrap period.
pub fn generate_field(viewport: Vec2, rng: &mut impl Rng) -> Vec<WorldItem> {
    let mut items = Vec::with_capacity(ITEM_COUNT + PARTICLE_COUNT);
    for i in 0..ITEM_COUNT {
        let label = LABELS[i % LABELS.len()];
        let base_depth = -(i as f32) * Z_GAP;
        if i % 4 == 0 {
            items.push(WorldItem {
                kind: ItemKind::Heading { label },
                offset: Vec2::ZERO,
                rotation_deg: 0.0,
                base_depth,
            });
        } else {
            let angle = (i as f32 / ITEM_COUNT as f32) * std::f32::consts::PI * 6.0;
            items.push(WorldItem {
                kind: ItemKind::Card {
                    label,
                    card_id: rng.gen_range(0..9999),
                    grid: (rng.gen_range(0..10), rng.gen_range(0..10)),
                    data_size_mb: rng.gen::<f32>() * 100.0,
                },
                offset: Vec2::new(
                    angle.cos() * viewport.x * 0.3,
                    angle.sin() * viewport.y * 0.3,
                ),
                rotation_deg: (rng.gen::<f32>() - 0.5) * 30.0,
                base_depth,
            });
        }
    }
    for _ in 0..PARTICLE_COUNT {
        items.push(WorldItem {
            kind: ItemKind::Particle,
            offset: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 3000.0,
                (rng.gen::<f32>() - 0.5) * 3000.0,
            ),
            rotation_deg: 0.0,
            base_depth: -rng.gen::<f32>() * LOOP_SIZE,
        });
    }
    items
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    Translate3d { x: f32, y: f32, z: f32 },
    RotateZ(f32),
    RotateY(f32),
    ScaleZ(f32),
}

/// Per-item, per-frame placement result. Recomputed from scratch every tick.
#[derive(Clone, Debug, Default)]
pub struct RenderOutput {
    pub depth: f32,
    pub opacity: f32,
    pub ops: SmallVec<[TransformOp; 4]>,
    /// Horizontal ghosting offset in px for headings moving fast; the
    /// presentation layer renders it as colored text-shadow duplicates.
    pub chroma_px: Option<f32>,
}

/// Fold a raw depth into one wrap period. Results span
/// `(LOOP_SIZE - NEAR_WRAP_LIMIT, NEAR_WRAP_LIMIT]` around the near plane.
#[inline]
pub fn wrap_depth(raw: f32) -> f32 {
    let mut wrapped = ((raw % LOOP_SIZE) + LOOP_SIZE) % LOOP_SIZE;
    if wrapped > NEAR_WRAP_LIMIT {
        wrapped -= LOOP_SIZE;
    }
    wrapped
}

/// Opacity at a wrapped depth. Particles keep full opacity on the near side
/// so the starfield never pops as it passes the camera.
#[inline]
pub fn opacity_at(wrapped: f32, is_particle: bool) -> f32 {
    let mut alpha = 1.0;
    if wrapped < FAR_CULL {
        alpha = 0.0;
    } else if wrapped < FAR_CULL + FAR_RAMP_SPAN {
        alpha = (wrapped - FAR_CULL) / FAR_RAMP_SPAN;
    }
    if wrapped > NEAR_FADE_START && !is_particle {
        alpha = 1.0 - (wrapped - NEAR_FADE_START) / NEAR_FADE_SPAN;
    }
    alpha.clamp(0.0, 1.0)
}

/// Place every item for this frame. Outputs are written into `out`, which is
/// cleared and reused so steady-state frames allocate nothing.
pub fn place_all(
    items: &[WorldItem],
    scroll: f32,
    velocity: f32,
    time_sec: f32,
    out: &mut Vec<RenderOutput>,
) {
    out.clear();
    let camera_depth = scroll * CAM_SPEED;
    for item in items {
        let wrapped = wrap_depth(item.base_depth + camera_depth);
        let opacity = opacity_at(wrapped, item.kind.is_particle());

        let mut ops: SmallVec<[TransformOp; 4]> = SmallVec::new();
        let mut chroma_px = None;
        if opacity > 0.0 {
            ops.push(TransformOp::Translate3d {
                x: item.offset.x,
                y: item.offset.y,
                z: wrapped,
            });
            match &item.kind {
                ItemKind::Particle => {
                    let stretch = (1.0 + velocity.abs() * PARTICLE_STRETCH_GAIN)
                        .clamp(1.0, PARTICLE_STRETCH_MAX);
                    ops.push(TransformOp::ScaleZ(stretch));
                }
                ItemKind::Heading { .. } => {
                    ops.push(TransformOp::RotateZ(item.rotation_deg));
                    if velocity.abs() > CHROMA_VELOCITY_MIN {
                        chroma_px = Some(velocity * CHROMA_OFFSET_GAIN);
                    }
                }
                ItemKind::Card { .. } => {
                    ops.push(TransformOp::RotateZ(item.rotation_deg));
                    let bob = (time_sec + item.offset.x).sin() * CARD_BOB_DEG;
                    ops.push(TransformOp::RotateY(bob));
                }
            }
        }
        out.push(RenderOutput {
            depth: wrapped,
            opacity,
            ops,
            chroma_px,
        });
    }
}
