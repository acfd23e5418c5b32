//! Ambient particle field rendered behind the hero section.
//!
//! The simulation is deliberately tiny: 80 drifting points, Euler steps,
//! velocity sign-flips at the surface edges, and short connecting lines
//! between nearby points. Drawing goes through the [`FieldPainter`] seam so
//! the whole update rule can be exercised off-browser with a recording
//! painter and a seeded RNG.

use std::ops::Range;

use rand::Rng;

/// Palette the original brand uses for the hero backdrop.
const PALETTE: &[&str] = &["#7c3aed", "#a78bfa", "#ec4899", "#06b6d4"];

/// Tunables for one particle field instance, fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub palette: &'static [&'static str],
    pub size_range: Range<f64>,
    pub speed_range: Range<f64>,
    pub opacity_range: Range<f64>,
    /// Particles closer than this get a connecting line.
    pub link_distance: f64,
    /// Line opacity at distance zero; decays linearly to zero at `link_distance`.
    pub link_alpha: f64,
    pub link_width: f64,
    /// Only every `link_stride`-th particle by index examines neighbors.
    pub link_stride: usize,
    /// How many of the following particles a linking particle examines.
    /// The window does not wrap past the end of the buffer.
    pub link_window: usize,
    /// Physics and drawing run on every `frame_divisor`-th animation callback.
    pub frame_divisor: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 80,
            palette: PALETTE,
            size_range: 1.0..4.0,
            speed_range: -0.25..0.25,
            opacity_range: 0.2..0.7,
            link_distance: 100.0,
            link_alpha: 0.2,
            link_width: 0.5,
            link_stride: 3,
            link_window: 3,
            frame_divisor: 2,
        }
    }
}

/// A single drifting point. Only `x`, `y` and the velocity signs change
/// after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: &'static str,
}

/// Drawing seam between the simulation and whatever surface renders it.
///
/// The canvas component implements this over `CanvasRenderingContext2d`;
/// tests implement it with a recorder.
pub trait FieldPainter {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, alpha: f64, width: f64);
    /// Global paint transparency must not leak into unrelated drawing.
    fn reset_alpha(&mut self);
}

/// Owns the particle buffer and the frame counter. There is exactly one
/// writer: the animation callback that calls [`ParticleField::advance`].
pub struct ParticleField {
    width: f64,
    height: f64,
    frame_count: u64,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, config: FieldConfig, rng: &mut impl Rng) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                vx: rng.gen_range(config.speed_range.clone()),
                vy: rng.gen_range(config.speed_range.clone()),
                size: rng.gen_range(config.size_range.clone()),
                opacity: rng.gen_range(config.opacity_range.clone()),
                color: config.palette[rng.gen_range(0..config.palette.len())],
            })
            .collect();
        Self {
            width,
            height,
            frame_count: 0,
            particles,
            config,
        }
    }

    /// Track the surface after a window resize. Existing particles are left
    /// untouched; one now out of bounds drifts back only once its velocity
    /// points inward again.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One animation callback. Every `frame_divisor`-th call clears the
    /// surface, steps and draws each particle, and draws proximity links;
    /// the calls in between only bump the frame counter. Returns whether
    /// this call did the work.
    pub fn advance(&mut self, painter: &mut impl FieldPainter) -> bool {
        self.frame_count += 1;
        if self.frame_count % self.config.frame_divisor != 0 {
            return false;
        }

        painter.clear(self.width, self.height);
        for i in 0..self.particles.len() {
            self.step_particle(i);
            let p = &self.particles[i];
            painter.fill_circle(p.x, p.y, p.size, p.color, p.opacity);
            if i % self.config.link_stride == 0 {
                self.link_neighbors(i, painter);
            }
        }
        painter.reset_alpha();
        true
    }

    fn step_particle(&mut self, i: usize) {
        let (width, height) = (self.width, self.height);
        let p = &mut self.particles[i];
        p.x += p.vx;
        p.y += p.vy;
        // Reflection, not clamping: the particle may sit past the edge for
        // one executed frame before the flipped velocity carries it back.
        if p.x < 0.0 || p.x > width {
            p.vx = -p.vx;
        }
        if p.y < 0.0 || p.y > height {
            p.vy = -p.vy;
        }
    }

    /// Links `i` against the next `link_window` particles in index order.
    /// Those neighbors have not stepped yet this frame; the asymmetry is
    /// part of the look and keeps the pass linear.
    fn link_neighbors(&self, i: usize, painter: &mut impl FieldPainter) {
        let p = &self.particles[i];
        let window_end = (i + 1 + self.config.link_window).min(self.particles.len());
        for other in &self.particles[i + 1..window_end] {
            let dx = p.x - other.x;
            let dy = p.y - other.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < self.config.link_distance {
                let alpha = (1.0 - distance / self.config.link_distance) * self.config.link_alpha;
                painter.stroke_line(
                    (p.x, p.y),
                    (other.x, other.y),
                    p.color,
                    alpha,
                    self.config.link_width,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        circles: Vec<(f64, f64, f64, String, f64)>,
        lines: Vec<((f64, f64), (f64, f64), String, f64, f64)>,
        alpha_resets: usize,
    }

    impl FieldPainter for Recorder {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64) {
            self.circles.push((x, y, radius, color.to_string(), alpha));
        }

        fn stroke_line(
            &mut self,
            from: (f64, f64),
            to: (f64, f64),
            color: &str,
            alpha: f64,
            width: f64,
        ) {
            self.lines.push((from, to, color.to_string(), alpha, width));
        }

        fn reset_alpha(&mut self) {
            self.alpha_resets += 1;
        }
    }

    fn seeded_field(width: f64, height: f64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(7);
        ParticleField::new(width, height, FieldConfig::default(), &mut rng)
    }

    /// Default config, shrunk to `particle_count` and with the frame
    /// throttle removed so a single `advance` does the work.
    fn every_frame(particle_count: usize) -> FieldConfig {
        FieldConfig {
            particle_count,
            frame_divisor: 1,
            ..FieldConfig::default()
        }
    }

    fn still_particle(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 2.0,
            opacity: 0.5,
            color: PALETTE[0],
        }
    }

    #[test]
    fn population_is_fixed_at_creation() {
        for (w, h) in [(1.0, 1.0), (320.0, 240.0), (1920.0, 1080.0)] {
            assert_eq!(seeded_field(w, h).particles().len(), 80);
        }
    }

    #[test]
    fn attributes_are_sampled_within_bounds() {
        let field = seeded_field(1280.0, 720.0);
        for p in field.particles() {
            assert!((1.0..4.0).contains(&p.size), "size {}", p.size);
            assert!((0.2..0.7).contains(&p.opacity), "opacity {}", p.opacity);
            assert!((-0.25..0.25).contains(&p.vx), "vx {}", p.vx);
            assert!((-0.25..0.25).contains(&p.vy), "vy {}", p.vy);
            assert!((0.0..1280.0).contains(&p.x), "x {}", p.x);
            assert!((0.0..720.0).contains(&p.y), "y {}", p.y);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn reflection_flips_only_the_crossed_axis() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(100.0, 100.0, every_frame(1), &mut rng);
        field.particles[0] = Particle {
            x: 99.9,
            y: 50.0,
            vx: 0.2,
            vy: 0.1,
            ..still_particle(0.0, 0.0)
        };

        assert!(field.advance(&mut Recorder::default()));

        let p = &field.particles[0];
        // Flipped exactly once, and only on x; the position stays past the
        // edge until the next executed frame.
        assert_eq!(p.vx, -0.2);
        assert_eq!(p.vy, 0.1);
        assert!((p.x - 100.1).abs() < 1e-9);
        assert!((p.y - 50.1).abs() < 1e-9);
    }

    #[test]
    fn reflection_handles_both_edges_in_one_step() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(100.0, 100.0, every_frame(1), &mut rng);
        field.particles[0] = Particle {
            x: 0.05,
            y: 99.95,
            vx: -0.2,
            vy: 0.2,
            ..still_particle(0.0, 0.0)
        };

        field.advance(&mut Recorder::default());

        let p = &field.particles[0];
        assert_eq!(p.vx, 0.2);
        assert_eq!(p.vy, -0.2);
    }

    #[test]
    fn work_runs_on_every_other_callback() {
        let mut field = seeded_field(800.0, 600.0);
        let mut painter = Recorder::default();
        let executed: Vec<bool> = (0..10).map(|_| field.advance(&mut painter)).collect();

        assert_eq!(
            executed,
            [false, true, false, true, false, true, false, true, false, true]
        );
        assert_eq!(painter.clears, 5);
        assert_eq!(painter.alpha_resets, 5);
    }

    #[test]
    fn skipped_callback_mutates_nothing() {
        let mut field = seeded_field(800.0, 600.0);
        let before = field.particles.clone();
        let mut painter = Recorder::default();

        assert!(!field.advance(&mut painter));

        assert_eq!(field.particles, before);
        assert_eq!(painter.clears, 0);
        assert!(painter.circles.is_empty());
        assert!(painter.lines.is_empty());
    }

    #[test]
    fn link_opacity_decays_linearly_with_distance() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(500.0, 500.0, every_frame(4), &mut rng);
        field.particles[0] = still_particle(0.0, 0.0);
        field.particles[1] = still_particle(0.0, 0.0); // d = 0
        field.particles[2] = still_particle(50.0, 0.0); // d = 50
        field.particles[3] = still_particle(100.0, 0.0); // d = 100, no line

        let mut painter = Recorder::default();
        field.advance(&mut painter);

        assert_eq!(painter.lines.len(), 2);
        let (_, to, color, alpha, width) = painter.lines[0].clone();
        assert_eq!(to, (0.0, 0.0));
        assert_eq!(color, PALETTE[0]);
        assert!((alpha - 0.2).abs() < 1e-12);
        assert_eq!(width, 0.5);
        let (_, to, _, alpha, _) = painter.lines[1].clone();
        assert_eq!(to, (50.0, 0.0));
        assert!((alpha - 0.1).abs() < 1e-12);
    }

    #[test]
    fn only_every_third_particle_links_and_only_within_its_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(500.0, 500.0, every_frame(8), &mut rng);
        // Everything within link distance of everything else: any drawn
        // line is then purely a stride/window decision.
        for (i, p) in field.particles.iter_mut().enumerate() {
            *p = still_particle(i as f64, 0.0);
        }

        let mut painter = Recorder::default();
        field.advance(&mut painter);

        let pairs: Vec<(f64, f64)> = painter
            .lines
            .iter()
            .map(|(from, to, _, _, _)| (from.0, to.0))
            .collect();
        assert_eq!(
            pairs,
            [
                (0.0, 1.0),
                (0.0, 2.0),
                (0.0, 3.0),
                (3.0, 4.0),
                (3.0, 5.0),
                (3.0, 6.0),
                // Index 6 has only one follower left; the window truncates.
                (6.0, 7.0),
            ]
        );
    }

    #[test]
    fn linking_particle_sees_neighbors_before_they_step() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(500.0, 500.0, every_frame(2), &mut rng);
        field.particles[0] = Particle {
            vx: 99.0,
            ..still_particle(0.0, 0.0)
        };
        field.particles[1] = Particle {
            vx: 50.0,
            ..still_particle(99.0, 0.0)
        };

        let mut painter = Recorder::default();
        field.advance(&mut painter);

        // Particle 0 stepped to (99, 0) and linked to particle 1 at its
        // pre-step position (99, 0); particle 1 only moved afterwards.
        assert_eq!(painter.lines.len(), 1);
        let (from, to, _, alpha, _) = painter.lines[0].clone();
        assert_eq!(from, (99.0, 0.0));
        assert_eq!(to, (99.0, 0.0));
        assert!((alpha - 0.2).abs() < 1e-12);
        assert!((field.particles[1].x - 149.0).abs() < 1e-9);
    }

    #[test]
    fn resize_keeps_particle_state() {
        let mut field = seeded_field(1280.0, 720.0);
        let before = field.particles.clone();

        field.resize(200.0, 150.0);

        assert_eq!(field.particles, before);
        assert_eq!((field.width, field.height), (200.0, 150.0));
    }

    #[test]
    fn boundary_checks_use_resized_dimensions() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(1000.0, 1000.0, every_frame(1), &mut rng);
        field.particles[0] = Particle {
            x: 399.9,
            vx: 0.2,
            ..still_particle(0.0, 200.0)
        };

        field.resize(400.0, 400.0);
        field.advance(&mut Recorder::default());

        assert_eq!(field.particles[0].vx, -0.2);
    }
}
