use glam::Vec2;

// Shared cursor tuning constants. Distances are CSS pixels, times are
// milliseconds unless the name says otherwise.

// Where channels and the raw signal start before the first move event
pub const OFFSCREEN_SENTINEL: Vec2 = Vec2::new(-100.0, -100.0);

// Spring (stiffness, damping) pairs, unit mass
pub const GLYPH_SPRING: (f32, f32) = (1000.0, 50.0); // near-instant pointer follow
pub const TRAIL_SPRINGS: [(f32, f32); 5] = [
    (450.0, 30.0),
    (350.0, 25.0),
    (250.0, 20.0),
    (180.0, 18.0),
    (120.0, 15.0),
];
pub const HOVER_SPRING: (f32, f32) = (400.0, 25.0);

// Variant A dot table, one row per trail spring: (size px, opacity, color, blur px)
pub const TRAIL_DOTS: [(f32, f32, &str, f32); 5] = [
    (8.0, 0.6, "#ffffff", 2.0),
    (16.0, 0.4, "#f8f9fa", 4.0),
    (24.0, 0.2, "#e9ecef", 8.0),
    (32.0, 0.1, "#dee2e6", 12.0),
    (40.0, 0.05, "#ced4da", 16.0),
];

// Hover pose
pub const HOVER_SCALE: f32 = 1.4;
pub const HOVER_ROTATION_DEG: f32 = -15.0;

// Arrow glyph (variant A), drawn in a 100-unit view box
pub const ARROW_PATH: &str = "M10 10L90 50L50 60L40 100L10 10Z";
pub const ARROW_VIEWBOX: f32 = 100.0;
pub const ARROW_SIZE_PX: f32 = 40.0;
pub const ARROW_STROKE_WIDTH: f32 = 5.0;
pub const GLYPH_GLOW_PX: f32 = 5.0;

// Capsule glyph (variant B): resting circle and hovering bar
pub const CAPSULE_REST: (f32, f32) = (20.0, 20.0);
pub const CAPSULE_HOVER: (f32, f32) = (4.0, 28.0);

// Velocity estimation
pub const MIN_HEADING_SPEED: f32 = 40.0; // px/s below which the heading freezes
pub const VELOCITY_STALE_MS: f64 = 80.0; // no sample for this long reads as stopped
pub const STRETCH_FULL_SPEED: f32 = 2000.0; // px/s at which stretch saturates
pub const STRETCH_ALONG_MAX: f32 = 1.6;
pub const STRETCH_PERP_MIN: f32 = 0.6;

// Polyline trail (variant B)
pub const TRAIL_MAX_AGE_MS: f64 = 400.0;
pub const TRAIL_HISTORY_CAPACITY: usize = 64;
pub const TRAIL_STROKE_WIDTH: f32 = 2.0;
pub const TRAIL_STROKE_OPACITY: f32 = 0.5;

// Elements that count as interactive for hover purposes
pub const DEFAULT_INTERACTIVE_SELECTORS: &str =
    "button, a, .stat-card, .feature-card, .btn, .university-box, .ff-register-btn";
