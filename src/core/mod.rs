pub mod animator;
pub mod constants;
pub mod history;
pub mod host;
pub mod hover;
pub mod palette;
pub mod reactor;
pub mod spring;
pub mod tracker;
pub mod trail;
pub mod velocity;

pub use animator::{CursorConfig, PointerTrailAnimator};
pub use host::*;
pub use hover::{Selector, TargetNode};
pub use palette::{BlendMode, Palette, Rgba};
pub use tracker::{InputTracker, PointerSample};
pub use trail::*;
