pub use self::overlay::{Kind, Overlay};
pub use self::renderer::OverlayRenderer;
pub use self::style::Style;
pub use self::viewport::{Projection, Viewport};

pub mod color;
pub mod coord;
pub mod overlay;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod viewport;
