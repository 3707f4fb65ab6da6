pub mod cart;
pub mod playback;
pub mod scene;

pub use cart::*;
pub use playback::*;
pub use scene::*;
