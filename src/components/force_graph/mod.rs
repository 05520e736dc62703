mod component;
mod error;
mod layout;
mod render;
mod session;
mod state;
mod types;

pub use component::NetworkCanvas;
pub use types::NetworkData;
