//! The face widget.
//!
//! [`FaceView`] owns the style and happiness state and turns them into
//! drawing calls. It does not derive from any platform view; a host wrapper
//! owns it, forwards measure and draw calls, and supplies a
//! [`RedrawRequester`] so state changes can schedule a new frame.

mod face;
mod invalidate;
mod state;

pub use face::{FaceView, draw_face};
pub use invalidate::{NoopRedraw, RedrawRequester};
pub use state::HappinessState;
