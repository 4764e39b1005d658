//! GPU rendering subsystem.
//!
//! Draw lists are tessellated on the CPU into one colored triangle list and
//! drawn with a single wgpu pipeline, which keeps paint order identical to
//! recording order across shape kinds.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod mesh;
pub mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use tessellate::{MeshVertex, Tessellator};
