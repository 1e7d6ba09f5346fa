//! UI components
//!
//! Each component is mounted from a template into a host element and then
//! fills in its own content. Both steps produce render instructions only.

use crate::render::RenderOp;

pub mod drag;
pub mod input;
pub mod item;
pub mod list;

pub use drag::{DataTransfer, DragTarget, Draggable, DropEffect};
pub use input::{FormInput, ProjectInput};
pub use item::ProjectItem;
pub use list::{ListView, ProjectList};

pub trait Component {
    /// Instruction that places this component's root element in its host
    fn mount(&self) -> RenderOp;

    /// Instructions that fill the mounted element
    fn render_content(&self) -> Vec<RenderOp>;

    fn render(&self) -> Vec<RenderOp> {
        let mut ops = vec![self.mount()];
        ops.extend(self.render_content());
        ops
    }
}
