//! Render instructions
//!
//! Components never touch a real UI. They describe what should happen as a
//! flat list of [`RenderOp`]s which a thin host binding (DOM, terminal, test
//! harness) applies in order.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, rc::Rc};

/// Where a mounted element goes inside its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    AfterBegin,
    BeforeEnd,
}

/// One step of UI work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderOp {
    /// Clone `template_id`'s first element, give it `element_id` and insert it into `host_id`
    Mount {
        template_id: String,
        host_id: String,
        element_id: String,
        position: InsertPosition,
    },
    /// Set the id of the first `selector` match inside `element_id`
    SetChildId {
        element_id: String,
        selector: String,
        id: String,
    },
    /// Set the text of the first `selector` match inside `element_id`
    SetText {
        element_id: String,
        selector: String,
        text: String,
    },
    SetStyle {
        element_id: String,
        property: String,
        value: String,
    },
    SetDraggable {
        element_id: String,
    },
    /// Remove every child of `element_id`
    ClearChildren {
        element_id: String,
    },
    AddClass {
        element_id: String,
        class: String,
    },
    RemoveClass {
        element_id: String,
        class: String,
    },
    /// Blocking message box
    Alert {
        message: String,
    },
}

impl RenderOp {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Shared outbox that components push instructions into
///
/// Store notifications arrive through callbacks, so list re-renders cannot
/// be returned directly to whoever triggered the change. They land here and
/// the host drains the queue after each event.
#[derive(Debug, Clone, Default)]
pub struct RenderQueue {
    ops: Rc<RefCell<Vec<RenderOp>>>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, op: RenderOp) {
        self.ops.borrow_mut().push(op);
    }

    pub fn extend(&self, ops: impl IntoIterator<Item = RenderOp>) {
        self.ops.borrow_mut().extend(ops);
    }

    /// Takes every queued instruction, leaving the queue empty
    pub fn drain(&self) -> Vec<RenderOp> {
        self.ops.take()
    }

    pub fn len(&self) -> usize {
        self.ops.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_shared_between_clones() {
        let queue = RenderQueue::new();
        let other = queue.clone();

        other.push(RenderOp::Alert {
            message: "hi".to_string(),
        });

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain().len(), 1);
        assert!(other.is_empty());
    }

    #[test]
    fn test_op_json_shape() {
        let op = RenderOp::AddClass {
            element_id: "active-projects-list".to_string(),
            class: "droppable".to_string(),
        };
        let json = op.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"op":"add_class","element_id":"active-projects-list","class":"droppable"}"#
        );
    }

    #[test]
    fn test_mount_position_serialization() {
        let op = RenderOp::Mount {
            template_id: "project-input".to_string(),
            host_id: "app".to_string(),
            element_id: "user-input".to_string(),
            position: InsertPosition::AfterBegin,
        };
        let json = op.to_json().unwrap();
        assert!(json.contains(r#""position":"afterbegin""#));

        let back: RenderOp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
}
