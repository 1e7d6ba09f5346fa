use serde::{Deserialize, Serialize};

/// Allowed effect of a drag operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

/// Payload carried by a drag operation, keyed by MIME type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `mime`, replacing any earlier value for it
    pub fn set_data(&mut self, mime: &str, data: impl Into<String>) {
        let data = data.into();
        match self.entries.iter_mut().find(|(m, _)| m == mime) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((mime.to_string(), data)),
        }
    }

    pub fn get_data(&self, mime: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(m, _)| m == mime)
            .map(|(_, data)| data.as_str())
    }

    /// MIME types in the order they were set
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(m, _)| m.as_str())
    }
}

/// Something the user can pick up
pub trait Draggable {
    fn on_drag_start(&self, transfer: &mut DataTransfer);
    fn on_drag_end(&self, transfer: &DataTransfer);
}

/// Something a dragged item can be dropped on
pub trait DragTarget {
    /// Returns true when the target accepts the payload
    fn on_drag_over(&self, transfer: &DataTransfer) -> bool;
    fn on_drop(&self, transfer: &DataTransfer);
    fn on_drag_leave(&self);
}
