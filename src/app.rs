//! Board wiring
//!
//! `App` builds the store once, hands it to the form and both lists, and
//! turns discrete UI events into store calls. Everything runs on one thread,
//! one event at a time.

use crate::{
    components::{
        DataTransfer, DragTarget, Draggable, FormInput, ProjectInput, ProjectItem, ProjectList,
    },
    config::AppConfig,
    domain::{Project, ProjectId, ProjectStatus},
    error::Result,
    render::{RenderOp, RenderQueue},
    store::ProjectStore,
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::debug;

/// A user interaction delivered by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    Submit(FormInput),
    DragStart { project_id: ProjectId },
    DragOver { list: ProjectStatus },
    DragLeave { list: ProjectStatus },
    Drop { list: ProjectStatus },
    DragEnd,
}

pub struct App {
    config: AppConfig,
    store: Rc<ProjectStore>,
    queue: RenderQueue,
    input: ProjectInput,
    lists: Vec<ProjectList>,
    drag: Option<DataTransfer>,
}

impl App {
    /// Mounts the form and one list per status. The mount instructions are
    /// waiting in the render queue afterwards.
    pub fn new(config: AppConfig) -> Self {
        let store = Rc::new(ProjectStore::new());
        let queue = RenderQueue::new();
        let ids = config.id_strategy.generator(config.max_random_id);

        let input = ProjectInput::new(Rc::clone(&store), queue.clone(), ids, &config);
        let lists = ProjectStatus::ALL
            .iter()
            .map(|status| ProjectList::new(*status, Rc::clone(&store), queue.clone(), &config))
            .collect();

        Self {
            config,
            store,
            queue,
            input,
            lists,
            drag: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        self.lists.iter().find(|list| list.status() == status)
    }

    /// Projects currently shown in the column for `status`
    pub fn projects_in(&self, status: ProjectStatus) -> Vec<Project> {
        self.list(status)
            .map(ProjectList::assigned_projects)
            .unwrap_or_default()
    }

    /// Runs one event to completion.
    ///
    /// Only a rejected form returns an error; the alert for it is already
    /// queued. Everything else that cannot apply is ignored.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        debug!(?event, "Dispatching UI event");
        match event {
            UiEvent::Submit(form) => {
                self.input.submit(&form)?;
            }
            UiEvent::DragStart { project_id } => {
                self.drag = self.store.find(project_id).map(|project| {
                    let mut transfer = DataTransfer::new();
                    self.item_for(project).on_drag_start(&mut transfer);
                    transfer
                });
            }
            UiEvent::DragOver { list } => {
                let transfer = self.drag.clone().unwrap_or_default();
                if let Some(target) = self.list(list) {
                    target.on_drag_over(&transfer);
                }
            }
            UiEvent::DragLeave { list } => {
                if let Some(target) = self.list(list) {
                    target.on_drag_leave();
                }
            }
            UiEvent::Drop { list } => {
                let transfer = self.drag.take().unwrap_or_default();
                if let Some(target) = self.list(list) {
                    target.on_drop(&transfer);
                }
            }
            UiEvent::DragEnd => {
                if let Some(transfer) = self.drag.take() {
                    if let Some(id) = transfer
                        .get_data(&self.config.drag_mime)
                        .and_then(|data| data.parse::<ProjectId>().ok())
                    {
                        if let Some(project) = self.store.find(id) {
                            self.item_for(project).on_drag_end(&transfer);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Takes every render instruction produced so far
    pub fn take_render_ops(&self) -> Vec<RenderOp> {
        self.queue.drain()
    }

    fn item_for(&self, project: Project) -> ProjectItem {
        let host = self
            .list(project.status)
            .map(|list| list.view().list_id())
            .unwrap_or_default();
        ProjectItem::new(
            project,
            host,
            self.config.item_template_id.as_str(),
            self.config.drag_mime.as_str(),
        )
    }
}
