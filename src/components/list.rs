use crate::{
    components::{
        drag::{DataTransfer, DragTarget},
        item::ProjectItem,
        Component,
    },
    config::AppConfig,
    domain::{Project, ProjectId, ProjectStatus},
    render::{InsertPosition, RenderOp, RenderQueue},
    store::ProjectStore,
};
use std::{cell::RefCell, rc::Rc, str::FromStr};
use tracing::debug;

/// Element ids and names for one status column
///
/// Holds no project state, so the rendering functions are pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub status: ProjectStatus,
    pub host_id: String,
    pub template_id: String,
    pub item_template_id: String,
    pub droppable_class: String,
    pub drag_mime: String,
}

impl ListView {
    pub fn new(status: ProjectStatus, config: &AppConfig) -> Self {
        Self {
            status,
            host_id: config.host_id.clone(),
            template_id: config.list_template_id.clone(),
            item_template_id: config.item_template_id.clone(),
            droppable_class: config.droppable_class.clone(),
            drag_mime: config.drag_mime.clone(),
        }
    }

    /// Id of the list's root element, e.g. `active-projects`
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status)
    }

    /// Id of the `<ul>` holding the cards, e.g. `active-projects-list`
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// Projects belonging to this column, in store order
    pub fn filter(&self, projects: &[Project]) -> Vec<Project> {
        projects
            .iter()
            .filter(|p| p.status == self.status)
            .cloned()
            .collect()
    }

    /// Clears the `<ul>` and rebuilds one card per project
    pub fn render_projects(&self, projects: &[Project]) -> Vec<RenderOp> {
        let list_id = self.list_id();
        let mut ops = vec![RenderOp::ClearChildren {
            element_id: list_id.clone(),
        }];
        for project in projects {
            let item = ProjectItem::new(
                project.clone(),
                list_id.as_str(),
                self.item_template_id.as_str(),
                self.drag_mime.as_str(),
            );
            ops.extend(item.render());
        }
        ops
    }
}

/// A status column that re-renders whenever the store changes
pub struct ProjectList {
    view: ListView,
    store: Rc<ProjectStore>,
    queue: RenderQueue,
    assigned: Rc<RefCell<Vec<Project>>>,
}

impl ProjectList {
    /// Mounts the column and subscribes it to the store
    pub fn new(
        status: ProjectStatus,
        store: Rc<ProjectStore>,
        queue: RenderQueue,
        config: &AppConfig,
    ) -> Self {
        let list = Self {
            view: ListView::new(status, config),
            store,
            queue,
            assigned: Rc::new(RefCell::new(Vec::new())),
        };
        list.queue.extend(list.render());
        list.configure();
        list
    }

    fn configure(&self) {
        let view = self.view.clone();
        let queue = self.queue.clone();
        let assigned = Rc::clone(&self.assigned);

        self.store.subscribe(move |projects: &[Project]| {
            let filtered = view.filter(projects);
            debug!(list = %view.status, count = filtered.len(), "Re-rendering list");
            queue.extend(view.render_projects(&filtered));
            *assigned.borrow_mut() = filtered;
        });
    }

    pub fn status(&self) -> ProjectStatus {
        self.view.status
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Projects shown after the latest store notification
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }
}

impl Component for ProjectList {
    fn mount(&self) -> RenderOp {
        RenderOp::Mount {
            template_id: self.view.template_id.clone(),
            host_id: self.view.host_id.clone(),
            element_id: self.view.element_id(),
            position: InsertPosition::BeforeEnd,
        }
    }

    fn render_content(&self) -> Vec<RenderOp> {
        let element_id = self.view.element_id();
        vec![
            RenderOp::SetChildId {
                element_id: element_id.clone(),
                selector: "ul".to_string(),
                id: self.view.list_id(),
            },
            RenderOp::SetText {
                element_id,
                selector: "h2".to_string(),
                text: self.view.status.heading(),
            },
        ]
    }
}

impl DragTarget for ProjectList {
    fn on_drag_over(&self, transfer: &DataTransfer) -> bool {
        let accepted = transfer.types().next() == Some(self.view.drag_mime.as_str());
        if accepted {
            self.queue.push(RenderOp::AddClass {
                element_id: self.view.list_id(),
                class: self.view.droppable_class.clone(),
            });
        }
        accepted
    }

    fn on_drop(&self, transfer: &DataTransfer) {
        self.on_drag_leave();

        let Some(payload) = transfer.get_data(&self.view.drag_mime) else {
            debug!(list = %self.view.status, "Drop without payload ignored");
            return;
        };
        match ProjectId::from_str(payload) {
            Ok(id) => {
                self.store.set_status(id, self.view.status);
            }
            Err(_) => debug!(list = %self.view.status, payload, "Drop with unreadable id ignored"),
        }
    }

    fn on_drag_leave(&self) {
        self.queue.push(RenderOp::RemoveClass {
            element_id: self.view.list_id(),
            class: self.view.droppable_class.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, status: ProjectStatus) -> Project {
        Project::new(ProjectId::new(id), "Title", "Description", 1, status)
    }

    fn setup(status: ProjectStatus) -> (Rc<ProjectStore>, RenderQueue, ProjectList) {
        let store = Rc::new(ProjectStore::new());
        let queue = RenderQueue::new();
        let list = ProjectList::new(status, Rc::clone(&store), queue.clone(), &AppConfig::default());
        (store, queue, list)
    }

    #[test]
    fn test_mount_and_heading() {
        let (store, queue, _list) = setup(ProjectStatus::Finished);
        let ops = queue.drain();

        assert_eq!(
            ops[0],
            RenderOp::Mount {
                template_id: "project-list".to_string(),
                host_id: "app".to_string(),
                element_id: "finished-projects".to_string(),
                position: InsertPosition::BeforeEnd,
            }
        );
        assert!(ops.contains(&RenderOp::SetChildId {
            element_id: "finished-projects".to_string(),
            selector: "ul".to_string(),
            id: "finished-projects-list".to_string(),
        }));
        assert!(ops.contains(&RenderOp::SetText {
            element_id: "finished-projects".to_string(),
            selector: "h2".to_string(),
            text: "FINISHED PROJECTS".to_string(),
        }));
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn test_filters_on_notification() {
        let (store, queue, list) = setup(ProjectStatus::Active);
        queue.drain();

        store.append(project(1, ProjectStatus::Active));
        store.append(project(2, ProjectStatus::Finished));

        let ids: Vec<_> = list.assigned_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProjectId::new(1)]);
    }

    #[test]
    fn test_rerender_clears_then_rebuilds() {
        let (store, queue, _list) = setup(ProjectStatus::Active);
        queue.drain();

        store.append(project(1, ProjectStatus::Active));
        queue.drain();
        store.append(project(2, ProjectStatus::Active));
        let ops = queue.drain();

        assert_eq!(
            ops[0],
            RenderOp::ClearChildren {
                element_id: "active-projects-list".to_string()
            }
        );
        let mounted: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::Mount { element_id, .. } => Some(element_id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(mounted, vec!["1", "2"]);
    }

    #[test]
    fn test_drag_over_requires_text_payload() {
        let (_store, queue, list) = setup(ProjectStatus::Finished);
        queue.drain();

        assert!(!list.on_drag_over(&DataTransfer::new()));
        assert!(queue.is_empty());

        let mut transfer = DataTransfer::new();
        transfer.set_data("text/plain", "5");
        assert!(list.on_drag_over(&transfer));
        assert_eq!(
            queue.drain(),
            vec![RenderOp::AddClass {
                element_id: "finished-projects-list".to_string(),
                class: "droppable".to_string(),
            }]
        );

        list.on_drag_leave();
        assert_eq!(
            queue.drain(),
            vec![RenderOp::RemoveClass {
                element_id: "finished-projects-list".to_string(),
                class: "droppable".to_string(),
            }]
        );
    }

    #[test]
    fn test_drop_moves_project() {
        let (store, _queue, list) = setup(ProjectStatus::Finished);
        store.append(project(9, ProjectStatus::Active));

        let mut transfer = DataTransfer::new();
        transfer.set_data("text/plain", "9");
        list.on_drop(&transfer);

        assert_eq!(store.projects()[0].status, ProjectStatus::Finished);
        assert_eq!(list.assigned_projects().len(), 1);
    }

    #[test]
    fn test_drop_with_garbage_payload_is_ignored() {
        let (store, _queue, list) = setup(ProjectStatus::Finished);
        store.append(project(9, ProjectStatus::Active));

        let mut transfer = DataTransfer::new();
        transfer.set_data("text/plain", "not-an-id");
        list.on_drop(&transfer);
        list.on_drop(&DataTransfer::new());

        assert_eq!(store.projects()[0].status, ProjectStatus::Active);
    }
}
