use crate::{
    domain::{Project, ProjectId, ProjectStatus},
    store::ListenerRegistry,
};
use std::cell::RefCell;
use tracing::debug;

/// The single authoritative list of projects
///
/// Built once at startup and shared (`Rc`) with the form and the lists.
/// Projects stay in insertion order and are never removed. Every change is
/// followed by a notification carrying a copy of the whole list.
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: ListenerRegistry<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: RefCell::new(Vec::new()),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Returns a copy of all projects in insertion order
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    /// Returns a copy of the first project with the given id
    pub fn find(&self, id: ProjectId) -> Option<Project> {
        self.projects.borrow().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Registers a listener for every future change
    pub fn subscribe(&self, listener: impl FnMut(&[Project]) + 'static) {
        self.listeners.add(Box::new(listener));
        debug!(listeners = self.listeners.len(), "Store listener registered");
    }

    /// Adds a project to the end and notifies listeners
    pub fn append(&self, project: Project) {
        debug!(project_id = %project.id, status = %project.status, "Appending project");
        self.projects.borrow_mut().push(project);
        self.notify();
    }

    /// Moves the first project with `id` to `status`.
    ///
    /// Returns false, without notifying, when no project has that id or it
    /// already has that status.
    pub fn set_status(&self, id: ProjectId, status: ProjectStatus) -> bool {
        let changed = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|p| p.id == id) {
                Some(project) if project.status != status => {
                    project.status = status;
                    true
                }
                _ => false,
            }
        };

        if changed {
            debug!(project_id = %id, status = %status, "Project status changed");
            self.notify();
        } else {
            debug!(project_id = %id, status = %status, "Status change ignored");
        }
        changed
    }

    fn notify(&self) {
        self.listeners.notify_with(|| self.projects());
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
