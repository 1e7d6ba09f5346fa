use crate::{
    components::{
        drag::{DataTransfer, Draggable, DropEffect},
        Component,
    },
    domain::Project,
    render::{InsertPosition, RenderOp},
};

/// One project card inside a list
#[derive(Debug, Clone)]
pub struct ProjectItem {
    project: Project,
    host_id: String,
    template_id: String,
    drag_mime: String,
}

impl ProjectItem {
    pub fn new(
        project: Project,
        host_id: impl Into<String>,
        template_id: impl Into<String>,
        drag_mime: impl Into<String>,
    ) -> Self {
        Self {
            project,
            host_id: host_id.into(),
            template_id: template_id.into(),
            drag_mime: drag_mime.into(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    fn element_id(&self) -> String {
        self.project.id.to_string()
    }
}

impl Component for ProjectItem {
    fn mount(&self) -> RenderOp {
        RenderOp::Mount {
            template_id: self.template_id.clone(),
            host_id: self.host_id.clone(),
            element_id: self.element_id(),
            position: InsertPosition::BeforeEnd,
        }
    }

    fn render_content(&self) -> Vec<RenderOp> {
        let element_id = self.element_id();
        let text = |selector: &str, text: String| RenderOp::SetText {
            element_id: element_id.clone(),
            selector: selector.to_string(),
            text,
        };
        let style = |property: &str, value: &str| RenderOp::SetStyle {
            element_id: element_id.clone(),
            property: property.to_string(),
            value: value.to_string(),
        };

        vec![
            RenderOp::SetDraggable {
                element_id: element_id.clone(),
            },
            style("background-color", "white"),
            style("cursor", "move"),
            text("h2", self.project.title.clone()),
            text("h3", self.project.people_assigned_message()),
            text("p", self.project.description.clone()),
        ]
    }
}

impl Draggable for ProjectItem {
    fn on_drag_start(&self, transfer: &mut DataTransfer) {
        transfer.set_data(&self.drag_mime, self.project.id.to_string());
        transfer.effect_allowed = DropEffect::Move;
        tracing::debug!(project_id = %self.project.id, "Drag started");
    }

    fn on_drag_end(&self, _transfer: &DataTransfer) {}
}
