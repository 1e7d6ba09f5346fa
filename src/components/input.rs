use crate::{
    components::Component,
    config::{AppConfig, FieldRules},
    domain::{
        validate, FieldValue, IdGenerator, Project, ProjectId, ProjectStatus, Validatable,
    },
    error::{BoardError, Result},
    render::{InsertPosition, RenderOp, RenderQueue},
    store::ProjectStore,
};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, warn};

/// Raw text of the three form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl FormInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// The "add project" form
pub struct ProjectInput {
    store: Rc<ProjectStore>,
    queue: RenderQueue,
    ids: RefCell<Box<dyn IdGenerator>>,
    rules: FieldRules,
    template_id: String,
    host_id: String,
    element_id: String,
    invalid_input_message: String,
}

impl ProjectInput {
    pub fn new(
        store: Rc<ProjectStore>,
        queue: RenderQueue,
        ids: Box<dyn IdGenerator>,
        config: &AppConfig,
    ) -> Self {
        let input = Self {
            store,
            queue,
            ids: RefCell::new(ids),
            rules: config.rules.clone(),
            template_id: config.input_template_id.clone(),
            host_id: config.host_id.clone(),
            element_id: config.form_element_id.clone(),
            invalid_input_message: config.invalid_input_message.clone(),
        };
        input.queue.extend(input.render());
        input
    }

    /// Validates the form and adds an active project to the store.
    ///
    /// On invalid input an alert is queued, nothing is added and
    /// `BoardError::InvalidUserInput` is returned.
    pub fn submit(&self, input: &FormInput) -> Result<ProjectId> {
        let (title, description, people) = self.gather_user_input(input)?;

        let id = self.ids.borrow_mut().next_id();
        let project = Project::new(id, title, description, people, ProjectStatus::Active);
        debug!(project_id = %id, "Form submitted");
        self.store.append(project);
        Ok(id)
    }

    fn gather_user_input(&self, input: &FormInput) -> Result<(String, String, f64)> {
        let people_value = FieldValue::numeric_from_text(&input.people);
        let checks = [
            Validatable::new(input.title.as_str(), self.rules.title.clone()),
            Validatable::new(input.description.as_str(), self.rules.description.clone()),
            Validatable::new(people_value.clone(), self.rules.people.clone()),
        ];

        let people = match people_value {
            FieldValue::Number(n) => n,
            FieldValue::Text(_) => f64::NAN,
        };

        if checks.iter().all(validate) {
            Ok((input.title.clone(), input.description.clone(), people))
        } else {
            warn!(
                title = %input.title,
                people = %input.people,
                "Rejected project form input"
            );
            self.queue.push(RenderOp::Alert {
                message: self.invalid_input_message.clone(),
            });
            Err(BoardError::InvalidUserInput)
        }
    }
}

impl Component for ProjectInput {
    fn mount(&self) -> RenderOp {
        RenderOp::Mount {
            template_id: self.template_id.clone(),
            host_id: self.host_id.clone(),
            element_id: self.element_id.clone(),
            position: InsertPosition::AfterBegin,
        }
    }

    fn render_content(&self) -> Vec<RenderOp> {
        Vec::new()
    }
}
