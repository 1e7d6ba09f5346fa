use project_board::{
    domain::IdStrategy, App, AppConfig, FormInput, Project, ProjectId, ProjectStatus,
    ProjectStore, RenderOp, UiEvent,
};
use std::{cell::RefCell, rc::Rc};

fn sequential_app() -> App {
    App::new(AppConfig {
        id_strategy: IdStrategy::Sequential,
        ..AppConfig::default()
    })
}

fn ids(projects: &[Project]) -> Vec<ProjectId> {
    projects.iter().map(|p| p.id).collect()
}

#[test]
fn test_build_api_moves_from_active_to_finished() {
    let mut app = sequential_app();
    app.dispatch(UiEvent::Submit(FormInput::new(
        "Build API",
        "REST service",
        "3",
    )))
    .unwrap();
    let id = ProjectId::new(1);

    assert_eq!(ids(&app.projects_in(ProjectStatus::Active)), vec![id]);
    assert!(app.projects_in(ProjectStatus::Finished).is_empty());

    assert!(app.store().set_status(id, ProjectStatus::Finished));

    assert!(app.projects_in(ProjectStatus::Active).is_empty());
    assert_eq!(ids(&app.projects_in(ProjectStatus::Finished)), vec![id]);
}

#[test]
fn test_rendered_card_content() {
    let mut app = sequential_app();
    app.take_render_ops();

    app.dispatch(UiEvent::Submit(FormInput::new("Build API", "REST service", "1")))
        .unwrap();
    let ops = app.take_render_ops();

    assert!(ops.contains(&RenderOp::SetText {
        element_id: "1".to_string(),
        selector: "h3".to_string(),
        text: "1 person assigned.".to_string(),
    }));
    // The finished list re-renders too, to an empty list
    assert!(ops.contains(&RenderOp::ClearChildren {
        element_id: "finished-projects-list".to_string()
    }));
}

#[test]
fn test_drop_on_same_list_does_not_rerender() {
    let mut app = sequential_app();
    app.dispatch(UiEvent::Submit(FormInput::new("Build API", "REST service", "3")))
        .unwrap();
    app.take_render_ops();

    app.dispatch(UiEvent::DragStart {
        project_id: ProjectId::new(1),
    })
    .unwrap();
    app.dispatch(UiEvent::Drop {
        list: ProjectStatus::Active,
    })
    .unwrap();

    let ops = app.take_render_ops();
    assert!(!ops
        .iter()
        .any(|op| matches!(op, RenderOp::ClearChildren { .. })));
}

#[test]
fn test_full_drag_cycle_render_output() {
    let mut app = sequential_app();
    app.dispatch(UiEvent::Submit(FormInput::new("Build API", "REST service", "3")))
        .unwrap();
    app.take_render_ops();

    app.dispatch(UiEvent::DragStart {
        project_id: ProjectId::new(1),
    })
    .unwrap();
    app.dispatch(UiEvent::DragOver {
        list: ProjectStatus::Finished,
    })
    .unwrap();
    app.dispatch(UiEvent::Drop {
        list: ProjectStatus::Finished,
    })
    .unwrap();
    app.dispatch(UiEvent::DragEnd).unwrap();

    let ops = app.take_render_ops();
    assert_eq!(
        ops[0],
        RenderOp::AddClass {
            element_id: "finished-projects-list".to_string(),
            class: "droppable".to_string(),
        }
    );
    // The drop clears the highlight
    assert_eq!(
        ops[1],
        RenderOp::RemoveClass {
            element_id: "finished-projects-list".to_string(),
            class: "droppable".to_string(),
        }
    );
    assert!(ops.contains(&RenderOp::Mount {
        template_id: "single-project".to_string(),
        host_id: "finished-projects-list".to_string(),
        element_id: "1".to_string(),
        position: project_board::render::InsertPosition::BeforeEnd,
    }));
}

#[test]
fn test_store_snapshot_cannot_be_corrupted_by_listener() {
    let store = ProjectStore::new();
    let seen = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&seen);
    store.subscribe(move |projects: &[Project]| {
        let mut copy = projects.to_vec();
        copy.clear();
        *counter.borrow_mut() += 1;
    });

    store.append(Project::new(
        ProjectId::new(1),
        "Build API",
        "REST service",
        3,
        ProjectStatus::Active,
    ));

    assert_eq!(*seen.borrow(), 1);
    assert_eq!(store.len(), 1);
}
