use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Redirect},
};
use log::info;

use crate::{
    error::AppError,
    form::ProjectForm,
    legacy::LegacyPage,
    state::AppState,
    templates::{
        render, AboutTemplate, AddProjectTemplate, ContactTemplate, HomeTemplate,
        ProjectsTemplate, ResumeTemplate, ThankYouTemplate,
    },
};

pub async fn home_handler() -> Result<Html<String>, AppError> {
    render(&HomeTemplate)
}

pub async fn about_handler() -> Result<Html<String>, AppError> {
    render(&AboutTemplate)
}

pub async fn resume_handler() -> Result<Html<String>, AppError> {
    render(&ResumeTemplate)
}

pub async fn contact_handler() -> Result<Html<String>, AppError> {
    render(&ContactTemplate)
}

pub async fn thankyou_handler() -> Result<Html<String>, AppError> {
    render(&ThankYouTemplate)
}

pub async fn projects_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let projects = state.with_store(|store| store.list_all()).await?;
    render(&ProjectsTemplate { projects })
}

pub async fn new_project_form_handler() -> Result<Html<String>, AppError> {
    render(&AddProjectTemplate)
}

pub async fn create_project_handler(
    State(state): State<Arc<AppState>>,
    form: ProjectForm,
) -> Result<Redirect, AppError> {
    let id = state
        .with_store(move |store| {
            store.insert(&form.title, &form.description, &form.image_file_name)
        })
        .await?;

    info!("event=project_create module=web status=ok project_id={id}");
    Ok(Redirect::to("/projects"))
}

pub async fn legacy_handler(Path(page): Path<String>) -> impl IntoResponse {
    let target = LegacyPage::from_file_name(&page).target_path();
    (StatusCode::FOUND, [(LOCATION, target)])
}
