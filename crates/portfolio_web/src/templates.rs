//! Compile-time HTML templates, one per page.

use crate::error::AppError;
use askama::Template;
use axum::response::Html;
use portfolio_core::Project;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumeTemplate;

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "add_project.html")]
pub struct AddProjectTemplate;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

#[derive(Template)]
#[template(path = "thankyou.html")]
pub struct ThankYouTemplate;

pub fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
