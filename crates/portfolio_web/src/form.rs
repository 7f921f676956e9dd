//! Project creation form extraction.
//!
//! Accepts both url-encoded and multipart bodies. Absent fields are empty
//! strings so that blank input reaches store validation instead of failing here.

use crate::error::AppError;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image_file_name: String,
}

impl ProjectForm {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "description" => self.description = value,
            "image_file_name" => self.image_file_name = value,
            _ => {}
        }
    }
}

impl<S> FromRequest<S> for ProjectForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(form) = Form::<ProjectForm>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::MalformedForm(rejection.body_text()))?;
            return Ok(form);
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedForm(rejection.body_text()))?;
        let mut form = ProjectForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| AppError::MalformedForm(err.body_text()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            let value = field
                .text()
                .await
                .map_err(|err| AppError::MalformedForm(err.body_text()))?;
            form.set_field(&name, value);
        }
        Ok(form)
    }
}
