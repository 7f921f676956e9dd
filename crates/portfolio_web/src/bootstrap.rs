//! Startup sequencing that must finish before the first request.
//!
//! # Invariants
//! - Order is fixed: schema init, asset directory, demo seeding.
//! - Seeding only happens when the store holds zero projects.

use crate::config::WebConfig;
use log::{debug, info};
use portfolio_core::{ProjectStore, RepoError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("failed to prepare project store: {0}")]
    Store(#[from] RepoError),

    #[error("failed to create image directory `{path}`: {source}")]
    ImagesDir { path: PathBuf, source: io::Error },

    #[error("failed to bind {address}: {source}")]
    Bind { address: String, source: io::Error },

    #[error("server error: {0}")]
    Serve(io::Error),
}

/// A demonstration record inserted into an empty store.
#[derive(Debug, Clone, Copy)]
pub struct DemoProject {
    pub title: &'static str,
    pub description: &'static str,
    pub image_file_name: &'static str,
}

pub const DEMO_PROJECTS: [DemoProject; 2] = [
    DemoProject {
        title: "Real-Time Geofencing System for Airport Ground Vehicle Safety",
        description: "Developed and published a real-time ground vehicle monitoring system using GPS and geofencing technology, enabling location tracking and automated alerts to prevent collisions between support vehicles and aircraft in airport environments.",
        image_file_name: "Project_1_image2.png",
    },
    DemoProject {
        title: "Analysis of Skin Diseases using Transform-based Techniques",
        description: "Utilized MATLAB, Image Processing methods and Transform methods like FFT and DCT for classification of diseases detected in skin images. Developed algorithms for automated detection and analysis of dermatological conditions.",
        image_file_name: "Project_2_image2.png",
    },
];

/// Runs the startup sequence and returns a ready store.
pub fn prepare_store(config: &WebConfig) -> Result<ProjectStore, StartupError> {
    let store = ProjectStore::new(config.store_config());
    store.initialize()?;

    std::fs::create_dir_all(&config.images_dir).map_err(|source| StartupError::ImagesDir {
        path: config.images_dir.clone(),
        source,
    })?;

    if config.seed_demo_projects {
        seed_demo_projects_if_empty(&store)?;
    } else {
        debug!("event=seed_demo module=bootstrap status=skipped reason=disabled");
    }

    Ok(store)
}

/// Inserts `DEMO_PROJECTS` when the store is empty. Returns how many were added.
///
/// Image names are stored exactly as listed; files under the images
/// directory are never consulted.
pub fn seed_demo_projects_if_empty(store: &ProjectStore) -> Result<usize, RepoError> {
    let existing = store.count()?;
    if existing > 0 {
        debug!("event=seed_demo module=bootstrap status=skipped existing={existing}");
        return Ok(0);
    }

    for demo in DEMO_PROJECTS {
        store.insert(demo.title, demo.description, demo.image_file_name)?;
    }

    info!(
        "event=seed_demo module=bootstrap status=ok inserted={}",
        DEMO_PROJECTS.len()
    );
    Ok(DEMO_PROJECTS.len())
}
