//! Old `/templates/<file>.html` links mapped onto current routes.

/// Pages reachable through a legacy template path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyPage {
    Index,
    About,
    Resume,
    Projects,
    AddProject,
    Contact,
    ThankYou,
}

impl LegacyPage {
    /// Unknown names fall back to the home page.
    pub fn from_file_name(name: &str) -> Self {
        match name {
            "index.html" => Self::Index,
            "about.html" => Self::About,
            "resume.html" => Self::Resume,
            "projects.html" => Self::Projects,
            "add_project.html" => Self::AddProject,
            "contact.html" => Self::Contact,
            "thankyou.html" => Self::ThankYou,
            _ => Self::Index,
        }
    }

    pub fn target_path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::About => "/about",
            Self::Resume => "/resume",
            Self::Projects => "/projects",
            Self::AddProject => "/add_project",
            Self::Contact => "/contact",
            Self::ThankYou => "/thankyou",
        }
    }
}
