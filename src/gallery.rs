use crate::installations::Installation;
use crate::links::JumpPosition;

pub const DESCRIPTION_FALLBACK: &str = "No description available";

/// Modal state for the installations gallery.
///
/// The modal is either closed or showing exactly one installation.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GalleryState {
    #[default]
    Closed,
    Open(Installation),
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryAction {
    Select(Installation),
    Close,
}

impl GalleryState {
    pub fn apply(self, action: GalleryAction) -> Self {
        match action {
            GalleryAction::Select(installation) => Self::Open(installation),
            GalleryAction::Close => Self::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn active(&self) -> Option<&Installation> {
        match self {
            Self::Open(installation) => Some(installation),
            Self::Closed => None,
        }
    }
}

/// Everything the modal renders for one installation.
#[derive(Clone, Debug, PartialEq)]
pub struct InstallationDetail<'a> {
    pub name: &'a str,
    pub image: &'a str,
    pub description: &'a str,
    pub studio: &'a str,
    pub position: JumpPosition,
    pub link: Option<&'a str>,
}

impl<'a> InstallationDetail<'a> {
    pub fn new(installation: &'a Installation) -> Self {
        let description = installation
            .description
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DESCRIPTION_FALLBACK);
        let link = installation
            .link
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());

        Self {
            name: &installation.name,
            image: &installation.image,
            description,
            studio: &installation.studio,
            position: JumpPosition::from_coordinates(installation.coordinates),
            link,
        }
    }

    pub fn coordinates_label(&self) -> String {
        self.position.to_string()
    }

    pub fn jump_url(&self) -> String {
        self.position.url()
    }
}
