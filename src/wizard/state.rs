//! Wizard state: which screen is active and what we know about the user.
//!
//! Data only. Routing between screens lives in `logic.rs`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::catalog::Career;

/// Name shown until the quiz supplies a real one.
pub const DEFAULT_NAME: &str = "User";

// ── Screens ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Onboarding,
    UserType,
    Quiz,
    Home,
    Explorer,
    CareerDetail,
    Roadmap,
    Resources,
    NextSteps,
}

pub const ALL_SCREENS: [ScreenId; 9] = [
    ScreenId::Onboarding,
    ScreenId::UserType,
    ScreenId::Quiz,
    ScreenId::Home,
    ScreenId::Explorer,
    ScreenId::CareerDetail,
    ScreenId::Roadmap,
    ScreenId::Resources,
    ScreenId::NextSteps,
];

impl ScreenId {
    pub fn tag(self) -> &'static str {
        match self {
            ScreenId::Onboarding => "onboarding",
            ScreenId::UserType => "userType",
            ScreenId::Quiz => "quiz",
            ScreenId::Home => "home",
            ScreenId::Explorer => "explorer",
            ScreenId::CareerDetail => "careerDetail",
            ScreenId::Roadmap => "roadmap",
            ScreenId::Resources => "resources",
            ScreenId::NextSteps => "nextSteps",
        }
    }

    /// Title bar text.
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Onboarding => "Welcome",
            ScreenId::UserType => "About You",
            ScreenId::Quiz => "Career Quiz",
            ScreenId::Home => "Dashboard",
            ScreenId::Explorer => "Explore Careers",
            ScreenId::CareerDetail => "Career Details",
            ScreenId::Roadmap => "Your Roadmap",
            ScreenId::Resources => "Study Resources",
            ScreenId::NextSteps => "Next Steps",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ScreenIdError {
    #[error("unknown screen: {0:?}")]
    Unknown(String),
}

impl FromStr for ScreenId {
    type Err = ScreenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SCREENS
            .iter()
            .copied()
            .find(|id| id.tag() == s)
            .ok_or_else(|| ScreenIdError::Unknown(s.to_string()))
    }
}

/// Holds the active screen. Last write wins; there is no history.
#[derive(Debug)]
pub struct Navigator {
    current: ScreenId,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: ScreenId::Onboarding,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Replace the active screen. Returns whether it changed.
    pub fn navigate_to(&mut self, target: ScreenId) -> bool {
        let changed = self.current != target;
        self.current = target;
        changed
    }
}

// ── Profile ───────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CareerSelection {
    #[default]
    NoSelection,
    Selected(Career),
}

impl CareerSelection {
    pub fn career(&self) -> Option<&Career> {
        match self {
            CareerSelection::NoSelection => None,
            CareerSelection::Selected(career) => Some(career),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: String,
    pub user_type: String,
    pub interests: Vec<String>,
    pub selected_career: CareerSelection,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            user_type: String::new(),
            interests: Vec::new(),
            selected_career: CareerSelection::NoSelection,
        }
    }
}

/// A partial profile. `None` fields are left alone by [`Profile::merge`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub user_type: Option<String>,
    pub interests: Option<Vec<String>>,
    pub selected_career: Option<CareerSelection>,
}

/// What the quiz hands back when it is finished.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizResult {
    pub name: String,
    pub interests: Vec<String>,
}

/// The updates screens are allowed to request.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileUpdate {
    SetUserType(String),
    SetQuizResult(QuizResult),
    SetSelectedCareer(Career),
}

// ── Screen events ─────────────────────────────────────────────

/// What a screen reports back to the wizard. Which events a screen may emit
/// is fixed per screen; the router ignores the rest.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenEvent {
    OnboardingComplete,
    UserTypeSelected(String),
    QuizComplete(QuizResult),
    Navigate(ScreenId),
    SelectCareer(Career),
    StartRoadmap,
    Back,
}

impl From<ProfileUpdate> for ProfilePatch {
    fn from(update: ProfileUpdate) -> Self {
        match update {
            ProfileUpdate::SetUserType(user_type) => ProfilePatch {
                user_type: Some(user_type),
                ..Default::default()
            },
            ProfileUpdate::SetQuizResult(QuizResult { name, interests }) => ProfilePatch {
                name: Some(name),
                interests: Some(interests),
                ..Default::default()
            },
            ProfileUpdate::SetSelectedCareer(career) => ProfilePatch {
                selected_career: Some(CareerSelection::Selected(career)),
                ..Default::default()
            },
        }
    }
}

impl Profile {
    /// Shallow merge: present fields replace, absent fields stay.
    pub fn merge(self, patch: ProfilePatch) -> Profile {
        Profile {
            name: patch.name.unwrap_or(self.name),
            user_type: patch.user_type.unwrap_or(self.user_type),
            interests: patch.interests.unwrap_or(self.interests),
            selected_career: patch.selected_career.unwrap_or(self.selected_career),
        }
    }

    pub fn apply(self, update: ProfileUpdate) -> Profile {
        self.merge(update.into())
    }
}
