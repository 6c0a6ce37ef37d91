//! Wizard routing. Pure functions, no rendering or IO.

use super::state::{ProfileUpdate, ScreenEvent, ScreenId};

/// The effect of one screen event: an optional profile update, then an
/// optional navigation. The wizard applies both before the next frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub update: Option<ProfileUpdate>,
    pub target: Option<ScreenId>,
}

impl Transition {
    fn go(target: ScreenId) -> Self {
        Self {
            update: None,
            target: Some(target),
        }
    }

    fn update_then_go(update: ProfileUpdate, target: ScreenId) -> Self {
        Self {
            update: Some(update),
            target: Some(target),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.update.is_none() && self.target.is_none()
    }
}

/// Route an event raised on `current`. Events outside the screen's contract
/// produce an empty transition.
pub fn route(current: ScreenId, event: ScreenEvent) -> Transition {
    use ScreenEvent::*;

    match (current, event) {
        (ScreenId::Onboarding, OnboardingComplete) => Transition::go(ScreenId::UserType),

        (ScreenId::UserType, UserTypeSelected(user_type)) => {
            Transition::update_then_go(ProfileUpdate::SetUserType(user_type), ScreenId::Quiz)
        }
        (ScreenId::UserType, Back) => Transition::go(ScreenId::Onboarding),

        (ScreenId::Quiz, QuizComplete(result)) => {
            Transition::update_then_go(ProfileUpdate::SetQuizResult(result), ScreenId::Home)
        }
        (ScreenId::Quiz, Back) => Transition::go(ScreenId::UserType),

        (ScreenId::Home, Navigate(target)) => Transition::go(target),
        (ScreenId::Home | ScreenId::Explorer, SelectCareer(career)) => Transition::update_then_go(
            ProfileUpdate::SetSelectedCareer(career),
            ScreenId::CareerDetail,
        ),

        (ScreenId::Explorer, Back) => Transition::go(ScreenId::Home),

        (ScreenId::CareerDetail, Back) => Transition::go(ScreenId::Explorer),
        (ScreenId::CareerDetail, StartRoadmap) => Transition::go(ScreenId::Roadmap),

        (ScreenId::Roadmap, Back) => Transition::go(ScreenId::CareerDetail),

        (ScreenId::Resources | ScreenId::NextSteps, Back) => Transition::go(ScreenId::Home),

        _ => Transition::default(),
    }
}
