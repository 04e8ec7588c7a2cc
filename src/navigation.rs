use serde_json::json;

use crate::logging::{LogLevel, Logger};

/// Vertical offset past which the navigation bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Navigation bar order.
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn next(self) -> Option<Self> {
        let index = Self::ALL.iter().position(|section| *section == self)?;
        Self::ALL.get(index + 1).copied()
    }
}

pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    Navigate(Section),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Section,
    pub scrolled: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Section::Home,
            scrolled: false,
        }
    }
}

impl NavigationState {
    pub fn apply(&self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(offset) => Self {
                scrolled: is_past_threshold(offset),
                ..*self
            },
            NavAction::Navigate(section) => Self {
                active: section,
                ..*self
            },
        }
    }
}

/// Moves the viewport to a document anchor. Returns `false` when no element
/// carries `anchor_id`.
pub trait AnchorScroller {
    fn scroll_into_view(&self, anchor_id: &str) -> bool;
}

pub struct SectionNavigator<S> {
    scroller: S,
    logger: Logger,
}

impl<S: AnchorScroller> SectionNavigator<S> {
    pub fn new(scroller: S, logger: Logger) -> Self {
        Self { scroller, logger }
    }

    /// Starts the scroll and returns the state change to dispatch. The change
    /// is returned even when the anchor is missing.
    pub fn go_to(&self, section: Section) -> NavAction {
        if !self.scroller.scroll_into_view(section.anchor_id()) {
            self.logger.event(
                LogLevel::Debug,
                "section_anchor_missing",
                json!({ "section": section.anchor_id() }),
            );
        }

        NavAction::Navigate(section)
    }
}
