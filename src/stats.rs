use url::Url;

const THEME_PARAMS_STATS: &[(&str, &str)] = &[
    ("show_icons", "true"),
    ("theme", "tokyonight"),
    ("hide_border", "true"),
    ("bg_color", "1e293b"),
    ("title_color", "a855f7"),
    ("icon_color", "ec4899"),
    ("text_color", "e2e8f0"),
];

const THEME_PARAMS_STREAK: &[(&str, &str)] = &[
    ("theme", "tokyonight"),
    ("hide_border", "true"),
    ("background", "1e293b"),
    ("ring", "a855f7"),
    ("fire", "ec4899"),
    ("currStreakLabel", "e2e8f0"),
];

const THEME_PARAMS_TOP_LANGUAGES: &[(&str, &str)] = &[
    ("layout", "compact"),
    ("theme", "tokyonight"),
    ("hide_border", "true"),
    ("bg_color", "1e293b"),
    ("title_color", "a855f7"),
    ("text_color", "e2e8f0"),
    ("langs_count", "8"),
];

const THEME_PARAMS_TROPHIES: &[(&str, &str)] = &[
    ("theme", "tokyonight"),
    ("no-frame", "true"),
    ("no-bg", "true"),
    ("column", "4"),
    ("margin-w", "15"),
    ("margin-h", "15"),
];

const THEME_PARAMS_ACTIVITY: &[(&str, &str)] = &[
    ("theme", "tokyo-night"),
    ("hide_border", "true"),
    ("bg_color", "1e293b"),
    ("color", "a855f7"),
    ("line", "ec4899"),
    ("point", "e2e8f0"),
];

/// Where the username goes in a badge URL.
enum UserSlot {
    Query(&'static str),
    PathSegment,
}

/// Third-party GitHub badge images shown in the stats panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatBadge {
    Stats,
    Streak,
    TopLanguages,
    ContributionChart,
    Trophies,
    ActivityGraph,
}

impl StatBadge {
    pub const ALL: [StatBadge; 6] = [
        Self::Stats,
        Self::Streak,
        Self::TopLanguages,
        Self::ContributionChart,
        Self::Trophies,
        Self::ActivityGraph,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Streak => "streak",
            Self::TopLanguages => "languages",
            Self::ContributionChart => "contributions",
            Self::Trophies => "trophies",
            Self::ActivityGraph => "activity",
        }
    }

    pub fn alt(self) -> &'static str {
        match self {
            Self::Stats => "GitHub Stats",
            Self::Streak => "GitHub Streak",
            Self::TopLanguages => "Top Languages",
            Self::ContributionChart => "GitHub Contribution Chart",
            Self::Trophies => "GitHub Trophies",
            Self::ActivityGraph => "GitHub Activity Graph",
        }
    }

    pub fn heading(self) -> Option<&'static str> {
        match self {
            Self::ContributionChart => Some("Contribution Activity"),
            Self::Trophies => Some("Achievements"),
            Self::ActivityGraph => Some("Activity Graph"),
            Self::Stats | Self::Streak | Self::TopLanguages => None,
        }
    }

    /// The contribution chart animates through CSS alone.
    pub fn tracks_hover(self) -> bool {
        !matches!(self, Self::ContributionChart)
    }

    fn base(self) -> &'static str {
        match self {
            Self::Stats => "https://github-readme-stats.vercel.app/api",
            Self::Streak => "https://github-readme-streak-stats.herokuapp.com/",
            Self::TopLanguages => "https://github-readme-stats.vercel.app/api/top-langs/",
            Self::ContributionChart => "https://ghchart.rshah.org/8B5CF6/",
            Self::Trophies => "https://github-profile-trophy.vercel.app/",
            Self::ActivityGraph => "https://github-readme-activity-graph.vercel.app/graph",
        }
    }

    fn user_slot(self) -> UserSlot {
        match self {
            Self::Streak => UserSlot::Query("user"),
            Self::ContributionChart => UserSlot::PathSegment,
            Self::Stats | Self::TopLanguages | Self::Trophies | Self::ActivityGraph => {
                UserSlot::Query("username")
            }
        }
    }

    fn fixed_params(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Stats => THEME_PARAMS_STATS,
            Self::Streak => THEME_PARAMS_STREAK,
            Self::TopLanguages => THEME_PARAMS_TOP_LANGUAGES,
            Self::ContributionChart => &[],
            Self::Trophies => THEME_PARAMS_TROPHIES,
            Self::ActivityGraph => THEME_PARAMS_ACTIVITY,
        }
    }

    pub fn url(self, username: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(self.base())?;

        match self.user_slot() {
            UserSlot::Query(name) => {
                url.query_pairs_mut()
                    .append_pair(name, username)
                    .extend_pairs(self.fixed_params().iter().copied());
            }
            UserSlot::PathSegment => {
                url.path_segments_mut()
                    .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
                    .pop_if_empty()
                    .push(username);
            }
        }

        Ok(url)
    }
}
