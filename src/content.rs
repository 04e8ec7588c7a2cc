//! Everything the page says about its owner. Pure data; components render it
//! in the order it is written here.

pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub github_user: &'static str,
    pub email: &'static str,
    pub linkedin_url: &'static str,
    pub copyright_year: u16,
}

impl Profile {
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_user)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Vishnu Karthik",
    greeting: "Hello, I'm",
    role: "Full Stack Developer & AI/ML Enthusiast",
    tagline: "Crafting scalable web applications and intelligent machine learning solutions with 2+ years of experience",
    github_user: "vishnukarthik29",
    email: "your.email@example.com",
    linkedin_url: "https://linkedin.com/in/yourprofile",
    copyright_year: 2024,
};

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Full Stack Web Developer and AI/ML enthusiast with over 2 years of hands-on experience building robust, scalable applications.",
    "My expertise spans the entire development lifecycle, from designing intuitive user interfaces to architecting complex backend systems and implementing intelligent machine learning models.",
    "I specialize in the MEVN stack and have successfully delivered enterprise-level solutions, including a comprehensive Custom ERP system that streamlined business operations.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Pink,
    Green,
    Blue,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Purple => "accent-purple",
            Self::Pink => "accent-pink",
            Self::Green => "accent-green",
            Self::Blue => "accent-blue",
        }
    }
}

pub struct Highlight {
    pub glyph: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub accent: Accent,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        glyph: "</>",
        title: "Full Stack",
        detail: "MEVN Stack Development",
        accent: Accent::Purple,
    },
    Highlight {
        glyph: "◎",
        title: "AI/ML",
        detail: "Machine Learning & Deep Learning",
        accent: Accent::Pink,
    },
    Highlight {
        glyph: "▤",
        title: "Database",
        detail: "MongoDB & SQL",
        accent: Accent::Blue,
    },
    Highlight {
        glyph: "▣",
        title: "Backend",
        detail: "Node.js & Express",
        accent: Accent::Green,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    AiMl,
    Tools,
}

impl SkillCategory {
    pub fn key(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::AiMl => "aiml",
            Self::Tools => "tools",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend Development",
            Self::Backend => "Backend Development",
            Self::AiMl => "AI/ML & Data Science",
            Self::Tools => "Tools & Technologies",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Self::Frontend => Accent::Purple,
            Self::Backend => Accent::Green,
            Self::AiMl => Accent::Pink,
            Self::Tools => Accent::Blue,
        }
    }
}

pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: SkillCategory::Frontend,
        skills: &[
            "React.js",
            "Vue.js",
            "JavaScript",
            "HTML5",
            "CSS3",
            "Tailwind CSS",
        ],
    },
    SkillGroup {
        category: SkillCategory::Backend,
        skills: &["Node.js", "Express.js", "MongoDB", "RESTful APIs"],
    },
    SkillGroup {
        category: SkillCategory::AiMl,
        skills: &[
            "Python",
            "TensorFlow",
            "PyTorch",
            "LSTM",
            "Scikit-learn",
            "Pandas",
            "NumPy",
        ],
    },
    SkillGroup {
        category: SkillCategory::Tools,
        skills: &["Git", "Docker", "AWS", "VS Code"],
    },
];

pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Custom ERP System",
        description: "Enterprise Resource Planning solution built with MEVN stack (MongoDB, Express.js, Vue.js, Node.js). Features include inventory management, user authentication, and real-time data analytics.",
        technologies: &["Vue.js", "Node.js", "Express.js", "MongoDB"],
        category: "Full Stack",
    },
    ProjectEntry {
        title: "Stock Price Prediction",
        description: "Advanced LSTM neural network model for predicting stock prices with time series analysis. Achieved high accuracy in forecasting market trends.",
        technologies: &["Python", "LSTM", "TensorFlow", "Pandas"],
        category: "AI/ML",
    },
    ProjectEntry {
        title: "Machine Learning Pipeline",
        description: "End-to-end ML pipeline for data preprocessing, model training, and deployment. Includes multiple classification and regression models.",
        technologies: &["Python", "Scikit-learn", "NumPy", "Flask"],
        category: "AI/ML",
    },
    ProjectEntry {
        title: "Real-time Chat Application",
        description: "Full-stack chat application with WebSocket integration for real-time messaging, user presence, and file sharing capabilities.",
        technologies: &["React.js", "Node.js", "Socket.io", "MongoDB"],
        category: "Full Stack",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    NewTab,
    SameTab,
}

pub struct ContactLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: String,
    pub target: LinkTarget,
    pub style: &'static str,
}

pub fn contact_links(profile: &Profile) -> [ContactLink; 3] {
    [
        ContactLink {
            label: "GitHub",
            glyph: "⌥",
            href: profile.github_url(),
            target: LinkTarget::NewTab,
            style: "contact-github",
        },
        ContactLink {
            label: "Email Me",
            glyph: "✉",
            href: profile.mailto(),
            target: LinkTarget::SameTab,
            style: "contact-email",
        },
        ContactLink {
            label: "LinkedIn",
            glyph: "in",
            href: profile.linkedin_url.to_string(),
            target: LinkTarget::NewTab,
            style: "contact-linkedin",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_groups_keep_authored_order() {
        let keys: Vec<&str> = SKILL_GROUPS.iter().map(|group| group.category.key()).collect();
        assert_eq!(keys, ["frontend", "backend", "aiml", "tools"]);

        let lengths: Vec<usize> = SKILL_GROUPS.iter().map(|group| group.skills.len()).collect();
        assert_eq!(lengths, [6, 4, 7, 4]);
        assert_eq!(SKILL_GROUPS[2].skills.first(), Some(&"Python"));
        assert_eq!(SKILL_GROUPS[2].skills.last(), Some(&"NumPy"));
    }

    #[test]
    fn projects_keep_authored_order() {
        let titles: Vec<&str> = PROJECTS.iter().map(|project| project.title).collect();
        assert_eq!(
            titles,
            [
                "Custom ERP System",
                "Stock Price Prediction",
                "Machine Learning Pipeline",
                "Real-time Chat Application",
            ]
        );
        assert_eq!(PROJECTS[3].technologies, ["React.js", "Node.js", "Socket.io", "MongoDB"]);
    }

    #[test]
    fn every_project_lists_technologies() {
        assert!(PROJECTS.iter().all(|project| !project.technologies.is_empty()));
    }

    #[test]
    fn contact_links_point_at_profile() {
        let links = contact_links(&PROFILE);

        assert_eq!(links[0].href, "https://github.com/vishnukarthik29");
        assert_eq!(links[1].href, "mailto:your.email@example.com");
        assert_eq!(links[1].target, LinkTarget::SameTab);
        assert_eq!(links[2].href, PROFILE.linkedin_url);
    }
}
