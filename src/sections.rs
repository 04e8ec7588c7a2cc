use serde_json::json;
use yew::prelude::*;

use crate::content::{
    contact_links, LinkTarget, ABOUT_PARAGRAPHS, HIGHLIGHTS, PROFILE, PROJECTS, SKILL_GROUPS,
};
use crate::logging::{LogLevel, Logger};
use crate::navigation::Section;
use crate::stats::StatBadge;

pub const LOGGER: Logger = Logger::new(if cfg!(debug_assertions) {
    LogLevel::Debug
} else {
    LogLevel::Info
});

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.anchor_id()} class="section">
            <div class="container">
                <h2 class="section-title">{"About Me"}</h2>
                <div class="about-grid">
                    <div class="about-copy">
                        { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </div>
                    <div class="highlight-grid">
                        { for HIGHLIGHTS.iter().map(|highlight| html! {
                            <div key={highlight.title} class={classes!("card", "highlight", highlight.accent.class())}>
                                <span class="highlight-glyph" aria-hidden="true">{highlight.glyph}</span>
                                <h3>{highlight.title}</h3>
                                <p class="muted">{highlight.detail}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id={Section::Skills.anchor_id()} class="section section-tinted">
            <div class="container">
                <h2 class="section-title">{"Technical Skills"}</h2>
                <div class="card-grid">
                    { for SKILL_GROUPS.iter().map(|group| {
                        let accent = group.category.accent().class();
                        html! {
                            <div key={group.category.key()} class={classes!("card", "skill-card", accent)}>
                                <h3 class="card-heading">{group.category.title()}</h3>
                                <ul class="chip-list">
                                    { for group.skills.iter().map(|skill| html! {
                                        <li key={*skill} class="chip">{*skill}</li>
                                    }) }
                                </ul>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id={Section::Projects.anchor_id()} class="section">
            <div class="container">
                <h2 class="section-title">{"Featured Projects"}</h2>
                <div class="card-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <article key={project.title} class="card project-card">
                            <div class="project-header">
                                <h3>{project.title}</h3>
                                <span class="badge">{project.category}</span>
                            </div>
                            <p class="muted">{project.description}</p>
                            <ul class="chip-list">
                                { for project.technologies.iter().map(|tech| html! {
                                    <li key={*tech} class="chip chip-small">{*tech}</li>
                                }) }
                            </ul>
                        </article>
                    }) }
                </div>
                <div class="centered">
                    <a
                        class="button button-gradient"
                        href={PROFILE.github_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span aria-hidden="true">{"↗"}</span>
                        {"View More on GitHub"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(GithubStats)]
pub fn github_stats() -> Html {
    let hovered = use_state(|| None::<StatBadge>);

    let panels = StatBadge::ALL.iter().filter_map(|&badge| {
        let src = match badge.url(PROFILE.github_user) {
            Ok(url) => url.to_string(),
            Err(error) => {
                LOGGER.event(
                    LogLevel::Warn,
                    "stat_badge_url_invalid",
                    json!({ "badge": badge.key(), "error": error.to_string() }),
                );
                return None;
            }
        };

        let (onmouseenter, onmouseleave) = if badge.tracks_hover() {
            let enter = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(Some(badge)))
            };
            let leave = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(None))
            };
            (Some(enter), Some(leave))
        } else {
            (None, None)
        };

        let is_hovered = *hovered == Some(badge);

        Some(html! {
            <div
                key={badge.key()}
                class={classes!("card", "stat-panel", format!("stat-{}", badge.key()))}
                onmouseenter={onmouseenter}
                onmouseleave={onmouseleave}
            >
                if let Some(heading) = badge.heading() {
                    <h3 class="card-heading centered">{heading}</h3>
                }
                <img
                    class={classes!("stat-image", is_hovered.then_some("is-hovered"))}
                    src={src}
                    alt={badge.alt()}
                    loading="lazy"
                />
            </div>
        })
    });

    html! {
        <section class="section">
            <div class="container">
                <h2 class="section-title">{"GitHub Stats"}</h2>
                <p class="section-subtitle">{"My coding journey and contributions"}</p>
                <div class="stats-grid">
                    { for panels }
                </div>
                <div class="centered">
                    <a
                        class="text-link"
                        href={PROFILE.github_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"View Full GitHub Profile"}
                        <span class="external-mark" aria-hidden="true">{"↗"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.anchor_id()} class="section section-tinted">
            <div class="container narrow centered">
                <h2 class="section-title">{"Let's Connect"}</h2>
                <p class="section-subtitle">
                    {"I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."}
                </p>
                <div class="contact-links">
                    { for contact_links(&PROFILE).into_iter().map(|link| {
                        let (target, rel) = match link.target {
                            LinkTarget::NewTab => (Some("_blank"), Some("noopener noreferrer")),
                            LinkTarget::SameTab => (None, None),
                        };
                        html! {
                            <a key={link.label} class={classes!("button", link.style)} href={link.href} target={target} rel={rel}>
                                <span aria-hidden="true">{link.glyph}</span>
                                <span>{link.label}</span>
                            </a>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{format!("© {} {}. Built with Rust & Yew", PROFILE.copyright_year, PROFILE.name)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render<C: BaseComponent<Properties = ()>>() -> String {
        tokio::task::LocalSet::new()
            .run_until(yew::LocalServerRenderer::<C>::new().render())
            .await
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| html.find(needle).expect("rendered text present"))
            .collect()
    }

    fn is_ascending(values: &[usize]) -> bool {
        values.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[tokio::test]
    async fn skills_render_one_card_per_group_in_order() {
        let html = render::<Skills>().await;

        assert_eq!(html.matches("skill-card").count(), SKILL_GROUPS.len());

        let total_skills: usize = SKILL_GROUPS.iter().map(|group| group.skills.len()).sum();
        assert_eq!(html.matches("class=\"chip\"").count(), total_skills);

        let first_skills: Vec<&str> = SKILL_GROUPS
            .iter()
            .filter_map(|group| group.skills.first().copied())
            .collect();
        assert!(is_ascending(&positions(&html, &first_skills)));
    }

    #[tokio::test]
    async fn projects_render_one_card_per_entry_in_order() {
        let html = render::<Projects>().await;

        assert_eq!(html.matches("project-card").count(), PROJECTS.len());

        let titles: Vec<&str> = PROJECTS.iter().map(|project| project.title).collect();
        assert!(is_ascending(&positions(&html, &titles)));

        let total_technologies: usize = PROJECTS.iter().map(|project| project.technologies.len()).sum();
        assert_eq!(html.matches("chip chip-small").count(), total_technologies);
    }

    #[tokio::test]
    async fn section_anchors_are_rendered() {
        assert!(render::<About>().await.contains("id=\"about\""));
        assert!(render::<Skills>().await.contains("id=\"skills\""));
        assert!(render::<Projects>().await.contains("id=\"projects\""));
        assert!(render::<Contact>().await.contains("id=\"contact\""));
    }

    #[tokio::test]
    async fn stats_panel_renders_every_badge() {
        let html = render::<GithubStats>().await;

        assert_eq!(html.matches("stat-panel").count(), StatBadge::ALL.len());
        assert!(html.contains("ghchart.rshah.org/8B5CF6/vishnukarthik29"));
        assert!(!html.contains("is-hovered"));
    }

    #[tokio::test]
    async fn contact_links_render_mailto_in_same_tab() {
        let html = render::<Contact>().await;

        assert_eq!(html.matches("class=\"button contact-").count(), 3);
        assert!(html.contains("href=\"mailto:your.email@example.com\""));
    }
}
