use serde::Serialize;

use crate::hover::ProjectId;

pub const NAME: &str = "Barripati Chandrika";
pub const INITIALS: &str = "BC";
pub const TAGLINE: &str = "Data Analyst & UI/UX Enthusiast";
pub const BIO: &str = "I'm a passionate developer with a keen eye for creating beautiful and functional web applications. I specialize in React, Node.js, and modern web technologies, always striving to build exceptional user experiences.";
pub const PROFILE_IMAGE: &str = "/chandupic.jpg";
pub const PROFILE_EMAIL: &str = "chandrikabarripati@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/Chandrika205";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/chandrika-barripati/";
pub const CONTACT_BLURB: &str = "I'm always open to discussing new projects, creative ideas or opportunities to be part of your visions.";
// "Get In Touch" target; the footer shows PROFILE_EMAIL instead.
pub const CONTACT_EMAIL: &str = "contact@example.com";
pub const COPYRIGHT_YEAR: u16 = 2024;
pub const PROJECT_IMAGE: &str = "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&auto=format&fit=crop&q=80";

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Label shown in the navbar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    /// Anchor id of the rendered section.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Github,
    Linkedin,
    Mail,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    /// Profile URL, or the bare address for `Mail`.
    pub target: &'static str,
}

impl SocialLink {
    pub fn href(self) -> String {
        match self.kind {
            SocialKind::Mail => mailto(self.target),
            SocialKind::Github | SocialKind::Linkedin => self.target.to_string(),
        }
    }
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::Github,
        label: "GitHub Profile",
        target: GITHUB_URL,
    },
    SocialLink {
        kind: SocialKind::Linkedin,
        label: "LinkedIn Profile",
        target: LINKEDIN_URL,
    },
    SocialLink {
        kind: SocialKind::Mail,
        label: "Email",
        target: PROFILE_EMAIL,
    },
];

#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: &'static str,
    pub image: &'static str,
    pub code_url: &'static str,
    pub demo_url: &'static str,
}

pub fn projects() -> Vec<Project> {
    ProjectId::all()
        .map(|id| Project {
            id,
            title: format!("Project Title {id}"),
            description: "A brief description of the project and the technologies used.",
            image: PROJECT_IMAGE,
            code_url: "#",
            demo_url: "#",
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
}

pub const EXPERIENCE: [ExperienceEntry; 3] = [
    ExperienceEntry {
        period: "Oct 2024 - Present",
        title: "Chief Placement Coordinator",
        company: "Institute of Aeronautical Engineering",
    },
    ExperienceEntry {
        period: "Jul 2023 - Mar 2024",
        title: "Deputy Chief Technology Officer",
        company: "e-DAM",
    },
    ExperienceEntry {
        period: "May 2023 - Jul 2023",
        title: "Web Content Writer",
        company: "Aveha Solutions Pvt Ltd",
    },
];

/// Entrance delay of a timeline row, in seconds.
pub fn experience_delay(index: usize) -> f64 {
    index as f64 * 0.2
}

/// Inline style carrying the row delay. Only the entrance transition reads
/// `--reveal-delay`, so hovering a row responds immediately.
pub fn experience_delay_style(index: usize) -> String {
    format!("--reveal-delay: {}s", experience_delay(index))
}

#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
}

/// schema.org `Person` document embedded in the page head.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub job_title: &'static str,
    pub email: String,
    pub image: &'static str,
    pub same_as: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub works_for: Option<Organization>,
}

pub fn person() -> Person {
    Person {
        context: "https://schema.org",
        kind: "Person",
        name: NAME,
        job_title: TAGLINE,
        email: mailto(PROFILE_EMAIL),
        image: PROFILE_IMAGE,
        same_as: SOCIAL_LINKS
            .iter()
            .filter(|s| s.kind != SocialKind::Mail)
            .map(|s| s.target)
            .collect(),
        works_for: EXPERIENCE.first().map(|e| Organization {
            kind: "Organization",
            name: e.company,
        }),
    }
}

/// JSON-LD script body for the page head. Empty if serialization fails.
pub fn person_json_ld() -> String {
    serde_json::to_string(&person()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::section_id;

    #[test]
    fn test_section_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "about", "projects", "experience", "contact"]);
    }

    #[test]
    fn test_nav_labels_resolve_to_ids() {
        for section in Section::ALL {
            assert_eq!(section_id(section.label()), section.id());
        }
        assert_eq!(section_id(Section::Projects.label()), "projects");
    }

    #[test]
    fn test_projects() {
        let projects = projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].title, "Project Title 1");
        assert_eq!(projects[2].id.get(), 3);
        assert!(projects.iter().all(|p| p.image.starts_with("https://")));
    }

    #[test]
    fn test_experience_delays() {
        assert_eq!(experience_delay(0), 0.0);
        assert!((experience_delay(2) - 0.4).abs() < 1e-9);
        assert_eq!(EXPERIENCE[0].period, "Oct 2024 - Present");
    }

    #[test]
    fn test_delay_style_sets_only_custom_property() {
        assert_eq!(experience_delay_style(0), "--reveal-delay: 0s");
        assert_eq!(experience_delay_style(1), "--reveal-delay: 0.2s");
        assert!(!experience_delay_style(2).contains("transition-delay"));
    }

    #[test]
    fn test_contact_emails_differ() {
        assert_ne!(CONTACT_EMAIL, PROFILE_EMAIL);
        let mail = SOCIAL_LINKS
            .iter()
            .find(|s| s.kind == SocialKind::Mail)
            .expect("mail link should exist");
        assert_eq!(mail.target, PROFILE_EMAIL);
        assert_eq!(mail.href(), "mailto:chandrikabarripati@gmail.com");
    }

    #[test]
    fn test_profile_links_are_used_verbatim() {
        let hrefs: Vec<String> = SOCIAL_LINKS
            .iter()
            .filter(|s| s.kind != SocialKind::Mail)
            .map(|s| s.href())
            .collect();
        assert_eq!(hrefs, vec![GITHUB_URL, LINKEDIN_URL]);
        assert!(SOCIAL_LINKS.iter().all(|s| s.href().contains(s.target)));
    }

    #[test]
    fn test_person_json_ld() {
        let doc = serde_json::to_value(person()).unwrap();
        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@type"], "Person");
        assert_eq!(doc["jobTitle"], TAGLINE);
        assert_eq!(doc["name"], NAME);
        assert_eq!(doc["sameAs"].as_array().map(Vec::len), Some(2));
        assert_eq!(doc["worksFor"]["name"], "Institute of Aeronautical Engineering");
        let rendered = person_json_ld();
        assert!(rendered.starts_with('{'));
        assert!(rendered.contains("\"sameAs\""));
    }
}
