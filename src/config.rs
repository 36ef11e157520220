use chrono::{DateTime, Datelike, Utc};

use crate::contact::RelayConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub initials: &'static str,
    pub contact_email: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub resume_href: &'static str,
    pub socials: Vec<SocialLink>,
    pub roles: Vec<&'static str>,
    pub profile_images: Vec<&'static str>,
    pub skills: Vec<SkillGroup>,
    pub relay: Option<RelayConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Charlie Shane Rivera",
            initials: "CSR",
            contact_email: "your.email@example.com",
            tagline: "Crafting digital experiences that blend innovative technology with artistic vision. \
                      I build interactive applications, create stunning visuals, and solve problems.",
            about: "I am a passionate and driven software developer with a strong foundation in front-end \
                    and back-end technologies. I thrive on challenges and am constantly learning. When I'm \
                    not coding, I enjoy exploring digital art, contributing to open-source projects, and gaming.",
            resume_href: "/resume.pdf",
            socials: vec![
                SocialLink {
                    label: "GitHub",
                    href: "https://github.com/Rivera/C598",
                },
                SocialLink {
                    label: "LinkedIn",
                    href: "https://ph.linkedin.com/in/charlie-shane-rivera-5071081bb",
                },
                SocialLink {
                    label: "ArtStation",
                    href: "https://www.artstation.com/rvrcharles",
                },
            ],
            roles: vec!["Full-Stack Developer", "Digital Artist", "Problem Solver"],
            profile_images: vec![
                "/assets/profile/profile-1.png",
                "/assets/profile/profile-2.jpg",
            ],
            skills: vec![
                SkillGroup {
                    name: "Technical",
                    skills: vec![
                        Skill { name: "JavaScript", icon: "💻" },
                        Skill { name: "React", icon: "⚛️" },
                        Skill { name: "Node.js", icon: "🚀" },
                        Skill { name: "Python", icon: "🐍" },
                        Skill { name: "Firebase", icon: "🔥" },
                        Skill { name: "SQL", icon: "💾" },
                    ],
                },
                SkillGroup {
                    name: "Creative",
                    skills: vec![
                        Skill { name: "UI/UX Design", icon: "🎨" },
                        Skill { name: "Figma", icon: "✒️" },
                        Skill { name: "Photoshop", icon: "🖌️" },
                        Skill { name: "Illustration", icon: "✏️" },
                    ],
                },
            ],
            relay: RelayConfig::from_env(),
        }
    }
}

impl SiteConfig {
    /// Year shown in the footer copyright line.
    pub fn copyright_year(&self) -> i32 {
        build_year(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
    }
}

fn build_year(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year() {
        assert_eq!(build_year("2025-03-14T09:26:53+00:00"), Some(2025));
        assert_eq!(build_year("2024-12-31T23:30:00-02:00"), Some(2025));
        assert_eq!(build_year("yesterday"), None);
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.roles.len(), 3);
        assert!(config.profile_images.len() > 1);
        assert!(config.skills.iter().all(|g| !g.skills.is_empty()));
        assert!(config.copyright_year() >= 2024);
    }
}
