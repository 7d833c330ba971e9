use crate::model::{IconRef, ProjectEntry, Profile, SkillEntry};

/// Everything the page shows. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub profile: Profile,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillEntry>,
}

impl Content {
    pub fn new(profile: Profile, projects: Vec<ProjectEntry>, skills: Vec<SkillEntry>) -> Self {
        Self {
            profile,
            projects,
            skills,
        }
    }

    /// The portfolio shipped with the binary.
    pub fn portfolio() -> Self {
        Self::new(profile(), projects(), skills())
    }

    /// Titles of projects that have no feature lines.
    pub fn projects_without_features(&self) -> impl Iterator<Item = &str> {
        self.projects
            .iter()
            .filter(|p| p.features.is_empty())
            .map(|p| p.title.as_str())
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::portfolio()
    }
}

fn profile() -> Profile {
    Profile {
        name: "Samuel Michnik".to_string(),
        title: "Software Developer | Web Technologies Specialist".to_string(),
        bio: "I create innovative solutions that combine modern web frameworks with AI to solve real-world problems.".to_string(),
        socials: vec![IconRef::GitHub, IconRef::LinkedIn],
    }
}

fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry::new(
            "ClarityAI",
            "A sophisticated task management platform powered by artificial intelligence.",
            [
                "Built with Next.js and OpenAI API",
                "Secure payment processing via Stripe",
                "Deployed and optimized on Vercel",
                "Smart task organization using AI",
            ],
        ),
        ProjectEntry::new(
            "MoodBot",
            "An intelligent Discord bot that promotes positive online communities.",
            [
                "Smart message moderation system",
                "Automatic toxic content detection",
                "Conflict de-escalation capabilities",
                "Award-winning project",
            ],
        )
        .award(),
        ProjectEntry::new(
            "Ingredibud",
            "Your personal AI cooking assistant that makes meal planning effortless.",
            [
                "Customized recipe recommendations",
                "Support for dietary restrictions",
                "Cuisine and ingredient filtering",
                "Intelligent substitution suggestions",
            ],
        ),
    ]
}

fn skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry::new("Next.js", IconRef::NextJs),
        SkillEntry::new("React", IconRef::React),
        SkillEntry::new("OpenAI", IconRef::OpenAi),
        SkillEntry::new("Vercel", IconRef::Vercel),
        SkillEntry::new("Stripe", IconRef::Stripe),
        SkillEntry::new("Discord", IconRef::Discord),
        SkillEntry::new("Node.js", IconRef::NodeJs),
    ]
}
