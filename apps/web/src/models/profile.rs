//! The site owner's resume as typed, compile-time content.
//!
//! Everything rendered on the index page comes from [`OWNER`]. The E2E suite
//! checks the rendered DOM against these same literals, so editing a value
//! here is the only change needed to update the page.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A calendar month, the granularity used on the resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        YearMonth { year, month }
    }

    /// Formats as `"Jun 2023"`. Invalid months fall back to `"2023-13"`.
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%b %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }

    pub fn is_valid(&self) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).is_some()
    }
}

/// Start and optional end month of a position. `end: None` means current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub start: YearMonth,
    pub end: Option<YearMonth>,
}

impl Timeline {
    pub fn label(&self) -> String {
        let end = self
            .end
            .map(|m| m.label())
            .unwrap_or_else(|| "Present".to_string());
        format!("{} - {}", self.start.label(), end)
    }
}

/// Templates see the timeline as its display label.
impl Serialize for Timeline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub title: &'static str,
    pub timeline: Timeline,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactLink {
    pub text: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub intro: &'static [&'static str],
    pub experience: &'static [Job],
    pub skills: &'static [SkillGroup],
    pub contacts: &'static [ContactLink],
    pub cv_url: &'static str,
}

pub const EXPERIENCE_HEADING: &str = "Experience";
pub const CONTACT_HEADING: &str = "Contact";

impl Profile {
    pub fn owner() -> &'static Profile {
        &OWNER
    }

    pub fn skill_group(&self, heading: &str) -> Option<&SkillGroup> {
        self.skills.iter().find(|g| g.heading == heading)
    }

    /// Every `h4` heading on the index page, in document order.
    pub fn section_headings(&self) -> Vec<&'static str> {
        std::iter::once(EXPERIENCE_HEADING)
            .chain(self.skills.iter().map(|g| g.heading))
            .chain(std::iter::once(CONTACT_HEADING))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content
// ────────────────────────────────────────────────────────────────────────────

static OWNER: Profile = Profile {
    name: "David Scheuermann",
    tagline: "Software Developer",
    intro: &["My name is David Scheuermann", "I am a software developer."],
    experience: &[
        Job {
            title: "Software Developer",
            timeline: Timeline {
                start: YearMonth::new(2023, 6),
                end: None,
            },
            bullets: &[
                "Build serverless back ends on AWS Lambda, API Gateway and DynamoDB",
                "Develop retrieval-augmented chat features with LangChain and Bedrock",
                "Maintain React and Next.js front ends for internal tools",
            ],
        },
        Job {
            title: "Automation Developer",
            timeline: Timeline {
                start: YearMonth::new(2021, 2),
                end: Some(YearMonth::new(2023, 5)),
            },
            bullets: &[
                "Automated finance and HR workflows with Automation Anywhere",
                "Built Power Apps and Power Automate flows replacing manual spreadsheets",
            ],
        },
        Job {
            title: "Business Intelligence Analyst",
            timeline: Timeline {
                start: YearMonth::new(2019, 8),
                end: Some(YearMonth::new(2021, 1)),
            },
            bullets: &[
                "Designed Power BI dashboards backed by SQL Server",
                "Wrote Python scripts to clean and load reporting data",
            ],
        },
        Job {
            title: "IT Intern",
            timeline: Timeline {
                start: YearMonth::new(2018, 5),
                end: Some(YearMonth::new(2019, 7)),
            },
            bullets: &[
                "Supported desktop and network operations",
                "Documented onboarding procedures for new staff",
            ],
        },
    ],
    skills: &[
        SkillGroup {
            heading: "Languages",
            items: &["Python", "TypeScript", "JavaScript", "C#", "HTML", "SQL"],
        },
        SkillGroup {
            heading: "Frameworks",
            items: &["React", "Django", "LangChain", "Express", "Next.js", "vite"],
        },
        SkillGroup {
            heading: "AWS",
            items: &[
                "EC2",
                "Lambda",
                "API Gateway",
                "DynamoDB",
                "RDS",
                "ECS",
                "OpenSearch",
                "Bedrock",
                "CloudFormation",
            ],
        },
        SkillGroup {
            heading: "Tools",
            items: &[
                "git",
                "PostgreSQL",
                "SQL Server",
                "Docker",
                "AWS Serverless Application Model (SAM)",
                "pytest",
                "Visual Studio",
                "Visual Studio Code",
                "vim",
            ],
        },
        SkillGroup {
            heading: "Automation",
            items: &[
                "Automation Anywhere",
                "Power Apps",
                "Power Automate",
                "Power BI",
            ],
        },
    ],
    contacts: &[
        ContactLink {
            text: "GitHub",
            href: "https://github.com/dscheuermann",
        },
        ContactLink {
            text: "LinkedIn",
            href: "https://www.linkedin.com/in/david-scheuermann",
        },
        ContactLink {
            text: "Email",
            href: "mailto:david@scheuermann.dev",
        },
        ContactLink {
            text: "Blog",
            href: "https://blog.scheuermann.dev",
        },
        ContactLink {
            text: "Stack Overflow",
            href: "https://stackoverflow.com/users/dscheuermann",
        },
    ],
    cv_url: "https://scheuermann.dev/david-scheuermann-cv.pdf",
};
