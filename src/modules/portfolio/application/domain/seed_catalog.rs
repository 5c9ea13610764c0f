//! Fixed reference catalog inserted once when storage is first initialized.
//!
//! Entries carry no ids; each storage assigns them on insert. The in-memory
//! storage numbers them from 1 in slice order.

use super::entities::{Education, Experience, Project, Skill};

pub struct SkillSeed {
    pub name: &'static str,
    pub category: &'static str,
}

pub struct ExperienceSeed {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub location: Option<&'static str>,
}

pub struct ProjectSeed {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub link: Option<&'static str>,
    pub github_link: Option<&'static str>,
    pub image_url: Option<&'static str>,
}

pub struct EducationSeed {
    pub institution: &'static str,
    pub degree: &'static str,
    pub duration: &'static str,
    pub grade: Option<&'static str>,
    pub location: Option<&'static str>,
}

pub const SKILLS: &[SkillSeed] = &[
    SkillSeed {
        name: "Java",
        category: "Language",
    },
    SkillSeed {
        name: "JavaScript",
        category: "Language",
    },
    SkillSeed {
        name: "TypeScript",
        category: "Language",
    },
    SkillSeed {
        name: "PHP",
        category: "Language",
    },
    SkillSeed {
        name: "SQL",
        category: "Language",
    },
    SkillSeed {
        name: "Angular",
        category: "Framework",
    },
    SkillSeed {
        name: "RxJS",
        category: "Library",
    },
    SkillSeed {
        name: "NgRx",
        category: "Library",
    },
    SkillSeed {
        name: "Laravel",
        category: "Framework",
    },
    SkillSeed {
        name: "Eloquent ORM",
        category: "Library",
    },
    SkillSeed {
        name: "SASS",
        category: "Library",
    },
    SkillSeed {
        name: "Tailwind CSS",
        category: "Library",
    },
    SkillSeed {
        name: "MySQL",
        category: "Database",
    },
    SkillSeed {
        name: "Redis",
        category: "Database",
    },
    SkillSeed {
        name: "Git",
        category: "Tool",
    },
    SkillSeed {
        name: "Postman",
        category: "Tool",
    },
    SkillSeed {
        name: "AWS S3",
        category: "Tool",
    },
];

pub const EXPERIENCE: &[ExperienceSeed] = &[
    ExperienceSeed {
        company: "Thikse Software Solutions",
        role: "Full Stack Developer",
        duration: "August 2025 - Present",
        description: "Joined as Software Development Intern. Contributed to Fuoday HRMS and ATS. \
                      Worked on backend (Laravel, Java/Spring Boot) and frontend (Angular). \
                      Implemented AWS S3 integrations.",
        location: Some("Puducherry"),
    },
    ExperienceSeed {
        company: "NIC (National Informatics Centre)",
        role: "Programmer (Intern)",
        duration: "June 2025 - August 2025",
        description: "Learned real-world software development practices and strengthened \
                      technical foundations.",
        location: Some("Puducherry"),
    },
    ExperienceSeed {
        company: "TWILIGHT IT SOLUTIONS",
        role: "Internship",
        duration: "March 2023 - March 2023",
        description: "Gained hands-on experience in HTML, CSS, and PHP/MySQL.",
        location: Some("Puducherry"),
    },
];

pub const PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        title: "Fuoday (HRMS & ATS)",
        description: "Enterprise-level HR management platform. Designed and developed ATS user \
                      interface, job creation workflows, and candidate tracking. Integrated JWT \
                      auth, AWS S3, and Redis.",
        tech_stack: &[
            "Angular",
            "TypeScript",
            "Laravel",
            "Java",
            "Redis",
            "AWS S3",
        ],
        link: None,
        github_link: None,
        image_url: None,
    },
    ProjectSeed {
        title: "Thikse Software Solutions Website",
        description: "Official corporate website development using Angular. Focused on \
                      responsive UI, reusable components, and performance optimization.",
        tech_stack: &["Angular", "TypeScript", "SASS", "Highcharts"],
        link: Some("https://thikse.in"),
        github_link: None,
        image_url: None,
    },
    ProjectSeed {
        title: "Enzopik Oil Collection Platform",
        description: "Web-based system to manage oil collection operations. Handled frontend in \
                      Angular and backend integration via REST APIs.",
        tech_stack: &["Angular", "TypeScript", "SASS", "MySQL"],
        link: None,
        github_link: None,
        image_url: None,
    },
    ProjectSeed {
        title: "Seminar Hall Booking System",
        description: "Booking system for Pondicherry University. Features email notifications \
                      via PHPMailer and PDF reports via TCPDF.",
        tech_stack: &["PHP", "MySQL", "Bootstrap", "JavaScript"],
        link: None,
        github_link: None,
        image_url: None,
    },
    ProjectSeed {
        title: "Momento Events",
        description: "Event management platform for booking and scheduling events with payment \
                      processing integration.",
        tech_stack: &["PHP", "MySQL", "JavaScript"],
        link: None,
        github_link: None,
        image_url: None,
    },
];

pub const EDUCATION: &[EducationSeed] = &[
    EducationSeed {
        institution: "Pondicherry University",
        degree: "Masters in Computer Science",
        duration: "October 2023 - April 2025",
        grade: Some("CGPA: 7.89"),
        location: Some("Puducherry"),
    },
    EducationSeed {
        institution: "RAAK Arts and Science College",
        degree: "Bachelors in Computer Science",
        duration: "July 2020 - June 2023",
        grade: Some("CGPA: 7.8"),
        location: Some("Tamil Nadu"),
    },
];

fn owned(value: Option<&'static str>) -> Option<String> {
    value.map(str::to_string)
}

impl SkillSeed {
    pub fn to_skill(&self, id: i32) -> Skill {
        Skill {
            id,
            name: self.name.to_string(),
            category: self.category.to_string(),
        }
    }
}

impl ExperienceSeed {
    pub fn to_experience(&self, id: i32) -> Experience {
        Experience {
            id,
            company: self.company.to_string(),
            role: self.role.to_string(),
            duration: self.duration.to_string(),
            description: self.description.to_string(),
            location: owned(self.location),
        }
    }
}

impl ProjectSeed {
    pub fn tech_stack(&self) -> Vec<String> {
        self.tech_stack.iter().map(|t| t.to_string()).collect()
    }

    pub fn to_project(&self, id: i32) -> Project {
        Project {
            id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            tech_stack: self.tech_stack(),
            link: owned(self.link),
            github_link: owned(self.github_link),
            image_url: owned(self.image_url),
        }
    }
}

impl EducationSeed {
    pub fn to_education(&self, id: i32) -> Education {
        Education {
            id,
            institution: self.institution.to_string(),
            degree: self.degree.to_string(),
            duration: self.duration.to_string(),
            grade: owned(self.grade),
            location: owned(self.location),
        }
    }
}

/// Numbers a seed slice from 1, in order.
pub fn numbered<S, T>(seeds: &[S], build: impl Fn(&S, i32) -> T) -> Vec<T> {
    seeds
        .iter()
        .zip(1..)
        .map(|(seed, id)| build(seed, id))
        .collect()
}
