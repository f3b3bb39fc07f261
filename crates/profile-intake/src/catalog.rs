//! Static reference tables offered by the intake form and the filter panel.

use std::sync::OnceLock;

use serde::Serialize;

/// Skills grouped by the category headings shown on the intake form.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "HTML",
            "CSS",
            "JavaScript",
            "Python",
            "Java",
            "C",
            "C++",
            "C#",
            "PHP",
            "TypeScript",
            "Go",
            "Rust",
        ],
    ),
    (
        "Framework & Libraries",
        &[
            "React",
            "Spring Boot",
            "Angular",
            "Vue.js",
            "Express.js",
            "Django",
            "Flask",
            ".NET",
            "Next.js",
            "Nuxt.js",
            "Svelte",
        ],
    ),
    (
        "Backend & Databases",
        &[
            "Node.js",
            "SQL",
            "MongoDB",
            "PostgreSQL",
            "MySQL",
            "Redis",
            "GraphQL",
            "REST APIs",
            "Firebase",
            "Supabase",
            "SQLite",
        ],
    ),
    (
        "Tools & Development",
        &[
            "Git/GitHub",
            "VS Code",
            "GitHub Copilot",
            "Docker",
            "Kubernetes",
            "AWS",
            "Azure",
            "Jenkins",
            "Postman",
            "GitLab",
            "Webpack",
            "Vite",
        ],
    ),
    (
        "Methodologies & Concepts",
        &[
            "Object-Oriented Programming (OOP)",
            "Test-Driven Development (TDD)",
            "Agile/Scrum",
            "DevOps",
            "Microservices",
            "CI/CD",
        ],
    ),
    (
        "Mobile & Frontend",
        &[
            "React Native",
            "Flutter",
            "Swift",
            "Kotlin",
            "Ionic",
            "Tailwind CSS",
            "Bootstrap",
            "Sass/SCSS",
        ],
    ),
    (
        "Other Tools",
        &[
            "Figma",
            "Photoshop",
            "Jira",
            "Slack",
            "Microsoft Office",
            "Google Workspace",
        ],
    ),
];

pub const CERTIFICATIONS: &[&str] = &[
    "AWS Certified Cloud Practitioner",
    "AWS Certified Solutions Architect",
    "Microsoft Azure Fundamentals",
    "Google Cloud Digital Leader",
    "CompTIA A+",
    "CompTIA Network+",
    "CompTIA Security+",
    "Cisco CCNA",
    "Certified Kubernetes Application Developer",
    "Oracle Certified Java Programmer",
    "Scrum Master (PSM I)",
    "Meta Front-End Developer",
    "Google Data Analytics",
    "Google IT Support",
];

pub const CERTIFICATION_STATUSES: &[&str] = &["Completed", "In Progress"];

pub const CAREER_INTERESTS: &[&str] = &[
    "Frontend Development",
    "Backend Development",
    "Full-Stack Development",
    "Mobile Development",
    "Cloud Engineering",
    "DevOps",
    "Data Science",
    "Data Engineering",
    "Machine Learning",
    "Cybersecurity",
    "UI/UX Design",
    "Quality Assurance",
    "Product Management",
    "IT Support",
];

pub const WORK_EXPERIENCE: &[&str] = &[
    "Software Engineering Internship",
    "IT Help Desk",
    "Freelance Web Development",
    "Teaching Assistant",
    "Research Assistant",
    "Retail",
    "Customer Service",
    "Hospitality",
    "Military Service",
    "Open Source Contributor",
    "Hackathon Projects",
];

pub const EXPERIENCE_BANDS: &[&str] = &["0-3", "4-7", "8+"];

pub const EDUCATION_LEVELS: &[&str] = &[
    "High School Diploma",
    "Associate Degree",
    "Bachelor's Degree",
    "Master's Degree",
    "Doctorate",
    "Bootcamp Certificate",
];

pub const EDUCATION_FIELDS: &[&str] = &[
    "Computer Science",
    "Software Engineering",
    "Information Technology",
    "Computer Engineering",
    "Data Science",
    "Mathematics",
    "Electrical Engineering",
    "Business Information Systems",
    "Graphic Design",
    "Other",
];

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// Catalog view served to clients; built once on first access.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub skill_categories: Vec<SkillCategory>,
    pub skills: Vec<&'static str>,
    pub certifications: &'static [&'static str],
    pub certification_statuses: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub work_experience: &'static [&'static str],
    pub experience_bands: &'static [&'static str],
    pub education_levels: &'static [&'static str],
    pub education_fields: &'static [&'static str],
}

pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog {
        skill_categories: SKILL_CATEGORIES
            .iter()
            .map(|&(name, skills)| SkillCategory { name, skills })
            .collect(),
        skills: SKILL_CATEGORIES
            .iter()
            .flat_map(|(_, skills)| skills.iter().copied())
            .collect(),
        certifications: CERTIFICATIONS,
        certification_statuses: CERTIFICATION_STATUSES,
        interests: CAREER_INTERESTS,
        work_experience: WORK_EXPERIENCE,
        experience_bands: EXPERIENCE_BANDS,
        education_levels: EDUCATION_LEVELS,
        education_fields: EDUCATION_FIELDS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn flattened_skills_follow_category_order() {
        let catalog = catalog();
        let expected: usize = SKILL_CATEGORIES.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(catalog.skills.len(), expected);
        assert_eq!(catalog.skills.first(), Some(&"HTML"));
        assert_eq!(catalog.skills.last(), Some(&"Google Workspace"));
    }

    #[test]
    fn skills_are_unique_across_categories() {
        let unique: HashSet<_> = catalog().skills.iter().collect();
        assert_eq!(unique.len(), catalog().skills.len());
    }

    #[test]
    fn skills_are_grouped_under_their_category() {
        let languages = catalog()
            .skill_categories
            .iter()
            .find(|category| category.name == "Programming Languages")
            .expect("category present");
        assert!(languages.skills.contains(&"Rust"));
        assert!(!languages.skills.contains(&"Docker"));
    }

    #[test]
    fn catalog_is_built_once() {
        assert!(std::ptr::eq(catalog(), catalog()));
    }
}
