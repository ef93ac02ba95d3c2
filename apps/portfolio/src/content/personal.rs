use crate::models::personal::{Education, Experience, PersonalInfo, Skill};

use super::{date, strings};

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "David Xiao".into(),
        title: "CS Student".into(),
        email: "dxiao3043@gmail.com".into(),
        phone: None,
        location: "New York, NY".into(),
        linkedin: "https://linkedin.com/in/david-on-linked".into(),
        github: "https://github.com/daveonthegit".into(),
        website: None,
        bio: "Computer Science student and software engineer with hands-on experience in full-stack development, legacy system modernization and security-focused programming. Pursuing a BA in Computer Science at CUNY Hunter College and building scalable, secure applications.".into(),
        skills: vec![
            Skill {
                category: "Programming Languages".into(),
                items: strings(&[
                    "Java",
                    "Python",
                    "C/C++",
                    "JavaScript",
                    "TypeScript",
                    "Go",
                    "Rust",
                    "PHP",
                    "SQL",
                    "MIPS Assembly",
                    "BASH",
                ]),
            },
            Skill {
                category: "Web Technologies & Frameworks".into(),
                items: strings(&[
                    "React",
                    "Node.js",
                    "Express.js",
                    "HTML/CSS",
                    "jQuery",
                    "RESTful APIs",
                    "PERN Stack",
                ]),
            },
            Skill {
                category: "Databases & Cloud".into(),
                items: strings(&["PostgreSQL", "MySQL", "GCP"]),
            },
            Skill {
                category: "Tools & Methodologies".into(),
                items: strings(&["Git", "VS Code", "UNIX", "Agile Scrum", "Automated Testing"]),
            },
        ],
        experience: vec![
            Experience {
                company: "Unadat".into(),
                position: "Software Engineer Intern".into(),
                start_date: date(2025, 6, 1),
                end_date: Some(date(2025, 8, 31)),
                location: "New York, NY".into(),
                description: strings(&[
                    "Re-architected legacy JS/PHP into modular components, cutting feature development time by 25% and enabling B2C/B2B scalability",
                    "Added 6+ new features to the legacy chores system, increasing adoption across B2C/B2B users",
                    "Converted core components into reusable modals, cutting frontend development effort by 20%",
                    "Refactored 10+ API endpoints with REST and automated tests, reducing response times by 15%",
                ]),
                technologies: strings(&["JavaScript", "PHP", "MySQL", "RESTful APIs"]),
            },
            Experience {
                company: "Blank Street Coffee".into(),
                position: "Barista".into(),
                start_date: date(2024, 5, 1),
                end_date: None,
                location: "New York, NY".into(),
                description: strings(&[
                    "Handled $4K+ in daily POS transactions with accuracy in a fast-paced environment",
                    "Trained new staff and streamlined workflows, improving peak-hour efficiency by 15%",
                ]),
                technologies: vec![],
            },
        ],
        education: vec![Education {
            institution: "CUNY Hunter College".into(),
            degree: "Bachelor of Arts".into(),
            field: "Computer Science".into(),
            start_date: date(2022, 8, 1),
            end_date: date(2026, 5, 1),
            gpa: None,
            location: "New York, NY".into(),
        }],
        interests: strings(&[
            "Security Research & Cryptography",
            "Gamified Fitness Applications",
            "Competitive Programming",
            "Full-Stack Development",
            "Open Source Contributing",
        ]),
    }
}
