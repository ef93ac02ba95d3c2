use crate::models::project::{DemoType, Project, ProjectStatus, ProjectType};

use super::{date, strings};

fn link(url: &str) -> Option<String> {
    Some(url.to_string())
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "personal-portfolio".into(),
            title: "Personal Portfolio Website".into(),
            description: "A responsive personal portfolio with a Rust web server, Handlebars page templates and a LaTeX resume that is compiled to PDF on demand. Includes a project showcase with JSON filtering endpoints, an SMTP-backed contact form and canonical-host redirects for production deployment.".into(),
            image: "/static/images/portfolio-project.png".into(),
            technologies: strings(&["Rust", "Axum", "TypeScript", "HTML/CSS", "LaTeX", "Docker"]),
            project_type: ProjectType::Web,
            github_url: link("https://github.com/daveonthegit/Personal_Portfolio"),
            live_url: link("https://www.davidx.tech"),
            demo_type: DemoType::Live,
            demo_url: link("https://www.davidx.tech"),
            hosted_path: None,
            status: ProjectStatus::Active,
            date: date(2025, 9, 11),
        },
        Project {
            id: "forgearena".into(),
            title: "ForgeArena".into(),
            description: "A gamified fitness platform blending avatar evolution with social gym competition. Combines fitness tracking with RPG-style character progression and social features. Repository is private within the class organization.".into(),
            image: "/static/images/forgearena-project.jpg".into(),
            technologies: strings(&["TypeScript", "Go", "React", "PostgreSQL"]),
            project_type: ProjectType::Web,
            github_url: None,
            live_url: None,
            demo_type: DemoType::Live,
            demo_url: link("https://project-project-4.vercel.app/"),
            hosted_path: None,
            status: ProjectStatus::InDevelopment,
            date: date(2025, 1, 1),
        },
        Project {
            id: "randcompile-extension".into(),
            title: "RandCompile: Kernel Hardening Extension Research".into(),
            description: "Research paper extending RandCompile with a secured kernel implementation. Compile-time kernel hardening with ABI randomization and data structure obfuscation, keeping performance overhead under 5% against a malicious hypervisor threat model.".into(),
            image: "/static/images/randcompile-research.png".into(),
            technologies: strings(&["Python", "C", "GCC", "Shell", "Docker", "Research"]),
            project_type: ProjectType::Research,
            github_url: link("https://github.com/daveonthegit/Randcompile-Extension-Paper"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Active,
            date: date(2025, 2, 1),
        },
        Project {
            id: "minesweeper-game".into(),
            title: "Minesweeper Game".into(),
            description: "A fully featured Minesweeper with multiple difficulty levels, flag mode, a timer and a glassmorphism UI, written in TypeScript against the plain DOM.".into(),
            image: "/static/images/minesweeper-project.png".into(),
            technologies: strings(&["TypeScript", "HTML5", "CSS3", "DOM Manipulation", "Game Development"]),
            project_type: ProjectType::Web,
            github_url: None,
            live_url: None,
            demo_type: DemoType::Hosted,
            demo_url: link("/hosted/minesweeper/"),
            hosted_path: Some("minesweeper".into()),
            status: ProjectStatus::Active,
            date: date(2025, 9, 13),
        },
        Project {
            id: "ascii-rpg-game".into(),
            title: "Procedural Roguelike RPG".into(),
            description: "An ASCII roguelike with permadeath, procedural dungeon generation, hunger, item identification and cursed items. Infinite floors, bosses, spells, status effects and save/load through LocalStorage behind a terminal-style interface.".into(),
            image: "/static/images/ascii-rpg.png".into(),
            technologies: strings(&[
                "TypeScript",
                "HTML5",
                "CSS3",
                "Game Development",
                "ASCII Art",
                "Roguelike",
                "Procedural Generation",
                "LocalStorage",
            ]),
            project_type: ProjectType::Web,
            github_url: None,
            live_url: None,
            demo_type: DemoType::Hosted,
            demo_url: link("/hosted/ascii-rpg/"),
            hosted_path: Some("ascii-rpg".into()),
            status: ProjectStatus::Active,
            date: date(2025, 9, 13),
        },
        Project {
            id: "rsa-factorization-tls-decryption".into(),
            title: "RSA Factorization & TLS Decryption".into(),
            description: "Scripted RSA key recovery and TLS decryption: factored 1024-bit RSA moduli with GCD-based methods, extracted the private keys and analyzed the decrypted TLS sessions in Wireshark.".into(),
            image: "/static/images/cryptography-project.jpg".into(),
            technologies: strings(&["C", "Python", "Cado-NFS", "MSieve", "Wireshark"]),
            project_type: ProjectType::Security,
            github_url: link("https://github.com/daveonthegit/RSA-Factorization-TLS-Decryption-"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Active,
            date: date(2025, 2, 1),
        },
        Project {
            id: "hs-projects".into(),
            title: "High School Projects Collection".into(),
            description: "Java projects from high school computer science coursework covering object-oriented programming fundamentals.".into(),
            image: "/static/images/hs-projects.jpg".into(),
            technologies: strings(&["Java"]),
            project_type: ProjectType::Academic,
            github_url: link("https://github.com/daveonthegit/HS-Projects"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Archived,
            date: date(2022, 6, 1),
        },
        Project {
            id: "hunter-cs-work".into(),
            title: "Hunter College CS Coursework".into(),
            description: "Projects and assignments from CSCI 12700 at Hunter College.".into(),
            image: "/static/images/hunter-cs-project.jpg".into(),
            technologies: strings(&["Various", "Academic Projects"]),
            project_type: ProjectType::Academic,
            github_url: link("https://github.com/daveonthegit/HUNTER-CS-WORK"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Archived,
            date: date(2023, 1, 1),
        },
        Project {
            id: "leetcode-solutions".into(),
            title: "LeetCode Solutions".into(),
            description: "A collection of LeetCode submissions with optimized approaches to algorithmic problems.".into(),
            image: "/static/images/leetcode-project.jpg".into(),
            technologies: strings(&["Python", "Algorithm", "Data Structures"]),
            project_type: ProjectType::Tool,
            github_url: link("https://github.com/daveonthegit/leetcode"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Active,
            date: date(2025, 4, 18),
        },
        Project {
            id: "cs43500-food-delivery".into(),
            title: "Food Delivery Service".into(),
            description: "Database design for a food delivery service: user management, order processing, restaurant management and delivery tracking.".into(),
            image: "/static/images/food-delivery-project.jpg".into(),
            technologies: strings(&["PostgreSQL", "Database", "System Design"]),
            project_type: ProjectType::Academic,
            github_url: link("https://github.com/daveonthegit/CS43500-project"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Active,
            date: date(2025, 5, 22),
        },
        Project {
            id: "csci-49381-labs".into(),
            title: "CSCI 49381 Security Labs".into(),
            description: "Cybersecurity lab assignments on buffer overflow exploitation, Slowloris denial of service, cryptography implementations and penetration testing.".into(),
            image: "/static/images/security-labs-project.jpg".into(),
            technologies: strings(&["C", "Python", "HTML", "CSS", "Security", "Cryptography"]),
            project_type: ProjectType::Security,
            github_url: None,
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Archived,
            date: date(2025, 5, 21),
        },
        Project {
            id: "csci-260-assembly".into(),
            title: "CSCI 260 Assembly Projects".into(),
            description: "MIPS assembly projects on low-level programming and computer organization.".into(),
            image: "/static/images/assembly-project.jpg".into(),
            technologies: strings(&["Assembly", "MIPS", "C++"]),
            project_type: ProjectType::Academic,
            github_url: link("https://github.com/daveonthegit/CSCI-260-PROJECT-1"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Active,
            date: date(2025, 5, 14),
        },
        Project {
            id: "cs-260-cpp".into(),
            title: "CS 260 C++ Projects".into(),
            description: "C++ projects covering object-oriented design and data structure implementations.".into(),
            image: "/static/images/cpp-project.jpg".into(),
            technologies: strings(&["C++", "OOP", "Data Structures"]),
            project_type: ProjectType::Academic,
            github_url: link("https://github.com/daveonthegit/CS-260"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Active,
            date: date(2025, 4, 21),
        },
        Project {
            id: "cs335-projects".into(),
            title: "CS 335 Software Engineering Projects".into(),
            description: "Software engineering coursework in C++: system design, project management and collaborative development.".into(),
            image: "/static/images/software-eng-project.jpg".into(),
            technologies: strings(&["C++", "Software Engineering", "System Design"]),
            project_type: ProjectType::Academic,
            github_url: None,
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Archived,
            date: date(2024, 5, 11),
        },
        Project {
            id: "jbot-discord".into(),
            title: "JBot Discord Bot".into(),
            description: "Defunct Discord bot with utility commands, moderation features and interactive commands for server management.".into(),
            image: "/static/images/discord-bot-project.jpg".into(),
            technologies: strings(&["JavaScript", "Discord.js", "Node.js"]),
            project_type: ProjectType::Tool,
            github_url: link("https://github.com/daveonthegit/JBot"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Archived,
            date: date(2022, 9, 26),
        },
        Project {
            id: "basic-web-projects".into(),
            title: "Basic Web Projects".into(),
            description: "Foundational HTML, CSS and JavaScript projects with responsive layouts and interactive features.".into(),
            image: "/static/images/web-projects.jpg".into(),
            technologies: strings(&["HTML", "CSS", "JavaScript"]),
            project_type: ProjectType::Web,
            github_url: link("https://github.com/daveonthegit/Basic-Web-Projects"),
            live_url: None,
            demo_type: DemoType::NoDemo,
            demo_url: None,
            hosted_path: None,
            status: ProjectStatus::Archived,
            date: date(2023, 12, 9),
        },
    ]
}
