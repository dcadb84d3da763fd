//! Portfolio content
//!
//! The presentational pages of the portfolio: owner details, project
//! showcase, FAQ, and resume metadata. Static data rendered as text;
//! nothing here persists.

/// Portfolio owner details
pub struct Owner {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

impl Owner {
    /// First name, used in the contact mail greeting
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }
}

/// A social profile link
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub username: &'static str,
}

/// One project showcase entry
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// CLI command standing in for the live demo route, if the project
    /// has an embedded demo
    pub demo_command: Option<&'static str>,
    pub repo_url: &'static str,
    pub featured: bool,
}

/// One FAQ entry
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn owner() -> Owner {
    Owner {
        name: "Alex Carter",
        title: "Full-Stack Developer",
        email: "alex.carter.dev@example.com",
        phone: "+1 555 010 7342",
        location: "Portland, OR",
    }
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "GitHub",
            url: "https://github.com/alexcarterdev",
            username: "@alexcarterdev",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/alexcarterdev",
            username: "Alex Carter",
        },
        SocialLink {
            label: "Twitter",
            url: "https://x.com/alexcarterdev",
            username: "@alexcarterdev",
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Personal Portfolio",
            description: "A responsive portfolio showcasing my projects and skills, with smooth animations, theme toggling, and optimized performance.",
            technologies: &["React", "TypeScript", "Tailwind CSS", "Framer Motion"],
            demo_command: None,
            repo_url: "https://github.com/alexcarterdev/portfolio",
            featured: true,
        },
        Project {
            title: "Task Management App",
            description: "A fully functional task manager with priority levels, local storage, editing, and filtering. Features real-time stats and a clean interface.",
            technologies: &["React", "TypeScript", "Tailwind CSS", "Local Storage"],
            demo_command: Some("folio tasks"),
            repo_url: "https://github.com/alexcarterdev/task-manager",
            featured: false,
        },
        Project {
            title: "Weather App",
            description: "Current conditions, a 5-day forecast, and detailed weather metrics backed by a live weather API.",
            technologies: &["React", "TypeScript", "Weather API", "Tailwind CSS"],
            demo_command: Some("folio weather"),
            repo_url: "https://github.com/alexcarterdev/weather-app",
            featured: false,
        },
        Project {
            title: "Recipe Finder",
            description: "Recipe search with ingredient-based lookup, advanced filtering, and detailed recipe views.",
            technologies: &["React", "TypeScript", "Spoonacular API", "Tailwind CSS"],
            demo_command: Some("folio recipes"),
            repo_url: "https://github.com/alexcarterdev/recipe-finder",
            featured: false,
        },
        Project {
            title: "Expense Tracker",
            description: "Personal finance management with transaction tracking, category analysis, monthly trends, and data export/import.",
            technologies: &["React", "TypeScript", "Local Storage", "Data Analytics"],
            demo_command: Some("folio expenses"),
            repo_url: "https://github.com/alexcarterdev/expense-tracker",
            featured: false,
        },
    ]
}

pub fn faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "What technologies do you work with?",
            answer: "Mostly TypeScript and Rust, with React on the front end and a strong interest in API design and developer tooling.",
        },
        FaqEntry {
            question: "Are you available for freelance work?",
            answer: "Yes. Reach out through the contact form and include a short description of your project.",
        },
        FaqEntry {
            question: "Where can I see your code?",
            answer: "Every showcased project links to its repository; the rest lives on my GitHub profile.",
        },
    ]
}

/// Resume file metadata, mirroring the downloadable asset
pub struct ResumeInfo {
    pub filename: &'static str,
    pub content_type: &'static str,
}

pub fn resume_info() -> ResumeInfo {
    ResumeInfo {
        filename: "Alex_Carter_Resume.pdf",
        content_type: "application/pdf",
    }
}

/// Print the about section
pub fn show_about() {
    let owner = owner();
    println!("{} - {}", owner.name, owner.title);
    println!("{}", owner.location);
    println!();
    println!("I build polished, user-focused software and enjoy turning rough ideas into shipped products.");
    println!("Browse the projects with 'folio profile projects' or try the embedded demos.");
}

/// Print the project showcase
pub fn show_projects() {
    for project in projects() {
        let marker = if project.featured { " (featured)" } else { "" };
        println!("{}{}", project.title, marker);
        println!("  {}", project.description);
        println!("  Technologies: {}", project.technologies.join(", "));
        if let Some(command) = project.demo_command {
            println!("  Demo: {}", command);
        }
        println!("  Repo: {}", project.repo_url);
        println!();
    }
}

/// Print the FAQ
pub fn show_faq() {
    for entry in faq() {
        println!("Q: {}", entry.question);
        println!("A: {}", entry.answer);
        println!();
    }
}

/// Print contact details and social links
pub fn show_contact_info() {
    let owner = owner();
    println!("Email:    {}", owner.email);
    println!("Phone:    {}", owner.phone);
    println!("Location: {}", owner.location);
    println!();
    for link in social_links() {
        println!("{:<9} {} ({})", link.label, link.url, link.username);
    }
}

/// Print resume metadata
pub fn show_resume() {
    let info = resume_info();
    println!("Resume: {} ({})", info.filename, info.content_type);
}
