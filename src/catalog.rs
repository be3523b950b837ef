//! Static project catalog shown in the project-detail modal.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Catalog key carried by `.project-btn[data-project]`.
pub type ProjectId = u32;

/// One portfolio project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
}

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "E-Commerce MERN Application",
        description: "A complete e-commerce solution built with the MERN stack. Features include user \
                      authentication, product management, shopping cart, payment integration, and order \
                      tracking. The application provides a seamless shopping experience with real-time \
                      updates and secure payment processing.",
        technologies: &["React", "Node.js", "MongoDB", "Express", "JWT", "Stripe API"],
        features: &[
            "User authentication and authorization",
            "Product catalog with search and filters",
            "Shopping cart functionality",
            "Secure payment processing",
            "Order management system",
            "Admin dashboard",
        ],
        github: "#",
        live: "#",
    },
    ProjectRecord {
        id: 2,
        title: "Task Manager",
        description: "A comprehensive task management application with JWT authentication and full CRUD \
                      operations. Built with a modern UI and RESTful API architecture. Features include \
                      task categorization, priority levels, due dates, and team collaboration.",
        technologies: &["Express.js", "JWT", "MongoDB", "React", "Node.js"],
        features: &[
            "User authentication with JWT",
            "Create, read, update, delete tasks",
            "Task categorization and tags",
            "Priority and due date management",
            "Team collaboration features",
            "Real-time updates",
        ],
        github: "#",
        live: "#",
    },
    ProjectRecord {
        id: 3,
        title: "Blog Platform",
        description: "A full-featured blog platform with comment system, categories, and advanced search \
                      functionality. The responsive interface is built with React and features a robust \
                      Node.js backend with MySQL database.",
        technologies: &["React", "Node.js", "MySQL", "Express", "JWT"],
        features: &[
            "Blog post creation and editing",
            "Comment system with replies",
            "Category and tag management",
            "Advanced search functionality",
            "User profiles and authentication",
            "Responsive design",
        ],
        github: "#",
        live: "#",
    },
    ProjectRecord {
        id: 4,
        title: "Analytics Dashboard",
        description: "An interactive dashboard for data visualization with real-time charts and analytics. \
                      Features a RESTful API built with Express.js and a React frontend with smooth \
                      animations and responsive design.",
        technologies: &["React", "Express.js", "MongoDB", "Chart.js", "Node.js"],
        features: &[
            "Real-time data visualization",
            "Interactive charts and graphs",
            "Data filtering and sorting",
            "Export functionality",
            "Customizable dashboard",
            "Responsive design",
        ],
        github: "#",
        live: "#",
    },
];

pub fn find(id: ProjectId) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// Parse a `data-project` attribute. Non-numeric values yield `None`.
pub fn parse_project_id(raw: &str) -> Option<ProjectId> {
    raw.trim().parse().ok()
}
