//! Static site content: one plain record type per category, display strings
//! and color tags only. No behavior attached.

use strum::Display;

pub const HERO_NAME: &str = "Mohamed Osama";

pub struct HeroLink {
    pub label: &'static str,
    pub href: &'static str,
    pub color: &'static str,
}

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub color: &'static str,
    pub is_current_position: bool,
}

#[derive(Display, PartialEq, Eq)]
pub enum ProjectStatus {
    #[strum(serialize = "completed")]
    Completed,
    #[strum(serialize = "in-progress")]
    InProgress,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: ProjectStatus,
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub color: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub color: &'static str,
    pub skills: &'static [Skill],
}

pub struct SocialLink {
    pub label: &'static str,
    pub color: &'static str,
    pub href: &'static str,
}

pub struct ContactDetail {
    pub label: &'static str,
    pub color: &'static str,
}

pub const HERO_LINKS: &[HeroLink] = &[
    HeroLink {
        label: "github",
        href: "https://github.com/moha-osama",
        color: "#00d4ff",
    },
    HeroLink {
        label: "linkedin",
        href: "https://www.linkedin.com/in/mohamed-osama-4a38a0206/",
        color: "#00ffff",
    },
    HeroLink {
        label: "resume",
        href: "https://drive.google.com/file/d/1pQoI4FPvK6Jr5SKrKt1fl2JP50Df8glX/view?usp=drive_link",
        color: "#8a2be2",
    },
    HeroLink {
        label: "mail",
        href: "mailto:zmuhamedosama@gmail.com",
        color: "#ff0080",
    },
];

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Full Stack Development",
        description: "Expert in building scalable mobile and web applications from the ground up, covering both frontend and backend development.",
        color: "#00d4ff",
    },
    Highlight {
        title: "Product Analytics Mindset",
        description: "Integrating A/B testing, event tracking, and data-driven decision-making to improve user experience and business outcomes.",
        color: "#8a2be2",
    },
    Highlight {
        title: "Business Value Focus",
        description: "Mission-driven approach to ensure applications deliver measurable value to users and businesses, not just technical solutions.",
        color: "#00ffff",
    },
    Highlight {
        title: "Performance Optimization",
        description: "Specialized in frontend performance optimization and design systems for enhanced user experiences.",
        color: "#ff0080",
    },
];

pub const ABOUT_EXPERTISE: &[&str] = &[
    "Design Systems & Frontend Performance",
    "Secure & Scalable API Development",
    "Product Data Analytics & Insights",
    "A/B Testing & User Experience",
    "Full Lifecycle Development",
    "Mobile & Web Applications",
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "gamp.ai",
        role: "Frontend Developer",
        period: "October 2023 - Present",
        location: "Remote",
        description: "Contributed to the development of the SaaS platform Nuiq. Designed and developed UI components, increasing target audience engagement by 12%, and implemented effective web solutions to manage over 2000 transcriptions per day. Developed a highly interactive video player and editor Mogul.",
        technologies: &["React", "TypeScript", "Video Processing", "SaaS"],
        color: "#00d4ff",
        is_current_position: true,
    },
    Experience {
        company: "Egyptian General Petroleum Corporation",
        role: "IT Training",
        period: "July 2023 - August 2023",
        location: "Egypt",
        description: "Gained a deep understanding of multi-layered security systems, network security, and firewall configuration. Learned about designing and maintaining network infrastructures for real-time data needs, improving disaster recovery planning, and business continuity strategies.",
        technologies: &[
            "Network Security",
            "Firewall Configuration",
            "Infrastructure",
            "Security Systems",
        ],
        color: "#8a2be2",
        is_current_position: false,
    },
    Experience {
        company: "skyscanner",
        role: "Frontend Developer",
        period: "February 2023 - March 2023",
        location: "Remote",
        description: "Developed a Datepicker component in Backpack, a collection of design resources, reusable components, and guidelines for creating Skyscanner's products.",
        technologies: &["React", "Component Library", "Design Systems", "JavaScript"],
        color: "#00ffff",
        is_current_position: false,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Neural Network Visualizer",
        description: "Interactive web application for visualizing neural network architectures and training processes in real-time.",
        tech: &["React", "Three.js", "TensorFlow.js", "WebGL"],
        status: ProjectStatus::Completed,
    },
    Project {
        title: "Quantum Dashboard",
        description: "Real-time monitoring dashboard for quantum computing systems with cyberpunk-inspired design.",
        tech: &["Next.js", "D3.js", "WebSockets", "Redis"],
        status: ProjectStatus::InProgress,
    },
    Project {
        title: "Blockchain Explorer",
        description: "Decentralized application for exploring blockchain transactions with advanced analytics.",
        tech: &["Vue.js", "Web3.js", "Ethereum", "GraphQL"],
        status: ProjectStatus::Completed,
    },
    Project {
        title: "Cybersecurity Hub",
        description: "Centralized platform for monitoring and responding to cybersecurity threats in real-time.",
        tech: &["React", "Node.js", "Socket.io", "MongoDB"],
        status: ProjectStatus::Completed,
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Full-Stack Development",
        description: "End-to-end web & mobile applications built with modern frameworks. From React frontends to scalable backend APIs.",
        features: &["React/Next.js", "Node.js APIs", "Mobile Apps", "Database Design"],
        color: "#00d4ff",
    },
    Service {
        title: "Product Analytics",
        description: "Data-driven insights & tracking implementation. A/B testing, user behavior analysis, and performance metrics.",
        features: &[
            "A/B Testing",
            "Event Tracking",
            "User Analytics",
            "Conversion Optimization",
        ],
        color: "#8a2be2",
    },
    Service {
        title: "Scalable Architecture",
        description: "Redis caching, Azure cloud solutions, and robust API design for applications that grow with your business.",
        features: &[
            "Cloud Infrastructure",
            "API Architecture",
            "Database Optimization",
            "Performance Scaling",
        ],
        color: "#00ffff",
    },
    Service {
        title: "UI/UX Engineering",
        description: "Modern, accessible, user-focused interfaces. Design systems, responsive layouts, and exceptional user experiences.",
        features: &[
            "Design Systems",
            "Responsive Design",
            "Accessibility",
            "User Experience",
        ],
        color: "#ff0080",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        color: "#00d4ff",
        skills: &[
            Skill { name: "React/Next.js", level: 95 },
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "Vue.js", level: 85 },
            Skill { name: "Tailwind CSS", level: 92 },
            Skill { name: "Three.js", level: 75 },
        ],
    },
    SkillCategory {
        title: "Backend Development",
        color: "#8a2be2",
        skills: &[
            Skill { name: "Node.js", level: 88 },
            Skill { name: "Python", level: 85 },
            Skill { name: "PostgreSQL", level: 82 },
            Skill { name: "MongoDB", level: 80 },
            Skill { name: "GraphQL", level: 78 },
        ],
    },
    SkillCategory {
        title: "DevOps & Cloud",
        color: "#00ffff",
        skills: &[
            Skill { name: "Docker", level: 85 },
            Skill { name: "AWS", level: 82 },
            Skill { name: "Kubernetes", level: 75 },
            Skill { name: "CI/CD", level: 88 },
            Skill { name: "Terraform", level: 70 },
        ],
    },
    SkillCategory {
        title: "AI & Machine Learning",
        color: "#ff0080",
        skills: &[
            Skill { name: "TensorFlow", level: 80 },
            Skill { name: "PyTorch", level: 75 },
            Skill { name: "OpenAI API", level: 85 },
            Skill { name: "Computer Vision", level: 70 },
            Skill { name: "NLP", level: 78 },
        ],
    },
];

pub const CONTACT_SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        color: "#00d4ff",
        href: "#",
    },
    SocialLink {
        label: "LinkedIn",
        color: "#00ffff",
        href: "#",
    },
    SocialLink {
        label: "Twitter",
        color: "#8a2be2",
        href: "#",
    },
    SocialLink {
        label: "Email",
        color: "#ff0080",
        href: "mailto:john@example.com",
    },
];

pub const CONTACT_INFO: &[ContactDetail] = &[
    ContactDetail {
        label: "john.doe@example.com",
        color: "#00d4ff",
    },
    ContactDetail {
        label: "+1 (555) 123-4567",
        color: "#00ffff",
    },
    ContactDetail {
        label: "San Francisco, CA",
        color: "#8a2be2",
    },
];
