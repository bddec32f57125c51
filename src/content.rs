//! Static site content.
//!
//! Every section of the page renders one of these arrays. Nothing here changes
//! at runtime.

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub role: &'static str,
    pub interest: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub resume_path: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sreephaneesha Kanugovi",
    short_name: "Sreephaneesha",
    role: "Full Stack Developer",
    interest: "AI/ML Enthusiast",
    tagline: "Building digital experiences that merge creativity with technology.",
    location: "Bengaluru, India",
    email: "sreephaneesha2005@gmail.com",
    phone: "+91 72595 49529",
    phone_href: "tel:+917259549529",
    resume_path: "/assets/resume/resume_sreephaneesha.pdf",
    github_url: "https://github.com/phaneesh29",
    linkedin_url: "https://www.linkedin.com/in/sreephaneesh-kanugovi",
};

pub const PAGE_TITLE: &str = "Sreephaneesha Kanugovi | Full Stack Developer";
pub const PAGE_DESCRIPTION: &str = "Portfolio of Sreephaneesha Kanugovi, a Full Stack Developer and AI/ML Enthusiast.";

/// About-section biography, one paragraph.
pub const BIO: &str = "I am a Computer Science enthusiast currently pursuing my B.Tech in CSE (AI & ML) at PES University. \
I have a strong foundation in Data Structures and Algorithms and full-stack development. \
My passion lies in building scalable web applications and exploring the intersection of AI and software engineering. \
I'm deeply interested in AI Agents and the Model Context Protocol (MCP), building systems where AI can autonomously interact with tools and data sources.";

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Section element id the link scrolls to.
    pub target: &'static str,
}

pub const HERO_ID: &str = "hero";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", target: "about" },
    NavLink { label: "Experience", target: "experience" },
    NavLink { label: "Projects", target: "projects" },
    NavLink { label: "Contact", target: "contact" },
];

impl NavLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

// =============================================================================
// ABOUT
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub name: &'static str,
    /// Accent class applied to the group heading.
    pub accent: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: [SkillGroup; 6] = [
    SkillGroup { name: "Languages", accent: "accent-blue", items: &["C", "Python", "JavaScript", "TypeScript"] },
    SkillGroup {
        name: "Frontend",
        accent: "accent-pink",
        items: &["ReactJS", "Next.js", "Tailwind CSS", "HTML/CSS", "Framer Motion"],
    },
    SkillGroup {
        name: "Backend",
        accent: "accent-green",
        items: &["NodeJS", "Express", "Socket.io", "WebSockets", "WebRTC"],
    },
    SkillGroup { name: "Database", accent: "accent-yellow", items: &["MongoDB", "MySQL", "PostgreSQL", "SQLite"] },
    SkillGroup { name: "Tools", accent: "accent-purple", items: &["Git", "Linux", "VS Code", "Vercel", "Gemini API"] },
    SkillGroup { name: "Core", accent: "accent-red", items: &["DSA", "OOPs", "OS", "CN"] },
];

#[derive(Debug, Clone, Copy)]
pub struct Interest {
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub const INTERESTS: [Interest; 2] = [
    Interest {
        title: "AI Agents",
        description: "Building autonomous AI agents that can reason, plan, and execute complex tasks, from code generation to research workflows.",
        gradient: "gradient-violet-fuchsia",
    },
    Interest {
        title: "Model Context Protocol (MCP)",
        description: "Exploring MCP to connect AI models with external tools, APIs, and data sources, enabling richer, context-aware AI applications.",
        gradient: "gradient-cyan-blue",
    },
];

// =============================================================================
// EXPERIENCE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Education,
    Seeking,
    Work,
}

impl TimelineKind {
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Seeking => "Open to Work",
            Self::Work => "Work",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: &'static str,
    pub org: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub const TIMELINE: [TimelineEntry; 2] = [
    TimelineEntry {
        kind: TimelineKind::Education,
        title: "B.Tech CSE (AI & ML)",
        org: "PES University, Bengaluru",
        period: "2023 – Present",
        description: "Pursuing a specialization in Artificial Intelligence and Machine Learning with a strong focus on DSA, full-stack development, and deep learning.",
        gradient: "gradient-blue-cyan",
    },
    TimelineEntry {
        kind: TimelineKind::Seeking,
        title: "Actively Seeking Opportunities",
        org: "Open to Full-Stack & AI/ML Roles",
        period: "2025",
        description: "Looking for internship and full-time opportunities in full-stack development, AI/ML engineering, and software development. Passionate about building impactful products.",
        gradient: "gradient-emerald-teal",
    },
];

/// Which side of the vertical timeline an entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

#[must_use]
pub fn timeline_side(index: usize) -> TimelineSide {
    if index % 2 == 0 { TimelineSide::Left } else { TimelineSide::Right }
}

// =============================================================================
// PROJECTS
// =============================================================================

/// Placeholder used for projects without a live deployment.
pub const NO_LINK: &str = "#";

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub github: &'static str,
    pub color: &'static str,
    pub category: &'static str,
}

impl Project {
    /// Live demo URL, if the project has one.
    #[must_use]
    pub fn live_link(&self) -> Option<&'static str> {
        if self.link == NO_LINK || self.link.is_empty() { None } else { Some(self.link) }
    }
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Sales Genie — AI SDR Assistant",
        description: "AI-powered Sales Development Rep that automates lead research, personalized email drafting, and follow-up sequences. Built during Yukti Manthan AI Hackathon.",
        tech: &["MERN", "Gemini API", "Tailwind", "AI Automation"],
        link: "https://ai-sdr-black.vercel.app",
        github: "https://github.com/phaneesh29/Sales_Genie",
        color: "gradient-violet-fuchsia",
        category: "AI / Full-Stack",
    },
    Project {
        title: "Work Planner — Task Manager",
        description: "Production-ready task management app with JWT auth, automated email reminders via cron jobs, and a modern dark-themed dashboard.",
        tech: &["Next.js 14", "MongoDB", "JWT", "Nodemailer", "Cron"],
        link: NO_LINK,
        github: "https://github.com/phaneesh29/work-planner",
        color: "gradient-amber-orange",
        category: "Full-Stack",
    },
    Project {
        title: "Learnify — LMS Platform",
        description: "A feature-rich Learning Management System with role-based access control, course browsing, progress tracking, and learning path management.",
        tech: &["React", "JavaScript", "RBAC", "REST API"],
        link: NO_LINK,
        github: "https://github.com/phaneesh29/leanify-client-web",
        color: "gradient-emerald-teal",
        category: "Full-Stack / EdTech",
    },
    Project {
        title: "Real-Time Chat App",
        description: "Instant messaging application with JWT authentication, real-time WebSocket communication, and a sleek DaisyUI interface for seamless conversations.",
        tech: &["MERN", "Socket.io", "DaisyUI", "JWT"],
        link: "https://mern-chat-app-kohl-three.vercel.app",
        github: "https://github.com/phaneesh29/mern-chat-app",
        color: "gradient-sky-blue",
        category: "Full-Stack",
    },
    Project {
        title: "Blogiie — Blog Platform",
        description: "Full-stack blogging platform with user authentication, rich text editing, and a clean, distraction-free reading experience.",
        tech: &["MERN", "MongoDB", "JWT", "Express"],
        link: "https://blogie-two.vercel.app",
        github: "https://github.com/phaneesh29/blogiie",
        color: "gradient-pink-rose",
        category: "Full-Stack",
    },
    Project {
        title: "Lokat — Location Tracker",
        description: "Real-time location sharing and tracking application with secure geographic data transmission, built with a MERN backend and interactive maps.",
        tech: &["MERN", "Maps API", "Real-time", "WebSocket"],
        link: NO_LINK,
        github: "https://github.com/phaneesh29/lokat",
        color: "gradient-indigo-cyan",
        category: "Full-Stack",
    },
];

// =============================================================================
// CONTACT
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub accent: &'static str,
}

pub const CONTACT_INTRO: &str = "I'm currently looking for new opportunities. Whether you have a question or just want to say hi, I'll try my best to get back to you!";

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Email",
        value: PROFILE.email,
        href: Some("mailto:sreephaneesha2005@gmail.com"),
        accent: "accent-purple",
    },
    ContactChannel { label: "Phone", value: PROFILE.phone, href: Some(PROFILE.phone_href), accent: "accent-blue" },
    ContactChannel { label: "Location", value: PROFILE.location, href: None, accent: "accent-green" },
];

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
