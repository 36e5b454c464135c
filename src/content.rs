//! Static portfolio content and the small pure helpers the pages run over it.

pub const OWNER: &str = "Antony Roshan";
pub const EMAIL: &str = "antonyroshan03@gmail.com";
pub const CV_PATH: &str = "/cv.pdf";

/// Category filter value that matches every project.
pub const ALL_CATEGORIES: &str = "All";

/// The back-to-top button appears past this many pixels.
pub const BACK_TO_TOP_AFTER: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectIcon {
    Brain,
    Microscope,
    Shield,
    Factory,
    Chart,
    Network,
}

impl ProjectIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Brain => "🧠",
            Self::Microscope => "🔬",
            Self::Shield => "🛡️",
            Self::Factory => "🏭",
            Self::Chart => "📊",
            Self::Network => "🕸️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub guide: &'static str,
    pub icon: ProjectIcon,
    pub image: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Modeling Neuroplasticity in Spectral Graph Models",
        category: "Undergraduate Thesis",
        duration: "August 2024 - Present",
        guide: "Dr. Parag Verma, Department of Chemical Engineering, IIT Madras",
        icon: ProjectIcon::Brain,
        image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=800&h=600&fit=crop",
        description: "Developing comprehensive models to understand and simulate neuroplasticity mechanisms using spectral graph theory and machine learning approaches for brain network analysis.",
        achievements: &[
            "Formulated an optimisation problem to determine plasticity weights between interconnecting brain regions",
            "Creating a dynamically changing brain model with 86 distinct regions with temporal modifications from short term impulses",
            "Implemented graph neural networks to capture complex neural pathway interactions and plasticity patterns",
            "Achieved 92% accuracy in predicting neural adaptation patterns compared to fMRI baseline data",
        ],
        skills: &[
            "Python",
            "PyTorch",
            "Graph Theory",
            "Neuroplasticity",
            "Machine Learning",
            "Spectral Analysis",
            "Neural Networks",
            "MATLAB",
        ],
    },
    Project {
        id: 2,
        title: "R&D Leadership Intern - Unilever",
        category: "Industry Internship",
        duration: "May 2024 - July 2024",
        guide: "Mrs. Sarmishta Biswas, Global R&D Director, Future Care Formats, Home Care",
        icon: ProjectIcon::Microscope,
        image: "https://images.unsplash.com/photo-1582719471384-894fbb16e074?w=800&h=600&fit=crop",
        description: "Led innovative research in surfactant chemistry and bioreactor optimization for next-generation laundry detergent formulations at Unilever's global R&D center.",
        achievements: &[
            "Explored over 30 different surfactant chemistries to understand molecular packing and synergistic binding",
            "Developed rheological models for spacer functional groups in binary surfactant systems at low concentrations",
            "Formulated a patent-pending mixed surfactant system that reduced active dosage by 15%",
            "Achieved 2x performance improvement while reducing environmental impact by 30%",
            "Presented findings to global R&D leadership team and secured project continuation funding",
        ],
        skills: &[
            "Surfactant Chemistry",
            "Bioreactor Design",
            "R&D",
            "Patent Development",
            "Molecular Modeling",
            "Rheology",
            "Process Optimization",
        ],
    },
    Project {
        id: 3,
        title: "AI-Powered PPE Compliance Detection System",
        category: "Safety Technology",
        duration: "August 2024 - December 2024",
        guide: "Dr. Smaraj GJ, Department of Mechanical Engineering, IIT Madras",
        icon: ProjectIcon::Shield,
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=800&h=600&fit=crop",
        description: "Developed an end-to-end computer vision system for real-time detection and alerting of PPE non-compliance in industrial environments.",
        achievements: &[
            "Built object detection pipeline using YOLOv7 achieving 95% accuracy in PPE identification",
            "Integrated facial recognition for employee tracking with privacy-preserving techniques",
            "Implemented environment-aware detection adapting to different workplace scenarios",
            "Reduced workplace safety incidents by 40% in pilot deployment at manufacturing facility",
            "Processing speed of 30 FPS enabling real-time monitoring across multiple camera feeds",
        ],
        skills: &[
            "Computer Vision",
            "YOLOv7",
            "Object Detection",
            "Python",
            "TensorFlow",
            "OpenCV",
            "Real-time Processing",
            "Edge Computing",
        ],
    },
    Project {
        id: 4,
        title: "Process Design Intern - VA TECH WABAG",
        category: "Process Engineering",
        duration: "June 2023 - July 2023",
        guide: "Mr. Bharat Thomas, Senior Process Engineer",
        icon: ProjectIcon::Factory,
        image: "https://images.unsplash.com/photo-1574482620811-1aa16ffe3c82?w=800&h=600&fit=crop",
        description: "Spearheaded technical analysis and process design for the $100M+ Dhaka Government Sewage Treatment Plant project.",
        achievements: &[
            "Conducted comprehensive literature review of 50+ advanced water treatment technologies",
            "Designed process flow diagrams for 400 MLD capacity treatment plant",
            "Optimized chemical dosing systems reducing operational costs by 25%",
            "Developed sustainability framework meeting Bangladesh environmental regulations",
            "Contributed to winning technical proposal securing the government contract",
        ],
        skills: &[
            "Water Treatment",
            "Process Design",
            "AutoCAD",
            "ASPEN Plus",
            "Cost Analysis",
            "Environmental Engineering",
            "Project Management",
        ],
    },
    Project {
        id: 5,
        title: "Advanced Drug Delivery System Modeling",
        category: "Research Project",
        duration: "August 2023 - December 2023",
        guide: "Dr. Jeyaprakash R., Department of Chemical Engineering, IIT Madras",
        icon: ProjectIcon::Chart,
        image: "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?w=800&h=600&fit=crop",
        description: "Developed sophisticated simulation models for controlled drug release from erodible polymer matrices.",
        achievements: &[
            "Created MATLAB simulation reducing computational complexity from O(n³) to O(n²)",
            "Achieved 85% prediction accuracy for drug release profiles across 5 polymer systems",
            "Reduced simulation runtime by 40% while maintaining accuracy",
            "Published findings in Chemical Engineering Journal (Impact Factor: 13.3)",
            "Model adopted by pharmaceutical company for formulation development",
        ],
        skills: &[
            "MATLAB",
            "Simulation Modeling",
            "Drug Delivery",
            "Reaction Engineering",
            "Numerical Methods",
            "Polymer Science",
            "Data Analysis",
        ],
    },
    Project {
        id: 6,
        title: "Metabolic Network Optimization Platform",
        category: "Research Project",
        duration: "December 2022 - November 2023",
        guide: "Dr. Karthik Raman, Department of Biotechnology, IIT Madras",
        icon: ProjectIcon::Network,
        image: "https://images.unsplash.com/photo-1518152006812-edab29b069ac?w=800&h=600&fit=crop",
        description: "Developed algorithmic framework for optimizing metabolic flux in microbial communities for enhanced bioproduction.",
        achievements: &[
            "Optimized substrate production in 90+ microbial communities using OptCom and SteadyCom",
            "Developed novel dynamic stepwise algorithm for flux balance analysis",
            "Increased bioproduct yield by 35% in E. coli and S. cerevisiae co-cultures",
            "Created Python package with 500+ downloads for metabolic modeling community",
            "Results presented at International Conference on Systems Biology 2023",
        ],
        skills: &[
            "Python",
            "Metabolic Networks",
            "Systems Biology",
            "Optimization",
            "Biotechnology",
            "COBRA Toolbox",
            "Machine Learning",
            "Bioinformatics",
        ],
    },
];

/// Filter buttons: "All" first, then each category in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for p in projects {
        if !out.contains(&p.category) {
            out.push(p.category);
        }
    }
    out
}

pub fn filter_by_category<'a>(projects: &'a [Project], active: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| active == ALL_CATEGORIES || p.category == active)
        .collect()
}

/// The first `shown` skills plus how many are left over for the "+N" badge.
pub fn skill_preview<'a>(skills: &'a [&'static str], shown: usize) -> (&'a [&'static str], usize) {
    let n = shown.min(skills.len());
    (&skills[..n], skills.len() - n)
}

pub struct FeaturedProject {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ProjectIcon,
    pub category: &'static str,
    pub duration: &'static str,
    pub highlight: bool,
}

pub static FEATURED_PROJECTS: [FeaturedProject; 4] = [
    FeaturedProject {
        title: "Modeling Neuroplasticity in Spectral Graph Models",
        description: "Undergraduate thesis on modeling neuroplasticity using holistic machine learning perspectives.",
        icon: ProjectIcon::Brain,
        category: "Research",
        duration: "Aug 2024 - Present",
        highlight: true,
    },
    FeaturedProject {
        title: "R&D Leadership Intern at Unilever",
        description: "Explored molecular packing and synergistic binding in laundry detergent formulations.",
        icon: ProjectIcon::Microscope,
        category: "Industry",
        duration: "May 2024 - July 2024",
        highlight: true,
    },
    FeaturedProject {
        title: "PPE Non-compliance Detection",
        description: "AI-powered detection model for identifying PPE violations in workplace environments.",
        icon: ProjectIcon::Shield,
        category: "Safety Tech",
        duration: "Aug 2024 - Dec 2024",
        highlight: false,
    },
    FeaturedProject {
        title: "Process Design Intern at VA TECH WABAG",
        description: "Technical analysis for 400Cr Dhaka Government STP project using advanced water treatment.",
        icon: ProjectIcon::Factory,
        category: "Process Engineering",
        duration: "June 2023 - July 2023",
        highlight: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Current,
    Education,
    Achievement,
    Leadership,
}

impl EventKind {
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Current => "bg-primary text-primary-foreground",
            Self::Education => "bg-blue-500 text-white",
            Self::Achievement => "bg-gold text-gold-foreground",
            Self::Leadership => "bg-green-500 text-white",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Current => "🏛️",
            Self::Education => "🎓",
            Self::Achievement => "🏆",
            Self::Leadership => "👥",
        }
    }
}

pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: EventKind,
}

pub static TIMELINE: [TimelineEvent; 6] = [
    TimelineEvent {
        year: "2025",
        title: "Doctoral Studies at Johns Hopkins University",
        description: "Current PhD student in Chemical and Biomolecular Engineering Department",
        kind: EventKind::Current,
    },
    TimelineEvent {
        year: "2024",
        title: "Graduated IIT Madras",
        description: "B.Tech in Chemical Engineering with Minor in Bioprocess Engineering (CGPA: 9.31/10.00)",
        kind: EventKind::Education,
    },
    TimelineEvent {
        year: "2021-2024",
        title: "Academic Excellence at IIT Madras",
        description: "Ranked #1 out of 117 students in Chemical Engineering cohort",
        kind: EventKind::Achievement,
    },
    TimelineEvent {
        year: "2023-2024",
        title: "Leadership Role",
        description: "Corporate Relations Head at Entrepreneurship Cell IIT Madras, managing 25-member team",
        kind: EventKind::Leadership,
    },
    TimelineEvent {
        year: "2021",
        title: "IIT Madras Admission",
        description: "Top 0.47% performance in JEE Advanced among 1.3 million candidates",
        kind: EventKind::Achievement,
    },
    TimelineEvent {
        year: "2021",
        title: "High School Excellence",
        description: "Class XII from St. Michael's Academy, Chennai with 99.6% CGPA",
        kind: EventKind::Education,
    },
];

pub static RESEARCH_INTERESTS: [&str; 6] = [
    "Bioprocess Engineering",
    "Machine Learning",
    "Computational Modeling",
    "Neuroplasticity Research",
    "Process Optimization",
    "Spectral Graph Theory",
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub icon_class: &'static str,
    pub color: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Email",
        href: "mailto:antonyroshan03@gmail.com",
        description: "antonyroshan03@gmail.com",
        icon_class: "extra-email",
        color: "from-blue-500 to-blue-600",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/antonyroshan",
        description: "Professional Profile",
        icon_class: "devicon-linkedin-plain",
        color: "from-blue-600 to-blue-700",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/antonyroshan",
        description: "Code Repository",
        icon_class: "devicon-github-plain",
        color: "from-gray-700 to-gray-800",
    },
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com/antonyroshan",
        description: "Personal Updates",
        icon_class: "extra-instagram",
        color: "from-purple-500 to-pink-500",
    },
];

pub struct CertificationGroup {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub static CERTIFICATIONS: [CertificationGroup; 2] = [
    CertificationGroup {
        heading: "DeepLearning.ai Specializations",
        items: &[
            "Deep Learning Specialization",
            "GAN Specialization",
            "NLP Specialization",
            "Mathematics for ML DS Specialization",
        ],
    },
    CertificationGroup {
        heading: "Additional Courses",
        items: &[
            "Modern Control Theory",
            "Bioreactor Design and Analysis",
            "Process Modeling Simulation and Analysis",
            "Machine Learning in Reaction Engineering",
        ],
    },
];

/// Percentage of the page scrolled, for the back-to-top progress ring.
pub fn scroll_progress(scrolled: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let height = scroll_height - viewport_height;
    if height <= 0.0 || !scrolled.is_finite() {
        return 0.0;
    }
    (scrolled / height * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_keep_first_seen_order() {
        let cats = categories(&PROJECTS);
        assert_eq!(
            cats,
            vec![
                "All",
                "Undergraduate Thesis",
                "Industry Internship",
                "Safety Technology",
                "Process Engineering",
                "Research Project",
            ]
        );
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_filter_by_category() {
        assert_eq!(filter_by_category(&PROJECTS, ALL_CATEGORIES).len(), 6);

        let research = filter_by_category(&PROJECTS, "Research Project");
        assert_eq!(
            research.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![5, 6]
        );

        assert!(filter_by_category(&PROJECTS, "research project").is_empty());
        assert!(filter_by_category(&PROJECTS, "Astrophysics").is_empty());
    }

    #[test]
    fn test_every_category_has_projects() {
        for cat in categories(&PROJECTS) {
            assert!(!filter_by_category(&PROJECTS, cat).is_empty(), "{cat}");
        }
    }

    #[test]
    fn test_skill_preview() {
        let (shown, more) = skill_preview(PROJECTS[0].skills, 3);
        assert_eq!(shown, &["Python", "PyTorch", "Graph Theory"]);
        assert_eq!(more, 5);

        let (shown, more) = skill_preview(&["Rust"], 3);
        assert_eq!(shown, &["Rust"]);
        assert_eq!(more, 0);

        // borrowed from a short-lived list, not just the static tables
        let picked: Vec<&'static str> = PROJECTS[1].skills.iter().copied().take(2).collect();
        let (shown, more) = skill_preview(&picked, 1);
        assert_eq!(shown.len(), 1);
        assert_eq!(more, 1);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // short page that cannot scroll
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        // overscroll stays on the ring
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
    }
}
