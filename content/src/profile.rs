//! Site owner identity and about-page copy.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

pub const OWNER: &str = "Sohm Dubey";
pub const TAGLINE: &str = "Creative Technologist";
pub const EMAIL: &str = "sohmdubey@gmail.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/sohmdubey";
pub const GITHUB_URL: &str = "https://github.com/sohmrd";
pub const SITE_DESCRIPTION: &str = "Portfolio of Sohm Dubey. Georgia Tech senior building at the intersection of \
                                    industrial design and computer science.";

/// A footer/contact link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Whether the link leaves the site (opened in a new tab).
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", href: LINKEDIN_URL },
    SocialLink { label: "GitHub", href: GITHUB_URL },
    SocialLink { label: "Email", href: "mailto:sohmdubey@gmail.com" },
];

/// About-page introduction, one entry per paragraph.
pub static BIO: &[&str] = &[
    "I am a senior at Georgia Tech dual-majoring in Industrial Design and Computer Science, with threads in \
     Intelligence and Devices. That combination means I can sketch a product concept in the morning, CAD the \
     enclosure after lunch, and write the embedded firmware by evening.",
    "My work sits at the intersection of physical product design and real software engineering. I have built \
     Bluetooth-connected consumer devices for Coca-Cola, run product strategy at a medical AI company (AliveCor), \
     trained computer vision models for fashion detection, and developed spatial computing apps with iPhone LiDAR.",
    "I am looking for roles where I can combine both halves of my background: creative technologist, design \
     engineer, or product design engineer. I want to be at a company where the people who design the product also \
     understand the technology inside it.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub period: &'static str,
    pub degree: &'static str,
    pub detail: &'static str,
}

pub static EDUCATION: Education = Education {
    school: "Georgia Institute of Technology",
    period: "Expected Dec 2025 / Spring 2026",
    degree: "B.S. Industrial Design & B.S. Computer Science",
    detail: "CS Threads: Intelligence, Devices",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Coca-Cola (Georgia Tech Capstone)",
        role: "Firmware Lead & iOS Developer",
        period: "2025",
        description: "Led firmware and iOS development for a Bluetooth-connected smart water bottle. Delivered \
                      working prototype to Coca-Cola engineers.",
    },
    Experience {
        company: "AliveCor",
        role: "Product Development Intern (Featured)",
        period: "2024",
        description: "Ran a device configuration audit, developed D2C strategy, and shipped 5 deliverables across \
                      hardware, ML, and customer success teams.",
    },
    Experience {
        company: "HP Inc.",
        role: "Product Design Intern",
        period: "2023",
        description: "Industrial design work on consumer products. Contributed to form factor exploration and rapid \
                      prototyping.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Design",
        items: &[
            "Industrial Design",
            "User Research",
            "CAD (SolidWorks, Fusion 360)",
            "Prototyping & Fabrication",
            "Figma",
            "Adobe Creative Suite",
        ],
    },
    SkillGroup {
        category: "Software",
        items: &[
            "Python (PyTorch, TensorFlow)",
            "Swift / SwiftUI",
            "TypeScript / React",
            "C++ / Arduino",
            "Computer Vision (YOLO, OpenCV)",
            "ARKit / SceneKit",
        ],
    },
    SkillGroup {
        category: "Hardware",
        items: &["Embedded Systems", "BLE / IoT", "Sensor Fusion", "3D Printing", "PCB Design", "LiDAR"],
    },
];

/// Condensed skill cards for the home-page about preview.
pub static SKILL_HIGHLIGHTS: &[(&str, &str)] = &[
    ("Design", "Form, Materials, User Research, CAD"),
    ("Software", "Swift, Python, React, C++"),
    ("Hardware", "Arduino, BLE, Sensors, PCB"),
    ("AI / ML", "Computer Vision, PyTorch, YOLO"),
];
