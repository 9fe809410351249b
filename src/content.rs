//! Static portfolio content
//!
//! Everything here is fixed at compile time. Widgets only read these lists and
//! refer to entries by index.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

pub const OWNER: &str = "Muhammad Farrel Rabbani";
pub const HEADLINE: &str = "Hi, I'm Farrel!";
pub const TAGLINE: &str = "Welcome to my digital space";
pub const BLOG_STATUS: &str = "Under Construction";
pub const BLOG_TEASER: &str = "Something amazing is coming soon";
pub const PROFILE_IMAGE: &str = "/images/profile.jpg";
pub const PROFILE_BACK_IMAGE: &str = "/images/logo.jpg";

pub const TITLES: &[&str] = &["Front End Web Developer", "Graphic Designer", "Hobbyist"];

pub const QUOTES: &[&str] = &[
    "The best way to predict the future is to create it.",
    "Code is like humor. When you have to explain it, it's bad.",
    "Design is not just what it looks like and feels like. Design is how it works.",
    "The only way to do great work is to love what you do.",
    "Innovation distinguishes between a leader and a follower.",
];

pub const ABOUT_SUMMARY: &str = "Passionate Front End Developer with expertise in modern web \
technologies. Currently in Network information systems and applications major at SMK Negeri 2 \
Depok Sleman.";

pub const ABOUT_SECTIONS: &[(&str, &str)] = &[
    (
        "Background",
        "I am a passionate Front End Developer currently in Network information systems and \
applications major at SMK Negeri 2 Depok Sleman. My journey in web development started with a \
curiosity about creating beautiful and functional websites, which led me to explore various \
technologies and frameworks.",
    ),
    (
        "Interests",
        "I have a keen interest in modern web technologies, particularly React and its ecosystem. \
I enjoy creating responsive and user-friendly interfaces, and I'm always excited to learn about \
new tools and techniques in web development.",
    ),
    (
        "Goals",
        "My goal is to become a full-stack developer who can create comprehensive web applications \
that solve real-world problems. I'm constantly working on improving my skills.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Graphic Design",
        level: 90,
    },
    Skill {
        name: "Front End Development",
        level: 85,
    },
    Skill {
        name: "Video Editing",
        level: 80,
    },
];

/// Filter applied to the tech stack inside the skills overlay
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum SkillCategory {
    #[default]
    All,
    Frontend,
    Backend,
    Tools,
    #[strum(to_string = "Design & Editing")]
    Design,
}

impl SkillCategory {
    /// The next category, wrapping after the last one
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let index = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tech {
    pub name: &'static str,
    pub category: SkillCategory,
}

const fn tech(name: &'static str, category: SkillCategory) -> Tech {
    Tech { name, category }
}

pub const TECH_STACK: &[Tech] = &[
    tech("React", SkillCategory::Frontend),
    tech("Next.js", SkillCategory::Frontend),
    tech("Tailwind CSS", SkillCategory::Frontend),
    tech("JavaScript", SkillCategory::Frontend),
    tech("HTML5", SkillCategory::Frontend),
    tech("CSS3", SkillCategory::Frontend),
    tech("Vite", SkillCategory::Frontend),
    tech("Node.js", SkillCategory::Backend),
    tech("Express", SkillCategory::Backend),
    tech("MySQL", SkillCategory::Backend),
    tech("PHP", SkillCategory::Backend),
    tech("Aiven", SkillCategory::Backend),
    tech("VS Code", SkillCategory::Tools),
    tech("Git", SkillCategory::Tools),
    tech("GitHub", SkillCategory::Tools),
    tech("Vercel", SkillCategory::Tools),
    tech("Cloudflare", SkillCategory::Tools),
    tech("WebStorm", SkillCategory::Tools),
    tech("Cursor", SkillCategory::Tools),
    tech("Figma", SkillCategory::Design),
    tech("Canva", SkillCategory::Design),
    tech("Pixellab", SkillCategory::Design),
    tech("CapCut", SkillCategory::Design),
    tech("Hypic", SkillCategory::Design),
];

/// Tech items shown for a category; `All` keeps every item in stack order
pub fn tech_for(category: SkillCategory) -> Vec<&'static Tech> {
    TECH_STACK
        .iter()
        .filter(|tech| category == SkillCategory::All || tech.category == category)
        .collect()
}

/// Highlights on the collapsed skills card
pub const SKILL_HIGHLIGHTS: &[&str] = &["React", "Next.js", "Javascript", "Tailwind CSS"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Twibbon MPLS SMK Negeri 2 Depok Sleman 2024",
        description: "Website alternatif untuk twibbon MPLS Stembayo.",
        image: "/images/twb.png",
        tech: &["HTML", "CSS", "JavaScript"],
        link: "https://twibbon-stembayo.vercel.app/",
    },
    Project {
        title: "Konest | Koperasi Digital",
        description: "Konest adalah platform koperasi digital untuk sekolah, menyediakan berbagai \
kebutuhan dengan mudah dan cepat.",
        image: "/images/konest.png",
        tech: &["React", "Tailwind CSS", "Node.js", "Express", "MySQL", "Aiven"],
        link: "http://konest.sijabright.my.id/",
    },
    Project {
        title: "Free To Use React Links Website",
        description: "This is a simple and modern links website built with React.",
        image: "/images/linkweb.png",
        tech: &["React", "Tailwind CSS"],
        link: "https://github.com/Prozycal/react-links-web",
    },
    Project {
        title: "IoT Hidroponic Tracker Website",
        description: "IoT Hidroponic Tracker Website adalah website yang digunakan untuk \
mengontrol hidroponik.",
        image: "/images/hidro.jpg",
        tech: &["PHP", "MySQL", "Arduino"],
        link: "https://github.com/Prozycal/hidroponik-iot",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Design {
    pub title: &'static str,
    pub image: &'static str,
    pub category: &'static str,
}

pub const DESIGNS: &[Design] = &[
    Design {
        title: "March 17th HSR GFX",
        image: "/images/anime-2.jpeg",
        category: "Graphic Design",
    },
    Design {
        title: "Raiden Shogun Interface GFX",
        image: "/images/anime-1.jpg",
        category: "Graphic Design",
    },
    Design {
        title: "Roblox GFX Commisions #1",
        image: "/images/roblox-1.jpeg",
        category: "Graphic Design",
    },
    Design {
        title: "Roblox GFX Commisions #2",
        image: "/images/roblox-2.jpeg",
        category: "Graphic Design",
    },
    Design {
        title: "Avengers Eternity War - Fan Made Poster",
        image: "/images/poster-1.jpg",
        category: "Graphic Design",
    },
    Design {
        title: "Fha-Fun Milk Mockup Concept",
        image: "/images/mockup.jpg",
        category: "Graphic Design",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub title: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Juara 1 Kompetisi Pahlawan Digital Nasional",
        organization: "PT. ITHO Indostock",
        date: "17 Mei 2024",
        image: "/images/ses.jpg",
    },
    Certificate {
        title: "Grand Finalis Website SMK - Micro Influencer Competition GSS 2024",
        organization: "Yayasan Sagasitas Indonesia",
        date: "1 Oktober 2024",
        image: "/images/sagasitas.jpeg",
    },
    Certificate {
        title: "Belajar Dasar Pemrograman Web",
        organization: "Dicoding Indonesia",
        date: "18 Oktober 2023",
        image: "/images/dicoding.jpg",
    },
    Certificate {
        title: "Belajar Dasar Visualisasi Data",
        organization: "Dicoding Indonesia",
        date: "28 Januari 2024",
        image: "/images/dicoding.jpg",
    },
    Certificate {
        title: "Memulai Pemrograman dengan Python",
        organization: "Dicoding Indonesia",
        date: "04 Februari 2024",
        image: "/images/dicoding.jpg",
    },
    Certificate {
        title: "Belajar Dasar Pemrograman JavaScript",
        organization: "Dicoding Indonesia",
        date: "15 September 2024",
        image: "/images/dicoding.jpg",
    },
    Certificate {
        title: "Belajar Membuat Front-End Web untuk Pemula",
        organization: "Dicoding Indonesia",
        date: "15 September 2024",
        image: "/images/dicoding.jpg",
    },
    Certificate {
        title: "Belajar Membuat Aplikasi Web dengan React",
        organization: "Dicoding Indonesia",
        date: "21 Desember 2024",
        image: "/images/dicoding.jpg",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social {
        label: "GitHub",
        href: "https://github.com/Prozycal",
    },
    Social {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/frrlverse/",
    },
    Social {
        label: "Instagram",
        href: "https://instagram.com/frrlrbn",
    },
    Social {
        label: "Saweria",
        href: "https://saweria.co/Prozycal",
    },
];
