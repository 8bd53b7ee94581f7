//! Hard-coded page content.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub footer_owner: &'static str,
    pub portrait_src: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub contact_blurb: &'static str,
    pub email: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub position: &'static str,
    pub company: &'static str,
    pub date_range: &'static str,
    pub summary: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub date_range: &'static str,
    pub details: Option<&'static str>,
}

impl Education {
    pub fn details(&self) -> &'static str {
        self.details.unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Facebook,
    LinkedIn,
}

impl ContactKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Email => "✉",
            Self::Facebook => "f",
            Self::LinkedIn => "in",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: String,
}

pub const PROFILE: Profile = Profile {
    name: "Laurence Pacurib",
    brand: "Lau",
    footer_owner: "Lau",
    portrait_src: "/assets/portrait.png",
    tagline: "I’m a versatile digital professional specializing in front-end development and content creation/management. I build responsive web apps, create engaging digital experiences, and explore emerging technologies like blockchain and Web3.",
    about: &[
        "I’m a versatile digital professional with experience in front-end web development and content creation. I specialize in building interactive and responsive web applications, while also managing engaging digital communities and producing creative content.",
        "My passion lies in combining technical expertise with effective communication, delivering seamless online experiences, and exploring emerging technologies such as blockchain and Web3. I thrive in collaborative environments where I can contribute both coding skills and digital strategy to achieve impactful results.",
    ],
    contact_blurb: "I’m open to opportunities, projects, collaborations, or just a friendly chat. Reach out and let’s connect!",
    email: "pacuriblau@gmail.com",
};

pub const FACEBOOK_URL: &str = "https://facebook.com/laupacs";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/laurence-ian-pacurib-b17a91160/";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "About",
        section_id: "about",
    },
    NavItem {
        label: "Experience",
        section_id: "experience",
    },
    NavItem {
        label: "Skills",
        section_id: "skills",
    },
];

pub const CONTACT_SECTION_ID: &str = "contact";

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        position: "Digital / Media Creator",
        company: "Social Media Creative",
        date_range: "2021 - 2024",
        summary: "Produced, managed, and optimized content for social media platforms including Facebook, X, and YouTube. Focused on audience engagement and brand storytelling.",
        skills: &[
            "Content Creation",
            "Video Editing",
            "Social Media Management",
            "Copywriting",
        ],
    },
    Experience {
        position: "Front-End Web Developer",
        company: "Visvis Travel and Tours",
        date_range: "2023",
        summary: "Develops engaging and responsive web experiences, translating designs into functional and efficient web applications.",
        skills: &[
            "HTML",
            "CSS",
            "JavaScript",
            "PHP",
            "Responsive and Functional Design",
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Science in Computer Science Major in Application Development",
        school: "University of Makati",
        date_range: "2018 - 2023",
        details: None,
    },
    Education {
        degree: "Technical Vocational Course in Computer Programming",
        school: "University of Makati",
        date_range: "2016 - 2018",
        details: None,
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Technical Expertise",
        tags: &[
            "React",
            "Tailwind CSS",
            "JavaScript",
            "HTML",
            "CSS",
            "Node.js",
            "Git & GitHub",
            "Responsive Design",
            "REST APIs",
            "SQL",
        ],
    },
    SkillGroup {
        title: "Digital & Interpersonal Skills",
        tags: &[
            "Content Creation",
            "Social Media Management",
            "Copywriting",
            "Team Collaboration",
            "Communication",
            "Problem Solving",
            "Time Management",
            "Customer Engagement",
        ],
    },
    SkillGroup {
        title: "Blockchain & Web3 Skills",
        tags: &[
            "DApp QA",
            "Community Management",
            "Blockchain Auditing",
            "DeFi Concepts",
        ],
    },
];

pub fn contact_links() -> Vec<ContactLink> {
    vec![
        ContactLink {
            kind: ContactKind::Email,
            label: "Email",
            href: PROFILE.mailto(),
        },
        ContactLink {
            kind: ContactKind::Facebook,
            label: "Facebook",
            href: FACEBOOK_URL.to_string(),
        },
        ContactLink {
            kind: ContactKind::LinkedIn,
            label: "LinkedIn",
            href: LINKEDIN_URL.to_string(),
        },
    ]
}

pub fn footer_notice(year: u32) -> String {
    format!("© {year} {}. All rights reserved.", PROFILE.footer_owner)
}
