use super::*;

pub const ENGLISH: ContentBundle = ContentBundle {
    hero: Hero {
        headline: "Connecting Talent,",
        headline_accent: "Building Success",
        description: "In the midst of increasingly complex recruitment challenges, from limited quality talent to placement error risks, ACTalent Solutions Partners emerges as a strategic partner helping companies find and place talent quickly, accurately, and aligned with business needs.",
        stats: &[
            Stat { icon: "users", value: "100+", label: "Professional Recruiters" },
            Stat { icon: "clock", value: "1-2", label: "Weeks Shortlist" },
            Stat { icon: "shield", value: "30-90", label: "Days Guarantee" },
        ],
        cta: "Learn More",
    },

    about: About {
        title: "About Company",
        paragraphs: &[
            "ACTalent Solutions Partners was born from a simple vision: to help small and medium enterprises (SMEs) that don't yet have internal Human Resources (HR) teams and have budget limitations in the recruitment process. We come as a practical solution to provide quality candidates without bearing large costs.",
            "As a Recruitment solutions service provider, ACTalent Solutions Partners operates through a national network with more than 100 professional recruiters across industries, enabling efficient, adaptive recruitment processes aligned with client business needs.",
        ],
        highlights: &[
            Feature { icon: "building", title: "For SMEs", description: "HR solutions without internal teams" },
            Feature { icon: "network", title: "National Network", description: "100+ professional recruiters" },
            Feature { icon: "award", title: "Quality", description: "Efficient recruitment process" },
        ],
    },

    vision_mission: VisionMission {
        vision_title: "Vision",
        vision: "To become a trusted strategic recruitment partner at national and international levels in connecting companies with the right professional talent through fast, flexible, and measurable processes.",
        mission_title: "Mission",
        missions: &[
            "Help companies find and recruit the right talent based on competency, character, and alignment with business needs.",
            "Provide structured, transparent, and efficient recruitment and headhunting processes to reduce time and recruitment error risks.",
            "Become a strategic partner for clients in meeting short-term and long-term talent needs through professional and human-centered approaches.",
            "Optimize professional networks and technology utilization to reach the best candidates in the job market.",
            "Maintain integrity, data confidentiality, and commitment to results in building long-term partnership relationships.",
        ],
    },

    values: Values {
        heading: SectionHeading {
            eyebrow: "ACT LENT",
            title: "Company Values",
            description: "Values that form the foundation of every action and decision we make.",
        },
        items: &[
            ValueItem { letter: "A", icon: "zap", title: "Agility", description: "Responsive and adaptive to client needs and labor market dynamics." },
            ValueItem { letter: "C", icon: "heart", title: "Commitment", description: "Results-oriented with high commitment to client success." },
            ValueItem { letter: "T", icon: "shield", title: "Trust", description: "Upholding integrity, transparency, and confidentiality in every recruitment process." },
            ValueItem { letter: "A", icon: "scale", title: "Accountability", description: "Fully responsible for every recruitment process and result carried out." },
            ValueItem { letter: "L", icon: "book-open", title: "Learning", description: "Continuously developing recruitment knowledge and approaches to remain relevant with market needs." },
            ValueItem { letter: "E", icon: "star", title: "Excellent", description: "Maintaining high quality standards in every stage of recruitment service." },
            ValueItem { letter: "N", icon: "share", title: "Networking", description: "Building and managing professional networks to reach the right talent." },
            ValueItem { letter: "T", icon: "users", title: "Teamwork", description: "Working collaboratively to produce optimal recruitment solutions." },
        ],
    },

    services: Services {
        heading: SectionHeading {
            eyebrow: "Recruitment Solutions",
            title: "Our Services",
            description: "",
        },
        items: &[
            Service {
                icon: "search",
                title: "Headhunter & Executive Search",
                description: "Strategic recruitment approach for managerial to executive positions, conducted through targeted search processes, in-depth selection, and personal approach to ensure competency and leadership fit.",
                features: &["Managerial Positions", "Executive Level", "In-depth Selection"],
            },
            Service {
                icon: "users",
                title: "General Recruitment",
                description: "Recruitment solution for operational to mid-level positions, with structured and efficient selection processes, tailored to organizational needs and dynamics.",
                features: &["Operational Roles", "Mid-level", "Structured Process"],
            },
            Service {
                icon: "trending-up",
                title: "Mass Hiring",
                description: "Large-scale recruitment services to support business expansion and organizational growth, with fast, measurable, and quality-controlled approaches.",
                features: &["Large Scale", "Business Expansion", "Quality Controlled"],
            },
            Service {
                icon: "file-text",
                title: "Contract & Employment Advisory",
                description: "This service includes contract drafting and review, labor regulation consultation, and strategic accompaniment in employment relationship management to minimize risks and maintain business stability.",
                features: &["Contract Drafting", "Regulation Consultation", "Strategic Support"],
            },
        ],
        cta: "Contact Us",
    },

    advantages: Advantages {
        heading: SectionHeading {
            eyebrow: "Why Choose Us",
            title: "Our Advantages",
            description: "",
        },
        items: &[
            Feature {
                icon: "globe",
                title: "National Network",
                description: "Supported by a national ecosystem consisting of more than 100 professional recruiters, enabling faster recruitment processes, reaching candidates in various regions, and aligned with client needs.",
            },
            Feature {
                icon: "database",
                title: "Extensive Candidate Database",
                description: "Has access to diverse and continuously updated candidate databases, making it easier to search for relevant talent according to competency, experience, and business needs.",
            },
            Feature {
                icon: "zap",
                title: "Fast and Accurate Recruitment Process",
                description: "Uses a combination of digital and personal approaches to ensure selection processes run efficiently without sacrificing candidate quality and accuracy.",
            },
            Feature {
                icon: "wallet",
                title: "Flexible Cost System",
                description: "Implements success fee schemes with competitive cost structures tailored to client needs and recruitment scale.",
            },
            Feature {
                icon: "handshake",
                title: "Human-Centered Approach",
                description: "Evaluates candidates not only from technical qualifications but also character fit, work culture, and values with the client organization.",
            },
        ],
    },

    industries: Industries {
        heading: SectionHeading {
            eyebrow: "Service Coverage",
            title: "Industries We Serve",
            description: "We serve various industries at national and international levels, including:",
        },
        items: &[
            Industry { icon: "factory", name: "Manufacturing & Industry" },
            Industry { icon: "shopping-cart", name: "Retail & FMCG" },
            Industry { icon: "cpu", name: "Technology & Startup" },
            Industry { icon: "landmark", name: "Banking & Finance" },
            Industry { icon: "truck", name: "Logistics & Transportation" },
            Industry { icon: "megaphone", name: "Marketing, Advertising & Communication" },
            Industry { icon: "heart", name: "Health & Pharmacy" },
            Industry { icon: "graduation-cap", name: "Education & Professional Services" },
        ],
        closing: "We have helped client companies from various sectors build solid, competent, and ready-to-grow teams.",
    },

    workflow: Workflow {
        heading: SectionHeading {
            eyebrow: "Service Flow",
            title: "Our Workflow",
            description: "",
        },
        steps: &[
            Feature {
                icon: "clipboard-list",
                title: "Needs Assessment",
                description: "Alignment of position needs, qualifications, and client business objectives to ensure recruitment processes run on target.",
            },
            Feature {
                icon: "search",
                title: "Talent Sourcing",
                description: "Searching and screening candidates through recruiter networks and talent databases to find the most relevant candidates.",
            },
            Feature {
                icon: "filter",
                title: "Screening & Evaluation",
                description: "Evaluating candidates based on competency, experience, and cultural fit with client organizational needs.",
            },
            Feature {
                icon: "list-todo",
                title: "Shortlisting & Interview Support",
                description: "Delivering the selected candidate list (shortlist) to clients accompanied by support during the interview process.",
            },
            Feature {
                icon: "user-check",
                title: "Placement & Follow-Up",
                description: "Supporting the candidate placement process until officially joining, equipped with monitoring and post-recruitment follow-up.",
            },
        ],
    },

    sla: Sla {
        heading: SectionHeading {
            eyebrow: "Our Commitment",
            title: "SLA & Guarantee",
            description: "",
        },
        guarantees: &[
            Guarantee {
                icon: "clock",
                title: "Shortlist Timeline",
                description: "Candidate shortlist delivery is done within 1-2 weeks after recruitment needs are agreed upon.",
                highlight: "1-2 Weeks",
            },
            Guarantee {
                icon: "refresh",
                title: "Replacement Guarantee",
                description: "Candidate replacement facility with a 30-90 day guarantee period since the candidate joined, according to the agreed cooperation scheme, with one replacement per position.",
                highlight: "30-90 Days",
            },
            Guarantee {
                icon: "dollar",
                title: "Cost Scheme",
                description: "Implements Success Fee schemes, with transparent structures designed flexibly according to the agreed cooperation scheme.",
                highlight: "Success Fee",
            },
            Guarantee {
                icon: "lock",
                title: "Data Confidentiality",
                description: "All company (client) and candidate data is treated confidentially and managed professionally in every recruitment process.",
                highlight: "100% Confidential",
            },
        ],
    },

    team: SectionHeading {
        eyebrow: "Organizational Structure",
        title: "Our Team",
        description: "",
    },

    clients: SectionHeading {
        eyebrow: "Trusted By",
        title: "Our Clients",
        description: "We have collaborated with various companies from different industries.",
    },

    contact: Contact {
        heading: SectionHeading {
            eyebrow: "Contact Us",
            title: "Let's Work Together",
            description: "Ready to help your company find the best talent. Contact us for a free consultation.",
        },
        email_label: "Email",
        address_label: "Address",
        tax_id_label: "Tax ID",
        cta: "Send Message",
    },
};
