use super::*;

pub const INDONESIAN: ContentBundle = ContentBundle {
    hero: Hero {
        headline: "Menghubungkan Talenta,",
        headline_accent: "Membangun Kesuksesan",
        description: "Di tengah tantangan rekrutmen yang semakin kompleks mulai dari keterbatasan talenta berkualitas hingga risiko kesalahan penempatan, ACTalent Solutions Partners hadir sebagai mitra strategis yang membantu perusahaan menemukan dan menempatkan talenta secara cepat, tepat, dan selaras dengan kebutuhan bisnis.",
        stats: &[
            Stat { icon: "users", value: "100+", label: "Recruiter Profesional" },
            Stat { icon: "clock", value: "1-2", label: "Minggu Shortlist" },
            Stat { icon: "shield", value: "30-90", label: "Hari Garansi" },
        ],
        cta: "Pelajari Lebih Lanjut",
    },

    about: About {
        title: "Tentang Perusahaan",
        paragraphs: &[
            "ACTalent Solutions Partners lahir dari sebuah visi sederhana: membantu perusahaan kecil dan menengah (UMKM) yang belum memiliki tim Human Resources (HR) internal serta memiliki keterbatasan anggaran dalam proses perekrutan. Kami hadir sebagai solusi praktis untuk menyediakan kandidat berkualitas tanpa harus menanggung biaya besar.",
            "Sebagai Penyedia layanan Recruitment solutions, ACTalent Solutions Partners beroperasi melalui jaringan nasional dengan lebih dari 100 recruiter profesional lintas industri, sehingga memungkinkan proses rekrutmen yang efisien, adaptif, dan selaras dengan kebutuhan bisnis klien.",
        ],
        highlights: &[
            Feature { icon: "building", title: "Untuk UMKM", description: "Solusi HR tanpa tim internal" },
            Feature { icon: "network", title: "Jaringan Nasional", description: "100+ recruiter profesional" },
            Feature { icon: "award", title: "Berkualitas", description: "Proses rekrutmen efisien" },
        ],
    },

    vision_mission: VisionMission {
        vision_title: "Visi",
        vision: "Menjadi mitra rekrutmen strategis yang terpercaya di tingkat nasional dan internasional dalam menghubungkan perusahaan dengan talenta profesional yang tepat melalui proses yang cepat, fleksibel, dan terukur.",
        mission_title: "Misi",
        missions: &[
            "Membantu perusahaan menemukan dan merekrut talenta yang tepat secara kompetensi, karakter, dan kesesuaian dengan kebutuhan bisnis.",
            "Menyediakan proses rekrutmen dan headhunting yang terstruktur, transparan, dan efisien guna mengurangi waktu serta risiko kesalahan perekrutan.",
            "Menjadi mitra strategis klien dalam memenuhi kebutuhan talenta jangka pendek maupun jangka panjang melalui pendekatan profesional dan human-centered.",
            "Mengoptimalkan jaringan profesional dan pemanfaatan teknologi untuk menjangkau kandidat terbaik di pasar tenaga kerja.",
            "Menjaga integritas, kerahasiaan data, dan komitmen terhadap hasil dalam membangun hubungan kemitraan jangka panjang.",
        ],
    },

    values: Values {
        heading: SectionHeading {
            eyebrow: "ACT LENT",
            title: "Nilai-Nilai Perusahaan",
            description: "Nilai-nilai yang menjadi fondasi dalam setiap tindakan dan keputusan kami.",
        },
        items: &[
            ValueItem { letter: "A", icon: "zap", title: "Agility", description: "Responsif dan adaptif terhadap kebutuhan klien dan dinamika pasar tenaga kerja." },
            ValueItem { letter: "C", icon: "heart", title: "Commitment", description: "Berorientasi pada hasil dengan komitmen tinggi terhadap kesuksesan klien." },
            ValueItem { letter: "T", icon: "shield", title: "Trust", description: "Menjunjung integritas, transparansi, dan kerahasiaan dalam setiap proses rekrutmen." },
            ValueItem { letter: "A", icon: "scale", title: "Accountability", description: "Bertanggung jawab penuh atas setiap proses dan hasil rekrutmen yang dijalankan." },
            ValueItem { letter: "L", icon: "book-open", title: "Learning", description: "Terus mengembangkan pengetahuan dan pendekatan rekrutmen agar tetap relevan dengan kebutuhan pasar." },
            ValueItem { letter: "E", icon: "star", title: "Excellent", description: "Menjaga standar kualitas tinggi dalam setiap tahapan layanan rekrutmen." },
            ValueItem { letter: "N", icon: "share", title: "Networking", description: "Membangun dan mengelola jaringan profesional untuk menjangkau talenta yang tepat." },
            ValueItem { letter: "T", icon: "users", title: "Teamwork", description: "Bekerja secara kolaboratif untuk menghasilkan solusi rekrutmen yang optimal." },
        ],
    },

    services: Services {
        heading: SectionHeading {
            eyebrow: "Solusi Rekrutmen",
            title: "Layanan Kami",
            description: "",
        },
        items: &[
            Service {
                icon: "search",
                title: "Headhunter & Executive Search",
                description: "Pendekatan rekrutmen strategis untuk posisi manajerial hingga eksekutif, dilakukan melalui proses pencarian terarah, seleksi mendalam, dan pendekatan personal guna memastikan kecocokan kompetensi dan kepemimpinan.",
                features: &["Posisi Manajerial", "Level Eksekutif", "Seleksi Mendalam"],
            },
            Service {
                icon: "users",
                title: "General Recruitment",
                description: "Solusi rekrutmen untuk posisi operasional hingga level menengah, dengan proses seleksi yang terstruktur dan efisien, disesuaikan dengan kebutuhan dan dinamika organisasi.",
                features: &["Posisi Operasional", "Level Menengah", "Proses Terstruktur"],
            },
            Service {
                icon: "trending-up",
                title: "Mass Hiring",
                description: "Layanan rekrutmen skala besar untuk mendukung ekspansi bisnis dan pertumbuhan organisasi, dengan pendekatan yang cepat, terukur, dan terkontrol secara kualitas.",
                features: &["Skala Besar", "Ekspansi Bisnis", "Kualitas Terkontrol"],
            },
            Service {
                icon: "file-text",
                title: "Contract & Employment Advisory",
                description: "Layanan ini mencakup penyusunan dan review kontrak, konsultasi regulasi ketenagakerjaan, serta pendampingan strategis dalam pengelolaan hubungan kerja untuk meminimalkan risiko dan menjaga stabilitas bisnis.",
                features: &["Penyusunan Kontrak", "Konsultasi Regulasi", "Pendampingan"],
            },
        ],
        cta: "Hubungi Kami",
    },

    advantages: Advantages {
        heading: SectionHeading {
            eyebrow: "Mengapa Memilih Kami",
            title: "Keunggulan Kami",
            description: "",
        },
        items: &[
            Feature {
                icon: "globe",
                title: "Jaringan Nasional",
                description: "Didukung oleh ekosistem nasional yang terdiri dari lebih dari 100 recruiter profesional, memungkinkan proses rekrutmen yang lebih cepat, menjangkau kandidat di berbagai wilayah, dan sesuai dengan kebutuhan klien.",
            },
            Feature {
                icon: "database",
                title: "Database Kandidat Luas",
                description: "Memiliki akses ke basis data kandidat yang beragam dan terus diperbarui, sehingga memudahkan pencarian talenta yang relevan sesuai kompetensi, pengalaman, dan kebutuhan bisnis.",
            },
            Feature {
                icon: "zap",
                title: "Proses Recruitmen Cepat dan Akurat",
                description: "Menggunakan kombinasi pendekatan digital dan personal untuk memastikan proses seleksi berjalan efisien tanpa mengorbankan kualitas dan ketepatan kandidat.",
            },
            Feature {
                icon: "wallet",
                title: "Sistem Biaya Fleksible",
                description: "Menerapkan skema success fee dengan struktur biaya yang kompetitif dan disesuaikan dengan kebutuhan serta skala rekrutmen klien.",
            },
            Feature {
                icon: "handshake",
                title: "Pendekatan Human-Centered",
                description: "Menilai kandidat tidak hanya dari sisi kualifikasi teknis, tetapi juga kesesuaian karakter, budaya kerja, dan nilai dengan organisasi klien.",
            },
        ],
    },

    industries: Industries {
        heading: SectionHeading {
            eyebrow: "Jangkauan Layanan",
            title: "Industri yang Kami Layani",
            description: "Kami melayani berbagai industri di tingkat nasional dan internasional, antara lain:",
        },
        items: &[
            Industry { icon: "factory", name: "Manufaktur & Industri" },
            Industry { icon: "shopping-cart", name: "Retail & FMCG" },
            Industry { icon: "cpu", name: "Teknologi & Startup" },
            Industry { icon: "landmark", name: "Perbankan & Keuangan" },
            Industry { icon: "truck", name: "Logistik & Transportasi" },
            Industry { icon: "megaphone", name: "Marketing, Advertising & Communication" },
            Industry { icon: "heart", name: "Kesehatan & Farmasi" },
            Industry { icon: "graduation-cap", name: "Edukasi & Layanan Profesional" },
        ],
        closing: "Kami telah membantu perusahaan klien dari berbagai sektor membangun tim yang solid, kompeten, dan siap berkembang.",
    },

    workflow: Workflow {
        heading: SectionHeading {
            eyebrow: "Alur Layanan",
            title: "Proses Kerja Kami",
            description: "",
        },
        steps: &[
            Feature {
                icon: "clipboard-list",
                title: "Needs Assessment",
                description: "Penyelarasan kebutuhan posisi, kualifikasi, serta tujuan bisnis klien guna memastikan proses rekrutmen berjalan tepat sasaran.",
            },
            Feature {
                icon: "search",
                title: "Talent Sourcing",
                description: "Pencarian dan penyaringan kandidat melalui jaringan recruiter serta database talenta untuk menemukan kandidat yang paling relevan.",
            },
            Feature {
                icon: "filter",
                title: "Screening & Evaluation",
                description: "Evaluasi kandidat berdasarkan kompetensi, pengalaman, dan kesesuaian budaya dengan kebutuhan organisasi klien.",
            },
            Feature {
                icon: "list-todo",
                title: "Shortlisting & Interview Support",
                description: "Penyampaian daftar kandidat terpilih (shortlist) kepada klien disertai pendampingan selama proses wawancara.",
            },
            Feature {
                icon: "user-check",
                title: "Placement & Follow-Up",
                description: "Dukungan proses penempatan kandidat hingga resmi bergabung, dilengkapi dengan monitoring dan tindak lanjut pasca-rekrutmen.",
            },
        ],
    },

    sla: Sla {
        heading: SectionHeading {
            eyebrow: "Komitmen Kami",
            title: "SLA & Garansi",
            description: "",
        },
        guarantees: &[
            Guarantee {
                icon: "clock",
                title: "Waktu Shortlist",
                description: "Penyampaian shortlist kandidat dilakukan dalam rentang waktu 1-2 minggu setelah kebutuhan rekrutmen disepakati.",
                highlight: "1-2 Minggu",
            },
            Guarantee {
                icon: "refresh",
                title: "Garansi Penggantian",
                description: "Fasilitas penggantian kandidat dengan masa garansi 30-90 hari sejak kandidat bergabung, sesuai dengan skema kerja sama yang disepakati, dengan satu kali penggantian per posisi.",
                highlight: "30-90 Hari",
            },
            Guarantee {
                icon: "dollar",
                title: "Skema Biaya",
                description: "Menerapkan skema Success Fee, dengan struktur yang transparan dan dirancang fleksibel sesuai skema kerja sama yang disepakati.",
                highlight: "Success Fee",
            },
            Guarantee {
                icon: "lock",
                title: "Kerahasiaan Data",
                description: "Seluruh data perusahaan (klien) dan kandidat diperlakukan secara rahasia dan dikelola secara profesional dalam setiap proses rekrutmen.",
                highlight: "100% Rahasia",
            },
        ],
    },

    team: SectionHeading {
        eyebrow: "Struktur Organisasi",
        title: "Tim Kami",
        description: "",
    },

    clients: SectionHeading {
        eyebrow: "Dipercaya Oleh",
        title: "Klien Kami",
        description: "Kami telah bekerja sama dengan berbagai perusahaan dari berbagai industri.",
    },

    contact: Contact {
        heading: SectionHeading {
            eyebrow: "Hubungi Kami",
            title: "Mari Bekerja Sama",
            description: "Siap membantu perusahaan Anda menemukan talenta terbaik. Hubungi kami untuk konsultasi gratis.",
        },
        email_label: "Email",
        address_label: "Alamat",
        tax_id_label: "NPWP",
        cta: "Kirim Pesan",
    },
};
