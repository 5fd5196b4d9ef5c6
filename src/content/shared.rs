//! Records that read the same in both locales.

use crate::i18n::Locale;
use serde::Serialize;

/// A value with one variant per locale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Localized<T> {
    pub id: T,
    pub en: T,
}

impl<T: Copy> Localized<T> {
    pub fn get(&self, locale: Locale) -> T {
        match locale {
            Locale::Id => self.id,
            Locale::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub position: Localized<&'static str>,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Client {
    pub name: &'static str,
    pub logo: &'static str,
}

/// Company contact details and the embedded contact form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactInfo {
    pub company_name: &'static str,
    pub legal_name: &'static str,
    pub email: &'static str,
    pub telephone: &'static str,
    pub address: &'static str,
    pub tax_id: &'static str,
    pub form_embed_url: &'static str,
    pub form_provider_url: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    company_name: "ACTALENT Solutions Partners",
    legal_name: "PT ACTALENT SOLUTIONS PARTNERS",
    email: "actalentsolutionspartners@gmail.com",
    telephone: "+62-812-3456-7890",
    address: "Jl Cilenggang II, Kec. Serpong, Kota Tangerang Selatan, Indonesia",
    tax_id: "1000 0000 0618 2783",
    form_embed_url: "https://tally.so/embed/w7Y6XX?alignLeft=1&hideTitle=1&transparentBackground=1",
    form_provider_url: "https://tally.so",
};

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Audria Cahya Tari",
        position: Localized { id: "Founder & Director", en: "Founder & Director" },
        image: "/team/act-profile-audria.jpeg",
    },
    TeamMember {
        name: "Apriliyana Nur Rafiani",
        position: Localized { id: "Head of Legal", en: "Head of Legal" },
        image: "/team/act-profile-apriliyana.jpeg",
    },
    TeamMember {
        name: "Tabah Reksa Rizki",
        position: Localized { id: "HR Manager", en: "HR Manager" },
        image: "/team/act-profile-tabah.jpeg",
    },
    TeamMember {
        name: "Fikri Satria Nugraha",
        position: Localized { id: "Project Manager", en: "Project Manager" },
        image: "/team/act-profile-fikri.jpeg",
    },
    TeamMember {
        name: "Audina Sarah Suciati",
        position: Localized { id: "Head of Finance & Tax", en: "Head of Finance & Tax" },
        image: "/team/act-profile-audina.png",
    },
];

pub static CLIENTS: &[Client] = &[
    Client { name: "ITF", logo: "/clients/act-client-itf.jpeg" },
    Client { name: "Skillventory", logo: "/clients/act-client-skillventory.jpeg" },
    Client { name: "MKIT", logo: "/clients/act-client-mkit.jpeg" },
    Client { name: "KARTINIS", logo: "/clients/act-client-kartinis.PNG" },
    Client { name: "PT VELLIA KANDI", logo: "/clients/act-client-vellia.jpeg" },
    Client { name: "Kata Kala", logo: "/clients/act-client-kata-kala.jpeg" },
    Client { name: "EHI", logo: "/clients/act-client-goat.jpeg" },
    Client { name: "PT INDOBRIZ", logo: "/clients/act-client-indobriz.jpeg" },
    Client { name: "DHT", logo: "/clients/act-client-dht.jpeg" },
    Client { name: "Mawfeeq", logo: "/clients/act-client-mawfeeq.jpeg" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_get() {
        let value = Localized { id: "Halo", en: "Hello" };
        assert_eq!(value.get(Locale::Id), "Halo");
        assert_eq!(value.get(Locale::En), "Hello");
    }

    #[test]
    fn test_team_images_are_local() {
        assert!(TEAM.iter().all(|member| member.image.starts_with("/team/")));
    }
}
