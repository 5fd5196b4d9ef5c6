//! Bilingual content tables for the landing page.
//!
//! Every section has one localized table per locale (`id.rs`, `en.rs`).
//! Records that are the same in both locales (team, clients, contact
//! details) live in `shared.rs`. All of it is compiled in and never
//! mutated.

mod en;
mod id;
mod shared;

pub use shared::{Client, ContactInfo, Localized, TeamMember, CLIENTS, CONTACT_INFO, TEAM};

use crate::i18n::{Locale, LocaleStrings};
use serde::Serialize;

/// Icon, title and description. Used by About highlights, Advantages and Workflow.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline figure such as "100+ Professional Recruiters".
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

/// Eyebrow, title and optional description shown above a section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
    /// Empty when the section has no lead paragraph
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hero {
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub description: &'static str,
    pub stats: &'static [Stat],
    pub cta: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct About {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub highlights: &'static [Feature],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VisionMission {
    pub vision_title: &'static str,
    pub vision: &'static str,
    pub mission_title: &'static str,
    pub missions: &'static [&'static str],
}

/// One letter of the ACTALENT acronym.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValueItem {
    pub letter: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Values {
    pub heading: SectionHeading,
    pub items: &'static [ValueItem],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Services {
    pub heading: SectionHeading,
    pub items: &'static [Service],
    pub cta: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Advantages {
    pub heading: SectionHeading,
    pub items: &'static [Feature],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Industry {
    pub icon: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Industries {
    pub heading: SectionHeading,
    pub items: &'static [Industry],
    pub closing: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Workflow {
    pub heading: SectionHeading,
    pub steps: &'static [Feature],
}

/// A service-level commitment with its headline figure.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Guarantee {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Sla {
    pub heading: SectionHeading,
    pub guarantees: &'static [Guarantee],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contact {
    pub heading: SectionHeading,
    pub email_label: &'static str,
    pub address_label: &'static str,
    pub tax_id_label: &'static str,
    pub cta: &'static str,
}

/// All localized copy for one locale, one field per page section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContentBundle {
    pub hero: Hero,
    pub about: About,
    pub vision_mission: VisionMission,
    pub values: Values,
    pub services: Services,
    pub advantages: Advantages,
    pub industries: Industries,
    pub workflow: Workflow,
    pub sla: Sla,
    pub team: SectionHeading,
    pub clients: SectionHeading,
    pub contact: Contact,
}

/// The content bundle for a locale.
pub fn bundle(locale: Locale) -> &'static ContentBundle {
    match locale {
        Locale::Id => &id::INDONESIAN,
        Locale::En => &en::ENGLISH,
    }
}

/// A team member with their position resolved for one locale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocalizedMember {
    pub name: &'static str,
    pub position: &'static str,
    pub image: &'static str,
}

/// Everything the page renders for one locale, as served by the content API.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    pub locale: Locale,
    pub strings: &'static LocaleStrings,
    pub sections: &'static ContentBundle,
    pub team: Vec<LocalizedMember>,
    pub clients: &'static [Client],
    pub contact: &'static ContactInfo,
}

impl PageContent {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            strings: LocaleStrings::for_locale(locale),
            sections: bundle(locale),
            team: TEAM
                .iter()
                .map(|member| LocalizedMember {
                    name: member.name,
                    position: member.position.get(locale),
                    image: member.image,
                })
                .collect(),
            clients: CLIENTS,
            contact: &CONTACT_INFO,
        }
    }
}
