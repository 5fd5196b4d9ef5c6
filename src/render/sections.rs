//! Landing page sections, in page order.

use std::fmt::Write;

use super::{escape_html, PageContext};
use crate::animation::{
    masonry_delay, CounterTarget, Ease, Preset, SectionId, DEFAULT_PARALLAX_SPEED,
};
use crate::content::{bundle, ContentBundle, SectionHeading, CLIENTS, CONTACT_INFO, TEAM};
use crate::error::SiteError;
use crate::i18n::LocaleStrings;

type RenderResult = Result<(), SiteError>;

pub(super) fn render_sections(html: &mut String, ctx: &PageContext<'_>) -> RenderResult {
    let content = bundle(ctx.locale);
    let strings = LocaleStrings::for_locale(ctx.locale);

    hero(html, ctx, content)?;
    about(html, ctx, content, strings)?;
    vision_mission(html, ctx, content)?;
    values(html, ctx, content)?;
    services(html, ctx, content)?;
    advantages(html, ctx, content)?;
    industries(html, ctx, content)?;
    workflow(html, ctx, content, strings)?;
    sla(html, ctx, content)?;
    team(html, ctx, content)?;
    clients(html, ctx, content)?;
    contact(html, ctx, content, strings)?;
    Ok(())
}

/// Eyebrow, title and optional lead paragraph, staggered as three children.
fn heading(
    html: &mut String,
    ctx: &PageContext<'_>,
    section: SectionId,
    heading: &SectionHeading,
) -> RenderResult {
    let profile = &ctx.profile;
    writeln!(html, "<header class=\"section-heading\">")?;
    writeln!(
        html,
        "<span class=\"eyebrow\"{}>{}</span>",
        section.entrance(Preset::FadeInUp, 0).attrs(profile),
        escape_html(heading.eyebrow)
    )?;
    writeln!(
        html,
        "<h2{}>{}</h2>",
        section.entrance(Preset::FadeInUp, 1).attrs(profile),
        escape_html(heading.title)
    )?;
    if !heading.description.is_empty() {
        writeln!(
            html,
            "<p class=\"lead\"{}>{}</p>",
            section.entrance(Preset::FadeInUp, 2).attrs(profile),
            escape_html(heading.description)
        )?;
    }
    writeln!(html, "</header>")?;
    Ok(())
}

fn hero(html: &mut String, ctx: &PageContext<'_>, content: &ContentBundle) -> RenderResult {
    let profile = &ctx.profile;
    let hero = &content.hero;
    let section = SectionId::Hero;

    writeln!(html, "<section id=\"{}\" class=\"hero\">", section.anchor())?;
    if profile.reduced_motion {
        writeln!(html, "<div class=\"hero-backdrop\"></div>")?;
    } else {
        writeln!(
            html,
            "<div class=\"hero-backdrop\" data-parallax=\"{}\"></div>",
            DEFAULT_PARALLAX_SPEED
        )?;
    }
    writeln!(
        html,
        "<h1{}>{}<br><span class=\"accent\">{}</span></h1>",
        section
            .entrance(Preset::FadeInUp, 0)
            .with_ease(Ease::SIGNATURE)
            .attrs(profile),
        escape_html(hero.headline),
        escape_html(hero.headline_accent)
    )?;
    writeln!(
        html,
        "<p class=\"hero-description\"{}>{}</p>",
        section
            .entrance(Preset::FadeInUp, 1)
            .with_ease(Ease::SIGNATURE)
            .attrs(profile),
        escape_html(hero.description)
    )?;
    writeln!(
        html,
        "<a class=\"cta\" href=\"#{}\"{}>{}</a>",
        SectionId::About.anchor(),
        section.entrance(Preset::FadeInUp, 2).attrs(profile),
        escape_html(hero.cta)
    )?;

    writeln!(html, "<div class=\"stats\">")?;
    for (index, stat) in hero.stats.iter().enumerate() {
        let counter = match CounterTarget::parse(stat.value) {
            Some(target) if !profile.reduced_motion => format!(
                " data-count-to=\"{}\" data-count-suffix=\"{}\"",
                target.end,
                escape_html(target.suffix)
            ),
            _ => String::new(),
        };
        writeln!(
            html,
            "<div class=\"stat\" data-icon=\"{}\"{}><div class=\"stat-value\"{}>{}</div><div class=\"stat-label\">{}</div></div>",
            stat.icon,
            section.entrance(Preset::StaggerItem, index + 3).attrs(profile),
            counter,
            escape_html(stat.value),
            escape_html(stat.label)
        )?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn about(
    html: &mut String,
    ctx: &PageContext<'_>,
    content: &ContentBundle,
    strings: &LocaleStrings,
) -> RenderResult {
    let profile = &ctx.profile;
    let about = &content.about;
    let section = SectionId::About;

    writeln!(html, "<section id=\"{}\" class=\"about\">", section.anchor())?;
    writeln!(html, "<header class=\"section-heading\">")?;
    writeln!(
        html,
        "<span class=\"eyebrow\"{}>{}</span>",
        section.entrance(Preset::FadeInLeft, 0).attrs(profile),
        escape_html(strings.about_eyebrow)
    )?;
    writeln!(
        html,
        "<h2{}>{}</h2>",
        section.entrance(Preset::FadeInLeft, 1).attrs(profile),
        escape_html(about.title)
    )?;
    writeln!(html, "</header>")?;

    for (index, paragraph) in about.paragraphs.iter().enumerate() {
        writeln!(
            html,
            "<p{}>{}</p>",
            section.entrance(Preset::FadeInLeft, index + 2).attrs(profile),
            escape_html(paragraph)
        )?;
    }

    writeln!(html, "<ul class=\"highlights\">")?;
    for (index, item) in about.highlights.iter().enumerate() {
        writeln!(
            html,
            "<li data-icon=\"{}\"{}><strong>{}</strong> <span>{}</span></li>",
            item.icon,
            section.entrance(Preset::FadeInRight, index).attrs(profile),
            escape_html(item.title),
            escape_html(item.description)
        )?;
    }
    writeln!(html, "</ul>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn vision_mission(html: &mut String, ctx: &PageContext<'_>, content: &ContentBundle) -> RenderResult {
    let profile = &ctx.profile;
    let vm = &content.vision_mission;
    let section = SectionId::VisionMission;

    writeln!(html, "<section id=\"{}\" class=\"vision-mission\">", section.anchor())?;
    writeln!(
        html,
        "<article class=\"vision\"{}><h2>{}</h2><p>{}</p></article>",
        section.entrance(Preset::FlipIn, 0).attrs(profile),
        escape_html(vm.vision_title),
        escape_html(vm.vision)
    )?;
    writeln!(
        html,
        "<article class=\"mission\"{}><h2>{}</h2>",
        section.entrance(Preset::FlipIn, 1).attrs(profile),
        escape_html(vm.mission_title)
    )?;
    writeln!(html, "<ol>")?;
    for (index, mission) in vm.missions.iter().enumerate() {
        writeln!(
            html,
            "<li{}>{}</li>",
            section.entrance(Preset::StaggerItem, index + 2).attrs(profile),
            escape_html(mission)
        )?;
    }
    writeln!(html, "</ol>")?;
    writeln!(html, "</article>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn values(html: &mut String, ctx: &PageContext<'_>, content: &ContentBundle) -> RenderResult {
    let section = SectionId::Values;

    writeln!(html, "<section id=\"{}\" class=\"values\">", section.anchor())?;
    heading(html, ctx, section, &content.values.heading)?;
    writeln!(html, "<div class=\"value-grid\">")?;
    for (index, item) in content.values.items.iter().enumerate() {
        writeln!(
            html,
            "<div class=\"value-card\" data-icon=\"{}\"{}><span class=\"letter\">{}</span><h3>{}</h3><p>{}</p></div>",
            item.icon,
            section.entrance(Preset::ScaleIn, index).attrs(&ctx.profile),
            escape_html(item.letter),
            escape_html(item.title),
            escape_html(item.description)
        )?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn services(html: &mut String, ctx: &PageContext<'_>, content: &ContentBundle) -> RenderResult {
    let section = SectionId::Services;
    let services = &content.services;

    writeln!(html, "<section id=\"{}\" class=\"services\">", section.anchor())?;
    heading(html, ctx, section, &services.heading)?;
    writeln!(html, "<div class=\"service-grid\">")?;
    for (index, service) in services.items.iter().enumerate() {
        writeln!(
            html,
            "<article class=\"service-card\" data-icon=\"{}\"{}>",
            service.icon,
            section.entrance(Preset::FadeInUp, index).attrs(&ctx.profile)
        )?;
        writeln!(html, "<h3>{}</h3>", escape_html(service.title))?;
        writeln!(html, "<p>{}</p>", escape_html(service.description))?;
        writeln!(html, "<ul>")?;
        for feature in service.features {
            writeln!(html, "<li>{}</li>", escape_html(feature))?;
        }
        writeln!(html, "</ul>")?;
        writeln!(html, "</article>")?;
    }
    writeln!(html, "</div>")?;
    writeln!(
        html,
        "<a class=\"cta\" href=\"#{}\">{}</a>",
        SectionId::Contact.anchor(),
        escape_html(services.cta)
    )?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn advantages(html: &mut String, ctx: &PageContext<'_>, content: &ContentBundle) -> RenderResult {
    let section = SectionId::Advantages;

    writeln!(html, "<section id=\"{}\" class=\"advantages\">", section.anchor())?;
    heading(html, ctx, section, &content.advantages.heading)?;
    writeln!(html, "<div class=\"advantage-grid\">")?;
    for (index, item) in content.advantages.items.iter().enumerate() {
        let preset = if index % 2 == 0 {
            Preset::FadeInLeft
        } else {
            Preset::FadeInRight
        };
        writeln!(
            html,
            "<div class=\"advantage\" data-icon=\"{}\"{}><h3>{}</h3><p>{}</p></div>",
            item.icon,
            section.entrance(preset, index).attrs(&ctx.profile),
            escape_html(item.title),
            escape_html(item.description)
        )?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn industries(html: &mut String, ctx: &PageContext<'_>, content: &ContentBundle) -> RenderResult {
    let section = SectionId::Industries;
    let industries = &content.industries;

    writeln!(html, "<section id=\"{}\" class=\"industries\">", section.anchor())?;
    heading(html, ctx, section, &industries.heading)?;
    writeln!(html, "<div class=\"industry-grid\">")?;
    for (index, industry) in industries.items.iter().enumerate() {
        let entrance = section
            .entrance(Preset::ScaleIn, 0)
            .with_delay(masonry_delay(index))
            .with_ease(Ease::SIGNATURE);
        writeln!(
            html,
            "<div class=\"industry\" data-icon=\"{}\"{}>{}</div>",
            industry.icon,
            entrance.attrs(&ctx.profile),
            escape_html(industry.name)
        )?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "<p class=\"closing\">{}</p>", escape_html(industries.closing))?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn workflow(
    html: &mut String,
    ctx: &PageContext<'_>,
    content: &ContentBundle,
    strings: &LocaleStrings,
) -> RenderResult {
    let section = SectionId::Workflow;

    writeln!(html, "<section id=\"{}\" class=\"workflow\">", section.anchor())?;
    heading(html, ctx, section, &content.workflow.heading)?;
    writeln!(html, "<ol class=\"steps\">")?;
    for (index, step) in content.workflow.steps.iter().enumerate() {
        writeln!(
            html,
            "<li class=\"step\" data-icon=\"{}\"{}><span class=\"step-number\">{} {}</span><h3>{}</h3><p>{}</p></li>",
            step.icon,
            section.entrance(Preset::FadeInUp, index).attrs(&ctx.profile),
            escape_html(strings.workflow_step),
            index + 1,
            escape_html(step.title),
            escape_html(step.description)
        )?;
    }
    writeln!(html, "</ol>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn sla(html: &mut String, ctx: &PageContext<'_>, content: &ContentBundle) -> RenderResult {
    let section = SectionId::Sla;

    writeln!(html, "<section id=\"{}\" class=\"sla\">", section.anchor())?;
    heading(html, ctx, section, &content.sla.heading)?;
    writeln!(html, "<div class=\"guarantee-grid\">")?;
    for (index, guarantee) in content.sla.guarantees.iter().enumerate() {
        writeln!(
            html,
            "<div class=\"guarantee\" data-icon=\"{}\"{}><span class=\"highlight\">{}</span><h3>{}</h3><p>{}</p></div>",
            guarantee.icon,
            section.entrance(Preset::ScaleIn, index).attrs(&ctx.profile),
            escape_html(guarantee.highlight),
            escape_html(guarantee.title),
            escape_html(guarantee.description)
        )?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn team(html: &mut String, ctx: &PageContext<'_>, content: &ContentBundle) -> RenderResult {
    let section = SectionId::Team;

    writeln!(html, "<section id=\"{}\" class=\"team\">", section.anchor())?;
    heading(html, ctx, section, &content.team)?;
    writeln!(html, "<div class=\"team-grid\">")?;
    for (index, member) in TEAM.iter().enumerate() {
        writeln!(
            html,
            "<figure class=\"member\"{}><img src=\"{}\" alt=\"{}\" loading=\"lazy\"><figcaption><strong>{}</strong> <span>{}</span></figcaption></figure>",
            section.entrance(Preset::FadeInUp, index).attrs(&ctx.profile),
            escape_html(member.image),
            escape_html(member.name),
            escape_html(member.name),
            escape_html(member.position.get(ctx.locale))
        )?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn clients(html: &mut String, ctx: &PageContext<'_>, content: &ContentBundle) -> RenderResult {
    let section = SectionId::Clients;

    writeln!(html, "<section id=\"{}\" class=\"clients\">", section.anchor())?;
    heading(html, ctx, section, &content.clients)?;
    writeln!(
        html,
        "<div class=\"marquee\"{}>",
        section.entrance(Preset::FadeInUp, 0).attrs(&ctx.profile)
    )?;
    writeln!(html, "<div class=\"marquee-track\">")?;
    // Second copy makes the loop seamless; hidden from assistive tech.
    for hidden in [false, true] {
        for client in CLIENTS {
            writeln!(
                html,
                "<img class=\"client-logo\" src=\"{}\" alt=\"{}\" loading=\"lazy\"{}>",
                escape_html(client.logo),
                escape_html(if hidden { "" } else { client.name }),
                if hidden { " aria-hidden=\"true\"" } else { "" }
            )?;
        }
    }
    writeln!(html, "</div>")?;
    writeln!(html, "</div>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

fn contact(
    html: &mut String,
    ctx: &PageContext<'_>,
    content: &ContentBundle,
    strings: &LocaleStrings,
) -> RenderResult {
    let section = SectionId::Contact;
    let contact = &content.contact;
    let profile = &ctx.profile;

    writeln!(html, "<section id=\"{}\" class=\"contact\">", section.anchor())?;
    heading(html, ctx, section, &contact.heading)?;

    writeln!(html, "<dl class=\"contact-details\"{}>", section.entrance(Preset::FadeInUp, 3).attrs(profile))?;
    writeln!(
        html,
        "<dt>{}</dt><dd><a href=\"mailto:{}\">{}</a></dd>",
        escape_html(contact.email_label),
        escape_html(CONTACT_INFO.email),
        escape_html(CONTACT_INFO.email)
    )?;
    writeln!(
        html,
        "<dt>{}</dt><dd>{}<br>{}</dd>",
        escape_html(contact.address_label),
        escape_html(CONTACT_INFO.legal_name),
        escape_html(CONTACT_INFO.address)
    )?;
    writeln!(
        html,
        "<dt>{}</dt><dd>{}</dd>",
        escape_html(contact.tax_id_label),
        escape_html(CONTACT_INFO.tax_id)
    )?;
    writeln!(html, "</dl>")?;

    writeln!(html, "<div class=\"contact-form\"{}>", section.entrance(Preset::ScaleIn, 4).attrs(profile))?;
    writeln!(html, "<p class=\"form-hint\">{}</p>", escape_html(strings.contact_form_hint))?;
    writeln!(
        html,
        "<iframe src=\"{}\" title=\"{}\" width=\"100%\" height=\"500\" loading=\"lazy\"></iframe>",
        escape_html(CONTACT_INFO.form_embed_url),
        escape_html(strings.contact_form_title)
    )?;
    writeln!(
        html,
        "<p class=\"form-provider\">{} <a href=\"{}\" rel=\"noopener\" target=\"_blank\">Tally</a></p>",
        escape_html(strings.powered_by),
        escape_html(CONTACT_INFO.form_provider_url)
    )?;
    writeln!(html, "</div>")?;
    writeln!(html, "</section>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::MotionProfile;
    use crate::config::Config;
    use crate::i18n::Locale;

    fn render_into(locale: Locale, profile: MotionProfile) -> String {
        let config = Config::default();
        let ctx = PageContext {
            locale,
            config: &config,
            profile,
            year: 2026,
        };
        let mut html = String::new();
        render_sections(&mut html, &ctx).unwrap();
        html
    }

    #[test]
    fn test_industries_use_masonry_delays() {
        let html = render_into(Locale::En, MotionProfile::default());
        let industries = &html[html.find("id=\"industries\"").unwrap()..html.find("id=\"workflow\"").unwrap()];
        assert!(industries.contains("data-delay=\"0.08\""));
        assert!(industries.contains("data-delay=\"0.14\""));
        assert!(industries.contains("data-ease=\"cubic-bezier(0.22, 1, 0.36, 1)\""));
    }

    #[test]
    fn test_workflow_steps_are_numbered() {
        let html = render_into(Locale::Id, MotionProfile::default());
        assert!(html.contains("Langkah 1"));
        let steps = bundle(Locale::Id).workflow.steps.len();
        assert!(html.contains(&format!("Langkah {}", steps)));
    }

    #[test]
    fn test_contact_embeds_form() {
        let html = render_into(Locale::En, MotionProfile::default());
        assert!(html.contains("https://tally.so/embed/w7Y6XX?alignLeft=1&amp;hideTitle=1&amp;transparentBackground=1"));
        assert!(html.contains("mailto:actalentsolutionspartners@gmail.com"));
    }

    #[test]
    fn test_range_stats_are_not_counters() {
        let html = render_into(Locale::En, MotionProfile::default());
        assert_eq!(html.matches("data-count-to").count(), 1);
        assert!(html.contains(">30-90<"));
    }

    #[test]
    fn test_hero_parallax_respects_reduced_motion() {
        let animated = render_into(Locale::En, MotionProfile::default());
        assert!(animated.contains("data-parallax=\"0.3\""));

        let reduced = render_into(
            Locale::En,
            MotionProfile {
                mobile: false,
                reduced_motion: true,
            },
        );
        assert!(!reduced.contains("data-parallax"));
    }

    #[test]
    fn test_no_testimonials_section() {
        for locale in Locale::ALL {
            let html = render_into(locale, MotionProfile::default());
            assert!(!html.contains("id=\"testimonials\""));
            assert!(!html.contains("testimonial"));
        }
    }
}
