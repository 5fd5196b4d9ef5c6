//! Bilingual (Indonesian / English) marketing site for ACTALENT Solutions
//! Partners: locale negotiation and redirects, server-rendered landing
//! pages, and search metadata.

pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod render;
pub mod seo;
pub mod server;
