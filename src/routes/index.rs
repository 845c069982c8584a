use askama::Template;
use axum::response::{Html, IntoResponse};
use neonfolio_contact::ContactForm;

use crate::content::{
    self, ContactDetail, Experience, HeroLink, Highlight, Project, Service, SkillCategory,
    SocialLink,
};
use crate::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub hero_name: &'static str,
    pub hero_links: &'static [HeroLink],
    pub highlights: &'static [Highlight],
    pub expertise: &'static [&'static str],
    pub services: &'static [Service],
    pub experiences: &'static [Experience],
    pub projects: &'static [Project],
    pub skill_categories: &'static [SkillCategory],
    pub social_links: &'static [SocialLink],
    pub contact_info: &'static [ContactDetail],
    pub form: ContactForm,
}

impl IndexTemplate {
    /// The portfolio page around a given contact form state.
    pub fn with_form(form: ContactForm) -> Self {
        Self {
            hero_name: content::HERO_NAME,
            hero_links: content::HERO_LINKS,
            highlights: content::ABOUT_HIGHLIGHTS,
            expertise: content::ABOUT_EXPERTISE,
            services: content::SERVICES,
            experiences: content::EXPERIENCES,
            projects: content::PROJECTS,
            skill_categories: content::SKILL_CATEGORIES,
            social_links: content::CONTACT_SOCIAL_LINKS,
            contact_info: content::CONTACT_INFO,
            form,
        }
    }
}

pub async fn page() -> Result<impl IntoResponse, AppError> {
    let template = IndexTemplate::with_form(ContactForm::new());

    Ok(Html(template.render()?))
}
