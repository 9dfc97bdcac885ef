//! Default plan catalog used by the seeding bootstrap.

use once_cell::sync::Lazy;

use super::PlanType;

/// Seed data for one catalog entry.
#[derive(Debug, Clone)]
pub struct PlanSeed {
    pub plan_type: PlanType,
    pub name: &'static str,
    pub price: i64,
    pub duration_months: i32,
    pub features: &'static [&'static str],
    pub is_popular: bool,
}

const BASE_FEATURES: &[&str] = &[
    "Access to our Communication Skills Course",
    "Dedicated Mentorship and Guidance",
    "Monthly Industry-Academia Connect Sessions",
    "Access to Monthly Community Meetups & progress tracking",
    "Course Completion Certificate",
    "Peer Learning Circle via WhatsApp/Telegram",
    "Access to Select Live Events and Webinars",
];

const YEAR_FEATURES: &[&str] = &[
    "Access to our Communication Skills Course",
    "Dedicated Mentorship and Guidance",
    "Monthly Industry-Academia Connect Sessions",
    "Access to Monthly Community Meetups & progress tracking",
    "Course Completion Certificate",
    "Peer Learning Circle via WhatsApp/Telegram",
    "Access to Select Live Events and Webinars",
    "Year-long access to exclusive events",
    "Quarterly One-on-One Mentorship Sessions",
    "Advanced Certification",
    "Behind-the-Scenes Access to Skill Aid Projects",
    "Extended Access to Community Forum and Digital Library",
];

const LIFETIME_FEATURES: &[&str] = &[
    "Access to our Communication Skills Course",
    "Dedicated Mentorship and Guidance",
    "Monthly Industry-Academia Connect Sessions",
    "Access to Monthly Community Meetups & progress tracking",
    "Course Completion Certificate",
    "Peer Learning Circle via WhatsApp/Telegram",
    "Access to Select Live Events and Webinars",
    "Year-long access to exclusive events",
    "Quarterly One-on-One Mentorship Sessions",
    "Advanced Certification",
    "Behind-the-Scenes Access to Skill Aid Projects",
    "Extended Access to Community Forum and Digital Library",
    "Lifetime access to all current and future courses",
    "Lifetime invitations to all events",
    "Premium networking circles",
    "Full access to all recorded masterclasses",
    "Free entry to new Skill Aid initiatives",
    "Lifetime mentorship access",
    "Lifetime Communication Portfolio Development Support",
    "Lifetime Honorary Certificate",
    "Opportunities to co-host, volunteer or collaborate with Skill Aid teams",
];

static DEFAULT_PLANS: Lazy<Vec<PlanSeed>> = Lazy::new(|| {
    vec![
        PlanSeed {
            plan_type: PlanType::SixMonth,
            name: "6-Month Plan",
            price: 6000,
            duration_months: 6,
            features: BASE_FEATURES,
            is_popular: false,
        },
        PlanSeed {
            plan_type: PlanType::OneYear,
            name: "1-Year Plan",
            price: 11000,
            duration_months: 12,
            features: YEAR_FEATURES,
            is_popular: true,
        },
        PlanSeed {
            plan_type: PlanType::Lifetime,
            name: "Lifetime Plan",
            price: 110000,
            duration_months: 0,
            features: LIFETIME_FEATURES,
            is_popular: false,
        },
    ]
});

/// The three catalog entries the membership page launches with.
pub fn default_plans() -> &'static [PlanSeed] {
    &DEFAULT_PLANS
}
