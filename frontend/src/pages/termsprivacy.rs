use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

const SITE: &str = "mybenefithelpline.org";
const LAST_UPDATED: &str = "January 2025";

struct LegalSection {
    heading: &'static str,
    paragraphs: &'static [&'static str],
    bullets: &'static [&'static str],
}

const TERMS: &[LegalSection] = &[
    LegalSection {
        heading: "Acceptance of Terms",
        paragraphs: &["By accessing and using this website you accept and agree to be bound by the terms and provisions of this agreement. If you do not agree, please do not use this service."],
        bullets: &[],
    },
    LegalSection {
        heading: "Official Website",
        paragraphs: &[
            "This is the only official website of Auto Benefit Helpline. We have no affiliation with other websites that may look similar or claim to offer similar services.",
            "Warning: beware of fraudulent look-alike websites. We are not responsible for any services, information, or transactions conducted elsewhere.",
        ],
        bullets: &[],
    },
    LegalSection {
        heading: "Service Description",
        paragraphs: &["Auto Benefit Helpline provides information and assistance to help individuals determine their eligibility for auto insurance rate reductions. Our services include:"],
        bullets: &[
            "Eligibility assessment questionnaires",
            "Information about auto insurance savings programs",
            "Connection to licensed insurance agents",
            "Educational resources about auto insurance benefits",
        ],
    },
    LegalSection {
        heading: "Eligibility and Qualifications",
        paragraphs: &["Eligibility depends on factors including age, current insurance status, and payment history. This website provides preliminary assessments only. Final eligibility is determined by licensed insurance agents."],
        bullets: &[],
    },
    LegalSection {
        heading: "No Government Affiliation",
        paragraphs: &["Auto Benefit Helpline is not affiliated with, endorsed by, or connected to any government agency."],
        bullets: &[],
    },
    LegalSection {
        heading: "User Responsibilities",
        paragraphs: &["You agree to:"],
        bullets: &[
            "Provide accurate and truthful information",
            "Use the website only for lawful purposes",
            "Not attempt to gain unauthorized access to any portion of the website",
            "Not use the website in any manner that could damage, disable, or impair it",
        ],
    },
    LegalSection {
        heading: "Limitation of Liability",
        paragraphs: &[
            "Services are provided \"as is\" without warranties of any kind. We do not guarantee that you will qualify for any rate reduction, the accuracy of preliminary assessments, or that the website will be available at all times.",
            "To the fullest extent permitted by law, Auto Benefit Helpline shall not be liable for any indirect, incidental, special, consequential, or punitive damages resulting from your use of the website.",
        ],
        bullets: &[],
    },
    LegalSection {
        heading: "Third-Party Services",
        paragraphs: &["We may connect you with third-party licensed insurance agents. Any agreements you enter into with them are solely between you and those parties."],
        bullets: &[],
    },
    LegalSection {
        heading: "Modifications to Terms",
        paragraphs: &["We may modify these terms at any time. Continued use of the website after changes are posted constitutes acceptance."],
        bullets: &[],
    },
];

const PRIVACY: &[LegalSection] = &[
    LegalSection {
        heading: "Introduction",
        paragraphs: &["This policy explains how Auto Benefit Helpline collects, uses, and protects information when you use this website."],
        bullets: &[],
    },
    LegalSection {
        heading: "Information We Collect",
        paragraphs: &["We collect only what you choose to provide and basic campaign information:"],
        bullets: &[
            "Answers to eligibility questions",
            "ZIP code, age range, and vehicle ownership entered in our forms",
            "Name, phone number, and email when you submit an application",
            "Campaign parameters included in the link that brought you here",
        ],
    },
    LegalSection {
        heading: "How We Use Your Information",
        paragraphs: &["Your answers are used to route your call to an appropriate licensed agent and to measure which of our pages are helpful."],
        bullets: &[],
    },
    LegalSection {
        heading: "Cookies and Local Storage",
        paragraphs: &["Unfinished quote forms are saved in your browser so you can pick up where you left off. The saved draft is removed once you submit."],
        bullets: &[],
    },
    LegalSection {
        heading: "Information Sharing",
        paragraphs: &["Eligibility answers are shared with our call-tracking provider and the licensed agent who takes your call. We do not sell your personal information."],
        bullets: &[],
    },
    LegalSection {
        heading: "Children's Privacy",
        paragraphs: &["This website is not directed at anyone under 18 and we do not knowingly collect information from children."],
        bullets: &[],
    },
    LegalSection {
        heading: "Changes to This Policy",
        paragraphs: &["We may update this policy from time to time. Changes take effect when posted on this page."],
        bullets: &[],
    },
];

fn render_sections(sections: &[LegalSection]) -> Html {
    html! {
        <>
        { for sections.iter().enumerate().map(|(i, section)| html! {
            <section>
                <h2>{format!("{}. {}", i + 1, section.heading)}</h2>
                { for section.paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
                if !section.bullets.is_empty() {
                    <ul>
                        { for section.bullets.iter().map(|b| html! { <li>{*b}</li> }) }
                    </ul>
                }
            </section>
        }) }
        </>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Terms & Conditions"}</h1>
                <p class="legal-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>
                {render_sections(TERMS)}
                <section>
                    <h2>{"Contact Information"}</h2>
                    <p>{format!("Questions about these terms can be sent through the official website at {}.", SITE)}</p>
                </section>
                <Link<Route> to={Route::Home} classes="forward-link">{"Back to home"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Privacy Policy"}</h1>
                <p class="legal-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>
                {render_sections(PRIVACY)}
                <section>
                    <h2>{"Contact Us"}</h2>
                    <p>{format!("For privacy questions, contact us through {}.", SITE)}</p>
                </section>
                <Link<Route> to={Route::Home} classes="forward-link">{"Back to home"}</Link<Route>>
            </div>
        </div>
    }
}
