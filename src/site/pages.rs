
use super::routes::Page;
use crate::reveal::{RevealObserver, ToggleActions};

/// Nominal vertical distance between page sections, used to place reveal targets.
pub const SECTION_SPACING: f64 = 640.0;

pub struct PageContent {
    pub title: &'static str,
    pub heading: &'static str,
    pub lead: &'static str,
    /// Only the home hero plays once; everything else reverses.
    pub hero_toggle: ToggleActions,
    pub sections: &'static [Section],
}

pub struct Section {
    pub id: &'static str,
    pub heading: &'static str,
}

const fn section(id: &'static str, heading: &'static str) -> Section {
    Section { id, heading }
}

static HOME: PageContent = PageContent {
    title: "Home",
    heading: "Build real skills.",
    lead: "Entrepreneurship workshops for young people: practical projects, real feedback, and skills that last.",
    hero_toggle: ToggleActions::PlayOnce,
    sections: &[
        section("learn", "Learn by building."),
        section("programs", "Choose your track."),
        section("age-tracks", "A pathway for every age."),
        section("curriculum", "Real-world topics."),
    ],
};

static ABOUT: PageContent = PageContent {
    title: "About",
    heading: "About Young Entrepreneurs Hub",
    lead: "We're on a mission to empower the next generation with the skills, mindset, and confidence to turn their ideas into reality.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &[
        section("mission", "Our Mission"),
        section("values", "Our Values"),
        section("team", "Meet Our Team"),
        section("story", "Our Story"),
    ],
};

static PROGRAMS: PageContent = PageContent {
    title: "Programs",
    heading: "Our Programs",
    lead: "Two levels designed to meet students where they are and take them where they want to go.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &[
        section("included", "What's Included"),
        section("structure", "Program Structure"),
        section("which-program", "Not sure which program is right?"),
    ],
};

static PROGRAMS_AGES_7_11: PageContent = PageContent {
    title: "Ages 7-11",
    heading: "Programs for Ages 7–11",
    lead: "Games, stories, and hands-on builds that introduce young minds to the exciting world of entrepreneurship.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &[
        section("learn", "What They'll Learn"),
        section("breakdown", "Curriculum Breakdown"),
        section("skills", "Skills Developed"),
        section("cta", "Ready to spark their creativity?"),
    ],
};

static PROGRAMS_AGES_12_16: PageContent = PageContent {
    title: "Ages 12-16",
    heading: "Programs for Ages 12–16",
    lead: "Build a product, pitch it, and iterate. Our advanced program gives teens the tools and experience to turn their ideas into real ventures.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &[
        section("learn", "What They'll Learn"),
        section("breakdown", "Curriculum Breakdown"),
        section("skills", "Skills Developed"),
        section("cta", "Ready to turn ideas into reality?"),
    ],
};

static CURRICULUM: PageContent = PageContent {
    title: "Curriculum",
    heading: "Our Curriculum",
    lead: "From idea to launch, covering the skills that matter for the challenges and opportunities of the modern world.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &[
        section("subjects", "Core Subjects"),
        section("approach", "Our Teaching Approach"),
        section("skills", "Skills Framework"),
        section("explore", "Explore our subjects in depth"),
    ],
};

static SUBJECT_SECTIONS: [Section; 3] = [
    section("topics", "Topics Covered"),
    section("outcomes", "Learning Outcomes"),
    section("projects", "Sample Projects"),
];

static CURRICULUM_ENTREPRENEURSHIP: PageContent = PageContent {
    title: "Entrepreneurship",
    heading: "Entrepreneurship",
    lead: "Spot opportunities, validate ideas, plan a launch. Students learn how to turn their ideas into real ventures.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &SUBJECT_SECTIONS,
};

static CURRICULUM_ECONOMICS: PageContent = PageContent {
    title: "Economics",
    heading: "Economics",
    lead: "Money, markets, and decisions. Students learn how prices, budgets, and trade shape the ventures they build.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &SUBJECT_SECTIONS,
};

static CURRICULUM_MARKETING: PageContent = PageContent {
    title: "Marketing",
    heading: "Marketing",
    lead: "Messaging, audience, and simple campaigns. Students learn how to communicate value and connect with customers.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &SUBJECT_SECTIONS,
};

static CURRICULUM_DESIGN_THINKING: PageContent = PageContent {
    title: "Design Thinking",
    heading: "Design Thinking",
    lead: "Research, prototype, test, improve. A human-centered approach to solving complex problems creatively.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &[
        section("phases", "The 5 Phases"),
        section("outcomes", "Learning Outcomes"),
        section("projects", "Sample Projects"),
    ],
};

static PARENTS: PageContent = PageContent {
    title: "For Parents",
    heading: "Built for real life.",
    lead: "Clear schedules, easy booking, and progress updates you can actually read.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &[
        section("features", "Parent-Friendly Features"),
        section("testimonials", "What Parents Say"),
        section("faq", "Common Questions"),
        section("questions", "Still have questions?"),
    ],
};

static SCHOOLS: PageContent = PageContent {
    title: "For Schools",
    heading: "Bring it to your school.",
    lead: "Term-time programs, holiday intensives, and teacher resources designed to fit the school calendar.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &[
        section("offer", "What We Offer"),
        section("why", "Why Partner With Us?"),
        section("how", "How It Works"),
        section("partners", "Schools We Work With"),
    ],
};

static CONTACT: PageContent = PageContent {
    title: "Contact",
    heading: "Let's build something.",
    lead: "Book a free taster session or ask us anything. We reply within 24 hours.",
    hero_toggle: ToggleActions::PlayReverse,
    sections: &[
        section("message", "Send us a message"),
        section("get-in-touch", "Get in touch"),
        section("quick-links", "Quick Links"),
    ],
};

pub fn content(page: Page) -> &'static PageContent {
    match page {
        Page::Home => &HOME,
        Page::About => &ABOUT,
        Page::Programs => &PROGRAMS,
        Page::ProgramsAges7To11 => &PROGRAMS_AGES_7_11,
        Page::ProgramsAges12To16 => &PROGRAMS_AGES_12_16,
        Page::Curriculum => &CURRICULUM,
        Page::CurriculumEntrepreneurship => &CURRICULUM_ENTREPRENEURSHIP,
        Page::CurriculumEconomics => &CURRICULUM_ECONOMICS,
        Page::CurriculumMarketing => &CURRICULUM_MARKETING,
        Page::CurriculumDesignThinking => &CURRICULUM_DESIGN_THINKING,
        Page::Parents => &PARENTS,
        Page::Schools => &SCHOOLS,
        Page::Contact => &CONTACT,
    }
}

/// Register the hero and every section of `page` with the observer.
pub fn observe_page(page: Page, observer: &mut RevealObserver) {
    let content = content(page);
    observer.observe("hero", 0.0, content.hero_toggle);
    for (index, section) in content.sections.iter().enumerate() {
        let top = SECTION_SPACING * (index + 1) as f64;
        observer.observe(section.id, top, ToggleActions::PlayReverse);
    }
}

/// Attributes carried by every element that takes part in a reveal.
pub fn reveal_attributes(id: &str, toggle: ToggleActions, observer: &RevealObserver) -> String {
    format!(
        r#"id="{id}" class="animate-in" data-reveal="{}" data-revealed="{}""#,
        toggle.as_str(),
        observer.is_revealed(id)
    )
}

pub fn render_hero(content: &PageContent, observer: &RevealObserver) -> String {
    format!(
        r#"<section {}>
                <h1>{}</h1>
                <p>{}</p>
            </section>"#,
        reveal_attributes("hero", content.hero_toggle, observer),
        content.heading,
        content.lead
    )
}

pub fn render(page: Page, observer: &RevealObserver) -> String {
    let content = content(page);
    let sections = content
        .sections
        .iter()
        .map(|section| {
            format!(
                r#"
            <section {}>
                <h2>{}</h2>
            </section>"#,
                reveal_attributes(section.id, ToggleActions::PlayReverse, observer),
                section.heading
            )
        })
        .collect::<String>();
    render_hero(content, observer) + &sections
}
