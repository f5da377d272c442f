#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Programs,
    ProgramsAges7To11,
    ProgramsAges12To16,
    Curriculum,
    CurriculumEntrepreneurship,
    CurriculumEconomics,
    CurriculumMarketing,
    CurriculumDesignThinking,
    Parents,
    Schools,
    Contact,
}

pub const ROUTES: [(&str, Page); 13] = [
    ("/", Page::Home),
    ("/about", Page::About),
    ("/programs", Page::Programs),
    ("/programs/ages-7-11", Page::ProgramsAges7To11),
    ("/programs/ages-12-16", Page::ProgramsAges12To16),
    ("/curriculum", Page::Curriculum),
    ("/curriculum/entrepreneurship", Page::CurriculumEntrepreneurship),
    ("/curriculum/economics", Page::CurriculumEconomics),
    ("/curriculum/marketing", Page::CurriculumMarketing),
    ("/curriculum/design-thinking", Page::CurriculumDesignThinking),
    ("/parents", Page::Parents),
    ("/schools", Page::Schools),
    ("/contact", Page::Contact),
];

impl Page {
    /// Match a location against the route table. Query strings, fragments,
    /// trailing slashes and letter case are ignored.
    pub fn from_path(location: &str) -> Option<Page> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        ROUTES
            .iter()
            .find(|(route, _)| route.eq_ignore_ascii_case(path))
            .map(|(_, page)| *page)
    }

    pub fn path(&self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, page)| page == self)
            .map(|(route, _)| *route)
            .unwrap_or("/")
    }
}
