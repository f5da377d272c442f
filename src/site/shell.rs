
use super::routes::Page;

pub const BUSINESS_NAME: &str = "Young Entrepreneurs Hub";
pub const BUSINESS_EMAIL: &str = "hello@younghub.academy";
pub const BUSINESS_PHONE: &str = "+1 (555) 014-2201";
pub const BUSINESS_PHONE_HREF: &str = "tel:+15550142201";

pub struct NavLink {
    pub name: &'static str,
    pub page: Page,
    pub children: &'static [NavLink],
}

const fn link(name: &'static str, page: Page) -> NavLink {
    NavLink {
        name,
        page,
        children: &[],
    }
}

pub static NAV_LINKS: [NavLink; 6] = [
    link("Home", Page::Home),
    link("About", Page::About),
    NavLink {
        name: "Programs",
        page: Page::Programs,
        children: &[
            link("Overview", Page::Programs),
            link("Ages 7–11", Page::ProgramsAges7To11),
            link("Ages 12–16", Page::ProgramsAges12To16),
        ],
    },
    NavLink {
        name: "Curriculum",
        page: Page::Curriculum,
        children: &[
            link("Overview", Page::Curriculum),
            link("Entrepreneurship", Page::CurriculumEntrepreneurship),
            link("Economics", Page::CurriculumEconomics),
            link("Marketing", Page::CurriculumMarketing),
            link("Design Thinking", Page::CurriculumDesignThinking),
        ],
    },
    link("Parents", Page::Parents),
    link("Schools", Page::Schools),
];

static FOOTER_COLUMNS: [(&str, &[NavLink]); 3] = [
    (
        "Programs",
        &[
            link("Overview", Page::Programs),
            link("Ages 7–11", Page::ProgramsAges7To11),
            link("Ages 12–16", Page::ProgramsAges12To16),
        ],
    ),
    (
        "Curriculum",
        &[
            link("Overview", Page::Curriculum),
            link("Entrepreneurship", Page::CurriculumEntrepreneurship),
            link("Economics", Page::CurriculumEconomics),
            link("Marketing", Page::CurriculumMarketing),
            link("Design Thinking", Page::CurriculumDesignThinking),
        ],
    ),
    (
        "Company",
        &[
            link("About Us", Page::About),
            link("For Parents", Page::Parents),
            link("For Schools", Page::Schools),
            link("Contact", Page::Contact),
        ],
    ),
];

const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

impl NavLink {
    /// A parent entry is active when any of its children is.
    pub fn is_active(&self, current: Page) -> bool {
        self.page == current || self.children.iter().any(|child| child.is_active(current))
    }
}

fn anchor(link: &NavLink, current: Page) -> String {
    if link.page == current {
        format!(
            r#"<a href="{}" class="active" aria-current="page">{}</a>"#,
            link.page.path(),
            link.name
        )
    } else {
        format!(r#"<a href="{}">{}</a>"#, link.page.path(), link.name)
    }
}

pub fn render_navigation(current: Page) -> String {
    let items = NAV_LINKS
        .iter()
        .map(|link| {
            if link.children.is_empty() {
                return format!("<li>{}</li>\n", anchor(link, current));
            }
            let class = if link.is_active(current) { r#" class="active""# } else { "" };
            let children = link
                .children
                .iter()
                .map(|child| format!("<li>{}</li>", anchor(child, current)))
                .collect::<String>();
            format!("<li{class}><span>{}</span><ul>{children}</ul></li>\n", link.name)
        })
        .collect::<String>();
    format!(
        r#"<header>
            <nav>
                <a href="/" class="brand">{BUSINESS_NAME}</a>
                <ul>
                {items}</ul>
                <a href="/contact" class="cta">Join a free taster</a>
            </nav>
        </header>"#
    )
}

pub fn render_footer(current: Page) -> String {
    let columns = FOOTER_COLUMNS
        .iter()
        .map(|(title, links)| {
            let items = links
                .iter()
                .map(|link| format!("<li>{}</li>", anchor(link, current)))
                .collect::<String>();
            format!("<div><h3>{title}</h3><ul>{items}</ul></div>\n")
        })
        .collect::<String>();
    let legal = LEGAL_LINKS
        .iter()
        .map(|name| format!(r##"<a href="#">{name}</a>"##))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        r#"<footer>
            <div>
                <a href="/" class="brand">{BUSINESS_NAME}</a>
                <p><a href="mailto:{BUSINESS_EMAIL}">{BUSINESS_EMAIL}</a></p>
                <p><a href="{BUSINESS_PHONE_HREF}">{BUSINESS_PHONE}</a></p>
            </div>
            {columns}
            <p class="legal">{legal}</p>
        </footer>"#
    )
}

/// Wrap a rendered page in the persistent navigation and footer.
pub fn render_document(current: Page, title: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8">
        <title>{title} | {BUSINESS_NAME}</title>
    </head>
    <body>
        {}
        <main>
            {main}
        </main>
        {}
    </body>
</html>"#,
        render_navigation(current),
        render_footer(current)
    )
}
