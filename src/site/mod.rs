mod contact;
mod pages;
mod routes;
mod shell;

use std::sync::Arc;

pub use pages::{content, PageContent, Section, SECTION_SPACING};
pub use routes::{Page, ROUTES};
pub use shell::{NavLink, BUSINESS_EMAIL, BUSINESS_NAME, BUSINESS_PHONE, NAV_LINKS};

use crate::contact_form::ContactForm;
use crate::relay_client::{KeySource, RelayClient};
use crate::reveal::{register_scroll_trigger, RevealChange, RevealObserver, ScrollTrigger, Viewport};

const DEFAULT_VIEWPORT_HEIGHT: f64 = 900.0;

#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    #[error("No page is routed at {0}")]
    NotFound(String),
}

struct MountedPage {
    page: Page,
    observer: RevealObserver,
    contact_form: Option<ContactForm>,
}

/// The site's router and persistent chrome.
///
/// Exactly one page is mounted at a time. Leaving a page drops its reveal
/// observer and, on the contact page, its form controller.
pub struct Site {
    relay_client: Arc<RelayClient>,
    key_source: Arc<dyn KeySource>,
    trigger: Arc<ScrollTrigger>,
    viewport_height: f64,
    scroll_y: f64,
    mounted: MountedPage,
}

impl Site {
    pub fn new(relay_client: Arc<RelayClient>, key_source: Arc<dyn KeySource>) -> Self {
        Self::with_scroll_trigger(relay_client, key_source, register_scroll_trigger())
    }

    pub fn with_scroll_trigger(
        relay_client: Arc<RelayClient>,
        key_source: Arc<dyn KeySource>,
        trigger: Arc<ScrollTrigger>,
    ) -> Self {
        let viewport = Viewport {
            scroll_y: 0.0,
            height: DEFAULT_VIEWPORT_HEIGHT,
        };
        let mounted = mount(Page::Home, &trigger, viewport, &relay_client, &key_source);
        Self {
            relay_client,
            key_source,
            trigger,
            viewport_height: viewport.height,
            scroll_y: viewport.scroll_y,
            mounted,
        }
    }

    pub fn current_page(&self) -> Page {
        self.mounted.page
    }

    /// The contact form controller, when the contact page is mounted.
    pub fn contact_form(&self) -> Option<&ContactForm> {
        self.mounted.contact_form.as_ref()
    }

    /// Move to `location`. The current page stays mounted when the location
    /// resolves to it; otherwise it is torn down and the new one mounted
    /// scrolled to the top.
    #[tracing::instrument(name = "Navigate", skip(self))]
    pub fn navigate(&mut self, location: &str) -> Result<Page, SiteError> {
        let page =
            Page::from_path(location).ok_or_else(|| SiteError::NotFound(location.to_owned()))?;
        if page != self.mounted.page {
            self.scroll_y = 0.0;
            // Assigning drops the previous mount.
            self.mounted = mount(
                page,
                &self.trigger,
                self.viewport(),
                &self.relay_client,
                &self.key_source,
            );
        }
        Ok(page)
    }

    pub fn resize(&mut self, viewport_height: f64) -> Vec<RevealChange> {
        self.viewport_height = viewport_height;
        self.scroll_to(self.scroll_y)
    }

    pub fn scroll_to(&mut self, scroll_y: f64) -> Vec<RevealChange> {
        self.scroll_y = scroll_y.max(0.0);
        let viewport = self.viewport();
        self.mounted.observer.on_scroll(viewport)
    }

    pub fn render(&self) -> String {
        let page = self.mounted.page;
        let main = match &self.mounted.contact_form {
            Some(form) => contact::render(&form.snapshot(), &self.mounted.observer),
            None => pages::render(page, &self.mounted.observer),
        };
        shell::render_document(page, content(page).title, &main)
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_y: self.scroll_y,
            height: self.viewport_height,
        }
    }
}

fn mount(
    page: Page,
    trigger: &Arc<ScrollTrigger>,
    viewport: Viewport,
    relay_client: &Arc<RelayClient>,
    key_source: &Arc<dyn KeySource>,
) -> MountedPage {
    let mut observer = trigger.observer();
    pages::observe_page(page, &mut observer);
    observer.on_scroll(viewport);
    let contact_form = (page == Page::Contact)
        .then(|| ContactForm::new(Arc::clone(relay_client), Arc::clone(key_source)));
    tracing::debug!(path = page.path(), "Mounted page");
    MountedPage {
        page,
        observer,
        contact_form,
    }
}
