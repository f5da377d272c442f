use crate::helpers::{spawn_app, spawn_app_without_key, valid_form_data, when_relaying_a_message};
use claims::{assert_none, assert_ok_eq, assert_some};
use wiremock::ResponseTemplate;
use younghub::contact_form::{FailureReason, SubmissionState, SubmitOutcome};
use younghub::site::{Page, SiteError, ROUTES, SECTION_SPACING};

#[tokio::test]
async fn site_starts_on_the_home_page() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let (site, _) = app.site();

    // Assert
    assert_eq!(site.current_page(), Page::Home);
    assert!(site.render().contains("<title>Home | Young Entrepreneurs Hub</title>"));
}

#[tokio::test]
async fn every_route_renders_inside_the_shell() {
    // Arrange
    let app = spawn_app().await;
    let (mut site, _) = app.site();

    for (path, page) in ROUTES {
        // Act
        assert_ok_eq!(site.navigate(path), page);
        let html = site.render();

        // Assert
        assert!(html.contains("<header>"), "{} rendered without navigation", path);
        assert!(html.contains("<footer>"), "{} rendered without a footer", path);
        assert!(
            html.contains(younghub::site::content(page).heading),
            "{} rendered without its heading",
            path
        );
    }
}

#[tokio::test]
async fn unknown_paths_are_rejected_and_keep_the_current_page() {
    // Arrange
    let app = spawn_app().await;
    let (mut site, _) = app.site();
    site.navigate("/schools").unwrap();

    // Act
    let result = site.navigate("/blog");

    // Assert
    assert!(matches!(result, Err(SiteError::NotFound(path)) if path == "/blog"));
    assert_eq!(site.current_page(), Page::Schools);
}

#[tokio::test]
async fn contact_form_is_only_mounted_on_the_contact_page() {
    // Arrange
    let app = spawn_app().await;
    let (mut site, _) = app.site();

    for (path, page) in ROUTES {
        // Act
        site.navigate(path).unwrap();

        // Assert
        if page == Page::Contact {
            assert_some!(site.contact_form());
        } else {
            assert_none!(site.contact_form());
        }
    }
}

#[tokio::test]
async fn sent_confirmation_replaces_the_form() {
    // Arrange
    let app = spawn_app().await;
    let (mut site, _) = app.site();
    site.navigate("/contact").unwrap();

    when_relaying_a_message()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    // Act
    let outcome = site.contact_form().unwrap().submit(valid_form_data()).await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Sent);
    let html = site.render();
    assert!(html.contains("Message Sent!"));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn navigating_away_and_back_remounts_a_fresh_form() {
    // Arrange
    let app = spawn_app().await;
    let (mut site, _) = app.site();
    site.navigate("/contact").unwrap();

    when_relaying_a_message()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;
    site.contact_form().unwrap().submit(valid_form_data()).await;

    // Act 1 - navigating to the same path keeps the mount
    site.navigate("/contact/").unwrap();

    // Assert
    assert_eq!(site.contact_form().unwrap().state(), SubmissionState::Sent);

    // Act 2 - leave and come back
    site.navigate("/").unwrap();
    site.navigate("/contact").unwrap();

    // Assert
    assert_eq!(site.contact_form().unwrap().state(), SubmissionState::Idle);
    assert!(site.render().contains("Send message"));
}

#[tokio::test]
async fn configuration_error_shows_generic_copy() {
    // Arrange
    let app = spawn_app_without_key().await;
    let (mut site, _) = app.site();
    site.navigate("/contact").unwrap();

    // Act
    let outcome = site.contact_form().unwrap().submit(valid_form_data()).await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Failed(FailureReason::ConfigurationMissing));
    let html = site.render();
    assert!(html.contains("Please email us directly at hello@younghub.academy."));
    assert!(!html.contains("YOUNGHUB_EMAILJS_PUBLIC_KEY"));
    assert!(html.contains(r#"value="Ann""#));
}

#[tokio::test]
async fn reveal_observers_are_released_on_navigation() {
    // Arrange
    let app = spawn_app().await;
    let (mut site, trigger) = app.site();
    assert_eq!(trigger.active_observers(), 1);

    // Act
    for (path, _) in ROUTES {
        site.navigate(path).unwrap();
    }

    // Assert
    assert_eq!(trigger.active_observers(), 1);
    drop(site);
    assert_eq!(trigger.active_observers(), 0);
}

#[tokio::test]
async fn navigation_scrolls_back_to_the_top() {
    // Arrange
    let app = spawn_app().await;
    let (mut site, _) = app.site();
    site.navigate("/about").unwrap();
    site.scroll_to(SECTION_SPACING * 4.0);
    assert!(site.render().contains(r#"id="story" class="animate-in" data-reveal="reverse" data-revealed="true""#));

    // Act
    site.navigate("/parents").unwrap();

    // Assert
    let html = site.render();
    assert!(html.contains(r#"id="faq" class="animate-in" data-reveal="reverse" data-revealed="false""#));
}

#[tokio::test]
async fn sections_reverse_when_scrolled_back_but_the_home_hero_does_not() {
    // Arrange
    let app = spawn_app().await;
    let (mut site, _) = app.site();
    site.scroll_to(SECTION_SPACING * 4.0);

    // Act
    site.scroll_to(0.0);
    site.resize(100.0);

    // Assert
    let html = site.render();
    assert!(html.contains(r#"id="hero" class="animate-in" data-reveal="once" data-revealed="true""#));
    assert!(html.contains(r#"id="curriculum" class="animate-in" data-reveal="reverse" data-revealed="false""#));
}
