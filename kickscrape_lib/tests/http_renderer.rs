use std::time::Duration;

use kickscrape_lib::error::{RenderError, ScrapeError};
use kickscrape_lib::{
    output, site, HttpRenderer, Locator, ProjectCollection, ProjectCollector, Renderer,
    ScrapeConfig,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PATH: &str = "/discover/categories/technology";

fn listing_page(cards: std::ops::RangeInclusive<usize>, next: Option<&str>) -> String {
    let mut body = String::from("<html><body><div class=\"grid\">");
    for i in cards {
        body.push_str(&format!(
            r#"<div class="clamp-5 navy-500 mb3 hover-target"><a href="/projects/maker/p{i}?ref=discovery" class="soft-black mb3">Project {i}</a></div>"#
        ));
    }
    body.push_str("</div>");
    if let Some(next) = next {
        body.push_str(&format!(
            r#"<a class="bttn bttn-green bttn-medium" href="{next}">Load more</a>"#
        ));
    }
    body.push_str("</body></html>");
    body
}

fn detail_page(i: usize) -> String {
    format!(
        r#"<html><body>
          <h2 class="type-28 type-24-md soft-black mb1 project-name">Project {i}</h2>
          <a class="type-14 bold">Maker {i}</a>
          <span class="ksr-green-500">$2Delimiter500</span>
          <span class="money">$10Delimiter000</span>
          <div class="block type-16 type-28-md bold dark-grey-500"><span>{i}</span></div>
          <span class="block type-16 type-28-md bold dark-grey-500">9</span>
          <span class="block navy-600 type-12 type-14-md lh3-lg">days to go</span>
        </body></html>"#
    )
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_site(server: &MockServer, broken: usize) {
    let page2 = format!("{}/page/2", LISTING_PATH);
    let page3 = format!("{}/page/3", LISTING_PATH);
    mount_html(server, LISTING_PATH, listing_page(1..=12, Some(&page2))).await;
    mount_html(server, &page2, listing_page(13..=24, Some(&page3))).await;
    mount_html(server, &page3, listing_page(25..=30, None)).await;
    for i in 1..=30 {
        let route = format!("/projects/maker/p{}", i);
        if i == broken {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
                .mount(server)
                .await;
        } else {
            mount_html(server, &route, detail_page(i)).await;
        }
    }
}

fn config(server: &MockServer, target: usize) -> ScrapeConfig {
    ScrapeConfig::default()
        .with_listing_url(format!("{}{}", server.uri(), LISTING_PATH))
        .with_target_count(target)
        .with_settle(Duration::ZERO)
}

#[tokio::test]
async fn scrapes_paginated_listing_end_to_end() {
    let server = MockServer::start().await;
    mount_site(&server, 7).await;

    let renderer = HttpRenderer::new().unwrap();
    let outcome = ProjectCollector::new(renderer, config(&server, 36))
        .unwrap()
        .run(|_| {})
        .await
        .unwrap();

    let projects = &outcome.collection.projects;
    assert_eq!(projects.len(), 30);
    assert_eq!(
        projects[0].url,
        format!("{}/projects/maker/p1?ref=discovery", server.uri())
    );
    assert_eq!(projects[0].creator.as_deref(), Some("Maker 1"));
    assert_eq!(projects[0].dollars_pledged.as_deref(), Some("$2,500"));
    assert_eq!(projects[0].days_to_go.as_deref(), Some("9"));
    assert_eq!(projects[29].title.as_deref(), Some("Project 30"));

    assert_eq!(outcome.failed_pages.len(), 1);
    assert!(outcome.failed_pages[0].contains("/projects/maker/p7"));
    assert_eq!(projects[6].found_fields(), 0);
}

#[tokio::test]
async fn written_output_round_trips() {
    let server = MockServer::start().await;
    mount_site(&server, 0).await;

    let renderer = HttpRenderer::new().unwrap();
    let outcome = ProjectCollector::new(renderer, config(&server, 12))
        .unwrap()
        .run(|_| {})
        .await
        .unwrap();
    assert_eq!(outcome.collection.len(), 24);

    let file = std::env::temp_dir().join(format!("kickscrape-e2e-{}.json", std::process::id()));
    output::write_json(&file, &outcome.collection).unwrap();
    let text = std::fs::read_to_string(&file).unwrap();
    std::fs::remove_file(&file).ok();

    let parsed: ProjectCollection = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, outcome.collection);
}

#[tokio::test]
async fn missing_listing_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let renderer = HttpRenderer::new().unwrap();
    let result = ProjectCollector::new(renderer, config(&server, 12))
        .unwrap()
        .run(|_| {})
        .await;
    assert!(matches!(
        result,
        Err(ScrapeError::ListingUnreachable {
            source: RenderError::HttpStatus { .. },
            ..
        })
    ));
}

#[tokio::test]
async fn followed_controls_disappear() {
    let server = MockServer::start().await;
    mount_site(&server, 0).await;

    let mut renderer = HttpRenderer::new().unwrap();
    renderer
        .navigate(&format!("{}{}", server.uri(), LISTING_PATH))
        .await
        .unwrap();
    let button = renderer
        .find_one(&site::load_more_button())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        button.attr("href"),
        Some("/discover/categories/technology/page/2")
    );
    renderer.click(&button).await.unwrap();

    let next = renderer
        .find_one(&site::load_more_button())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        next.attr("href"),
        Some("/discover/categories/technology/page/3")
    );
    let cards = renderer.find_all(&site::project_link()).await.unwrap();
    assert_eq!(cards.len(), 24);
}

#[tokio::test]
async fn non_link_controls_cannot_be_clicked() {
    let server = MockServer::start().await;
    mount_site(&server, 0).await;

    let mut renderer = HttpRenderer::new().unwrap();
    renderer
        .navigate(&format!("{}{}", server.uri(), LISTING_PATH))
        .await
        .unwrap();
    let grid = renderer
        .find_one(&Locator::class("grid"))
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(
        renderer.click(&grid).await,
        Err(RenderError::Unsupported(_))
    ));
}

#[tokio::test]
async fn markup_requires_a_loaded_page() {
    let mut renderer = HttpRenderer::new().unwrap();
    assert!(matches!(
        renderer.current_markup().await,
        Err(RenderError::NoPage)
    ));
}
