//! Integration tests for the analysis pipeline
//!
//! These tests use wiremock for both the audited pages and the
//! text-completion endpoint, exercising the full per-URL pipeline
//! end-to-end.

use pagelens::config::Config;
use pagelens::pipeline::Analyzer;
use pagelens::report::UrlReport;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at a mock completion endpoint
fn create_test_config(reasoning_endpoint: String) -> Config {
    let mut config = Config::default();
    config.reasoning.endpoint = reasoning_endpoint;
    config.reasoning.model = "test-model".to_string();
    config
}

/// Builds an analyzer whose reasoning calls go to `llm_server`
fn create_analyzer(llm_server: &MockServer, api_key: Option<&str>) -> Analyzer {
    let config = create_test_config(format!("{}/v1/chat/completions", llm_server.uri()));
    Analyzer::new(config, api_key.map(String::from)).expect("Failed to create analyzer")
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

const PAGE_HTML: &str = r#"<html>
<head>
<title>Espresso Brewing Guide</title>
<meta name="description" content="How to brew espresso at home.">
</head>
<body>
<main>
<h1>Espresso Brewing</h1>
<h2>Grinding</h2>
<p>Grind the beans finely. Tamp the bed evenly. Extract for thirty seconds.</p>
</main>
</body>
</html>"#;

/// Mounts a page at /page on the given server
async fn mount_page(server: &MockServer, html: &str) {
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts one completion response for all three generator prompts
async fn mount_completions(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_analysis_produces_complete_report() {
    let page_server = MockServer::start().await;
    let llm_server = MockServer::start().await;

    mount_page(&page_server, PAGE_HTML).await;
    mount_completions(&llm_server, "Q: What grind size works?\nA: A fine grind.").await;

    let analyzer = create_analyzer(&llm_server, Some("test-key"));
    let report = analyzer
        .analyze_url(&format!("{}/page", page_server.uri()))
        .await;

    let page = match report {
        UrlReport::Complete(page) => page,
        UrlReport::Failed { error, .. } => panic!("Analysis failed: {}", error),
    };

    assert_eq!(page.title, "Espresso Brewing Guide");
    assert_eq!(page.meta_analysis.tags.title.status.as_str(), "good");
    assert_eq!(page.meta_analysis.tags.meta_description.status.as_str(), "good");
    assert!(page.meta_analysis.llm_suggestions.error.is_none());

    // h1 -> h2 is a clean hierarchy
    assert_eq!(
        page.structural_integrity.headings,
        vec!["Success: heading structure is logical"]
    );
    assert_eq!(
        page.structural_integrity.semantics,
        vec!["Success: basic semantic HTML looks good"]
    );

    assert!(page.readability.flesch_reading_ease > 0.0);

    assert!(page.topical_gaps.raw_text.contains("What grind size works?"));
    assert!(page.topical_gaps.error.is_none());

    // No schema on the page, so both recommendations are generated
    assert!(!page.existing_schema.article);
    assert!(!page.existing_schema.faq_page);
    let article = page.recommendations.article_schema.as_ref().unwrap();
    assert!(article.contains("\"headline\": \"Espresso Brewing\""));
    let faq = page.recommendations.faq_schema.as_ref().unwrap();
    assert!(faq.contains("What grind size works?"));
    assert!(faq.contains("A fine grind."));

    assert!(page
        .content_structure
        .heading_suggestions
        .contains("What grind size works?"));
}

#[tokio::test]
async fn test_fetch_failure_short_circuits_analysis() {
    let page_server = MockServer::start().await;
    let llm_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&page_server)
        .await;

    // No reasoning call may be made for a failed fetch
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("x")))
        .expect(0)
        .mount(&llm_server)
        .await;

    let analyzer = create_analyzer(&llm_server, Some("test-key"));
    let url = format!("{}/page", page_server.uri());
    let report = analyzer.analyze_url(&url).await;

    assert!(report.is_failed());
    assert_eq!(report.url(), url);

    // The error-only report carries exactly {url, error}
    let value = serde_json::to_value(&report).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_one_failing_generator_leaves_others_intact() {
    let page_server = MockServer::start().await;
    let llm_server = MockServer::start().await;

    mount_page(&page_server, PAGE_HTML).await;

    // The title generator's prompt is the only one mentioning a copywriter;
    // fail it while the other two succeed.
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("SEO copywriter"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&llm_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("FAQ section"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("Q: How hot?\nA: Ninety degrees.")),
        )
        .mount(&llm_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("scannability"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("## Water Temperature")),
        )
        .mount(&llm_server)
        .await;

    let analyzer = create_analyzer(&llm_server, Some("test-key"));
    let report = analyzer
        .analyze_url(&format!("{}/page", page_server.uri()))
        .await;

    let page = match report {
        UrlReport::Complete(page) => page,
        UrlReport::Failed { error, .. } => panic!("Analysis failed: {}", error),
    };

    // The failed generator surfaces in its own slot only
    assert!(page.meta_analysis.llm_suggestions.error.is_some());
    assert_eq!(page.meta_analysis.llm_suggestions.suggestions, "");

    // The other two slots are fully populated
    assert!(page.topical_gaps.error.is_none());
    assert!(page.topical_gaps.raw_text.contains("How hot?"));
    assert_eq!(
        page.content_structure.heading_suggestions,
        "## Water Temperature"
    );
    assert!(page.recommendations.faq_schema.is_some());
}

#[tokio::test]
async fn test_missing_api_key_degrades_without_network_calls() {
    let page_server = MockServer::start().await;
    let llm_server = MockServer::start().await;

    mount_page(&page_server, PAGE_HTML).await;

    // expect(0) verifies on drop that no completion request was made
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("x")))
        .expect(0)
        .mount(&llm_server)
        .await;

    let analyzer = create_analyzer(&llm_server, None);
    assert!(!analyzer.has_credentials());

    let report = analyzer
        .analyze_url(&format!("{}/page", page_server.uri()))
        .await;

    let page = match report {
        UrlReport::Complete(page) => page,
        UrlReport::Failed { error, .. } => panic!("Analysis failed: {}", error),
    };

    // Deterministic findings are untouched
    assert_eq!(page.title, "Espresso Brewing Guide");
    assert!(page.readability.flesch_reading_ease > 0.0);
    assert!(page.recommendations.article_schema.is_some());

    // Every reasoning slot carries an explicit error marker
    assert!(page.meta_analysis.llm_suggestions.error.is_some());
    assert!(page.topical_gaps.error.is_some());
    assert!(page.content_structure.error.is_some());
    assert!(page.recommendations.faq_schema.is_none());
}

#[tokio::test]
async fn test_existing_schema_suppresses_recommendations() {
    let page_server = MockServer::start().await;
    let llm_server = MockServer::start().await;

    let html = r#"<html><head><title>Covered</title>
<script type="application/ld+json">{"@graph": [{"@type": "Article"}, {"@type": "FAQPage"}]}</script>
</head><body><main><h1>Covered</h1><p>Already marked up.</p></main></body></html>"#;
    mount_page(&page_server, html).await;
    mount_completions(&llm_server, "Q: Anything?\nA: Something.").await;

    let analyzer = create_analyzer(&llm_server, Some("test-key"));
    let report = analyzer
        .analyze_url(&format!("{}/page", page_server.uri()))
        .await;

    let page = match report {
        UrlReport::Complete(page) => page,
        UrlReport::Failed { error, .. } => panic!("Analysis failed: {}", error),
    };

    assert!(page.existing_schema.article);
    assert!(page.existing_schema.faq_page);
    assert!(page.recommendations.article_schema.is_none());
    assert!(page.recommendations.faq_schema.is_none());
}

#[tokio::test]
async fn test_batch_isolates_sibling_failures() {
    let page_server = MockServer::start().await;
    let llm_server = MockServer::start().await;

    mount_page(&page_server, PAGE_HTML).await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&page_server)
        .await;
    mount_completions(&llm_server, "Q: Still fine?\nA: Yes.").await;

    let analyzer = create_analyzer(&llm_server, Some("test-key"));
    let urls = vec![
        format!("{}/missing", page_server.uri()),
        format!("{}/page", page_server.uri()),
    ];
    let reports = analyzer.analyze_batch(&urls).await;

    // Submission order is preserved and the failure stays contained
    assert_eq!(reports.len(), 2);
    assert!(reports[0].is_failed());
    assert!(!reports[1].is_failed());
    assert_eq!(reports[1].url(), urls[1]);
}
