use std::time::Duration;

use pretty_assertions::assert_eq;
use search_engine::{ClientSettings, FailureKind, ReqwestSearchApi, SearchApi};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestSearchApi {
    ReqwestSearchApi::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client")
}

#[tokio::test]
async fn hot_keywords_are_returned_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hotkey/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":[{"id":6,"link":"","name":"kotlin","order":1,"visible":1},
                        {"id":9,"link":"","name":"Flutter","order":2,"visible":1}],
                "errorCode":0,"errorMsg":""}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let keywords = api_for(&server).hot_keywords().await.expect("hot keywords");
    assert_eq!(keywords, vec!["kotlin".to_string(), "Flutter".to_string()]);
}

#[tokio::test]
async fn search_posts_keyword_form_to_page_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/article/query/1/json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("k=kotlin+coroutines"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":{"curPage":2,"pageCount":4,"over":false,"size":20,"total":70,
                "datas":[{"id":42,"title":"<em class='highlight'>Kotlin</em> coroutines",
                          "link":"https://example.com/a","author":"","shareUser":"jay",
                          "niceDate":"2018-01-02","chapterName":"Kotlin",
                          "superChapterName":"Languages","fresh":false}]},
                "errorCode":0,"errorMsg":""}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let page = api_for(&server)
        .search_articles(1, "kotlin coroutines")
        .await
        .expect("search");
    assert_eq!(page.cur_page, 2);
    assert_eq!(page.page_count, 4);
    assert!(!page.over);
    assert_eq!(page.datas.len(), 1);
    let article = &page.datas[0];
    assert_eq!(article.id, 42);
    assert_eq!(article.display_author(), "jay");
    assert_eq!(article.chapter_name, "Kotlin");
    assert_eq!(
        search_engine::plain_text(&article.title),
        "Kotlin coroutines"
    );
}

#[tokio::test]
async fn non_zero_error_code_is_an_api_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hotkey/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"data":null,"errorCode":-1,"errorMsg":"service unavailable"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let err = api_for(&server).hot_keywords().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Api { code: -1 });
    assert_eq!(err.message, "service unavailable");
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/article/query/0/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "text/html"))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .search_articles(0, "rust")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn http_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/article/query/0/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .search_articles(0, "rust")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hotkey/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let api = ReqwestSearchApi::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = api.hot_keywords().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hotkey/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("0123456789abcdef"))
        .mount(&server)
        .await;

    let api = ReqwestSearchApi::new(ClientSettings {
        base_url: server.uri(),
        max_bytes: 10,
        ..ClientSettings::default()
    })
    .expect("client");

    let err = api.hot_keywords().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(16)
        }
    );
}

#[tokio::test]
async fn invalid_base_url_is_reported() {
    let api = ReqwestSearchApi::new(ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = api.hot_keywords().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
