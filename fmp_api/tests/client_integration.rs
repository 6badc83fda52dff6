use chrono::NaiveDate;
use fmp_api::{Client, Error, ErrorPolicy, Outcome, Payload, Settings};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "test-key").unwrap()
}

async fn received_queries(server: &MockServer) -> Vec<Vec<(String, String)>> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|req| req.url.query_pairs().into_owned().collect())
        .collect()
}

#[tokio::test]
async fn quote_short_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/quote-short/AAPL"))
        .and(query_param("apikey", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"symbol":"AAPL","price":150.0}]"#),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).quote_short("AAPL").await;
    assert!(result.is_ok());

    let records = result.unwrap().into_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["symbol"], "AAPL");
    assert_eq!(records[0]["price"], 150.0);
}

#[tokio::test]
async fn empty_array_is_distinct_from_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/etf-holder/SPY"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/etf-holder/QQQ"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);

    let empty = client.etf_holders("SPY").await.unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.into_records(), Some(Vec::new()));

    let failed = client.etf_holders("QQQ").await.unwrap();
    assert!(failed.is_failed());
    assert_eq!(failed.into_records(), None);
}

#[tokio::test]
async fn server_error_is_absorbed_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/actives"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let outcome = client(&mock_server).actives().await.unwrap();
    match outcome {
        Outcome::Failed(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn strict_policy_surfaces_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/fx"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let settings = Settings::default()
        .with_host(&mock_server.uri())
        .with_error_policy(ErrorPolicy::Strict);
    let client = Client::with_settings("test-key", settings).unwrap();
    let result = client.forex().await;
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn loop_over_symbols_survives_failures() {
    let mock_server = MockServer::start().await;

    for symbol in ["AAPL", "MSFT"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v3/quote-short/{}", symbol)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!(r#"[{{"symbol":"{}","price":1.0}}]"#, symbol)),
            )
            .mount(&mock_server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/v3/quote-short/BROKEN"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let mut found = Vec::new();
    let mut failed = Vec::new();
    for symbol in ["AAPL", "BROKEN", "MSFT"] {
        match client.quote_short(symbol).await.unwrap() {
            Outcome::Data(payload) => found.push(payload.records()[0]["symbol"].clone()),
            Outcome::Empty => {}
            Outcome::Failed(_) => failed.push(symbol),
        }
    }
    assert_eq!(found, vec!["AAPL", "MSFT"]);
    assert_eq!(failed, vec!["BROKEN"]);
}

#[tokio::test]
async fn identical_calls_are_not_memoized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/gainers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"symbol":"NVDA"}]"#))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    assert!(client.gainers().await.unwrap().is_data());
    assert!(client.gainers().await.unwrap().is_data());
    assert_eq!(received_queries(&mock_server).await.len(), 2);
}

#[tokio::test]
async fn calendar_sends_only_supplied_dates() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("earning_calendar.json");

    Mock::given(method("GET"))
        .and(path("/api/v3/earning_calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let from = NaiveDate::from_ymd_opt(2024, 7, 1);
    let outcome = client.earning_calendar(from, None).await.unwrap();
    assert_eq!(outcome.into_records().unwrap().len(), 2);

    client.earning_calendar(None, None).await.unwrap();

    let queries = received_queries(&mock_server).await;
    assert_eq!(
        queries[0],
        vec![
            ("apikey".to_string(), "test-key".to_string()),
            ("from".to_string(), "2024-07-01".to_string()),
        ]
    );
    assert_eq!(
        queries[1],
        vec![("apikey".to_string(), "test-key".to_string())]
    );
}

#[tokio::test]
async fn limit_falls_back_to_configured_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/sectors-performance"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"sector":"Energy"}]"#))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client.sectors_performance(None).await.unwrap();
    client.sectors_performance(Some(3)).await.unwrap();

    let queries = received_queries(&mock_server).await;
    assert!(queries[0].contains(&("limit".to_string(), "10".to_string())));
    assert!(queries[1].contains(&("limit".to_string(), "3".to_string())));
}

#[tokio::test]
async fn market_hours_single_object() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("market_hours.json");

    Mock::given(method("GET"))
        .and(path("/api/v3/market-hours"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let outcome = client(&mock_server).market_hours().await.unwrap();
    match outcome {
        Outcome::Data(Payload::Record(record)) => {
            assert_eq!(record["stockExchangeName"], "New York Stock Exchange");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn senate_feeds_use_v4() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("senate_trading.json");

    Mock::given(method("GET"))
        .and(path("/api/v4/senate-trading"))
        .and(query_param("symbol", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/senate-trading-rss-feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let records = client
        .senate_trading_symbol("AAPL")
        .await
        .unwrap()
        .into_records()
        .unwrap();
    assert_eq!(records[0]["lastName"], "Tuberville");

    client.senate_trading_rss(None).await.unwrap();
    client.senate_trading_rss(Some(2)).await.unwrap();
    let queries = received_queries(&mock_server).await;
    assert!(!queries[1].iter().any(|(k, _)| k == "page"));
    assert!(queries[2].contains(&("page".to_string(), "2".to_string())));
}

#[tokio::test]
async fn institutional_ownership_flag_only_when_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/institutional-ownership/symbol-ownership"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"symbol":"AAPL"}]"#))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client
        .institutional_symbol_ownership("AAPL", Some(4), false)
        .await
        .unwrap();
    client
        .institutional_symbol_ownership("AAPL", Some(4), true)
        .await
        .unwrap();

    let queries = received_queries(&mock_server).await;
    assert!(!queries[0].iter().any(|(k, _)| k == "includeCurrentQuarter"));
    assert!(queries[1].contains(&("includeCurrentQuarter".to_string(), "true".to_string())));
    assert!(queries[1].contains(&("symbol".to_string(), "AAPL".to_string())));
}

#[tokio::test]
async fn technical_indicator_validates_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/technical_indicator/daily/AAPL"))
        .and(query_param("type", "SMA"))
        .and(query_param("period", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"sma":189.5}]"#))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let ok = client
        .technical_indicators("AAPL", 10, "SMA", "daily")
        .await
        .unwrap();
    assert!(ok.is_data());

    let err = client
        .technical_indicators("AAPL", 10, "SMA", "weekly")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { field: "time_delta", .. }));

    let err = client
        .technical_indicators("AAPL", 10, "sma", "daily")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { field: "statistics_type", .. }));

    assert_eq!(received_queries(&mock_server).await.len(), 1);
}

#[tokio::test]
async fn download_writes_raw_body() {
    let mock_server = MockServer::start().await;
    let csv = load_fixture("sp500_constituent.csv");

    Mock::given(method("GET"))
        .and(path("/api/v3/sp500_constituent"))
        .and(query_param("datatype", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(csv.clone().into_bytes(), "text/csv"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("spx.csv");
    let outcome = client(&mock_server)
        .sp500_constituent_csv(Some(dest.as_path()))
        .await
        .unwrap();

    assert!(matches!(outcome, Outcome::Data(n) if n == csv.len() as u64));
    assert_eq!(std::fs::read(&dest).unwrap(), csv.into_bytes());
}

#[tokio::test]
async fn download_request_failure_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/rss_feed"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Invalid API KEY"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("feeds.csv");
    let outcome = client(&mock_server)
        .sec_rss_feeds_csv(Some(dest.as_path()))
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        Outcome::Failed(Error::HttpStatus { status: 403, .. })
    ));
    assert!(!dest.exists());
}

#[tokio::test]
async fn download_write_failure_is_io_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/nasdaq_constituent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("symbol,name\n"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("missing").join("ndx.csv");
    let err = client(&mock_server)
        .nasdaq_constituent_csv(Some(dest.as_path()))
        .await
        .unwrap_err();

    match err {
        Error::Io { path, .. } => assert_eq!(path, dest),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn caller_values_cannot_change_the_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client.quote_short("../../v4/senate-trading").await.unwrap();
    client.cik_search("what?limit=1").await.unwrap();
    client.cik_search("Smith & Wesson #2").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let paths: Vec<&str> = requests.iter().map(|req| req.url.path()).collect();
    assert_eq!(
        paths,
        vec![
            "/api/v3/quote-short/..%2F..%2Fv4%2Fsenate-trading",
            "/api/v3/cik-search/what%3Flimit=1",
            "/api/v3/cik-search/Smith%20&%20Wesson%20%232",
        ]
    );
    for query in received_queries(&mock_server).await {
        assert_eq!(query, vec![("apikey".to_string(), "test-key".to_string())]);
    }
}

#[tokio::test]
async fn download_empty_body_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/dowjones_constituent"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("dji.csv");
    let outcome = client(&mock_server)
        .dowjones_constituent_csv(Some(dest.as_path()))
        .await
        .unwrap();

    assert!(outcome.is_empty());
    assert!(!dest.exists());
}

#[tokio::test]
async fn scalar_json_is_passed_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/market-hours"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"Limit Reach\""))
        .mount(&mock_server)
        .await;

    let outcome = client(&mock_server).market_hours().await.unwrap();
    match outcome {
        Outcome::Data(Payload::Other(value)) => assert_eq!(value, "Limit Reach"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}
