//! Integration tests for the OpenWeatherMap provider (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dashboard_core::{Config, DashboardError, OpenWeatherProvider, WeatherProvider};

fn config_for_mock(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        api_key: "TEST_KEY".to_string(),
        ..Config::default()
    }
}

const fn sample_weather_json() -> &'static str {
    r#"{
        "name": "Mumbai",
        "dt": 1717243200,
        "main": {
            "temp": 29.3,
            "feels_like": 33.1,
            "temp_min": 27.0,
            "temp_max": 31.2,
            "pressure": 1006,
            "humidity": 74
        },
        "weather": [{ "main": "Haze", "description": "haze" }],
        "wind": { "speed": 4.6, "deg": 250 }
    }"#
}

const fn sample_weather_json_without_wind_deg() -> &'static str {
    r#"{
        "name": "Mumbai",
        "dt": 1717243200,
        "main": {
            "temp": 29.3,
            "feels_like": 33.1,
            "temp_min": 27.0,
            "temp_max": 31.2,
            "pressure": 1006,
            "humidity": 74
        },
        "weather": [{ "main": "Clear", "description": "clear sky" }],
        "wind": { "speed": 2.1 }
    }"#
}

const fn sample_weather_json_without_humidity() -> &'static str {
    r#"{
        "name": "Mumbai",
        "dt": 1717243200,
        "main": {
            "temp": 29.3,
            "feels_like": 33.1,
            "temp_min": 27.0,
            "temp_max": 31.2,
            "pressure": 1006
        },
        "weather": [{ "main": "Haze", "description": "haze" }],
        "wind": { "speed": 4.6, "deg": 250 }
    }"#
}

#[tokio::test]
async fn fetches_and_parses_a_current_reading() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "Mumbai,IN"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_weather_json()))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let provider = OpenWeatherProvider::new(&config).unwrap();

    let reading = provider.current().await.unwrap();

    assert_eq!(reading.location_name, "Mumbai");
    assert_eq!(reading.condition, "Haze");
    assert_eq!(reading.description, "haze");
    assert_eq!(reading.humidity, 74);
    assert_eq!(reading.pressure, 1006);
    assert_eq!(reading.wind_deg, 250);
    assert!((reading.temperature - 29.3).abs() < f64::EPSILON);
    assert!((reading.wind_speed - 4.6).abs() < f64::EPSILON);
    assert_eq!(reading.observed_at.timestamp(), 1_717_243_200);
}

#[tokio::test]
async fn absent_wind_direction_defaults_to_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(sample_weather_json_without_wind_deg()),
        )
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let provider = OpenWeatherProvider::new(&config).unwrap();

    let reading = provider.current().await.unwrap();
    assert_eq!(reading.wind_deg, 0);
}

#[tokio::test]
async fn missing_humidity_is_a_data_shape_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(sample_weather_json_without_humidity()),
        )
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let provider = OpenWeatherProvider::new(&config).unwrap();

    let err = provider.current().await.unwrap_err();
    assert!(matches!(err, DashboardError::Shape(_)));
    assert_eq!(err.category(), "Data Parsing Error");
    assert!(err.to_string().contains("humidity"));
}

#[tokio::test]
async fn unauthorized_status_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"cod":401,"message":"Invalid API key"}"#),
        )
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let provider = OpenWeatherProvider::new(&config).unwrap();

    let err = provider.current().await.unwrap_err();
    assert!(matches!(err, DashboardError::Status { .. }));
    assert_eq!(err.category(), "API Error");
    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("Invalid API key"));
}

#[tokio::test]
async fn server_error_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let provider = OpenWeatherProvider::new(&config).unwrap();

    let err = provider.current().await.unwrap_err();
    assert_eq!(err.category(), "API Error");
}

#[tokio::test]
async fn malformed_json_is_a_data_shape_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let provider = OpenWeatherProvider::new(&config).unwrap();

    let err = provider.current().await.unwrap_err();
    assert!(matches!(err, DashboardError::Shape(_)));
    assert_eq!(err.category(), "Data Parsing Error");
}
