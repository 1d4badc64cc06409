use std::sync::Mutex;

use crate::{
    render_page, BusyVerdict, Config, ConfigError, Feed, GridCell, HistoryPayload, Renderer,
    Sample, Tier, Transport, SENTINEL, YEAR_DAYS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Status(BusyVerdict, Option<u8>, Tier),
    Series(Feed, usize),
    Yearly(usize),
    Unavailable(Feed),
}

#[derive(Default)]
struct RecordingRenderer {
    events: Mutex<Vec<Event>>,
}

impl RecordingRenderer {
    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Renderer for RecordingRenderer {
    fn status(&self, verdict: BusyVerdict, value: Option<u8>, tier: Tier) {
        self.push(Event::Status(verdict, value, tier));
    }

    fn series(&self, feed: Feed, series: &[Sample]) {
        self.push(Event::Series(feed, series.len()));
    }

    fn yearly(&self, cells: &[GridCell]) {
        self.push(Event::Yearly(cells.len()));
    }

    fn unavailable(&self, feed: Feed) {
        self.push(Event::Unavailable(feed));
    }
}

struct StubTransport {
    status: Result<u8, String>,
    today: Result<HistoryPayload, String>,
    average: Result<HistoryPayload, String>,
    yearly: Result<HistoryPayload, String>,
}

impl StubTransport {
    fn healthy() -> Self {
        let day = HistoryPayload::Packed {
            body: vec![80, 20, SENTINEL],
            latest_timestamp: Some(1_700_000_000),
            interval_seconds: Some(300),
        };
        Self {
            status: Ok(80),
            today: Ok(day.clone()),
            average: Ok(day),
            yearly: Ok(HistoryPayload::Packed {
                body: vec![30; YEAR_DAYS],
                latest_timestamp: Some(1_700_000_000),
                interval_seconds: Some(86_400),
            }),
        }
    }
}

impl Transport for StubTransport {
    type Error = String;

    async fn fetch_status(&self) -> Result<u8, String> {
        self.status.clone()
    }

    async fn fetch_history(&self, feed: Feed) -> Result<HistoryPayload, String> {
        match feed {
            Feed::Today => self.today.clone(),
            Feed::Average => self.average.clone(),
            Feed::Yearly => self.yearly.clone(),
            Feed::Status => unreachable!("status travels through fetch_status"),
        }
    }
}

#[tokio::test]
async fn test_all_feeds_render() {
    let transport = StubTransport::healthy();
    let renderer = RecordingRenderer::default();

    render_page(&transport, &renderer, &Config::default()).await.unwrap();

    let events = renderer.events();
    assert_eq!(events.len(), 4);
    assert!(events.contains(&Event::Status(BusyVerdict::Busy, Some(80), Tier::Band(4))));
    assert!(events.contains(&Event::Series(Feed::Today, 3)));
    assert!(events.contains(&Event::Series(Feed::Average, 3)));
    assert!(events.contains(&Event::Yearly(YEAR_DAYS)));
}

#[tokio::test]
async fn test_transport_failure_does_not_block_siblings() {
    let mut transport = StubTransport::healthy();
    transport.today = Err("connection reset".to_owned());
    let renderer = RecordingRenderer::default();

    render_page(&transport, &renderer, &Config::default()).await.unwrap();

    let events = renderer.events();
    assert!(events.contains(&Event::Unavailable(Feed::Today)));
    assert!(events.contains(&Event::Series(Feed::Average, 3)));
    assert!(events.contains(&Event::Yearly(YEAR_DAYS)));
    assert!(events.contains(&Event::Status(BusyVerdict::Busy, Some(80), Tier::Band(4))));
}

#[tokio::test]
async fn test_decode_failure_contained_like_transport_failure() {
    let mut transport = StubTransport::healthy();
    transport.average = Ok(HistoryPayload::Packed {
        body: vec![1, 2, 3],
        latest_timestamp: None,
        interval_seconds: Some(300),
    });
    let renderer = RecordingRenderer::default();

    render_page(&transport, &renderer, &Config::default()).await.unwrap();

    let events = renderer.events();
    assert!(events.contains(&Event::Unavailable(Feed::Average)));
    assert!(events.contains(&Event::Series(Feed::Today, 3)));
    assert!(events.contains(&Event::Yearly(YEAR_DAYS)));
}

#[tokio::test]
async fn test_every_feed_failing_renders_four_placeholders() {
    let transport = StubTransport {
        status: Err("timeout".to_owned()),
        today: Err("timeout".to_owned()),
        average: Err("timeout".to_owned()),
        yearly: Err("timeout".to_owned()),
    };
    let renderer = RecordingRenderer::default();

    render_page(&transport, &renderer, &Config::default()).await.unwrap();

    let events = renderer.events();
    assert_eq!(events.len(), 4);
    for feed in [Feed::Status, Feed::Today, Feed::Average, Feed::Yearly] {
        assert!(events.contains(&Event::Unavailable(feed)), "missing placeholder for {feed}");
    }
}

#[tokio::test]
async fn test_status_sentinel_renders_unknown() {
    let mut transport = StubTransport::healthy();
    transport.status = Ok(SENTINEL);
    let renderer = RecordingRenderer::default();

    render_page(&transport, &renderer, &Config::default()).await.unwrap();

    assert!(renderer
        .events()
        .contains(&Event::Status(BusyVerdict::Unknown, None, Tier::NoData)));
}

#[tokio::test]
async fn test_short_year_renders_placeholder_grid() {
    let mut transport = StubTransport::healthy();
    transport.yearly = Ok(HistoryPayload::Packed {
        body: vec![30; 300],
        latest_timestamp: Some(1_700_000_000),
        interval_seconds: Some(86_400),
    });
    let renderer = RecordingRenderer::default();

    render_page(&transport, &renderer, &Config::default()).await.unwrap();

    let events = renderer.events();
    assert!(events.contains(&Event::Unavailable(Feed::Yearly)));
    assert!(events.contains(&Event::Series(Feed::Today, 3)));
}

#[tokio::test]
async fn test_text_shape_feeds_render_too() {
    let mut transport = StubTransport::healthy();
    transport.today = Ok(HistoryPayload::Lines("1000 42\n900 255\n800 17".to_owned()));
    let renderer = RecordingRenderer::default();

    render_page(&transport, &renderer, &Config::default()).await.unwrap();

    assert!(renderer.events().contains(&Event::Series(Feed::Today, 3)));
}

#[tokio::test]
async fn test_invalid_config_renders_nothing() {
    let transport = StubTransport::healthy();
    let renderer = RecordingRenderer::default();
    let config = Config {
        cut_points: vec![],
        ..Config::default()
    };

    let result = render_page(&transport, &renderer, &config).await;

    assert_eq!(result, Err(ConfigError::NoCutPoints));
    assert!(renderer.events().is_empty());
}

#[tokio::test]
async fn test_custom_threshold_changes_verdict() {
    let mut transport = StubTransport::healthy();
    transport.status = Ok(60);
    let renderer = RecordingRenderer::default();
    let config = Config {
        busy_threshold: 50,
        ..Config::default()
    };

    render_page(&transport, &renderer, &config).await.unwrap();

    assert!(renderer
        .events()
        .contains(&Event::Status(BusyVerdict::Busy, Some(60), Tier::Band(3))));
}
