//! Request handlers

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use serde::Deserialize;
use shapeshifter::{Bank, Wave};

use super::error::ViewerError;
use super::html;
use super::ViewerState;

/// Selects one wave
#[derive(Debug, Deserialize)]
pub struct WaveQuery {
    pub bank: usize,
    pub wave: usize,
}

/// Selects one wave and an optional preview length in seconds
#[derive(Debug, Deserialize)]
pub struct PlayQuery {
    pub bank: usize,
    pub wave: usize,
    pub duration: Option<String>,
}

fn find_bank(state: &ViewerState, index: usize) -> Result<&Bank, ViewerError> {
    state
        .config
        .bank(index)
        .ok_or(ViewerError::BankNotFound(index))
}

fn find_wave(state: &ViewerState, bank: usize, wave: usize) -> Result<&Wave, ViewerError> {
    find_bank(state, bank)?
        .wave(wave)
        .ok_or(ViewerError::WaveNotFound { bank, wave })
}

pub async fn index(State(state): State<ViewerState>) -> Html<String> {
    Html(html::index_page(&state.config))
}

pub async fn bank(
    State(state): State<ViewerState>,
    Path(index): Path<usize>,
) -> Result<Html<String>, ViewerError> {
    let bank = find_bank(&state, index)?;
    Ok(Html(html::bank_page(index, bank)))
}

pub async fn draw(
    State(state): State<ViewerState>,
    Query(query): Query<WaveQuery>,
) -> Result<impl IntoResponse, ViewerError> {
    let wave = *find_wave(&state, query.bank, query.wave)?;
    let png = tokio::task::spawn_blocking(move || shapeshifter::encode_png(&wave)).await??;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

pub async fn play(
    State(state): State<ViewerState>,
    Query(query): Query<PlayQuery>,
) -> Result<impl IntoResponse, ViewerError> {
    let wave = *find_wave(&state, query.bank, query.wave)?;
    let requested = query.duration.as_deref().and_then(|d| d.trim().parse().ok());
    let spec = state.settings.playback(requested);

    tracing::debug!(
        bank = query.bank,
        wave = query.wave,
        secs = spec.duration.as_secs_f32(),
        "rendering preview"
    );
    // Long previews take a while to encode
    let wav = tokio::task::spawn_blocking(move || shapeshifter::wav_bytes(&wave, &spec)).await??;
    Ok(([(header::CONTENT_TYPE, "audio/x-wav")], wav))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerSettings;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use shapeshifter::Config;

    fn state() -> ViewerState {
        let mut config = Config::blank();
        config.bank_mut(0).unwrap().name = *b"TESTBNK0";
        config.bank_mut(1).unwrap().name = *b"<b>&co  ";
        let settings = ViewerSettings {
            sample_rate: 1000,
            default_duration_secs: 1.0,
            max_duration_secs: 2.0,
            ..ViewerSettings::default()
        };
        ViewerState::new(config, settings)
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_index_lists_every_bank() {
        let Html(page) = index(State(state())).await;
        assert_eq!(page.matches("<li>").count(), 128);
        assert!(page.contains(r#"<a href="/bank/0">TESTBNK0</a>"#));
        assert!(page.contains("&lt;b&gt;&amp;co"));
    }

    #[tokio::test]
    async fn test_bank_page_embeds_all_waves() {
        let Html(page) = bank(State(state()), Path(0)).await.unwrap();
        for w in 0..8 {
            assert!(page.contains(&format!(r#"src="/draw?bank=0&amp;wave={w}""#)));
            assert!(page.contains(&format!(r#"src="/play?bank=0&amp;wave={w}""#)));
        }
    }

    #[tokio::test]
    async fn test_unknown_bank_is_not_found() {
        let err = bank(State(state()), Path(128)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_draw_returns_png() {
        let response = draw(State(state()), Query(WaveQuery { bank: 0, wave: 3 }))
            .await
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(&body_bytes(response).await[..4], b"\x89PNG");
    }

    #[tokio::test]
    async fn test_draw_unknown_wave_is_not_found() {
        let result = draw(State(state()), Query(WaveQuery { bank: 0, wave: 8 })).await;
        let response = match result {
            Ok(_) => panic!("wave 8 should not exist"),
            Err(e) => e.into_response(),
        };
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_play_uses_requested_duration() {
        let query = PlayQuery {
            bank: 0,
            wave: 0,
            duration: Some("1.5".to_string()),
        };
        let response = play(State(state()), Query(query)).await.unwrap().into_response();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/x-wav");

        let bytes = body_bytes(response).await;
        let reader = hound::WavReader::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(reader.duration(), 1500);
    }

    #[tokio::test]
    async fn test_play_falls_back_and_clamps() {
        for (duration, expected) in [(Some("soon"), 1000), (None, 1000), (Some("30"), 2000)] {
            let query = PlayQuery {
                bank: 0,
                wave: 0,
                duration: duration.map(str::to_string),
            };
            let response = play(State(state()), Query(query)).await.unwrap().into_response();
            let bytes = body_bytes(response).await;
            let reader = hound::WavReader::new(std::io::Cursor::new(bytes)).unwrap();
            assert_eq!(reader.duration(), expected, "duration {duration:?}");
        }
    }
}
