// @awa-component: CHART-JsonChunks
//
//! Incremental JSON array framing.
//!
//! Chart endpoints stream their bodies as a sequence of chunks: `[`, one
//! chunk per row with a trailing `,` on all but the last, then `]`. An empty
//! row source frames as `[` `]`.

use std::iter::Peekable;

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Open,
    Rows,
    Done,
}

/// Lazily frames pre-encoded JSON rows as a JSON array, chunk by chunk.
///
/// Rows are pulled from the inner iterator only as chunks are requested. A
/// row error is yielded once and ends the sequence.
pub struct JsonArrayChunks<I: Iterator> {
    rows: Peekable<I>,
    stage: Stage,
}

impl<I, E> JsonArrayChunks<I>
where
    I: Iterator<Item = Result<String, E>>,
{
    pub fn new(rows: I) -> Self {
        Self {
            rows: rows.peekable(),
            stage: Stage::Open,
        }
    }
}

impl<I, E> Iterator for JsonArrayChunks<I>
where
    I: Iterator<Item = Result<String, E>>,
{
    type Item = Result<String, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            Stage::Open => {
                self.stage = Stage::Rows;
                Some(Ok("[".to_string()))
            }
            Stage::Rows => match self.rows.next() {
                Some(Ok(mut row)) => {
                    if self.rows.peek().is_some() {
                        row.push(',');
                    }
                    Some(Ok(row))
                }
                Some(Err(e)) => {
                    self.stage = Stage::Done;
                    Some(Err(e))
                }
                None => {
                    self.stage = Stage::Done;
                    Some(Ok("]".to_string()))
                }
            },
            Stage::Done => None,
        }
    }
}

/// Stream `chunks` as an `application/json` response body, logging each
/// chunk as it is handed to the connection.
pub fn streaming_json<I>(endpoint: &'static str, chunks: I) -> Response
where
    I: Iterator<Item = serde_json::Result<String>> + Send + 'static,
{
    let logged = chunks.inspect(move |chunk| match chunk {
        Ok(chunk) => info!(endpoint, %chunk, "chart chunk"),
        Err(e) => tracing::error!(endpoint, error = %e, "chart row failed to encode"),
    });
    let body = Body::from_stream(futures_util::stream::iter(logged));
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
