// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Prometheus instrumentation of the HTTP API.

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use log::info;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use std::time::Instant;

/// Name of the counter of served requests.
const REQUESTS_TOTAL: &str = "http_requests_total";

/// Name of the histogram of request latencies.
const REQUEST_DURATION: &str = "http_request_duration_seconds";

/// Label value for requests that did not match any route.
const UNMATCHED_PATH: &str = "<unmatched>";

/// Process-wide handle to the Prometheus recorder.
static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Installs the process-wide Prometheus recorder, or returns the existing one if it was already
/// installed.
pub(crate) fn install() -> Result<PrometheusHandle, String> {
    HANDLE
        .get_or_try_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| format!("Cannot install metrics recorder: {}", e))?;
            describe_counter!(REQUESTS_TOTAL, "Total number of HTTP requests");
            describe_histogram!(REQUEST_DURATION, "HTTP request duration in seconds");
            info!("Prometheus metrics recorder installed");
            Ok(handle)
        })
        .cloned()
}

/// Middleware that counts every request and records how long it took to serve it.
///
/// Requests are labeled by the route template that matched them, not by their concrete path, so
/// that item and cart identifiers do not multiply the number of series.
pub(crate) async fn track_requests(
    matched_path: Option<MatchedPath>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = match matched_path {
        Some(path) => path.as_str().to_owned(),
        None => UNMATCHED_PATH.to_owned(),
    };

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    counter!(REQUESTS_TOTAL, "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    histogram!(REQUEST_DURATION, "method" => method, "path" => path)
        .record(start.elapsed().as_secs_f64());

    response
}
