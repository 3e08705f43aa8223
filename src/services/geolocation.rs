// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot position request.
//!
//! The host resolves a [`PositionResponder`] exactly once, from whatever
//! geolocation source it has; the app side awaits the matching
//! [`PendingPosition`]. There is no timeout, cancellation or retry.

use tokio::sync::oneshot;

use crate::models::Coordinates;

/// Outcome of a position request.
pub type PositionResult = Result<Coordinates, GeolocationError>;

/// Why no position is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    Unavailable,
}

/// Start a position request.
pub fn request_position() -> (PositionResponder, PendingPosition) {
    let (tx, rx) = oneshot::channel();
    (PositionResponder(tx), PendingPosition(rx))
}

/// Completion side, held by the geolocation source.
pub struct PositionResponder(oneshot::Sender<PositionResult>);

impl PositionResponder {
    pub fn resolve(self, result: PositionResult) {
        if self.0.send(result).is_err() {
            tracing::debug!("Position resolved after the request was dropped");
        }
    }
}

/// Waiting side, held by the app.
pub struct PendingPosition(oneshot::Receiver<PositionResult>);

impl PendingPosition {
    /// Wait for the position. A responder dropped without resolving counts
    /// as [`GeolocationError::Unavailable`].
    pub async fn resolved(self) -> PositionResult {
        self.0.await.unwrap_or(Err(GeolocationError::Unavailable))
    }
}
