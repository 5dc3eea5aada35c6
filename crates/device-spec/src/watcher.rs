// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reactive device classification.
//!
//! A [`DeviceSpecWatcher`] is the long-lived counterpart of
//! [`get_device_spec`](crate::get_device_spec): it starts detection once
//! when spawned and publishes every state change on a `watch` channel.
//!
//! ```text
//! spawn ──▶ { is_loading: true } ──▶ { spec, details, is_loading: false, error }
//!                    │
//!                teardown ──▶ (nothing further is published)
//! ```

use crate::detector::{try_get_device_spec, DeviceSpecDetails};
use crate::SpecError;
use device_facts::FactsProvider;
use spec_classifier::DeviceSpec;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Observable detection state.
#[derive(Debug, Clone)]
pub struct DeviceSpecState {
    /// Category; `None` until detection finishes.
    pub spec: Option<DeviceSpec>,
    /// Hardware details; `None` until detection finishes.
    pub details: Option<DeviceSpecDetails>,
    pub is_loading: bool,
    /// Set when retrieval failed. `spec` and `details` then hold the
    /// fallback values.
    pub error: Option<Arc<SpecError>>,
}

impl DeviceSpecState {
    /// The state before detection has produced anything.
    pub fn loading() -> Self {
        Self {
            spec: None,
            details: None,
            is_loading: true,
            error: None,
        }
    }

    fn from_result(result: Result<crate::DeviceSpecInfo, SpecError>) -> Self {
        match result {
            Ok(info) => Self {
                spec: Some(info.spec),
                details: Some(info.details),
                is_loading: false,
                error: None,
            },
            Err(e) => Self {
                spec: Some(DeviceSpec::Mid),
                details: Some(DeviceSpecDetails::fallback()),
                is_loading: false,
                error: Some(Arc::new(e)),
            },
        }
    }
}

/// Runs device detection in the background and publishes its state.
///
/// Dropping the watcher tears it down. Must be created inside a tokio
/// runtime.
pub struct DeviceSpecWatcher {
    rx: watch::Receiver<DeviceSpecState>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl DeviceSpecWatcher {
    /// Starts detection against `provider`. Detection runs exactly once.
    pub fn spawn(provider: Arc<dyn FactsProvider>) -> Self {
        let (tx, rx) = watch::channel(DeviceSpecState::loading());
        let cancel = CancellationToken::new();
        let task = tokio::spawn(detect(provider, tx, cancel.clone()));

        Self {
            rx,
            cancel,
            task: Some(task),
        }
    }

    /// A new receiver for state changes.
    pub fn subscribe(&self) -> watch::Receiver<DeviceSpecState> {
        self.rx.clone()
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> DeviceSpecState {
        self.rx.borrow().clone()
    }

    /// The category alone; `None` while loading.
    pub fn spec(&self) -> Option<DeviceSpec> {
        self.rx.borrow().spec
    }

    /// Waits until detection has finished and returns the final state.
    ///
    /// After teardown this returns whatever was last published, which may
    /// still be the loading state.
    pub async fn ready(&mut self) -> DeviceSpecState {
        let finished = match self.rx.wait_for(|s| !s.is_loading).await {
            Ok(state) => Some(state.clone()),
            Err(_) => None,
        };
        finished.unwrap_or_else(|| self.rx.borrow().clone())
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Stops the watcher and waits for the background task to exit.
    ///
    /// No state is published once this has been called.
    pub async fn teardown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("device spec task ended abnormally: {e}");
            }
        }
    }
}

impl Drop for DeviceSpecWatcher {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn detect(
    provider: Arc<dyn FactsProvider>,
    tx: watch::Sender<DeviceSpecState>,
    cancel: CancellationToken,
) {
    let result = tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!("watcher torn down during detection");
            return;
        }
        result = try_get_device_spec(provider.as_ref()) => result,
    };

    // Liveness check: teardown may have raced the final poll above.
    if cancel.is_cancelled() {
        tracing::debug!("watcher torn down, discarding detection result");
        return;
    }

    if let Err(e) = &result {
        tracing::error!("error detecting device spec, publishing mid: {e}");
    }
    tx.send_replace(DeviceSpecState::from_result(result));
}
