// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration loading through serde.

#![cfg(feature = "serde")]

use core::time::Duration;

use understory_zoomable::{ReleaseConfig, ZoomableConfig};

#[test]
fn partial_config_fills_in_defaults() {
    let config: ZoomableConfig =
        serde_json::from_str(r#"{ "initial_scale": 1.5, "threshold": 300.0 }"#).unwrap();

    assert_eq!(config.initial_scale, 1.5);
    assert_eq!(config.max_scale(), 3.0);
    assert_eq!(config.threshold, 300.0);
    assert_eq!(config.release, ReleaseConfig::default());
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn release_timings_are_configurable() {
    let json = r#"{
        "disable_release_action": false,
        "release": { "settle_duration": { "secs": 0, "nanos": 250000000 } }
    }"#;
    let config: ZoomableConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.release.settle_duration, Duration::from_millis(250));
    assert_eq!(config.release.correction_duration, Duration::from_millis(100));
}
