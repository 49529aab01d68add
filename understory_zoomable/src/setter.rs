// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::{Axis, Transform, TransformStore, ZoomableConfig};

/// Values to write through [`crate::Zoomable::set_values`].
///
/// At least one of `scale` and `translate` must be present.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformUpdate {
    /// New scale; the current scale is kept when absent.
    pub scale: Option<f64>,
    /// New translation; the current translation is kept when absent.
    pub translate: Option<Vec2>,
}

impl TransformUpdate {
    /// An update that sets only the scale.
    #[must_use]
    pub const fn scale(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            translate: None,
        }
    }

    /// An update that sets only the translation.
    #[must_use]
    pub const fn translate(translate: Vec2) -> Self {
        Self {
            scale: None,
            translate: Some(translate),
        }
    }

    /// Adds a scale to this update.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Adds a translation to this update.
    #[must_use]
    pub const fn with_translate(mut self, translate: Vec2) -> Self {
        self.translate = Some(translate);
        self
    }
}

/// Error returned by [`crate::Zoomable::set_values`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SetValuesError {
    /// Neither a scale nor a translation was supplied.
    #[error("either scale or translate must be provided")]
    Empty,
    /// A supplied value was NaN or infinite.
    #[error("transform values must be finite")]
    NonFinite,
}

/// Applies `update` to `store` under the bounds of `config`.
///
/// Scale is clamped into range. Each translation axis that overflows the limit
/// at the resulting scale is snapped onto it. Nothing is written on error.
pub(crate) fn apply<S: TransformStore + ?Sized>(
    config: &ZoomableConfig,
    store: &mut S,
    update: TransformUpdate,
) -> Result<Transform, SetValuesError> {
    if update.scale.is_none() && update.translate.is_none() {
        return Err(SetValuesError::Empty);
    }
    let finite = update.scale.is_none_or(f64::is_finite)
        && update.translate.is_none_or(|t| t.x.is_finite() && t.y.is_finite());
    if !finite {
        return Err(SetValuesError::NonFinite);
    }

    let scale = match update.scale {
        Some(requested) => {
            let scale = config.clamp_scale(requested);
            store.set(Axis::Scale, scale);
            scale
        }
        None => store.get(Axis::Scale),
    };

    if let Some(translate) = update.translate {
        store.set(Axis::TranslateX, config.clamp_translate(translate.x, scale));
        store.set(Axis::TranslateY, config.clamp_translate(translate.y, scale));
    }

    let applied = store.transform();
    log::debug!("set_values {update:?} -> {applied:?}");
    Ok(applied)
}
