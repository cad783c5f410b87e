// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping bound labels laid out inside their containers.

use sketch_scene::{Element, ElementId, ElementPatch, ElementStore, ElementUpdate, TransformHandle};

use crate::{Error, FontSpec, MetricsProvider, TextContext};

/// Re-lays out the labels of containers that are being resized.
///
/// `containers` are the elements under transformation and `handle` is the
/// handle being dragged. For each container with a bound, non-empty label this:
///
/// - re-wraps the label's original text, unless only the height can change or
///   the width changed by less than the narrowest cached character,
/// - grows the container when the text no longer fits vertically,
/// - centres the label in the container.
///
/// Nothing is written to `store`. The returned updates hold, per container, an
/// optional container update followed by one label update. Elements without a
/// bound label, and deleted containers or labels, are skipped.
pub fn handle_bind_text_resize<P, S>(
    ctx: &mut TextContext<P>,
    store: &S,
    containers: &[ElementId],
    handle: Option<TransformHandle>,
) -> Result<Vec<ElementUpdate>, Error>
where
    P: MetricsProvider,
    S: ElementStore + ?Sized,
{
    let mut updates = Vec::new();
    for id in containers {
        let Some(container) = store.element(id) else {
            continue;
        };
        let Some(label) = container.bound_text().and_then(|label| store.element(label)) else {
            log::trace!("{id} has no bound label, nothing to resize");
            continue;
        };
        if container.is_deleted || label.is_deleted {
            log::trace!("{id} or its label {} is deleted, nothing to resize", label.id);
            continue;
        }
        sync_label(ctx, container, label, handle, &mut updates)?;
    }
    Ok(updates)
}

fn sync_label<P: MetricsProvider>(
    ctx: &mut TextContext<P>,
    container: &Element,
    label: &Element,
    handle: Option<TransformHandle>,
    updates: &mut Vec<ElementUpdate>,
) -> Result<(), Error> {
    let Some(props) = label.as_text() else {
        return Ok(());
    };
    if props.text.is_empty() {
        return Ok(());
    }
    let padding = ctx.options().padding;
    let font = FontSpec::from_text(props);

    let mut text = props.text.clone();
    let mut width = label.width;
    let mut height = label.height;
    let mut baseline = props.baseline;

    if !handle.is_some_and(TransformHandle::is_vertical_only) {
        let diff = (container.width - label.width - padding * 2.0).abs();
        let min_char_width = ctx.min_char_width(&font);
        if diff >= min_char_width {
            text = ctx.wrap_text(&props.original_text, &font, Some(container))?;
            let metrics = ctx.measure_text(&text, &font, None)?;
            width = metrics.width;
            height = metrics.height;
            baseline = metrics.baseline;
        } else {
            log::trace!(
                "skipping re-wrap of {}: width changed by {diff}, narrowest char is {min_char_width}",
                label.id
            );
        }
    }

    let mut container_height = container.height;
    if height > container.height - padding * 2.0 {
        container_height = height + padding * 2.0;
        log::debug!(
            "growing {} from {} to {container_height} to fit its label",
            container.id,
            container.height
        );
        updates.push(ElementUpdate::new(
            container.id.clone(),
            ElementPatch {
                height: Some(container_height),
                ..ElementPatch::default()
            },
        ));
    }

    updates.push(ElementUpdate::new(
        label.id.clone(),
        ElementPatch {
            x: Some(container.x + container.width / 2.0 - width / 2.0),
            y: Some(container.y + container_height / 2.0 - height / 2.0),
            width: Some(width),
            height: Some(height),
            text: Some(text),
            baseline: Some(baseline),
            ..ElementPatch::default()
        },
    ));
    Ok(())
}

/// Re-measures a text element after its text changed.
///
/// A label bound to a container keeps its current width as a wrapping
/// constraint. Returns `None` for elements that are not text.
pub fn redraw_text_bounding_box<P: MetricsProvider>(
    ctx: &mut TextContext<P>,
    element: &Element,
) -> Result<Option<ElementUpdate>, Error> {
    let Some(props) = element.as_text() else {
        return Ok(None);
    };
    let max_width = props.text_container_id.as_ref().map(|_| element.width);
    let metrics = ctx.measure_text(&props.text, &FontSpec::from_text(props), max_width)?;
    Ok(Some(ElementUpdate::new(
        element.id.clone(),
        ElementPatch {
            width: Some(metrics.width),
            height: Some(metrics.height),
            baseline: Some(metrics.baseline),
            ..ElementPatch::default()
        },
    )))
}
