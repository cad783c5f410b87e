// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sketch_scene::{
    bind_text, Element, ElementId, ElementPatch, ElementStore, ElementUpdate, Scene, TextProps,
    TransformHandle,
};
use sketch_text::{
    handle_bind_text_resize, redraw_text_bounding_box, FontSpec, TextContext,
};

use super::FixedMetrics;

pub(crate) const FONT_SIZE: f32 = 20.0;
pub(crate) const FONT_FAMILY: &str = "Virgil";

pub(crate) fn font() -> FontSpec {
    FontSpec::new(FONT_SIZE, FONT_FAMILY)
}

/// A scene plus a text context, driven the way an editor would drive them.
pub(crate) struct TestEnv {
    pub(crate) ctx: TextContext<FixedMetrics>,
    pub(crate) scene: Scene,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        Self {
            ctx: TextContext::new(FixedMetrics::default()),
            scene: Scene::new(),
        }
    }

    pub(crate) fn element(&self, id: &str) -> &Element {
        self.scene
            .element(&ElementId::from(id))
            .unwrap_or_else(|| panic!("no element {id}"))
    }

    pub(crate) fn text(&self, id: &str) -> &TextProps {
        self.element(id)
            .as_text()
            .unwrap_or_else(|| panic!("{id} is not text"))
    }

    pub(crate) fn apply(&mut self, updates: &[ElementUpdate]) {
        let applied = self.scene.apply_all(updates);
        assert_eq!(applied, updates.len(), "some updates had no target");
    }

    /// Adds a rectangle holding `text`, laid out as a freshly bound label.
    pub(crate) fn add_labelled_box(&mut self, id: &str, width: f32, height: f32, text: &str) {
        let container_id = ElementId::from(id);
        let label_id = ElementId::from(format!("{id}-label"));
        self.scene
            .insert(Element::rectangle(container_id.clone(), 0.0, 0.0, width, height));
        self.scene.insert(Element::text(
            label_id.clone(),
            TextProps::new(text, FONT_SIZE, FONT_FAMILY),
        ));
        self.apply(&bind_text(&container_id, &label_id));

        let label = self.element(&format!("{id}-label")).clone();
        let update = redraw_text_bounding_box(&mut self.ctx, &label)
            .unwrap()
            .unwrap();
        self.apply(&[update]);
        // Lay the label out inside the box as a resize by nothing would.
        self.resize(id, width, height, None);
    }

    /// Resizes a container and syncs its label, returning the updates applied for the label.
    pub(crate) fn resize(
        &mut self,
        id: &str,
        width: f32,
        height: f32,
        handle: Option<TransformHandle>,
    ) -> Vec<ElementUpdate> {
        let container_id = ElementId::from(id);
        self.apply(&[ElementUpdate::new(
            container_id.clone(),
            ElementPatch {
                width: Some(width),
                height: Some(height),
                ..ElementPatch::default()
            },
        )]);
        let updates =
            handle_bind_text_resize(&mut self.ctx, &self.scene, &[container_id], handle).unwrap();
        self.apply(&updates);
        updates
    }

    /// Asserts the label of `id` sits centred inside it, within padding.
    pub(crate) fn assert_label_centred(&self, id: &str) {
        let container = self.element(id);
        let label = self.element(&format!("{id}-label"));
        let padding = self.ctx.options().padding;
        assert_eq!(
            label.x + label.width / 2.0,
            container.x + container.width / 2.0,
            "{id}: label is not centred horizontally"
        );
        assert_eq!(
            label.y + label.height / 2.0,
            container.y + container.height / 2.0,
            "{id}: label is not centred vertically"
        );
        assert!(
            label.height <= container.height - padding * 2.0,
            "{id}: label is {} tall in a {} tall box",
            label.height,
            container.height
        );
    }
}
