//! Modal overlay: dimmed backdrop plus a centered card

use eframe::egui;
use walletdesk_core::modal::{BACKDROP_ALPHA, CARD_RADIUS};
use walletdesk_core::{ContentMode, ModalLayout, ModalState, Size};

#[derive(Clone, Copy, Default)]
struct Measured {
    title: f32,
    content: f32,
}

/// Shows one modal. `title` is pinned above the content when the state has
/// a float title. Content heights are measured each frame and drive the
/// next frame's layout.
pub fn show(
    ctx: &egui::Context,
    id: &str,
    state: &mut ModalState,
    title: Option<&str>,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let screen = ctx.screen_rect();
    let measure_id = egui::Id::new((id, "measured"));
    let measured: Measured = ctx.data(|d| d.get_temp(measure_id)).unwrap_or_default();

    let pinned_title = title.filter(|_| state.has_float_title());
    let content_height = ModalLayout::content_height(
        state,
        pinned_title.map(|_| measured.title),
        &[measured.content],
    );
    let layout = ModalLayout::compute(
        state,
        Size::new(screen.width(), screen.height()),
        content_height,
    );

    let backdrop = egui::Area::new(egui::Id::new((id, "backdrop")))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(BACKDROP_ALPHA));
            ui.allocate_rect(screen, egui::Sense::click())
        });
    if backdrop.inner.clicked() {
        state.register_backdrop_click();
    }

    let enabled = !state.is_disabled();
    let mut next = measured;
    let card = egui::Area::new(egui::Id::new((id, "card")))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style())
                .rounding(CARD_RADIUS)
                .inner_margin(layout.padding)
                .show(ui, |ui| {
                    ui.set_width((layout.card.width - 2.0 * layout.padding).max(0.0));
                    ui.add_enabled_ui(enabled, |ui| {
                        if let Some(title) = pinned_title {
                            let inset = layout.title_inset;
                            let rect = ui
                                .scope(|ui| {
                                    ui.add_space(inset.top);
                                    ui.horizontal(|ui| {
                                        ui.add_space(inset.left);
                                        ui.heading(title);
                                    });
                                    ui.add_space(inset.bottom);
                                })
                                .response
                                .rect;
                            next.title = rect.height() - inset.height();
                        }

                        let visibility = match layout.content_mode {
                            ContentMode::Scroll => {
                                egui::scroll_area::ScrollBarVisibility::VisibleWhenNeeded
                            }
                            ContentMode::Plain => egui::scroll_area::ScrollBarVisibility::AlwaysHidden,
                        };
                        // The body is laid out as a single item wrapped in its
                        // inset, so the measured height excludes the inset that
                        // `ModalLayout::content_height` adds back.
                        let inset = layout.item_inset;
                        let output = egui::ScrollArea::vertical()
                            .max_height(layout.content_max_height)
                            .scroll_bar_visibility(visibility)
                            .auto_shrink([false, true])
                            .show(ui, |ui| {
                                egui::Frame::none()
                                    .inner_margin(egui::Margin {
                                        left: inset.left,
                                        right: inset.right,
                                        top: inset.top,
                                        bottom: inset.bottom,
                                    })
                                    .show(ui, add_contents);
                            });
                        next.content = (output.content_size.y - inset.height()).max(0.0);
                    });
                });
        });
    ctx.move_to_top(card.response.layer_id);
    ctx.data_mut(|d| d.insert_temp(measure_id, next));
}
