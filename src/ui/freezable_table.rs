use std::rc::Rc;

use dioxus::prelude::*;

use crate::state::layout::{RenderedRow, RowKind, TableView};
use crate::state::scroll_sync::{Axis, ScrollSeq, ScrollSync, SETTLE_DELAY};
use crate::state::table_config::TableConfig;

/// A table whose header rows and leading columns stay put while the rest scrolls.
///
/// Renders the same layout twice: a frozen pass underneath and a live,
/// scrollable pass on top, shifted right by the frozen width. The layout is
/// rebuilt only when `config` changes; scroll events only move transforms.
#[component]
pub fn FreezableTable(config: ReadOnlySignal<TableConfig>) -> Element {
    let mut scroll = use_signal(ScrollSync::new);
    let table_view = use_memo(move || TableView::build(&config.read()).map(Rc::new));

    let view = match table_view.read().clone() {
        Ok(view) => view,
        Err(err) => {
            return rsx! {
                p { class: "table-error", id: "table-error", "{err}" }
            };
        }
    };

    let sync = *scroll.read();
    let header_transform = sync.header_transform().css();
    let frozen_column_transform = sync.frozen_column_transform().css();
    let table_class = if sync.is_scrolling() {
        "freezable-table scrolling"
    } else {
        "freezable-table"
    };
    let live_style = format!(
        "{} display: flex; flex-direction: column; flex: 1; overflow: hidden;",
        view.live_grid_style
    );

    rsx! {
        div { class: table_class, style: "{view.container_style}",
            div { class: "frozen-pass",
                for row in view.frozen.header.iter() {
                    GridRow { key: "{row.key}", row: row.clone() }
                }
                div { class: "frozen-body",
                    div { style: "{frozen_column_transform}",
                        for row in view.frozen.body.iter() {
                            GridRow { key: "{row.key}", row: row.clone() }
                        }
                    }
                }
            }
            div { class: "live-pass", style: "{live_style}",
                div { class: "live-header", style: "{header_transform}",
                    for row in view.live.header.iter() {
                        GridRow { key: "{row.key}", row: row.clone() }
                    }
                }
                div {
                    class: "live-scroll-x",
                    id: "live-scroll-x",
                    onscroll: move |evt| {
                        let seq = scroll.with_mut(|sync| sync.on_horizontal_scroll(evt.scroll_left()));
                        settle_after_idle(scroll, Axis::Horizontal, seq);
                    },
                    div {
                        class: "live-scroll-y",
                        id: "live-scroll-y",
                        onscroll: move |evt| {
                            let seq = scroll.with_mut(|sync| sync.on_vertical_scroll(evt.scroll_top()));
                            settle_after_idle(scroll, Axis::Vertical, seq);
                        },
                        for row in view.live.body.iter() {
                            GridRow { key: "{row.key}", row: row.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// Puts `axis` back at rest once no newer event arrived within the settle delay.
fn settle_after_idle(mut scroll: Signal<ScrollSync>, axis: Axis, seq: ScrollSeq) {
    spawn(async move {
        tokio::time::sleep(SETTLE_DELAY).await;
        let mut next = *scroll.peek();
        if next.on_scroll_end(axis, seq) {
            scroll.set(next);
        }
    });
}

#[component]
fn GridRow(row: Rc<RenderedRow>) -> Element {
    let row_class = match row.kind {
        RowKind::Header(_) => "grid-row header-row",
        RowKind::Body(_) => "grid-row body-row",
    };

    rsx! {
        div { class: row_class,
            for cell in row.cells.iter() {
                span { key: "{cell.key}", class: "cell", style: "{cell.style}", "{cell.content}" }
            }
        }
    }
}
