//! Paint a [`ReportModel`] into the results screen
//!
//! All server strings go through `text_content`, never `innerHTML`.

use crate::animate::{after_delay, now_ms, run_counter};
use crate::dom::{create, create_text, set_style, Dom};
use resume_check_core::report::{BarModel, CategoryEntry, GaugeModel, OVERVIEW_TITLE};
use resume_check_core::{ReportModel, ScoreBand, TipsPanel, Tween};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Called with a category index when its header is clicked
pub type ToggleHandler = Rc<dyn Fn(usize)>;

/// Click listeners attached to the category headers of one report. They
/// must outlive the rendered nodes, so the caller holds them until the next
/// report replaces both.
pub type HeaderListeners = Vec<Closure<dyn FnMut()>>;

/// Tinted background for a band color, ~10% opacity
fn tint(band: ScoreBand) -> String {
    format!("color-mix(in srgb, {} 10%, transparent)", band.css_var())
}

pub fn paint_report(
    dom: &Dom,
    model: &ReportModel,
    on_toggle: ToggleHandler,
) -> Result<HeaderListeners, JsValue> {
    paint_gauge(dom, &model.gauge)?;
    dom.verdict.set_text_content(Some(&model.verdict));

    dom.meta_chips.set_text_content(None);
    for chip in &model.meta_chips {
        dom.meta_chips
            .append_child(&create_text(&dom.document, "span", "meta-chip", chip)?.into())?;
    }

    let start = now_ms();
    for counter in &model.counters {
        if let Some(el) = dom.counter(counter.element_id) {
            run_counter(
                el.clone(),
                Tween::counter(f64::from(counter.target), start, f64::from(counter.duration_ms)),
            )?;
        }
    }

    paint_overview(dom, &model.bars)?;

    dom.tab_details.set_text_content(None);
    let mut listeners = HeaderListeners::with_capacity(model.details.len());
    for (index, entry) in model.details.iter().enumerate() {
        let (node, listener) = category_node(&dom.document, entry, index, on_toggle.clone())?;
        dom.tab_details.append_child(&node)?;
        listeners.push(listener);
    }

    paint_tips(dom, &model.tips)?;

    tracing::debug!(
        "painted report with {} categories",
        model.details.len()
    );
    Ok(listeners)
}

fn paint_gauge(dom: &Dom, gauge: &GaugeModel) -> Result<(), JsValue> {
    let color = gauge.band.css_var();
    let arc = &dom.score_arc;
    let circumference = gauge.circumference.to_string();

    let style = arc.style();
    style.set_property("stroke-dasharray", &circumference)?;
    style.set_property("stroke-dashoffset", &circumference)?;
    style.set_property("stroke", color)?;
    dom.score_num.style().set_property("color", color)?;

    let arc = arc.clone();
    let target = gauge.target_offset.to_string();
    after_delay(gauge.delay_ms, move || {
        if let Err(e) = arc.style().set_property("stroke-dashoffset", &target) {
            tracing::warn!("could not fill score arc: {:?}", e);
        }
    })?;

    run_counter(
        dom.score_num.clone().into(),
        Tween::counter(f64::from(gauge.score), now_ms(), f64::from(gauge.duration_ms)),
    )
}

fn paint_overview(dom: &Dom, bars: &[BarModel]) -> Result<(), JsValue> {
    let doc = &dom.document;
    let overview = &dom.cat_overview;
    overview.set_text_content(None);
    overview.append_child(&create_text(doc, "div", "cat-overview-title", OVERVIEW_TITLE)?.into())?;

    for bar in bars {
        let color = bar.band.css_var();
        let item = create(doc, "div", "cat-bar-item")?;

        let top = create(doc, "div", "cat-bar-top")?;
        top.append_child(&create_text(doc, "span", "cat-bar-name", &bar.name)?.into())?;
        let pct = create_text(doc, "span", "cat-bar-pct", &format!("{}%", bar.percentage))?;
        set_style(&pct, "color", color)?;
        top.append_child(&pct)?;

        let track = create(doc, "div", "cat-bar-track")?;
        let fill = create(doc, "div", "cat-bar-fill")?;
        set_style(&fill, "width", "0")?;
        set_style(&fill, "background", color)?;
        track.append_child(&fill)?;

        item.append_child(&top)?;
        item.append_child(&track)?;
        overview.append_child(&item)?;

        let width = format!("{}%", bar.percentage);
        after_delay(bar.delay_ms, move || {
            if let Err(e) = set_style(&fill, "width", &width) {
                tracing::warn!("could not fill category bar: {:?}", e);
            }
        })?;
    }

    Ok(())
}

fn category_node(
    doc: &Document,
    entry: &CategoryEntry,
    index: usize,
    on_toggle: ToggleHandler,
) -> Result<(Element, Closure<dyn FnMut()>), JsValue> {
    let color = entry.band.css_var();
    let node = create(doc, "div", "category")?;

    let head = create(doc, "div", "cat-head")?;
    let left = create(doc, "div", "left")?;
    let icon = create_text(doc, "div", "cat-icon-sm", entry.icon)?;
    set_style(&icon, "background", &tint(entry.band))?;
    set_style(&icon, "color", color)?;
    let title = create_text(doc, "h3", "", &entry.name)?;
    title.append_child(&create_text(doc, "span", "score-sm", &entry.score_label)?.into())?;
    left.append_child(&icon)?;
    left.append_child(&title)?;

    let right = create(doc, "div", "right")?;
    right.append_child(&create_text(
        doc,
        "span",
        &format!("badge {}", entry.badge_class),
        entry.badge_label,
    )?.into())?;
    right.append_child(&create_text(doc, "span", "chevron", "\u{25BE}")?.into())?;

    head.append_child(&left)?;
    head.append_child(&right)?;

    let body = create(doc, "div", "cat-body")?;
    let findings = create(doc, "div", "findings")?;
    for finding in &entry.findings {
        let line = create(doc, "div", &format!("finding finding-{}", finding.kind.as_str()))?;
        line.append_child(&create_text(doc, "div", "f-dot", finding.marker)?.into())?;
        line.append_child(&create_text(doc, "span", "", &finding.message)?.into())?;
        findings.append_child(&line)?;
    }
    body.append_child(&findings)?;

    node.append_child(&head)?;
    node.append_child(&body)?;

    let click = Closure::<dyn FnMut()>::new(move || on_toggle(index));
    head.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;

    Ok((node, click))
}

fn paint_tips(dom: &Dom, tips: &TipsPanel) -> Result<(), JsValue> {
    let doc = &dom.document;
    let panel = &dom.tab_tips;
    panel.set_text_content(None);

    match tips {
        TipsPanel::Empty(message) => {
            panel.append_child(&create_text(doc, "p", "tips-empty", message)?.into())?;
        }
        TipsPanel::List(cards) => {
            for tip in cards {
                let card = create(doc, "div", "tip-card")?;
                card.append_child(&create_text(
                    doc,
                    "span",
                    &format!("tip-priority {}", tip.priority_class),
                    &tip.priority_label,
                )?.into())?;
                card.append_child(&create_text(doc, "h4", "", &tip.title)?.into())?;
                card.append_child(&create_text(doc, "p", "tip-desc", &tip.description)?.into())?;
                card.append_child(&create_text(doc, "p", "tip-impact", &tip.impact)?.into())?;
                panel.append_child(&card)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_uses_band_color() {
        assert_eq!(
            tint(ScoreBand::Success),
            "color-mix(in srgb, var(--success) 10%, transparent)"
        );
    }
}
