use std::fmt::Write;

use crate::model::config::ChartConfig;
use crate::model::scene::{Bar, LeftAxis, Scene, TopAxis};
use crate::report::{escape_xml, format_px};

/// One sorted state of the chart, drawn as its own `<g class="scene">`.
#[derive(Debug, Clone, Copy)]
pub struct SceneLayer<'a> {
    pub state: &'a str,
    pub scene: &'a Scene,
    pub visible: bool,
}

pub fn render_static_svg(scene: &Scene, config: &ChartConfig, title: Option<&str>) -> String {
    let layer = SceneLayer {
        state: scene.sort_mode.tag(),
        scene,
        visible: true,
    };
    render_chart_svg(&[layer], config, title, true)
}

/// `bar_titles` adds a native `<title>` tooltip to every bar. Pages that draw
/// their own tooltip leave it off.
pub fn render_chart_svg(
    layers: &[SceneLayer<'_>],
    config: &ChartConfig,
    title: Option<&str>,
    bar_titles: bool,
) -> String {
    let w = config.outer_width();
    let h = config.outer_height();
    let mut out = String::with_capacity(16 * 1024);

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"chart\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" preserveAspectRatio=\"xMinYMid\">",
        w = format_px(w),
        h = format_px(h)
    );
    if let Some(t) = title {
        let _ = writeln!(out, "<title>{}</title>", escape_xml(t));
    }
    let _ = writeln!(
        out,
        "<g transform=\"translate({}, {})\">",
        format_px(config.margin.left),
        format_px(config.margin.top)
    );
    for layer in layers {
        render_layer(&mut out, layer, bar_titles);
    }
    out.push_str("</g>\n</svg>\n");
    out
}

fn render_layer(out: &mut String, layer: &SceneLayer<'_>, bar_titles: bool) {
    let style = if layer.visible {
        ""
    } else {
        " style=\"display:none\""
    };
    let _ = writeln!(
        out,
        "<g class=\"scene\" data-state=\"{}\" data-sort=\"{}\"{}>",
        escape_xml(layer.state),
        layer.scene.sort_mode.tag(),
        style
    );
    render_top_axis(out, &layer.scene.x_axis);
    render_left_axis(out, &layer.scene.y_axis);
    for bar in &layer.scene.bars {
        render_bar(out, bar, bar_titles);
    }
    out.push_str("</g>\n");
}

fn render_top_axis(out: &mut String, axis: &TopAxis) {
    let _ = writeln!(
        out,
        "<g class=\"x-axis\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"middle\">"
    );
    let _ = writeln!(
        out,
        "<path class=\"domain\" stroke=\"currentColor\" d=\"M0.5,{neg}V0.5H{end}V{neg}\"/>",
        neg = format_px(-axis.tick_size),
        end = format_px(axis.length + 0.5)
    );
    let label_y = -(axis.tick_size + axis.tick_padding);
    for tick in &axis.ticks {
        let _ = writeln!(
            out,
            "<g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"{}\"/><text fill=\"currentColor\" y=\"{}\" dy=\"0em\">{}</text></g>",
            format_px(tick.offset + 0.5),
            format_px(-axis.tick_size),
            format_px(label_y),
            escape_xml(&tick.label)
        );
    }
    out.push_str("</g>\n");
}

fn render_left_axis(out: &mut String, axis: &LeftAxis) {
    let _ = writeln!(
        out,
        "<g class=\"y-axis\" transform=\"translate({}, 0)\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"end\">",
        format_px(axis.offset_x)
    );
    for tick in &axis.ticks {
        let _ = writeln!(
            out,
            "<g class=\"tick\" transform=\"translate(0,{})\"><text fill=\"currentColor\" x=\"{}\" dy=\"0.32em\">{}</text></g>",
            format_px(tick.offset + 0.5),
            format_px(-axis.tick_padding),
            escape_xml(&tick.label)
        );
    }
    out.push_str("</g>\n");
}

fn render_bar(out: &mut String, bar: &Bar, with_title: bool) {
    let t = &bar.tooltip;
    let _ = write!(
        out,
        "<rect class=\"bar\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" data-id=\"{}\" data-detail=\"{}\" data-median=\"{}\" data-site=\"{}\" data-egene=\"{}\">",
        format_px(bar.x),
        format_px(bar.y),
        format_px(bar.width),
        format_px(bar.height),
        escape_xml(&bar.fill),
        escape_xml(&bar.id),
        escape_xml(&t.detail),
        escape_xml(&t.median),
        escape_xml(&t.site),
        escape_xml(&t.egene_count)
    );
    if with_title {
        let _ = write!(out, "<title>{}</title>", escape_xml(&t.lines().join("\n")));
    }
    out.push_str("</rect>\n");
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/svg.rs"]
mod tests;
